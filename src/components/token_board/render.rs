use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::BoardState;
use crate::model::{Point, Token};

pub fn render(state: &BoardState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(&state.config.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_tokens(state, ctx);
}

fn draw_edges(state: &BoardState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(&state.config.edge_color.to_css());
	ctx.set_line_width(state.config.edge_width);
	ctx.set_line_cap("round");
	for (start, end) in state.graph.edge_geometry() {
		ctx.begin_path();
		ctx.move_to(start.x, start.y);
		ctx.line_to(end.x, end.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &BoardState, ctx: &CanvasRenderingContext2d) {
	let outline = state.config.node_outline;
	for node in state.graph.nodes() {
		let c = node.center();
		ctx.begin_path();
		let _ = ctx.arc(c.x, c.y, node.radius(), 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color().to_css());
		ctx.fill();
		if outline > 0.0 {
			ctx.set_stroke_style_str(&node.color().shifted(-40).to_css());
			ctx.set_line_width(outline);
			ctx.stroke();
		}
	}
}

fn draw_tokens(state: &BoardState, ctx: &CanvasRenderingContext2d) {
	// The held token is drawn last so it floats above every node.
	let selected = state.graph.selected();
	let mut held = None;
	for token in state.graph.tokens() {
		if Some(token.id()) == selected {
			held = Some(token);
			continue;
		}
		draw_token(token, state, ctx);
	}
	if let Some(token) = held {
		draw_token(token, state, ctx);
	}
}

fn draw_token(token: &Token, state: &BoardState, ctx: &CanvasRenderingContext2d) {
	let vertices = token.outline(state.config.circle_vertices);
	if !trace_polygon(&vertices, ctx) {
		return;
	}
	ctx.set_fill_style_str(&token.color().to_css());
	ctx.fill();
	if token.is_flow() || token.is_selected() {
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
		ctx.set_line_width(2.0);
		ctx.stroke();
	}
}

fn trace_polygon(vertices: &[Point], ctx: &CanvasRenderingContext2d) -> bool {
	let Some((first, rest)) = vertices.split_first() else {
		return false;
	};
	ctx.begin_path();
	ctx.move_to(first.x, first.y);
	for p in rest {
		ctx.line_to(p.x, p.y);
	}
	ctx.close_path();
	true
}
