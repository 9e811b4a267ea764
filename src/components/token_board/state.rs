use log::debug;

use crate::config::BoardConfig;
use crate::generator::{GraphSpec, Layout};
use crate::model::{Graph, GraphLayoutMapper, NodeId, Shape};

#[derive(Clone, Debug, Default)]
pub struct PointerState {
	pub pressed: bool,
	pub last_x: f64,
	pub last_y: f64,
}

pub struct BoardState {
	pub graph: Graph,
	pub config: BoardConfig,
	pub pointer: PointerState,
	pub width: f64,
	pub height: f64,
	layout: Layout,
	mapper: GraphLayoutMapper,
}

impl BoardState {
	pub fn new(spec: &GraphSpec, config: BoardConfig, width: f64, height: f64) -> Self {
		let mapper = GraphLayoutMapper::new(width, height, config.border);
		let mut graph = Graph::from_spec(
			spec,
			&mapper,
			config.node_radius,
			config.token_size,
			config.selection_delta,
		);
		seed_tokens(&mut graph, &config);

		Self {
			graph,
			config,
			pointer: PointerState::default(),
			width,
			height,
			layout: spec.normalized_positions(),
			mapper,
		}
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		// Another button pressed while one is held.
		if self.pointer.pressed {
			return;
		}
		self.pointer = PointerState {
			pressed: true,
			last_x: x,
			last_y: y,
		};
		self.graph.on_pointer_down(x, y);
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if !self.pointer.pressed {
			return;
		}
		let (dx, dy) = (x - self.pointer.last_x, y - self.pointer.last_y);
		self.pointer.last_x = x;
		self.pointer.last_y = y;
		self.graph.on_pointer_drag(x, y, dx, dy);
	}

	pub fn pointer_up(&mut self, x: f64, y: f64) {
		if !self.pointer.pressed {
			return;
		}
		self.pointer.pressed = false;
		if let Some(outcome) = self.graph.on_pointer_up(x, y) {
			debug!("drop resolved: {outcome:?}");
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.mapper = self.mapper.resized(width, height);
		self.graph.relayout(&self.mapper.map_to_window(&self.layout));
	}
}

/// One token per node, shapes cycling, colored with the palette entry after
/// the node's own so it stands out. The lowest id (a joint) also gets the flow
/// token.
fn seed_tokens(graph: &mut Graph, config: &BoardConfig) {
	let nodes: Vec<(NodeId, usize)> = graph
		.nodes()
		.map(|n| {
			let own = config.palette.iter().position(|&c| c == n.color());
			(n.id(), own.map_or(0, |i| i + 1))
		})
		.collect();
	let palette_len = config.palette.len().max(1);
	for (i, (id, color_idx)) in nodes.iter().enumerate() {
		let Some(&color) = config.palette.get(color_idx % palette_len) else {
			continue;
		};
		graph.add_token(*id, color, Shape::ALL[i % Shape::ALL.len()]);
	}
	if let Some(&(first, _)) = nodes.first() {
		graph.set_flow_token(first, config.background.shifted(40), Shape::Circle);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{BLUE, RED};
	use crate::model::{Edge, Point};

	fn spec() -> GraphSpec {
		GraphSpec {
			node_ids: vec![NodeId(0), NodeId(1)],
			positions: vec![Point::new(-1.0, 0.0), Point::new(1.0, 0.0)],
			colors: vec![RED, BLUE],
			edges: vec![Edge::new(NodeId(0), NodeId(1))],
		}
	}

	#[test]
	fn board_maps_layout_and_seeds_tokens() {
		let state = BoardState::new(&spec(), BoardConfig::default(), 600.0, 400.0);
		let a = state.graph.node(NodeId(0)).unwrap();
		assert_eq!(a.center(), Point::new(50.0, 200.0));
		assert_eq!(a.tokens().len(), 1);
		assert_eq!(a.tokens()[0].color(), BLUE);
		assert!(a.flow_token().is_some());
		assert_eq!(state.graph.tokens().count(), 3);
	}

	#[test]
	fn resize_remaps_nodes_and_edges() {
		let mut state = BoardState::new(&spec(), BoardConfig::default(), 600.0, 400.0);
		state.resize(1000.0, 300.0);
		let b = state.graph.node(NodeId(1)).unwrap();
		assert_eq!(b.center(), Point::new(950.0, 150.0));
		assert_eq!(
			state.graph.edge_geometry(),
			&[(Point::new(50.0, 150.0), Point::new(950.0, 150.0))]
		);
	}

	#[test]
	fn moves_without_a_press_are_ignored() {
		let mut state = BoardState::new(&spec(), BoardConfig::default(), 600.0, 400.0);
		let token = state.graph.node(NodeId(0)).unwrap().tokens()[0].clone();
		state.pointer_move(300.0, 300.0);
		assert_eq!(state.graph.token(token.id()).unwrap().center(), token.center());

		let c = token.center();
		state.pointer_down(c.x, c.y);
		state.pointer_move(550.0, 200.0);
		state.pointer_up(550.0, 200.0);
		assert_eq!(state.graph.token(token.id()).unwrap().parent(), NodeId(1));
		assert_eq!(state.graph.selected(), Some(token.id()));
	}

	#[test]
	fn extra_press_while_held_keeps_the_drag() {
		let mut state = BoardState::new(&spec(), BoardConfig::default(), 600.0, 400.0);
		let token = state.graph.node(NodeId(0)).unwrap().tokens()[0].clone();
		let c = token.center();
		state.pointer_down(c.x, c.y);
		state.pointer_move(300.0, 100.0);
		state.pointer_down(10.0, 10.0);
		assert_eq!(state.graph.selected(), Some(token.id()));
		state.pointer_move(550.0, 200.0);
		state.pointer_up(550.0, 200.0);
		assert_eq!(state.graph.token(token.id()).unwrap().parent(), NodeId(1));
	}
}
