use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::BoardState;
use crate::config::BoardConfig;
use crate::generator::GraphSpec;

fn canvas_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn TokenBoardCanvas(
	#[prop(into)] data: Signal<GraphSpec>,
	#[prop(default = BoardConfig::default())] config: BoardConfig,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<BoardState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(config.width, config.height)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(BoardState::new(&data.get(), config.clone(), w, h));
		info!("board ready at {w}x{h}");

		if fullscreen {
			let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *state_anim.borrow() {
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_move(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.pointer_up(x, y);
		}
	};

	// Leaving the canvas counts as a release where the pointer left.
	let state_ml = state.clone();
	let on_mouseleave = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_up(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="token-board-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: pointer;"
		/>
	}
}
