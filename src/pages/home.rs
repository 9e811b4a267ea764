use leptos::prelude::*;
use log::error;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::token_board::TokenBoardCanvas;
use crate::generator::{GenerateError, GraphSpec, SymmetricGraphGenerator};

const NODE_COUNT: usize = 8;
const JOINT_COUNT: usize = 2;
const COLOR_COUNT: usize = 3;
const REWIRE_PROBABILITY: f64 = 0.4;

/// Fresh symmetric graph from a browser-seeded generator.
fn generate_board() -> Result<GraphSpec, GenerateError> {
	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	SymmetricGraphGenerator::default().generate(
		NODE_COUNT,
		JOINT_COUNT,
		COLOR_COUNT,
		REWIRE_PROBABILITY,
		&mut rng,
	)
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let spec = generate_board();
	if let Err(e) = &spec {
		error!("graph generation failed: {e}");
	}

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{spec.map(|spec| {
				let graph_data = Signal::derive(move || spec.clone());
				view! {
					<div class="fullscreen-graph">
						<TokenBoardCanvas data=graph_data fullscreen=true />
						<div class="graph-overlay">
							<h1>"Symmetric Graph"</h1>
							<p class="subtitle">"Drag tokens between nodes. Drag a node to move it."</p>
						</div>
					</div>
				}
			})}
		</ErrorBoundary>
	}
}
