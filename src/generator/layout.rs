use std::collections::{BTreeMap, HashMap};

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;
use rand::Rng;

use super::raw::RawGraph;
use crate::model::{NodeId, Point};

/// Normalized node positions, roughly inside `[-1, 1]^2`.
pub type Layout = BTreeMap<NodeId, Point>;

/// Spread of the random starting positions, in simulation units.
const INITIAL_SPREAD: f32 = 100.0;

/// Spring layout on top of the `force_graph` simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceLayoutEngine {
	/// Simulation steps to run.
	pub iterations: usize,
	/// Edge spring strength before the `1 / sqrt(n)` scaling.
	pub spring_constant: f64,
	/// Simulated seconds per step.
	pub time_step: f32,
}

impl Default for ForceLayoutEngine {
	fn default() -> Self {
		Self {
			iterations: 1000,
			spring_constant: 0.2,
			time_step: 0.016,
		}
	}
}

impl ForceLayoutEngine {
	/// Engine running `iterations` steps with the given spring constant.
	pub fn new(iterations: usize, spring_constant: f64) -> Self {
		Self {
			iterations,
			spring_constant,
			..Self::default()
		}
	}

	/// Relaxes `graph` from random starting positions and rescales the result to
	/// `[-1, 1]^2`. Bounds are best effort; callers should clamp.
	pub fn layout<R: Rng + ?Sized>(&self, graph: &RawGraph, rng: &mut R) -> Layout {
		let n = graph.node_count();
		if n == 0 {
			return Layout::new();
		}

		let mut sim: ForceGraph<NodeId, ()> = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: (self.spring_constant / (n as f64).sqrt()) as f32,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		for id in graph.nodes() {
			let idx = sim.add_node(NodeData {
				x: rng.gen_range(-INITIAL_SPREAD..INITIAL_SPREAD),
				y: rng.gen_range(-INITIAL_SPREAD..INITIAL_SPREAD),
				mass: 10.0,
				is_anchor: false,
				user_data: id,
			});
			id_to_idx.insert(id, idx);
		}
		for edge in graph.edges() {
			let (a, b) = edge.endpoints();
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&a), id_to_idx.get(&b)) {
				sim.add_edge(src, tgt, EdgeData::default());
			}
		}

		for _ in 0..self.iterations {
			sim.update(self.time_step);
		}

		let mut raw = Layout::new();
		sim.visit_nodes(|node| {
			raw.insert(
				node.data.user_data,
				Point::new(node.x() as f64, node.y() as f64),
			);
		});
		rescale(&raw)
	}
}

/// Centers positions on their mean and divides by the largest absolute
/// coordinate. Non-finite positions are treated as the origin.
pub fn rescale(positions: &Layout) -> Layout {
	let finite = |p: &Point| if p.x.is_finite() && p.y.is_finite() { *p } else { Point::default() };
	let n = positions.len().max(1) as f64;
	let (sx, sy) = positions
		.values()
		.map(finite)
		.fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
	let (mx, my) = (sx / n, sy / n);

	let extent = positions
		.values()
		.map(finite)
		.map(|p| (p.x - mx).abs().max((p.y - my).abs()))
		.fold(0.0, f64::max);
	let scale = if extent > 0.0 { 1.0 / extent } else { 0.0 };
	debug!("layout extent {extent:.2} over {} nodes", positions.len());

	positions
		.iter()
		.map(|(&id, p)| {
			let p = finite(p);
			(id, Point::new((p.x - mx) * scale, (p.y - my) * scale))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;
	use crate::generator::small_world::ring_lattice;

	#[test]
	fn rescale_fits_the_unit_square() {
		let raw = Layout::from([
			(NodeId(0), Point::new(10.0, 10.0)),
			(NodeId(1), Point::new(30.0, 10.0)),
			(NodeId(2), Point::new(20.0, f64::INFINITY)),
		]);
		let scaled = rescale(&raw);
		let max = scaled
			.values()
			.map(|p| p.x.abs().max(p.y.abs()))
			.fold(0.0, f64::max);
		assert!((max - 1.0).abs() < 1e-12);
		assert!(scaled.values().all(|p| p.x.is_finite() && p.y.is_finite()));
	}

	#[test]
	fn single_node_sits_at_origin() {
		let raw = Layout::from([(NodeId(4), Point::new(12.0, -3.0))]);
		assert_eq!(rescale(&raw)[&NodeId(4)], Point::new(0.0, 0.0));
	}

	#[test]
	fn every_node_gets_a_finite_position() {
		let mut rng = ChaCha8Rng::seed_from_u64(11);
		let g = ring_lattice(12, 2);
		let layout = ForceLayoutEngine::new(200, 0.2).layout(&g, &mut rng);
		assert_eq!(layout.len(), 12);
		assert!(g.nodes().all(|id| layout.contains_key(&id)));
		assert!(layout.values().all(|p| p.x.is_finite() && p.y.is_finite()));
		assert!(layout.values().all(|p| p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9));
	}

	#[test]
	fn empty_graph_has_empty_layout() {
		let mut rng = ChaCha8Rng::seed_from_u64(0);
		assert!(ForceLayoutEngine::default().layout(&RawGraph::default(), &mut rng).is_empty());
	}
}
