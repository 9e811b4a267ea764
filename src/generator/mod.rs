//! Symmetric small-world graph generation: build, mirror around joints, lay out,
//! color.

pub mod colors;
mod compose;
mod error;
mod layout;
mod raw;
mod small_world;

use log::info;
use rand::Rng;

pub use compose::{compose, mirrored_id};
pub use error::GenerateError;
pub use layout::{ForceLayoutEngine, Layout, rescale};
pub use raw::RawGraph;
pub use small_world::{SmallWorldBuilder, SmallWorldKind, ring_lattice};

use crate::config::GeneratorConfig;
use crate::model::{Color, Edge, NodeId, Point};

/// Generator output. `node_ids`, `positions` and `colors` are parallel and
/// sorted by node id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSpec {
	/// Node ids, ascending.
	pub node_ids: Vec<NodeId>,
	/// Normalized positions, one per node id.
	pub positions: Vec<Point>,
	/// Node colors, one per node id.
	pub colors: Vec<Color>,
	/// Edges in canonical order.
	pub edges: Vec<Edge>,
}

impl GraphSpec {
	/// Positions keyed by node id.
	pub fn normalized_positions(&self) -> Layout {
		self.node_ids
			.iter()
			.copied()
			.zip(self.positions.iter().copied())
			.collect()
	}
}

/// The whole generation pipeline.
#[derive(Clone, Debug, Default)]
pub struct SymmetricGraphGenerator {
	config: GeneratorConfig,
}

impl SymmetricGraphGenerator {
	/// Generator using `config`.
	pub fn new(config: GeneratorConfig) -> Self {
		Self { config }
	}

	/// Settings in use.
	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Builds a connected small-world graph on `node_count` nodes, mirrors it
	/// around its first `joint_count` nodes, lays the result out and colors it
	/// with the first `color_count` palette entries.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		node_count: usize,
		joint_count: usize,
		color_count: usize,
		rewire_probability: f64,
		rng: &mut R,
	) -> Result<GraphSpec, GenerateError> {
		if joint_count == 0 {
			return Err(GenerateError::NoJoints);
		}
		let palette = &self.config.palette;
		if color_count == 0 || color_count > palette.len() {
			return Err(GenerateError::InvalidColorCount {
				requested: color_count,
				available: palette.len(),
			});
		}

		let builder = SmallWorldBuilder {
			ring_degree: self.config.ring_degree,
			kind: self.config.kind,
			max_attempts: self.config.max_attempts,
		};
		let base = builder.build(node_count, rewire_probability, rng)?;
		let graph = compose(&base, joint_count);
		let layout = ForceLayoutEngine::new(self.config.iterations, self.config.spring_constant)
			.layout(&graph, rng);
		let colors = colors::assign(graph.node_count(), color_count, palette, rng)?;

		let node_ids: Vec<NodeId> = graph.nodes().collect();
		let positions = node_ids
			.iter()
			.map(|id| layout.get(id).copied().unwrap_or_default())
			.collect();
		let spec = GraphSpec {
			node_ids,
			positions,
			colors,
			edges: graph.edges().collect(),
		};
		info!(
			"generated symmetric graph: {} nodes ({} joints), {} edges",
			spec.node_ids.len(),
			joint_count.min(node_count),
			spec.edges.len()
		);
		Ok(spec)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;

	fn generator() -> SymmetricGraphGenerator {
		SymmetricGraphGenerator::new(GeneratorConfig::default().with_layout(100, 0.2))
	}

	fn as_raw(spec: &GraphSpec) -> RawGraph {
		let mut g = RawGraph::default();
		for &id in &spec.node_ids {
			g.add_node(id);
		}
		for e in &spec.edges {
			let (a, b) = e.endpoints();
			g.add_edge(a, b);
		}
		g
	}

	#[test]
	fn output_is_parallel_and_sorted() {
		let mut rng = ChaCha8Rng::seed_from_u64(5);
		let spec = generator().generate(10, 3, 3, 0.4, &mut rng).unwrap();
		assert_eq!(spec.node_ids.len(), 3 + 2 * 7);
		assert_eq!(spec.positions.len(), spec.node_ids.len());
		assert_eq!(spec.colors.len(), spec.node_ids.len());
		assert!(spec.node_ids.windows(2).all(|w| w[0] < w[1]));
		assert_eq!(spec.normalized_positions().len(), spec.node_ids.len());
	}

	#[test]
	fn mirrored_half_uses_shifted_ids() {
		let mut rng = ChaCha8Rng::seed_from_u64(9);
		let spec = generator().generate(8, 2, 2, 0.3, &mut rng).unwrap();
		let ids: BTreeSet<_> = spec.node_ids.iter().map(|n| n.0).collect();
		let expected: BTreeSet<_> = (0..8).chain((2..8).map(|i| i + 9)).collect();
		assert_eq!(ids, expected);
		// Every edge of the original half has its mirror.
		let g = as_raw(&spec);
		for e in &spec.edges {
			let (a, b) = e.endpoints();
			if a.0 < 8 && b.0 < 8 {
				assert!(g.has_edge(mirrored_id(a, 8, 2), mirrored_id(b, 8, 2)));
			}
		}
	}

	#[test]
	fn degenerate_joint_count_yields_base_graph() {
		let mut rng = ChaCha8Rng::seed_from_u64(2);
		let spec = generator().generate(7, 7, 3, 0.2, &mut rng).unwrap();
		assert_eq!(spec.node_ids, (0..7).map(NodeId).collect::<Vec<_>>());
	}

	#[test]
	fn parameter_errors_propagate() {
		let mut rng = ChaCha8Rng::seed_from_u64(0);
		let g = generator();
		assert_eq!(g.generate(10, 0, 3, 0.4, &mut rng), Err(GenerateError::NoJoints));
		assert!(matches!(
			g.generate(10, 2, 4, 0.4, &mut rng),
			Err(GenerateError::InvalidColorCount { .. })
		));
		assert!(matches!(
			g.generate(4, 2, 3, 0.4, &mut rng),
			Err(GenerateError::TooFewNodes { .. })
		));
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(24))]
		#[test]
		fn composite_is_connected_and_shares_joints(
			n in 7usize..16,
			joints in 1usize..5,
			p in 0.0f64..=1.0,
			seed: u64,
		) {
			let mut rng = ChaCha8Rng::seed_from_u64(seed);
			let spec = generator().generate(n, joints, 3, p, &mut rng).unwrap();
			let g = as_raw(&spec);
			prop_assert!(g.is_connected());
			for id in 0..n {
				let id = NodeId(id);
				prop_assert!(g.contains(id));
				let mirror = mirrored_id(id, n, joints);
				prop_assert!(g.contains(mirror));
				if id.0 < joints {
					prop_assert_eq!(mirror, id);
				} else {
					prop_assert_eq!(mirror.0, id.0 + n + 1);
				}
			}
			prop_assert_eq!(g.node_count(), joints + 2 * (n - joints));
		}
	}
}
