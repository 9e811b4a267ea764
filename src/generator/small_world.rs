use log::debug;
use rand::Rng;

use super::error::GenerateError;
use super::raw::RawGraph;
use crate::model::NodeId;

/// How lattice edges are randomized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmallWorldKind {
	/// Each lattice edge is moved to a random target with probability `p`.
	#[default]
	WattsStrogatz,
	/// Each lattice edge keeps its place and gains a random shortcut with
	/// probability `p`. The ring survives, so every attempt is connected.
	NewmanWatts,
}

/// Builds connected small-world graphs over nodes `0..node_count`.
#[derive(Clone, Debug, PartialEq)]
pub struct SmallWorldBuilder {
	/// Lattice neighbours on each side of a node.
	pub ring_degree: usize,
	/// Rewire or shortcut.
	pub kind: SmallWorldKind,
	/// Give up after this many disconnected attempts. `None` retries forever.
	pub max_attempts: Option<usize>,
}

impl Default for SmallWorldBuilder {
	fn default() -> Self {
		Self {
			ring_degree: 3,
			kind: SmallWorldKind::default(),
			max_attempts: None,
		}
	}
}

impl SmallWorldBuilder {
	/// Checks parameters that no amount of retrying could fix.
	pub fn validate(
		&self,
		node_count: usize,
		rewire_probability: f64,
	) -> Result<(), GenerateError> {
		if self.ring_degree == 0 {
			return Err(GenerateError::ZeroRingDegree);
		}
		if node_count <= 2 * self.ring_degree {
			return Err(GenerateError::TooFewNodes {
				node_count,
				ring_degree: self.ring_degree,
			});
		}
		if !(0.0..=1.0).contains(&rewire_probability) {
			return Err(GenerateError::InvalidProbability(rewire_probability));
		}
		Ok(())
	}

	/// Builds graphs from scratch until one is connected.
	pub fn build<R: Rng + ?Sized>(
		&self,
		node_count: usize,
		rewire_probability: f64,
		rng: &mut R,
	) -> Result<RawGraph, GenerateError> {
		self.validate(node_count, rewire_probability)?;
		let mut attempts = 0;
		loop {
			attempts += 1;
			let g = self.attempt(node_count, rewire_probability, rng);
			if g.is_connected() {
				debug!(
					"small-world graph: {} nodes, {} edges after {attempts} attempt(s)",
					g.node_count(),
					g.edge_count()
				);
				return Ok(g);
			}
			if self.max_attempts.is_some_and(|max| attempts >= max) {
				return Err(GenerateError::ConnectivityExhausted { attempts });
			}
			debug!("attempt {attempts} disconnected, rebuilding");
		}
	}

	fn attempt<R: Rng + ?Sized>(&self, n: usize, p: f64, rng: &mut R) -> RawGraph {
		let mut g = ring_lattice(n, self.ring_degree);
		for j in 1..=self.ring_degree {
			for u in 0..n {
				if !rng.gen_bool(p) {
					continue;
				}
				let (u, v) = (NodeId(u), NodeId((u + j) % n));
				// A saturated node has no free target left.
				if g.degree(u) >= n - 1 {
					continue;
				}
				let w = loop {
					let w = NodeId(rng.gen_range(0..n));
					if w != u && !g.has_edge(u, w) {
						break w;
					}
				};
				if self.kind == SmallWorldKind::WattsStrogatz {
					g.remove_edge(u, v);
				}
				g.add_edge(u, w);
			}
		}
		g
	}
}

/// Each node joined to its `k` nearest neighbours on either side.
pub fn ring_lattice(n: usize, k: usize) -> RawGraph {
	let mut g = RawGraph::with_nodes(n);
	if n < 2 {
		return g;
	}
	for u in 0..n {
		for j in 1..=k {
			g.add_edge(NodeId(u), NodeId((u + j) % n));
		}
	}
	g
}
