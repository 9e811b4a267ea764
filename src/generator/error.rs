use thiserror::Error;

/// Why a graph could not be generated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
	/// The ring lattice needs more than `2 * ring_degree` nodes.
	#[error("{node_count} nodes cannot hold a ring lattice with {ring_degree} neighbours per side")]
	TooFewNodes {
		/// Requested node count.
		node_count: usize,
		/// Neighbours per side.
		ring_degree: usize,
	},
	/// A lattice without neighbours is never connected.
	#[error("ring degree must be at least 1")]
	ZeroRingDegree,
	/// Rewire probability outside `[0, 1]`.
	#[error("rewire probability {0} is not in [0, 1]")]
	InvalidProbability(f64),
	/// Without joints the mirrored halves share nothing and cannot be connected.
	#[error("at least one joint node is required")]
	NoJoints,
	/// Color count is zero or larger than the palette.
	#[error("color count {requested} is not in 1..={available}")]
	InvalidColorCount {
		/// Requested color count.
		requested: usize,
		/// Palette length.
		available: usize,
	},
	/// The optional retry cap was reached without a connected graph.
	#[error("no connected graph after {attempts} attempts")]
	ConnectivityExhausted {
		/// Attempts made.
		attempts: usize,
	},
}
