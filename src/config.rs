//! Board and generator settings with their defaults.

use crate::generator::SmallWorldKind;
use crate::model::{Color, DEFAULT_SELECTION_DELTA, DEFAULT_TOKEN_SIZE};

/// Red node/token color.
pub const RED: Color = Color::rgba(200, 50, 50, 255);
/// Blue node/token color.
pub const BLUE: Color = Color::rgba(50, 50, 200, 255);
/// Gray node/token color.
pub const GRAY: Color = Color::rgba(50, 50, 50, 255);

/// Palette the color assigner draws from by default.
pub const DEFAULT_PALETTE: [Color; 3] = [RED, BLUE, GRAY];

/// Window and drawing settings for the board.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
	/// Initial window width, used when the canvas has no size of its own.
	pub width: f64,
	/// Initial window height.
	pub height: f64,
	/// Margin kept free around the layout.
	pub border: f64,
	/// Node circle radius.
	pub node_radius: f64,
	/// Width of the node outline stroke.
	pub node_outline: f64,
	/// Half-extent of a token shape.
	pub token_size: f64,
	/// Per-channel tint of the selected token.
	pub selection_delta: i16,
	/// Vertex count used when tessellating circles.
	pub circle_vertices: usize,
	/// Node and token colors.
	pub palette: Vec<Color>,
	/// Canvas background.
	pub background: Color,
	/// Edge stroke color.
	pub edge_color: Color,
	/// Edge stroke width.
	pub edge_width: f64,
}

impl Default for BoardConfig {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 600.0,
			border: 50.0,
			node_radius: 25.0,
			node_outline: 3.0,
			token_size: DEFAULT_TOKEN_SIZE,
			selection_delta: DEFAULT_SELECTION_DELTA,
			circle_vertices: 100,
			palette: DEFAULT_PALETTE.to_vec(),
			background: Color::rgba(200, 200, 200, 255),
			edge_color: GRAY,
			edge_width: 5.0,
		}
	}
}

impl BoardConfig {
	/// Sets the initial window size.
	pub fn with_size(mut self, width: f64, height: f64) -> Self {
		self.width = width;
		self.height = height;
		self
	}

	/// Sets the border margin.
	pub fn with_border(mut self, border: f64) -> Self {
		self.border = border;
		self
	}

	/// Sets node radius and outline width.
	pub fn with_node_style(mut self, radius: f64, outline: f64) -> Self {
		self.node_radius = radius;
		self.node_outline = outline;
		self
	}

	/// Sets the token half-extent.
	pub fn with_token_size(mut self, size: f64) -> Self {
		self.token_size = size;
		self
	}

	/// Replaces the palette.
	pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
		self.palette = palette;
		self
	}
}

/// Parameters of the symmetric graph pipeline that are not per-call.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
	/// Lattice neighbours on each side of a node.
	pub ring_degree: usize,
	/// Rewiring flavour.
	pub kind: SmallWorldKind,
	/// Cap on disconnected attempts. `None` retries forever.
	pub max_attempts: Option<usize>,
	/// Force simulation steps.
	pub iterations: usize,
	/// Spring constant before the `1 / sqrt(n)` scaling.
	pub spring_constant: f64,
	/// Palette the node colors are drawn from.
	pub palette: Vec<Color>,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			ring_degree: 3,
			kind: SmallWorldKind::WattsStrogatz,
			max_attempts: None,
			iterations: 1000,
			spring_constant: 0.2,
			palette: DEFAULT_PALETTE.to_vec(),
		}
	}
}

impl GeneratorConfig {
	/// Sets the lattice degree.
	pub fn with_ring_degree(mut self, ring_degree: usize) -> Self {
		self.ring_degree = ring_degree;
		self
	}

	/// Sets the rewiring flavour.
	pub fn with_kind(mut self, kind: SmallWorldKind) -> Self {
		self.kind = kind;
		self
	}

	/// Caps the connectivity retry loop.
	pub fn with_max_attempts(mut self, attempts: usize) -> Self {
		self.max_attempts = Some(attempts);
		self
	}

	/// Sets simulation steps and spring constant.
	pub fn with_layout(mut self, iterations: usize, spring_constant: f64) -> Self {
		self.iterations = iterations;
		self.spring_constant = spring_constant;
		self
	}

	/// Replaces the palette.
	pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
		self.palette = palette;
		self
	}
}
