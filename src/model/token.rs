use super::types::{Color, NodeId, Point, Shape, TokenId};

/// Role of a token on its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// Arranged on the ring around the node center.
	Regular,
	/// The node's single flow marker, kept at the node center.
	Flow,
}

/// A movable piece owned by exactly one [`GraphNode`](super::GraphNode).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
	id: TokenId,
	center: Point,
	color: Color,
	shape: Shape,
	size: f64,
	kind: TokenKind,
	tint: i16,
	selected: bool,
	parent: NodeId,
}

impl Token {
	pub(crate) fn new(
		id: TokenId,
		parent: NodeId,
		color: Color,
		shape: Shape,
		size: f64,
		kind: TokenKind,
	) -> Self {
		Self {
			id,
			center: Point::default(),
			color,
			shape,
			size,
			kind,
			tint: 0,
			selected: false,
			parent,
		}
	}

	/// Token id.
	pub fn id(&self) -> TokenId {
		self.id
	}

	/// Current center in window space.
	pub fn center(&self) -> Point {
		self.center
	}

	/// Color as drawn, including the selection tint.
	pub fn color(&self) -> Color {
		self.color.shifted(self.tint)
	}

	/// Color without the selection tint.
	pub fn base_color(&self) -> Color {
		self.color
	}

	/// Outline shape.
	pub fn shape(&self) -> Shape {
		self.shape
	}

	/// Half-extent of the shape, also the hit radius.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Regular or flow token.
	pub fn kind(&self) -> TokenKind {
		self.kind
	}

	/// Shorthand for `kind() == TokenKind::Flow`.
	pub fn is_flow(&self) -> bool {
		self.kind == TokenKind::Flow
	}

	/// Whether this is the graph's selected token.
	pub fn is_selected(&self) -> bool {
		self.selected
	}

	/// Owning node.
	pub fn parent(&self) -> NodeId {
		self.parent
	}

	/// Circular hit test against the token's bounding radius.
	pub fn contains(&self, point: Point) -> bool {
		self.center.distance_squared(point) <= self.size * self.size
	}

	/// Polygon vertices for rendering.
	pub fn outline(&self, circle_vertices: usize) -> Vec<Point> {
		self.shape.outline(self.center, self.size, circle_vertices)
	}

	pub(crate) fn set_center(&mut self, center: Point) {
		self.center = center;
	}

	pub(crate) fn set_parent(&mut self, parent: NodeId) {
		self.parent = parent;
	}

	pub(crate) fn select(&mut self, delta: i16) {
		self.selected = true;
		self.tint = delta;
	}

	pub(crate) fn deselect(&mut self) {
		self.selected = false;
		self.tint = 0;
	}
}
