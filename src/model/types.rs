use std::f64::consts::PI;
use std::fmt;

/// Identifier of a graph node, unique within one graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "n{}", self.0)
	}
}

/// Identifier of a token, handed out by an [`IdAllocator`](super::IdAllocator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "t{}", self.0)
	}
}

/// Unordered pair of node ids. The smaller id is always stored first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(NodeId, NodeId);

impl Edge {
	/// Builds the canonical form of the edge between `a` and `b`.
	pub fn new(a: NodeId, b: NodeId) -> Self {
		if a <= b { Self(a, b) } else { Self(b, a) }
	}

	/// Both endpoints, smaller id first.
	pub fn endpoints(&self) -> (NodeId, NodeId) {
		(self.0, self.1)
	}

	/// True when both endpoints are the same node.
	pub fn is_loop(&self) -> bool {
		self.0 == self.1
	}

	/// The endpoint opposite to `id`, if `id` is an endpoint at all.
	pub fn other(&self, id: NodeId) -> Option<NodeId> {
		if self.0 == id {
			Some(self.1)
		} else if self.1 == id {
			Some(self.0)
		} else {
			None
		}
	}
}

/// A 2D position, either normalized layout space or window space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Creates a point.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared euclidean distance to `other`.
	pub fn distance_squared(&self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}

	/// Clamps both coordinates into `[min, max]`. Non-finite coordinates become `0`.
	pub fn clamped(&self, min: f64, max: f64) -> Self {
		let clamp = |v: f64| if v.is_finite() { v.clamp(min, max) } else { 0.0 };
		Self::new(clamp(self.x), clamp(self.y))
	}
}

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel.
	pub a: u8,
}

impl Color {
	/// Creates a color from its four channels.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Adds `delta` to the color channels, clamping each to `[0, 255]`. Alpha is kept.
	pub fn shifted(&self, delta: i16) -> Self {
		let shift = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
		Self::rgba(shift(self.r), shift(self.g), shift(self.b), self.a)
	}

	/// CSS `rgba(...)` notation for canvas fill and stroke styles.
	pub fn to_css(&self) -> String {
		format!(
			"rgba({}, {}, {}, {})",
			self.r,
			self.g,
			self.b,
			self.a as f64 / 255.0
		)
	}
}

/// Outline of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Three vertices, apex toward `-y`, which points up on a y-down canvas.
	Triangle,
	/// Four vertices on the axes.
	Rhombus,
	/// Regular polygon approximating a circle.
	Circle,
}

impl Shape {
	/// All shapes, in their conventional order.
	pub const ALL: [Shape; 3] = [Shape::Triangle, Shape::Rhombus, Shape::Circle];

	/// Polygon vertices for this shape centered on `center` with half-extent `size`.
	/// `circle_vertices` only applies to [`Shape::Circle`] and is raised to at least 3.
	pub fn outline(&self, center: Point, size: f64, circle_vertices: usize) -> Vec<Point> {
		let Point { x, y } = center;
		match self {
			Shape::Triangle => vec![
				Point::new(x - size, y + size),
				Point::new(x, y - size),
				Point::new(x + size, y + size),
			],
			Shape::Rhombus => vec![
				Point::new(x - size, y),
				Point::new(x, y + size),
				Point::new(x + size, y),
				Point::new(x, y - size),
			],
			Shape::Circle => {
				let n = circle_vertices.max(3);
				(0..n)
					.map(|i| {
						let theta = i as f64 * 2.0 * PI / n as f64;
						Point::new(x + size * theta.cos(), y + size * theta.sin())
					})
					.collect()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edges_are_unordered() {
		let e = Edge::new(NodeId(5), NodeId(2));
		assert_eq!(e, Edge::new(NodeId(2), NodeId(5)));
		assert_eq!(e.endpoints(), (NodeId(2), NodeId(5)));
		assert_eq!(e.other(NodeId(5)), Some(NodeId(2)));
		assert_eq!(e.other(NodeId(3)), None);
		assert!(Edge::new(NodeId(1), NodeId(1)).is_loop());
	}

	#[test]
	fn color_shift_clamps_per_channel() {
		let c = Color::rgba(250, 10, 128, 255);
		assert_eq!(c.shifted(20), Color::rgba(255, 30, 148, 255));
		assert_eq!(c.shifted(-20), Color::rgba(230, 0, 108, 255));
	}

	#[test]
	fn outlines_have_expected_vertex_counts() {
		let c = Point::new(10.0, 10.0);
		assert_eq!(Shape::Triangle.outline(c, 5.0, 0).len(), 3);
		assert_eq!(Shape::Rhombus.outline(c, 5.0, 0).len(), 4);
		assert_eq!(Shape::Circle.outline(c, 5.0, 32).len(), 32);
		assert_eq!(Shape::Circle.outline(c, 5.0, 1).len(), 3);
		for p in Shape::Circle.outline(c, 5.0, 16) {
			assert!((p.distance_squared(c) - 25.0).abs() < 1e-9);
		}
	}

	#[test]
	fn triangle_points_up_on_screen() {
		let apex = Shape::Triangle.outline(Point::new(10.0, 10.0), 5.0, 0)[1];
		assert_eq!(apex, Point::new(10.0, 5.0));
		let base = Shape::Triangle.outline(Point::new(10.0, 10.0), 5.0, 0);
		assert!(base.iter().all(|p| p.y >= apex.y));
	}

	#[test]
	fn clamping_handles_non_finite() {
		let p = Point::new(f64::NAN, 3.0).clamped(-1.0, 1.0);
		assert_eq!(p, Point::new(0.0, 1.0));
	}
}
