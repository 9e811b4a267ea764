use std::collections::BTreeMap;

use super::types::{NodeId, Point};

/// Maps normalized `[-1, 1]^2` layout coordinates into window space, keeping a
/// fixed border free on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphLayoutMapper {
	/// Window width in pixels.
	pub width: f64,
	/// Window height in pixels.
	pub height: f64,
	/// Margin kept free on each side.
	pub border: f64,
}

impl GraphLayoutMapper {
	/// Mapper for a window of `width` x `height` with the given border.
	pub fn new(width: f64, height: f64, border: f64) -> Self {
		Self {
			width,
			height,
			border,
		}
	}

	/// Same border, new window size. Used on resize.
	pub fn resized(&self, width: f64, height: f64) -> Self {
		Self::new(width, height, self.border)
	}

	/// Maps one normalized point. Layout output is not guaranteed to stay inside
	/// `[-1, 1]`, so coordinates are clamped first.
	pub fn map_point(&self, normalized: Point) -> Point {
		let p = normalized.clamped(-1.0, 1.0);
		let unit = |v: f64| (v + 1.0) / 2.0;
		Point::new(
			self.border + unit(p.x) * (self.width - 2.0 * self.border),
			self.border + unit(p.y) * (self.height - 2.0 * self.border),
		)
	}

	/// Maps a whole layout.
	pub fn map_to_window(&self, normalized: &BTreeMap<NodeId, Point>) -> BTreeMap<NodeId, Point> {
		normalized
			.iter()
			.map(|(&id, &p)| (id, self.map_point(p)))
			.collect()
	}
}
