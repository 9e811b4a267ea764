use std::f64::consts::PI;

use super::token::{Token, TokenKind};
use super::types::{Color, NodeId, Point, TokenId};

/// Fraction of the node radius at which regular tokens are arranged.
pub const TOKEN_RING: f64 = 0.75;

/// Where a token sits on its node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
	/// Index into the node's regular token sequence.
	Ring(usize),
	/// The node's flow slot.
	Flow,
}

/// A graph vertex in window space, owning its tokens.
#[derive(Clone, Debug)]
pub struct GraphNode {
	id: NodeId,
	center: Point,
	radius: f64,
	color: Color,
	tokens: Vec<Token>,
	flow: Option<Token>,
}

impl GraphNode {
	/// A node without tokens.
	pub fn new(id: NodeId, center: Point, radius: f64, color: Color) -> Self {
		Self {
			id,
			center,
			radius,
			color,
			tokens: Vec::new(),
			flow: None,
		}
	}

	/// Node id.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Center in window space.
	pub fn center(&self) -> Point {
		self.center
	}

	/// Radius in pixels.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// Fill color.
	pub fn color(&self) -> Color {
		self.color
	}

	/// Regular tokens in insertion order.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// The flow token, if this node holds one.
	pub fn flow_token(&self) -> Option<&Token> {
		self.flow.as_ref()
	}

	/// Regular tokens followed by the flow token. This is the hit-test order.
	pub fn all_tokens(&self) -> impl Iterator<Item = &Token> {
		self.tokens.iter().chain(self.flow.iter())
	}

	/// True when `point` lies inside the node's circle.
	pub fn contains(&self, point: Point) -> bool {
		self.radius * self.radius >= self.center.distance_squared(point)
	}

	/// Position of ring slot `index` out of `count`.
	pub fn slot_position(&self, index: usize, count: usize) -> Point {
		let theta = 2.0 * PI * index as f64 / count.max(1) as f64;
		let r = TOKEN_RING * self.radius;
		Point::new(
			self.center.x + r * theta.sin(),
			self.center.y + r * theta.cos(),
		)
	}

	/// Puts every token back into its slot.
	pub fn arrange_tokens(&mut self) {
		self.arrange_tokens_except(None);
	}

	/// Like [`arrange_tokens`](Self::arrange_tokens), leaving `held` where it is.
	/// The held token keeps its slot index.
	pub fn arrange_tokens_except(&mut self, held: Option<TokenId>) {
		let count = self.tokens.len();
		for i in 0..count {
			if Some(self.tokens[i].id()) == held {
				continue;
			}
			let p = self.slot_position(i, count);
			self.tokens[i].set_center(p);
		}
		if let Some(flow) = self.flow.as_mut().filter(|f| Some(f.id()) != held) {
			flow.set_center(self.center);
		}
	}

	pub(crate) fn set_center(&mut self, center: Point, held: Option<TokenId>) {
		self.center = center;
		self.arrange_tokens_except(held);
	}

	pub(crate) fn slot_of(&self, token: TokenId) -> Option<Slot> {
		if let Some(i) = self.tokens.iter().position(|t| t.id() == token) {
			return Some(Slot::Ring(i));
		}
		match &self.flow {
			Some(f) if f.id() == token => Some(Slot::Flow),
			_ => None,
		}
	}

	pub(crate) fn token_mut(&mut self, token: TokenId) -> Option<&mut Token> {
		match self.slot_of(token)? {
			Slot::Ring(i) => self.tokens.get_mut(i),
			Slot::Flow => self.flow.as_mut(),
		}
	}

	pub(crate) fn has_flow(&self) -> bool {
		self.flow.is_some()
	}

	/// Adopts `token` into the slot matching its kind and re-arranges. Returns the
	/// token back if the flow slot is already taken or the token is already here.
	pub(crate) fn attach(&mut self, mut token: Token) -> Result<(), Token> {
		if self.slot_of(token.id()).is_some() {
			return Err(token);
		}
		token.set_parent(self.id);
		match token.kind() {
			TokenKind::Regular => self.tokens.push(token),
			TokenKind::Flow => {
				if self.flow.is_some() {
					return Err(token);
				}
				self.flow = Some(token);
			}
		}
		self.arrange_tokens();
		Ok(())
	}

	pub(crate) fn detach(&mut self, token: TokenId) -> Option<Token> {
		let taken = match self.slot_of(token)? {
			Slot::Ring(i) => self.tokens.remove(i),
			Slot::Flow => self.flow.take()?,
		};
		self.arrange_tokens();
		Some(taken)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::types::Shape;

	fn regular(id: u64) -> Token {
		Token::new(
			TokenId(id),
			NodeId(9),
			Color::rgba(0, 0, 0, 255),
			Shape::Circle,
			5.0,
			TokenKind::Regular,
		)
	}

	fn flow(id: u64) -> Token {
		Token::new(
			TokenId(id),
			NodeId(0),
			Color::rgba(0, 0, 0, 255),
			Shape::Circle,
			5.0,
			TokenKind::Flow,
		)
	}

	fn node_at(center: Point, radius: f64) -> GraphNode {
		GraphNode::new(NodeId(0), center, radius, Color::rgba(1, 1, 1, 255))
	}

	#[test]
	fn tokens_are_arranged_by_insertion_order() {
		let mut node = node_at(Point::new(100.0, 100.0), 40.0);
		for id in 0..4 {
			node.attach(regular(id)).unwrap();
		}
		let positions: Vec<_> = node.tokens().iter().map(|t| t.center()).collect();
		let expected = [(100.0, 130.0), (130.0, 100.0), (100.0, 70.0), (70.0, 100.0)];
		for (p, (x, y)) in positions.iter().zip(expected) {
			assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{p:?}");
		}
		assert!(node.tokens().iter().all(|t| t.parent() == NodeId(0)));
	}

	#[test]
	fn duplicate_attach_is_rejected() {
		let mut node = node_at(Point::default(), 10.0);
		node.attach(regular(1)).unwrap();
		assert!(node.attach(regular(1)).is_err());
		assert_eq!(node.tokens().len(), 1);
	}

	#[test]
	fn detach_rearranges_remaining_tokens() {
		let mut node = node_at(Point::new(0.0, 0.0), 20.0);
		node.attach(regular(1)).unwrap();
		node.attach(regular(2)).unwrap();
		let taken = node.detach(TokenId(1)).unwrap();
		assert_eq!(taken.id(), TokenId(1));
		assert_eq!(node.tokens().len(), 1);
		assert_eq!(node.tokens()[0].center(), Point::new(0.0, 15.0));
		assert!(node.detach(TokenId(1)).is_none());
	}

	#[test]
	fn flow_slot_holds_one_token_at_center() {
		let mut node = GraphNode::new(
			NodeId(3),
			Point::new(5.0, 6.0),
			20.0,
			Color::rgba(1, 1, 1, 255),
		);
		node.attach(flow(7)).unwrap();
		assert!(node.attach(flow(8)).is_err());
		assert_eq!(node.flow_token().map(|t| t.center()), Some(Point::new(5.0, 6.0)));
		assert_eq!(node.slot_of(TokenId(7)), Some(Slot::Flow));
	}

	#[test]
	fn held_token_is_left_out_of_rearrangement() {
		let mut node = node_at(Point::new(0.0, 0.0), 20.0);
		node.attach(regular(1)).unwrap();
		node.attach(regular(2)).unwrap();
		node.attach(flow(3)).unwrap();
		let floating = Point::new(300.0, 300.0);
		node.token_mut(TokenId(1)).unwrap().set_center(floating);
		node.token_mut(TokenId(3)).unwrap().set_center(floating);

		node.set_center(Point::new(50.0, 50.0), Some(TokenId(1)));
		assert_eq!(node.tokens()[0].center(), floating);
		assert_eq!(node.tokens()[1].center(), node.slot_position(1, 2));
		assert_eq!(node.flow_token().unwrap().center(), Point::new(50.0, 50.0));

		node.arrange_tokens();
		assert_eq!(node.tokens()[0].center(), node.slot_position(0, 2));
	}
}
