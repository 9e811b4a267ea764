use std::collections::BTreeMap;

use log::{debug, info, trace};

use super::ids::IdAllocator;
use super::mapper::GraphLayoutMapper;
use super::node::{GraphNode, Slot};
use super::token::{Token, TokenKind};
use super::types::{Color, Edge, NodeId, Point, Shape, TokenId};
use crate::generator::GraphSpec;

/// Default half-extent of a token.
pub const DEFAULT_TOKEN_SIZE: f64 = 12.0;
/// Default per-channel brightening of the selected token.
pub const DEFAULT_SELECTION_DELTA: i16 = 40;

/// What the pointer is currently holding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
	/// A token following the pointer.
	Token(TokenId),
	/// A node being moved; `offset` is the grab point relative to the node center.
	Node {
		/// Node being moved.
		id: NodeId,
		/// Grab point minus node center.
		offset: Point,
	},
}

/// How a dropped token was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
	/// The token now belongs to `to`.
	Moved {
		/// Dropped token.
		token: TokenId,
		/// Previous parent.
		from: NodeId,
		/// New parent.
		to: NodeId,
	},
	/// The token went back into its slot on `parent`.
	SnappedBack {
		/// Dropped token.
		token: TokenId,
		/// Unchanged parent.
		parent: NodeId,
	},
}

/// Runtime graph: nodes with their tokens, edges, and the pointer state machine.
///
/// All mutation goes through `&mut self`; callers that share a graph across
/// threads have to serialize access themselves.
#[derive(Clone, Debug)]
pub struct Graph {
	nodes: BTreeMap<NodeId, GraphNode>,
	edges: Vec<Edge>,
	edge_geometry: Vec<(Point, Point)>,
	ids: IdAllocator,
	selected: Option<TokenId>,
	drag: Option<DragTarget>,
	token_size: f64,
	selection_delta: i16,
}

impl Default for Graph {
	fn default() -> Self {
		Self::new(DEFAULT_TOKEN_SIZE, DEFAULT_SELECTION_DELTA)
	}
}

impl Graph {
	/// An empty graph whose tokens get `token_size` and whose selection tints by
	/// `selection_delta`.
	pub fn new(token_size: f64, selection_delta: i16) -> Self {
		Self {
			nodes: BTreeMap::new(),
			edges: Vec::new(),
			edge_geometry: Vec::new(),
			ids: IdAllocator::new(),
			selected: None,
			drag: None,
			token_size,
			selection_delta,
		}
	}

	/// Builds the runtime graph from generator output mapped through `mapper`.
	pub fn from_spec(
		spec: &GraphSpec,
		mapper: &GraphLayoutMapper,
		node_radius: f64,
		token_size: f64,
		selection_delta: i16,
	) -> Self {
		let mut graph = Self::new(token_size, selection_delta);
		let centers = mapper.map_to_window(&spec.normalized_positions());
		for (id, color) in spec.node_ids.iter().zip(&spec.colors) {
			let center = centers.get(id).copied().unwrap_or_default();
			graph.add_node(*id, center, node_radius, *color);
		}
		for edge in &spec.edges {
			let (a, b) = edge.endpoints();
			graph.add_edge(a, b);
		}
		debug!(
			"runtime graph built: {} nodes, {} edges",
			graph.nodes.len(),
			graph.edges.len()
		);
		graph
	}

	/// Adds a node. Returns `false` if the id is taken.
	pub fn add_node(&mut self, id: NodeId, center: Point, radius: f64, color: Color) -> bool {
		if self.nodes.contains_key(&id) {
			return false;
		}
		self.nodes.insert(id, GraphNode::new(id, center, radius, color));
		true
	}

	/// Adds an edge between two existing nodes. Self-loops and duplicates are refused.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
		let edge = Edge::new(a, b);
		if edge.is_loop()
			|| !self.nodes.contains_key(&a)
			|| !self.nodes.contains_key(&b)
			|| self.edges.contains(&edge)
		{
			return false;
		}
		self.edges.push(edge);
		self.refresh_edge_geometry();
		true
	}

	/// Nodes in ascending id order.
	pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
		self.nodes.values()
	}

	/// Looks up a node.
	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.nodes.get(&id)
	}

	/// Edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// One segment per edge between the current node centers.
	pub fn edge_geometry(&self) -> &[(Point, Point)] {
		&self.edge_geometry
	}

	/// Every token, node by node.
	pub fn tokens(&self) -> impl Iterator<Item = &Token> {
		self.nodes.values().flat_map(|n| n.all_tokens())
	}

	/// Looks up a token anywhere in the graph.
	pub fn token(&self, id: TokenId) -> Option<&Token> {
		self.tokens().find(|t| t.id() == id)
	}

	/// The selected token, if any.
	pub fn selected(&self) -> Option<TokenId> {
		self.selected
	}

	/// What the pointer is holding, if anything.
	pub fn drag_target(&self) -> Option<DragTarget> {
		self.drag
	}

	/// Creates a regular token on `node`. `None` if the node does not exist.
	pub fn add_token(&mut self, node: NodeId, color: Color, shape: Shape) -> Option<TokenId> {
		self.spawn_token(node, color, shape, TokenKind::Regular)
	}

	/// Creates the flow token of `node`. `None` if the node does not exist or
	/// already has one.
	pub fn set_flow_token(&mut self, node: NodeId, color: Color, shape: Shape) -> Option<TokenId> {
		if self.nodes.get(&node)?.has_flow() {
			return None;
		}
		self.spawn_token(node, color, shape, TokenKind::Flow)
	}

	fn spawn_token(
		&mut self,
		node: NodeId,
		color: Color,
		shape: Shape,
		kind: TokenKind,
	) -> Option<TokenId> {
		let target = self.nodes.get_mut(&node)?;
		let id = self.ids.next_token();
		let token = Token::new(id, node, color, shape, self.token_size, kind);
		target.attach(token).ok()?;
		trace!("token {id} created on {node}");
		Some(id)
	}

	/// First token containing `point`: nodes by id, ring tokens in insertion
	/// order, then the node's flow token.
	pub fn hit_test(&self, point: Point) -> Option<TokenId> {
		self.tokens().find(|t| t.contains(point)).map(Token::id)
	}

	/// First node (by id) whose circle contains `point`.
	pub fn node_at(&self, point: Point) -> Option<NodeId> {
		self.nodes
			.values()
			.find(|n| n.contains(point))
			.map(GraphNode::id)
	}

	/// Pointer pressed at `(x, y)`.
	pub fn on_pointer_down(&mut self, x: f64, y: f64) {
		// A press without a release in between still ends the drag in progress.
		if let Some(DragTarget::Token(id)) = self.drag.take() {
			self.drop_token(id);
		}
		let point = Point::new(x, y);
		let hit = self.hit_test(point);
		trace!("pointer down at ({x:.1}, {y:.1}), hit {hit:?}");
		self.select(hit);
		self.drag = match hit {
			Some(token) => Some(DragTarget::Token(token)),
			None => self.node_at(point).and_then(|id| {
				let center = self.nodes.get(&id)?.center();
				Some(DragTarget::Node {
					id,
					offset: Point::new(x - center.x, y - center.y),
				})
			}),
		};
	}

	/// Pointer moved to `(x, y)` with the button held.
	pub fn on_pointer_drag(&mut self, x: f64, y: f64, _dx: f64, _dy: f64) {
		match self.drag {
			Some(DragTarget::Token(id)) => {
				if let Some(token) = self.token_mut(id) {
					token.set_center(Point::new(x, y));
				}
			}
			Some(DragTarget::Node { id, offset }) => {
				self.move_node(id, Point::new(x - offset.x, y - offset.y));
			}
			None => {}
		}
	}

	/// Pointer released. Resolves a token drop, if a token was being dragged.
	pub fn on_pointer_up(&mut self, _x: f64, _y: f64) -> Option<DropOutcome> {
		match self.drag.take()? {
			DragTarget::Token(id) => self.drop_token(id),
			DragTarget::Node { .. } => None,
		}
	}

	/// Reassigns `token` to `node` programmatically, with the same rules as a
	/// drop onto that node. Returns `true` if the token changed parent.
	pub fn move_token(&mut self, token: TokenId, node: NodeId) -> bool {
		matches!(self.transfer(token, Some(node)), Some(DropOutcome::Moved { .. }))
	}

	/// Moves a node, carrying its tokens and refreshing edge geometry.
	pub fn move_node(&mut self, id: NodeId, center: Point) -> bool {
		let Some(node) = self.nodes.get_mut(&id) else {
			return false;
		};
		let held = held_token(self.drag);
		node.set_center(center, held);
		self.refresh_edge_geometry();
		true
	}

	/// Moves every node listed in `positions` (window space), e.g. after a resize.
	/// The token under the pointer keeps following it.
	pub fn relayout(&mut self, positions: &BTreeMap<NodeId, Point>) {
		let held = held_token(self.drag);
		for (id, node) in self.nodes.iter_mut() {
			if let Some(&center) = positions.get(id) {
				node.set_center(center, held);
			}
		}
		self.refresh_edge_geometry();
	}

	fn drop_token(&mut self, id: TokenId) -> Option<DropOutcome> {
		let center = self.token(id)?.center();
		let target = self.node_at(center);
		self.transfer(id, target)
	}

	fn transfer(&mut self, id: TokenId, target: Option<NodeId>) -> Option<DropOutcome> {
		let (parent, slot) = self.locate(id)?;
		let accepts = |node: &GraphNode| slot != Slot::Flow || !node.has_flow();
		let target = target
			.filter(|&t| t != parent)
			.filter(|t| self.nodes.get(t).is_some_and(accepts));

		let Some(to) = target else {
			self.nodes.get_mut(&parent)?.arrange_tokens();
			debug!("token {id} snapped back to {parent}");
			return Some(DropOutcome::SnappedBack { token: id, parent });
		};

		let token = self.nodes.get_mut(&parent)?.detach(id)?;
		match self.nodes.get_mut(&to).map(|n| n.attach(token)) {
			Some(Ok(())) => {
				info!("token {id} moved from {parent} to {to}");
				Some(DropOutcome::Moved {
					token: id,
					from: parent,
					to,
				})
			}
			Some(Err(token)) => {
				// Target refused after all; put it back where it came from.
				self.nodes.get_mut(&parent)?.attach(token).ok()?;
				Some(DropOutcome::SnappedBack { token: id, parent })
			}
			None => None,
		}
	}

	fn select(&mut self, next: Option<TokenId>) {
		if self.selected == next {
			return;
		}
		if let Some(prev) = self.selected.take() {
			if let Some(token) = self.token_mut(prev) {
				token.deselect();
			}
		}
		let delta = self.selection_delta;
		if let Some(id) = next {
			if let Some(token) = self.token_mut(id) {
				token.select(delta);
				self.selected = Some(id);
			}
		}
	}

	fn locate(&self, id: TokenId) -> Option<(NodeId, Slot)> {
		self.nodes
			.values()
			.find_map(|n| n.slot_of(id).map(|slot| (n.id(), slot)))
	}

	fn token_mut(&mut self, id: TokenId) -> Option<&mut Token> {
		self.nodes.values_mut().find_map(|n| n.token_mut(id))
	}

	fn refresh_edge_geometry(&mut self) {
		self.edge_geometry = self
			.edges
			.iter()
			.filter_map(|e| {
				let (a, b) = e.endpoints();
				Some((self.nodes.get(&a)?.center(), self.nodes.get(&b)?.center()))
			})
			.collect();
	}
}

fn held_token(drag: Option<DragTarget>) -> Option<TokenId> {
	match drag {
		Some(DragTarget::Token(id)) => Some(id),
		_ => None,
	}
}
