use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::model::{Edge, NodeId};

/// Node and edge sets used while generating. Edges are stored canonically, so
/// `(a, b)` and `(b, a)` are the same edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawGraph {
	nodes: BTreeSet<NodeId>,
	edges: BTreeSet<Edge>,
}

impl RawGraph {
	/// Nodes `0..count` with no edges.
	pub fn with_nodes(count: usize) -> Self {
		Self {
			nodes: (0..count).map(NodeId).collect(),
			edges: BTreeSet::new(),
		}
	}

	/// Adds a node; returns `false` if it was present.
	pub fn add_node(&mut self, id: NodeId) -> bool {
		self.nodes.insert(id)
	}

	/// Adds an edge between existing, distinct nodes. Returns `false` for loops,
	/// unknown endpoints and duplicates.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
		let edge = Edge::new(a, b);
		if edge.is_loop() || !self.nodes.contains(&a) || !self.nodes.contains(&b) {
			return false;
		}
		self.edges.insert(edge)
	}

	/// Removes an edge; returns `false` if it was absent.
	pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
		self.edges.remove(&Edge::new(a, b))
	}

	/// Whether `a` and `b` are adjacent.
	pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
		self.edges.contains(&Edge::new(a, b))
	}

	/// Nodes in ascending order.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.nodes.iter().copied()
	}

	/// Edges in canonical order.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.edges.iter().copied()
	}

	/// Number of nodes.
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Number of edges touching `id`.
	pub fn degree(&self, id: NodeId) -> usize {
		self.edges.iter().filter(|e| e.other(id).is_some()).count()
	}

	/// Whether `id` is a node.
	pub fn contains(&self, id: NodeId) -> bool {
		self.nodes.contains(&id)
	}

	/// Adjacency lists keyed by node.
	pub fn adjacency(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
		let mut adj: BTreeMap<NodeId, Vec<NodeId>> =
			self.nodes.iter().map(|&n| (n, Vec::new())).collect();
		for edge in &self.edges {
			let (a, b) = edge.endpoints();
			adj.entry(a).or_default().push(b);
			adj.entry(b).or_default().push(a);
		}
		adj
	}

	/// Breadth-first reachability from the smallest node covers every node.
	/// An empty graph counts as connected.
	pub fn is_connected(&self) -> bool {
		let Some(&root) = self.nodes.first() else {
			return true;
		};
		let adj = self.adjacency();
		let mut seen = BTreeSet::from([root]);
		let mut queue = VecDeque::from([root]);
		while let Some(n) = queue.pop_front() {
			for &m in adj.get(&n).into_iter().flatten() {
				if seen.insert(m) {
					queue.push_back(m);
				}
			}
		}
		seen.len() == self.nodes.len()
	}

	/// Union of node and edge sets.
	pub fn union(&self, other: &RawGraph) -> RawGraph {
		RawGraph {
			nodes: self.nodes.union(&other.nodes).copied().collect(),
			edges: self.edges.union(&other.edges).copied().collect(),
		}
	}

	/// Renames nodes through `f`. `f` must be injective.
	pub fn relabel(&self, f: impl Fn(NodeId) -> NodeId) -> RawGraph {
		RawGraph {
			nodes: self.nodes.iter().map(|&n| f(n)).collect(),
			edges: self
				.edges
				.iter()
				.map(|e| {
					let (a, b) = e.endpoints();
					Edge::new(f(a), f(b))
				})
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn connectivity_is_checked_by_reachability() {
		let mut g = RawGraph::with_nodes(4);
		g.add_edge(NodeId(0), NodeId(1));
		g.add_edge(NodeId(2), NodeId(3));
		assert!(!g.is_connected());
		g.add_edge(NodeId(1), NodeId(2));
		assert!(g.is_connected());
		assert!(RawGraph::default().is_connected());
	}

	#[test]
	fn edges_are_deduplicated_and_loops_refused() {
		let mut g = RawGraph::with_nodes(3);
		assert!(g.add_edge(NodeId(0), NodeId(1)));
		assert!(!g.add_edge(NodeId(1), NodeId(0)));
		assert!(!g.add_edge(NodeId(2), NodeId(2)));
		assert!(!g.add_edge(NodeId(2), NodeId(9)));
		assert_eq!(g.edge_count(), 1);
		assert_eq!(g.degree(NodeId(1)), 1);
		assert!(g.remove_edge(NodeId(1), NodeId(0)));
		assert_eq!(g.edge_count(), 0);
	}
}
