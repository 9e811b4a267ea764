use log::warn;

use super::raw::RawGraph;
use crate::model::NodeId;

/// Id a node gets in the mirrored half. Joints keep their id; everything else
/// moves past the original id space.
pub fn mirrored_id(id: NodeId, node_count: usize, joint_count: usize) -> NodeId {
	if id.0 < joint_count {
		id
	} else {
		NodeId(id.0 + node_count + 1)
	}
}

/// Mirrors `graph` around its first `joint_count` ids and returns the union of
/// both halves. With `joint_count >= node_count` the mirror is the graph itself.
pub fn compose(graph: &RawGraph, joint_count: usize) -> RawGraph {
	let node_count = graph.node_count();
	if joint_count >= node_count {
		warn!(
			"{joint_count} joints for {node_count} nodes: symmetric composition is the base graph"
		);
		return graph.clone();
	}
	let mirror = graph.relabel(|id| mirrored_id(id, node_count, joint_count));
	graph.union(&mirror)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::generator::small_world::ring_lattice;

	#[test]
	fn joints_are_shared_and_the_rest_shifted() {
		let g = ring_lattice(8, 1);
		let c = compose(&g, 2);
		assert_eq!(c.node_count(), 2 + 2 * 6);
		assert_eq!(c.edge_count(), 2 * g.edge_count() - 1);
		for id in 2..8 {
			assert!(c.contains(NodeId(id)));
			assert!(c.contains(NodeId(id + 9)));
		}
		// 0-1 is between joints, so both halves contribute the same edge.
		assert!(c.has_edge(NodeId(0), NodeId(1)));
		assert!(c.has_edge(NodeId(1), NodeId(11)));
		assert!(c.has_edge(NodeId(0), NodeId(16)));
		assert!(c.is_connected());
	}

	#[test]
	fn too_many_joints_collapse_to_the_base_graph() {
		let g = ring_lattice(7, 2);
		assert_eq!(compose(&g, 7), g);
		assert_eq!(compose(&g, 100), g);
	}
}
