//! Neighborhood extraction around a selected node.

use std::collections::{BTreeSet, HashSet, VecDeque};

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::store::WorkingGraph;
use super::types::NodeInfo;
use crate::error::{Error, Result};

/// Hop distance covered by a neighborhood view.
pub const NEIGHBORHOOD_RADIUS: usize = 1;

/// Breadth-first search from `start`, stopping at `cutoff` hops.
///
/// Returns every reached node, including `start`, sorted by index.
fn within_distance(
	graph: &UnGraph<NodeInfo, ()>,
	start: NodeIndex,
	cutoff: usize,
) -> Vec<NodeIndex> {
	let mut visited = HashSet::from([start]);
	let mut queue = VecDeque::from([(start, 0)]);

	while let Some((current, depth)) = queue.pop_front() {
		if depth >= cutoff {
			continue;
		}
		for next in graph.neighbors(current) {
			if visited.insert(next) {
				queue.push_back((next, depth + 1));
			}
		}
	}

	let mut reached: Vec<_> = visited.into_iter().collect();
	reached.sort_unstable();
	reached
}

/// The induced subgraph over a center node and its direct neighbors.
///
/// Borrows the working graph; build one per selection and drop it once the
/// visual is produced.
#[derive(Debug)]
pub struct SubgraphView<'g> {
	graph: &'g WorkingGraph,
	center: NodeIndex,
	members: Vec<NodeIndex>,
	member_set: HashSet<NodeIndex>,
	edges: Vec<EdgeIndex>,
}

impl WorkingGraph {
	/// Extracts the neighborhood of radius one around `center`.
	pub fn neighborhood(&self, center: &str) -> Result<SubgraphView<'_>> {
		let center_idx = self
			.index_of(center)
			.ok_or_else(|| Error::NodeNotFound(center.to_owned()))?;
		let graph = self.graph();

		let members = within_distance(graph, center_idx, NEIGHBORHOOD_RADIUS);
		let member_set: HashSet<_> = members.iter().copied().collect();

		// Edges with both endpoints inside the member set, in edge index order
		let edges: BTreeSet<EdgeIndex> = members
			.iter()
			.flat_map(|&idx| graph.edges(idx))
			.filter(|edge| member_set.contains(&edge.source()) && member_set.contains(&edge.target()))
			.map(|edge| edge.id())
			.collect();

		Ok(SubgraphView {
			graph: self,
			center: center_idx,
			members,
			member_set,
			edges: edges.into_iter().collect(),
		})
	}
}

impl<'g> SubgraphView<'g> {
	/// The node the view is centered on.
	pub fn center(&self) -> &'g NodeInfo {
		&self.graph.graph()[self.center]
	}

	/// Number of nodes in the view.
	pub fn node_count(&self) -> usize {
		self.members.len()
	}

	/// Number of induced edges in the view.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Nodes of the view in working-graph order.
	pub fn nodes(&self) -> impl Iterator<Item = &'g NodeInfo> {
		let graph = self.graph.graph();
		self.members.iter().map(move |&idx| &graph[idx])
	}

	/// Nodes paired with their degree inside the view.
	pub fn nodes_with_degree(&self) -> impl Iterator<Item = (&'g NodeInfo, usize)> {
		let graph = self.graph.graph();
		self.members
			.iter()
			.map(move |&idx| (&graph[idx], self.degree_of(idx)))
	}

	/// Induced edges as endpoint pairs, in working-graph order.
	pub fn edges(&self) -> impl Iterator<Item = (&'g NodeInfo, &'g NodeInfo)> {
		let graph = self.graph.graph();
		self.edges.iter().filter_map(move |&edge| {
			graph
				.edge_endpoints(edge)
				.map(|(a, b)| (&graph[a], &graph[b]))
		})
	}

	/// Degree of `id` counted only over neighbors inside the view.
	pub fn degree(&self, id: &str) -> Option<usize> {
		let idx = self.graph.index_of(id)?;
		self.member_set
			.contains(&idx)
			.then(|| self.degree_of(idx))
	}

	fn degree_of(&self, idx: NodeIndex) -> usize {
		self.graph
			.graph()
			.neighbors(idx)
			.filter(|next| self.member_set.contains(next))
			.collect::<HashSet<_>>()
			.len()
	}
}
