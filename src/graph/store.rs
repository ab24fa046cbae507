//! Loading the graph document and selecting the working component.
//!
//! The graph file is decoded once per [`GraphStore`]; every later
//! [`GraphStore::load`] hands back the same [`WorkingGraph`].

use std::borrow::Cow;
use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, info};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Dfs;

use super::types::{ComponentSelection, GraphData, NodeId, NodeInfo};
use crate::error::{Error, Result};

/// Fixed location of the graph document, relative to the crate root.
pub const GRAPH_PATH: &str = "assets/flint_graph.json";

const EMBEDDED_GRAPH: &str = include_str!("../../assets/flint_graph.json");

/// The in-memory graph every render reads from. Immutable after load.
#[derive(Debug)]
pub struct WorkingGraph {
	graph: UnGraph<NodeInfo, ()>,
	index: HashMap<NodeId, NodeIndex>,
	dropped_nodes: usize,
}

impl WorkingGraph {
	/// Builds the working graph from a decoded document, keeping the
	/// components `selection` asks for.
	pub fn from_data(data: GraphData, selection: ComponentSelection) -> Result<Self> {
		if data.nodes.is_empty() {
			return Err(Error::EmptyGraph);
		}

		let mut graph = UnGraph::with_capacity(data.nodes.len(), data.links.len());
		let mut index = HashMap::with_capacity(data.nodes.len());
		for node in data.nodes {
			if index.contains_key(&node.id) {
				return Err(Error::DuplicateNode(node.id));
			}
			let id = node.id.clone();
			let idx = graph.add_node(NodeInfo::from(node));
			index.insert(id, idx);
		}

		for link in &data.links {
			let endpoint = |id: &NodeId| {
				index.get(id).copied().ok_or_else(|| Error::UnknownEndpoint {
					source_id: link.source.clone(),
					target_id: link.target.clone(),
					missing: id.clone(),
				})
			};
			let (src, tgt) = (endpoint(&link.source)?, endpoint(&link.target)?);
			// Repeated links collapse into a single undirected edge
			graph.update_edge(src, tgt, ());
		}

		let total = graph.node_count();
		let graph = match selection {
			ComponentSelection::All => graph,
			ComponentSelection::Largest => keep_largest_component(&graph),
		};
		let index = graph
			.node_indices()
			.map(|idx| (graph[idx].id.clone(), idx))
			.collect();

		Ok(Self {
			dropped_nodes: total - graph.node_count(),
			graph,
			index,
		})
	}

	/// Number of nodes in the working graph.
	pub fn node_count(&self) -> usize {
		self.graph.node_count()
	}

	/// Number of undirected edges in the working graph.
	pub fn edge_count(&self) -> usize {
		self.graph.edge_count()
	}

	/// Nodes discarded by component selection at load time.
	pub fn dropped_nodes(&self) -> usize {
		self.dropped_nodes
	}

	/// Whether `id` names a node of the working graph.
	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	/// Every node id, in the order nodes appear in the graph file.
	pub fn list_node_ids(&self) -> Vec<NodeId> {
		self.graph
			.node_indices()
			.map(|idx| self.graph[idx].id.clone())
			.collect()
	}

	/// Sizes of the connected components of the working graph, in
	/// enumeration order.
	pub fn component_sizes(&self) -> Vec<usize> {
		connected_components(&self.graph)
			.iter()
			.map(Vec::len)
			.collect()
	}

	pub(crate) fn graph(&self) -> &UnGraph<NodeInfo, ()> {
		&self.graph
	}

	pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
		self.index.get(id).copied()
	}
}

/// Enumerates connected components by depth-first search, starting from
/// nodes in index order. Each component's nodes are sorted by index.
fn connected_components(graph: &UnGraph<NodeInfo, ()>) -> Vec<Vec<NodeIndex>> {
	let mut seen = vec![false; graph.node_count()];
	let mut components = Vec::new();

	for start in graph.node_indices() {
		if seen[start.index()] {
			continue;
		}
		let mut component = Vec::new();
		let mut dfs = Dfs::new(graph, start);
		while let Some(idx) = dfs.next(graph) {
			seen[idx.index()] = true;
			component.push(idx);
		}
		component.sort_unstable();
		components.push(component);
	}

	components
}

/// Restricts `graph` to its largest component. On ties the first
/// enumerated component wins.
fn keep_largest_component(graph: &UnGraph<NodeInfo, ()>) -> UnGraph<NodeInfo, ()> {
	let components = connected_components(graph);
	debug!("graph has {} connected component(s)", components.len());

	let mut largest: &[NodeIndex] = &[];
	for component in &components {
		if component.len() > largest.len() {
			largest = component.as_slice();
		}
	}

	let keep: HashSet<NodeIndex> = largest.iter().copied().collect();
	graph.filter_map(
		|idx, node| keep.contains(&idx).then(|| node.clone()),
		|_, edge| Some(*edge),
	)
}

/// Decodes the graph document on first use and caches the result.
pub struct GraphStore {
	source: Cow<'static, str>,
	selection: ComponentSelection,
	loaded: OnceCell<Arc<WorkingGraph>>,
}

impl GraphStore {
	/// A store over an in-memory graph document.
	pub fn new(source: impl Into<Cow<'static, str>>, selection: ComponentSelection) -> Self {
		Self {
			source: source.into(),
			selection,
			loaded: OnceCell::new(),
		}
	}

	/// A store over the document at [`GRAPH_PATH`], embedded at build time.
	pub fn embedded(selection: ComponentSelection) -> Self {
		Self::new(EMBEDDED_GRAPH, selection)
	}

	/// Returns the working graph, decoding it on the first call only.
	pub fn load(&self) -> Result<Arc<WorkingGraph>> {
		if let Some(graph) = self.loaded.get() {
			return Ok(Arc::clone(graph));
		}

		let data: GraphData = serde_json::from_str(&self.source)
			.map_err(|source| Error::Decode { what: "graph", source })?;
		let graph = WorkingGraph::from_data(data, self.selection)?;
		info!(
			"loaded graph: {} nodes, {} edges ({} nodes dropped by {:?} component selection)",
			graph.node_count(),
			graph.edge_count(),
			graph.dropped_nodes(),
			self.selection,
		);

		Ok(Arc::clone(self.loaded.get_or_init(|| Arc::new(graph))))
	}
}
