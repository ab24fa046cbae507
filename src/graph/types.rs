use serde::Deserialize;

/// Identifier of a node, as written in the graph file.
pub type NodeId = String;

/// A node entry of the node-link graph document.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	pub id: NodeId,
	/// Precomputed planar position.
	#[serde(default)]
	pub pos: Option<(f64, f64)>,
}

/// An undirected link between two declared nodes.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	pub source: NodeId,
	pub target: NodeId,
}

/// The on-disk graph document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	#[serde(default, alias = "edges")]
	pub links: Vec<GraphLink>,
}

/// Node weight held in the working graph.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeInfo {
	pub id: NodeId,
	pub pos: Option<(f64, f64)>,
}

impl From<GraphNode> for NodeInfo {
	fn from(node: GraphNode) -> Self {
		Self {
			id: node.id,
			pos: node.pos,
		}
	}
}

/// Which connected components survive loading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSelection {
	/// Keep only the component with the most nodes.
	#[default]
	Largest,
	/// Keep every component.
	All,
}
