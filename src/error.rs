//! Error types for loading and rendering the graph.

use thiserror::Error;

/// The error type for graph loading and subgraph rendering.
#[derive(Debug, Error)]
pub enum Error {
	/// The graph or config document is not valid JSON for its schema.
	#[error("Failed to decode {what}: {source}")]
	Decode {
		/// Which document failed ("graph" or "viewer config").
		what: &'static str,
		/// Underlying decoder error.
		#[source]
		source: serde_json::Error,
	},

	/// A link names a node that is not declared in the node list.
	#[error("Link {source_id} -> {target_id} references unknown node {missing}")]
	UnknownEndpoint {
		/// Link source id as written in the file.
		source_id: String,
		/// Link target id as written in the file.
		target_id: String,
		/// The endpoint that has no node entry.
		missing: String,
	},

	/// The same node id is declared twice.
	#[error("Duplicate node id: {0}")]
	DuplicateNode(String),

	/// The graph file declares no nodes.
	#[error("Graph contains no nodes")]
	EmptyGraph,

	/// A node id requested for rendering is not in the working graph.
	#[error("Node not found: {0}")]
	NodeNotFound(String),

	/// A node in the rendered neighborhood carries no position.
	#[error("Node has no position: {0}")]
	MissingPosition(String),
}

/// A specialized Result type for graph viewer operations.
pub type Result<T> = std::result::Result<T, Error>;
