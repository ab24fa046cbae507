//! Viewer configuration.
//!
//! Read from the JSON document at [`VIEWER_CONFIG_PATH`], embedded at
//! build time. Every field has a default, so `{}` is a valid config.

use log::warn;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::graph::{ComponentSelection, NodeId, WorkingGraph};

/// Fixed location of the viewer config, relative to the crate root.
pub const VIEWER_CONFIG_PATH: &str = "assets/viewer.json";

const EMBEDDED_CONFIG: &str = include_str!("../assets/viewer.json");

/// Size of the canvas plots are drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
	pub width: u32,
	pub height: u32,
	/// Fall back to the container size when width or height is unknown.
	pub autosize: bool,
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			width: 1270,
			height: 750,
			autosize: true,
		}
	}
}

/// Configuration for the viewer page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
	pub component_selection: ComponentSelection,
	/// Hand-picked node ids offered in the example dropdown.
	pub examples: Vec<NodeId>,
	pub canvas: CanvasConfig,
}

impl ViewerConfig {
	/// Parses a config document.
	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|source| Error::Decode {
			what: "viewer config",
			source,
		})
	}

	/// The config embedded from [`VIEWER_CONFIG_PATH`].
	pub fn embedded() -> Result<Self> {
		Self::from_json(EMBEDDED_CONFIG)
	}

	/// Example ids present in `graph`, in configured order.
	///
	/// Examples the working graph does not contain are dropped with a
	/// warning rather than offered for selection.
	pub fn examples_in(&self, graph: &WorkingGraph) -> Vec<NodeId> {
		self.examples
			.iter()
			.filter(|id| {
				let known = graph.contains(id);
				if !known {
					warn!("example node {id:?} is not in the working graph; skipping it");
				}
				known
			})
			.cloned()
			.collect()
	}
}
