//! The loaded state the page is built from.

use std::sync::Arc;

use log::info;

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::graph::{GraphStore, NodeId, WorkingGraph};

/// Config, working graph and resolved example list, shared by every view.
#[derive(Clone, Debug)]
pub struct Viewer {
	pub config: Arc<ViewerConfig>,
	pub graph: Arc<WorkingGraph>,
	/// Configured examples that exist in the working graph.
	pub examples: Arc<[NodeId]>,
}

impl Viewer {
	/// Loads the embedded config and graph.
	pub fn load() -> Result<Self> {
		let config = ViewerConfig::embedded()?;
		let store = GraphStore::embedded(config.component_selection);
		Self::from_store(config, &store)
	}

	/// Builds a viewer over an already configured store.
	pub fn from_store(config: ViewerConfig, store: &GraphStore) -> Result<Self> {
		let graph = store.load()?;
		let examples: Arc<[NodeId]> = config.examples_in(&graph).into();
		info!(
			"{} of {} example node(s) available",
			examples.len(),
			config.examples.len()
		);

		Ok(Self {
			config: Arc::new(config),
			graph,
			examples,
		})
	}
}
