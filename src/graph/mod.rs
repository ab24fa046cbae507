mod store;
mod subgraph;
mod types;

pub use store::{GRAPH_PATH, GraphStore, WorkingGraph};
pub use subgraph::{NEIGHBORHOOD_RADIUS, SubgraphView};
pub use types::{ComponentSelection, GraphData, GraphLink, GraphNode, NodeId, NodeInfo};
