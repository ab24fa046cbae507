pub mod node_select;
pub mod subgraph_plot;
