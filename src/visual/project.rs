//! Projects a node's neighborhood into a [`Visual`].

use log::debug;

use super::figure::{Axis, EdgeTrace, HoverMode, Layout, Margin, NodeTrace, Visual};
use crate::error::{Error, Result};
use crate::graph::{NodeInfo, WorkingGraph};

fn position(node: &NodeInfo) -> Result<(f64, f64)> {
	node.pos.ok_or_else(|| Error::MissingPosition(node.id.clone()))
}

/// Renders the radius-one neighborhood of `center`.
///
/// The node trace holds exactly `center` and its neighbors, each labelled
/// with its degree inside the neighborhood. The edge trace holds the
/// induced edges, three entries per edge and axis.
pub fn render(graph: &WorkingGraph, center: &str) -> Result<Visual> {
	let view = graph.neighborhood(center)?;

	let mut edges = EdgeTrace::new();
	for (a, b) in view.edges() {
		edges.push_edge(position(a)?, position(b)?);
	}

	let mut nodes = NodeTrace::new();
	for (node, degree) in view.nodes_with_degree() {
		nodes.push_node(&node.id, position(node)?, degree);
	}

	debug!(
		"rendered subgraph around {center}: {} nodes, {} edges",
		view.node_count(),
		view.edge_count()
	);

	Ok(Visual {
		edges,
		nodes,
		layout: Layout {
			title: format!("Subgraph containing node {center}"),
			title_font_size: 16.0,
			show_legend: false,
			hover_mode: HoverMode::Closest,
			margin: Margin {
				b: 20.0,
				l: 5.0,
				r: 5.0,
				t: 40.0,
			},
			x_axis: Axis::HIDDEN,
			y_axis: Axis::HIDDEN,
			width: None,
			height: None,
			autosize: false,
		},
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{ComponentSelection, GraphStore};
	use crate::visual::HoverInfo;

	const PATH: &str = r#"{
		"nodes": [
			{ "id": "A", "pos": [0.0, 0.0] },
			{ "id": "B", "pos": [1.0, 0.5] },
			{ "id": "C", "pos": [2.0, 0.0] },
			{ "id": "D", "pos": [9.0, 9.0] },
			{ "id": "E", "pos": [9.5, 9.0] }
		],
		"links": [
			{ "source": "A", "target": "B" },
			{ "source": "B", "target": "C" },
			{ "source": "D", "target": "E" }
		]
	}"#;

	fn path_graph() -> std::sync::Arc<WorkingGraph> {
		GraphStore::new(PATH, ComponentSelection::Largest)
			.load()
			.unwrap()
	}

	#[test]
	fn middle_of_path() {
		let visual = render(&path_graph(), "B").unwrap();

		assert_eq!(visual.nodes.ids, vec!["A", "B", "C"]);
		assert_eq!(visual.nodes.marker.color, vec![1, 2, 1]);
		assert_eq!(visual.nodes.text[1], "B has 2 connection(s)");
		assert_eq!(
			visual.edges.x,
			vec![Some(0.0), Some(1.0), None, Some(1.0), Some(2.0), None]
		);
		assert_eq!(
			visual.edges.y,
			vec![Some(0.0), Some(0.5), None, Some(0.5), Some(0.0), None]
		);
	}

	#[test]
	fn end_of_path() {
		let visual = render(&path_graph(), "A").unwrap();

		assert_eq!(visual.nodes.ids, vec!["A", "B"]);
		assert_eq!(visual.nodes.text, vec!["A has 1 connection(s)", "B has 1 connection(s)"]);
		assert_eq!(visual.edges.x.len(), 3);
		assert_eq!(visual.nodes.x, vec![0.0, 1.0]);
		assert_eq!(visual.nodes.y, vec![0.0, 0.5]);
	}

	#[test]
	fn layout_and_styling() {
		let visual = render(&path_graph(), "B").unwrap();
		let layout = &visual.layout;

		assert_eq!(layout.title, "Subgraph containing node B");
		assert!(!layout.show_legend);
		assert_eq!(layout.hover_mode, HoverMode::Closest);
		assert_eq!(layout.x_axis, Axis::HIDDEN);
		assert_eq!(layout.y_axis, Axis::HIDDEN);
		assert_eq!(layout.margin.t, 40.0);
		assert_eq!(visual.edges.hover_info, HoverInfo::Skip);
		assert_eq!(visual.edges.line.color, "#888");
		assert_eq!(visual.nodes.hover_info, HoverInfo::Text);
		assert_eq!(visual.nodes.marker.color_bar.title, "Node Connections");
		assert!(visual.nodes.marker.reverse_scale);
	}

	#[test]
	fn render_is_idempotent() {
		let graph = path_graph();
		assert_eq!(render(&graph, "B").unwrap(), render(&graph, "B").unwrap());
	}

	#[test]
	fn with_canvas_sets_size() {
		let visual = render(&path_graph(), "B")
			.unwrap()
			.with_canvas(1270, 750, true);
		assert_eq!(visual.layout.width, Some(1270));
		assert_eq!(visual.layout.height, Some(750));
		assert!(visual.layout.autosize);
	}

	#[test]
	fn dropped_component_node_is_not_found() {
		let err = render(&path_graph(), "D").unwrap_err();
		assert!(matches!(err, Error::NodeNotFound(_)));
	}

	#[test]
	fn missing_position_is_reported() {
		let json = r#"{
			"nodes": [{ "id": "A", "pos": [0.0, 0.0] }, { "id": "B" }],
			"links": [{ "source": "A", "target": "B" }]
		}"#;
		let graph = GraphStore::new(json, ComponentSelection::Largest)
			.load()
			.unwrap();
		let err = render(&graph, "A").unwrap_err();
		assert!(matches!(err, Error::MissingPosition(id) if id == "B"));
	}
}
