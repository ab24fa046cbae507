//! Checks the shipped graph and config against the renderer's guarantees.

use std::collections::{BTreeSet, HashMap, HashSet};

use flint_graph_viewer::graph::{ComponentSelection, GraphData, GraphStore, WorkingGraph};
use flint_graph_viewer::viewer::Viewer;
use flint_graph_viewer::visual::render;

const GRAPH_JSON: &str = include_str!("../assets/flint_graph.json");

/// Adjacency of the raw document, independent of the crate's graph code.
fn raw_adjacency() -> HashMap<String, HashSet<String>> {
	let data: GraphData = serde_json::from_str(GRAPH_JSON).unwrap();
	let mut adjacency: HashMap<String, HashSet<String>> = data
		.nodes
		.iter()
		.map(|node| (node.id.clone(), HashSet::new()))
		.collect();
	for link in &data.links {
		adjacency
			.get_mut(&link.source)
			.unwrap()
			.insert(link.target.clone());
		adjacency
			.get_mut(&link.target)
			.unwrap()
			.insert(link.source.clone());
	}
	adjacency
}

fn working_graph() -> std::sync::Arc<WorkingGraph> {
	GraphStore::embedded(ComponentSelection::Largest)
		.load()
		.unwrap()
}

#[test]
fn viewer_loads_with_every_example() {
	let viewer = Viewer::load().unwrap();
	assert_eq!(viewer.examples.len(), viewer.config.examples.len());
	assert_eq!(viewer.config.canvas.width, 1270);
	assert_eq!(viewer.config.canvas.height, 750);
	for example in viewer.examples.iter() {
		assert!(render(&viewer.graph, example).is_ok(), "{example} failed to render");
	}
}

#[test]
fn working_graph_is_one_component() {
	let graph = working_graph();
	assert_eq!(graph.component_sizes(), vec![graph.node_count()]);
	assert!(graph.dropped_nodes() > 0);
}

#[test]
fn every_node_renders_its_closed_neighborhood() {
	let graph = working_graph();
	let adjacency = raw_adjacency();

	for id in graph.list_node_ids() {
		let visual = render(&graph, &id).unwrap();

		let mut expected: BTreeSet<&str> = adjacency[&id].iter().map(String::as_str).collect();
		expected.insert(id.as_str());
		let actual: BTreeSet<&str> = visual.nodes.ids.iter().map(String::as_str).collect();
		assert_eq!(actual, expected, "node set around {id}");

		// Induced edges, counted once per unordered pair
		let induced: HashSet<(&str, &str)> = expected
			.iter()
			.flat_map(|&a| {
				adjacency[a]
					.iter()
					.map(String::as_str)
					.filter(|b| expected.contains(b))
					.map(move |b| if a <= b { (a, b) } else { (b, a) })
			})
			.collect();
		assert_eq!(visual.edges.x.len(), 3 * induced.len(), "edge entries around {id}");
		assert_eq!(visual.edges.y.len(), 3 * induced.len());

		for (node, &degree) in visual.nodes.ids.iter().zip(&visual.nodes.marker.color) {
			let in_view = adjacency[node]
				.iter()
				.filter(|n| expected.contains(n.as_str()))
				.count();
			assert_eq!(degree, in_view, "degree of {node} around {id}");
		}
	}
}

#[test]
fn rendering_twice_is_identical() {
	let graph = working_graph();
	for id in graph.list_node_ids() {
		assert_eq!(render(&graph, &id).unwrap(), render(&graph, &id).unwrap());
	}
}
