use std::sync::Arc;

use leptos::prelude::*;
use log::warn;

use crate::components::node_select::{ExampleSelect, NodeSearch};
use crate::components::subgraph_plot::SubgraphPlot;
use crate::config::CanvasConfig;
use crate::graph::{NodeId, WorkingGraph};
use crate::viewer::Viewer;
use crate::visual;

const DESCRIPTION: &str = "This app displays a subgraph containing a node of interest and its \
	neighbors, along with the edges connecting them. Choose from a pre-defined list of names in a \
	dropdown menu and click a button to display the corresponding subgraph, or search for a name \
	by typing it in the text box below, whose dropdown of possible names updates as you type.";

/// The plot for `center`, or the reason it cannot be drawn.
fn subgraph_view(graph: &WorkingGraph, center: &str, canvas: CanvasConfig) -> AnyView {
	match visual::render(graph, center) {
		Ok(rendered) => {
			let rendered = rendered.with_canvas(canvas.width, canvas.height, canvas.autosize);
			view! { <SubgraphPlot visual=Signal::derive(move || rendered.clone()) /> }.into_any()
		}
		Err(err) => {
			warn!("cannot render subgraph for {center:?}: {err}");
			view! { <p class="render-error">{err.to_string()}</p> }.into_any()
		}
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let viewer = expect_context::<Viewer>();
	let canvas = viewer.config.canvas;
	let examples: Vec<NodeId> = viewer.examples.to_vec();
	let example_count = examples.len();
	let all_ids = viewer.graph.list_node_ids();

	let example_choice = RwSignal::new(examples.first().cloned().unwrap_or_default());
	let displayed = RwSignal::new(None::<NodeId>);
	let searched = RwSignal::new(all_ids.first().cloned().unwrap_or_default());

	let on_display = move |_: leptos::ev::MouseEvent| {
		let name = example_choice.get_untracked();
		if !name.is_empty() {
			displayed.set(Some(name));
		}
	};

	let graph = Arc::clone(&viewer.graph);
	let example_plot = move || {
		displayed
			.get()
			.map(|center| subgraph_view(&graph, &center, canvas))
	};

	// Partial input matches no node and shows nothing until completed
	let graph = Arc::clone(&viewer.graph);
	let search_plot = move || {
		let name = searched.get();
		graph
			.contains(&name)
			.then(|| subgraph_view(&graph, &name, canvas))
	};

	view! {
		<main class="viewer">
			<h1>"Flint Node of Interest Subgraph"</h1>
			<p class="description">{DESCRIPTION}</p>

			<hr />
			<h2>{format!("Choose from {example_count} Pre-Defined Names")}</h2>
			<ExampleSelect
				label=format!("Select an example name from {example_count} choices: ")
				options=examples
				selected=example_choice
			/>
			<button class="display-button" on:click=on_display>
				"Display Graph for Selected Name"
			</button>
			{example_plot}

			<hr />
			<h2>"Manually Enter a Name of your Choosing"</h2>
			<NodeSearch
				label="Manually type a name and choose from a dynamic dropdown containing all possible names: "
				options=all_ids
				value=searched
			/>
			{search_plot}
		</main>
	}
}
