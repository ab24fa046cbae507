//! Node pickers: a fixed example list and a free search over every node.

use leptos::prelude::*;

use crate::graph::NodeId;

const SEARCH_LIST_ID: &str = "node-search-options";

/// Dropdown over a fixed list of node ids.
#[component]
pub fn ExampleSelect(
	#[prop(into)] label: String,
	options: Vec<NodeId>,
	selected: RwSignal<NodeId>,
) -> impl IntoView {
	view! {
		<label class="node-select">
			<span>{label}</span>
			<select
				on:change=move |ev| selected.set(event_target_value(&ev))
				prop:value=move || selected.get()
			>
				{options
					.into_iter()
					.map(|id| view! { <option value=id.clone()>{id.clone()}</option> })
					.collect_view()}
			</select>
		</label>
	}
}

/// Text input whose dropdown narrows to matching node ids as the user types.
#[component]
pub fn NodeSearch(
	#[prop(into)] label: String,
	options: Vec<NodeId>,
	value: RwSignal<String>,
) -> impl IntoView {
	view! {
		<label class="node-select">
			<span>{label}</span>
			<input
				type="search"
				list=SEARCH_LIST_ID
				placeholder="Type a name"
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
			/>
			<datalist id=SEARCH_LIST_ID>
				{options.into_iter().map(|id| view! { <option value=id /> }).collect_view()}
			</datalist>
		</label>
	}
}
