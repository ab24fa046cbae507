//! Leptos client-side app for browsing the one-hop neighborhood of any node
//! in a precomputed graph.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

pub mod config;
pub mod error;
pub mod graph;
pub mod viewer;
pub mod visual;

// Modules
mod components;
mod pages;

pub use error::{Error, Result};

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::viewer::Viewer;

const PAGE_CSS: &str = r#"
.viewer { padding: 0 2rem 2rem; font-family: sans-serif; }
.viewer hr { border: 1px solid black; }
.node-select { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 0.75rem; }
.display-button {
	background-color: #23d5ab !important;
	color: #fff !important;
	border: none;
	border-radius: 4px !important;
	padding: 0.4rem 0.9rem;
	cursor: pointer;
}
.render-error, .startup-error { color: #b00020; }
"#;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Shown in place of the page when the config or graph cannot be loaded.
#[component]
fn StartupError(message: String) -> impl IntoView {
	view! {
		<main class="viewer">
			<h1>"Flint Node of Interest Subgraph"</h1>
			<p class="startup-error">"The graph could not be loaded: " {message}</p>
		</main>
	}
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let body = match Viewer::load() {
		Ok(viewer) => {
			provide_context(viewer);
			view! {
				<Router>
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Home />
					</Routes>
				</Router>
			}
			.into_any()
		}
		Err(err) => {
			error!("startup failed: {err}");
			view! { <StartupError message=err.to_string() /> }.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="Flint Graph Viewer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{PAGE_CSS}</Style>

		{body}
	}
}
