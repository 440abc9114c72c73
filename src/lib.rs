//! graph-lens: interactive viewer for precomputed node-link graphs.
//!
//! This crate provides a WASM-based viewer that fetches a graph with layout
//! positions already computed, draws it on a canvas and layers hover
//! highlighting, click-to-navigate and an incremental node search on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::*;
use log::{Level, error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlScriptElement, Response};

pub mod components;
pub mod config;
pub mod error;

pub use components::graph_view::{GraphStore, GraphViewer};
pub use config::ViewerConfig;
pub use error::LoadError;

use components::graph_view::{SizeScale, parse_graph};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-lens: logging initialized");
}

/// Load configuration overrides from a script element with id="viewer-config".
/// A missing element means defaults.
fn load_config() -> Result<ViewerConfig, LoadError> {
	let text = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id("viewer-config"))
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok());

	match text {
		Some(json) if !json.trim().is_empty() => ViewerConfig::from_json(&json),
		_ => Ok(ViewerConfig::default()),
	}
}

/// Fetch a document as text.
async fn fetch_text(url: &str) -> Result<String, LoadError> {
	let fetch_error = |reason: String| LoadError::Fetch {
		url: url.to_string(),
		reason,
	};
	let window = web_sys::window().ok_or_else(|| fetch_error("no window".into()))?;

	let response = JsFuture::from(window.fetch_with_str(url))
		.await
		.map_err(|e| fetch_error(format!("{e:?}")))?;
	let response: Response = response
		.dyn_into()
		.map_err(|e| fetch_error(format!("not a response: {e:?}")))?;
	if !response.ok() {
		return Err(LoadError::Status {
			url: url.to_string(),
			status: response.status(),
		});
	}

	let body = response.text().map_err(|e| fetch_error(format!("{e:?}")))?;
	let text = JsFuture::from(body)
		.await
		.map_err(|e| fetch_error(format!("{e:?}")))?;
	text.as_string()
		.ok_or_else(|| fetch_error("response body is not text".into()))
}

/// Fetch and build the graph described by `config`.
pub async fn load_graph(config: &ViewerConfig) -> Result<GraphStore, LoadError> {
	let json = fetch_text(&config.data_url).await?;
	parse_graph(
		&json,
		SizeScale {
			node: config.node_size_scale,
			edge: config.edge_size_scale,
		},
	)
}

/// Load configuration and graph, then mount the viewer.
///
/// Any failure is logged and nothing is mounted.
pub fn start() {
	spawn_local(async {
		let loaded = match load_config() {
			Ok(config) => load_graph(&config).await.map(|graph| (graph, config)),
			Err(e) => Err(e),
		};
		match loaded {
			Ok((graph, config)) => mount_to_body(move || view! { <App graph=graph config=config /> }),
			Err(e) => error!("graph-lens: error loading or processing the graph: {e}"),
		}
	});
}

/// Main application component, mounted once the graph is fully built.
#[component]
pub fn App(
	/// Graph loaded from `config.data_url`.
	graph: GraphStore,
	/// Effective viewer configuration.
	config: ViewerConfig,
) -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Lens" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<GraphViewer graph=graph config=config />
		</div>
	}
}
