//! graphpad: a live force-directed graph sketched from a plain-text edge list.
//!
//! This crate provides a WASM-based view that pairs a textarea with a
//! canvas: type lines like `A --> B` and, once the input settles, the text
//! is parsed into a graph and laid out by a physics simulation. Node labels
//! are drawn as measured plates backed by a pixel-exact pointer hit mask.

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::force_graph::{
	GraphCanvas, GraphData, GraphLink, GraphNode, SETTLE_DELAY, TextDebouncer, parse,
};

use components::editor::Editor;

/// Starter edge list shown before the user types anything.
const SAMPLE_TEXT: &str = "Napoleon --> Myriel
Mlle.Baptistine --> Myriel
Mme.Hucheloup --> Enjolras
";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graphpad: logging initialized");
}

/// Optional host-page configuration.
/// Expected format: JSON in a `<script id="graphpad-config">` element.
#[derive(Clone, Debug, Default, Deserialize)]
struct HostConfig {
	/// Initial edge-list text. Defaults to the bundled sample.
	text: Option<String>,
	/// Canvas width in pixels (default 400).
	width: Option<f64>,
	/// Canvas height in pixels (default 400).
	height: Option<f64>,
	/// Quiet period before re-parsing, in milliseconds (default 400).
	debounce_ms: Option<u64>,
}

fn load_host_config() -> Option<HostConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graphpad-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<HostConfig>(&json_text) {
		Ok(config) => {
			info!("graphpad: loaded host config");
			Some(config)
		}
		Err(e) => {
			warn!("graphpad: failed to parse host config: {}", e);
			None
		}
	}
}

/// Main application component: editor above, graph below, glued together
/// by the debounced text channel and the parser.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_host_config().unwrap_or_default();
	let text = config.text.unwrap_or_else(|| SAMPLE_TEXT.to_string());
	let (width, height) = (config.width.unwrap_or(400.0), config.height.unwrap_or(400.0));
	let delay = config
		.debounce_ms
		.map(Duration::from_millis)
		.unwrap_or(SETTLE_DELAY);

	let debouncer = TextDebouncer::new(text.clone(), delay);
	let settled = debouncer.settled();
	let graph = Memo::new(move |_| parse(&settled.get()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="graphpad" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="graphpad">
			<h2>"Graph"</h2>
			<GraphCanvas data=graph width=width height=height />
			<Editor value=text on_change=move |t: String| debouncer.push(t) />
		</section>
	}
}
