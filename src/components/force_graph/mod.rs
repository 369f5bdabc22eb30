//! Force-directed graph canvas driven by a plain-text edge list.
//!
//! The pipeline runs one direction: text edits -> debounce -> parse ->
//! graph data -> physics simulation -> per-frame label rendering, with an
//! offscreen color-coded hit mask kept in lockstep with the visible label
//! plates for pointer hit-testing.
//!
//! # Example
//!
//! ```ignore
//! use graphpad::{GraphCanvas, parse};
//!
//! let data = parse("Napoleon --> Myriel\nMlle.Baptistine --> Myriel");
//!
//! view! { <GraphCanvas data=Signal::derive(move || data.clone()) /> }
//! ```

mod component;
pub mod debounce;
mod labels;
mod parser;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::GraphCanvas;
pub use debounce::{SETTLE_DELAY, TextDebouncer};
pub use parser::parse;
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode};
