//! UI components.

pub mod editor;
pub mod force_graph;
