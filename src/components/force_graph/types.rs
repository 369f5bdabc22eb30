//! Graph data structures for input to the force graph component.

use serde::Deserialize;

/// A node in the graph. The `id` doubles as the rendered label.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Optional group name for palette-based auto-coloring.
	#[serde(default)]
	pub group: Option<String>,
	/// Optional CSS color override (e.g., "#ff0000"). Wins over `group`.
	#[serde(default)]
	pub color: Option<String>,
}

impl GraphNode {
	/// Node with only an id, as produced by the edge-list parser.
	pub fn from_id(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			group: None,
			color: None,
		}
	}
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
}

/// Complete graph data: nodes and links.
///
/// Invariants maintained by the parser: node ids are unique and ordered by
/// first appearance; every link endpoint has a node entry. Duplicate links
/// are allowed and kept in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
