//! Edge-list text parser.
//!
//! Turns free-form text into [`GraphData`]. Each line of the form
//! `<source> --> <target>` contributes one directed link; lines that don't
//! match are skipped without complaint, which lets the user type freely
//! while the graph tracks whatever currently parses.

use std::collections::HashSet;

use super::types::{GraphData, GraphLink, GraphNode};

/// The edge separator token.
const ARROW: &str = "-->";

/// Parse an edge-list text buffer into graph data.
///
/// Nodes are deduplicated by id in first-seen order across the line scan.
/// Links are kept in input order, including exact duplicates: an edge typed
/// twice appears twice, so the layout engine sees its multiplicity.
///
/// Pure and total: any input yields a graph, the empty string yields an
/// empty one.
pub fn parse(text: &str) -> GraphData {
	let mut seen: HashSet<&str> = HashSet::new();
	let mut nodes = Vec::new();
	let mut links = Vec::new();

	for line in text.lines() {
		let Some((source, target)) = match_edge_line(line) else {
			continue;
		};
		for id in [source, target] {
			if seen.insert(id) {
				nodes.push(GraphNode::from_id(id));
			}
		}
		links.push(GraphLink {
			source: source.to_string(),
			target: target.to_string(),
		});
	}

	GraphData { nodes, links }
}

/// Match one line against `<source> --> <target>`.
///
/// Source and target are maximal runs of non-whitespace characters;
/// whitespace around them and around the arrow is ignored, but whitespace
/// *inside* either endpoint disqualifies the line. Splitting happens at the
/// *last* arrow, so earlier `-->` sequences stay part of the source token
/// (`x-->y --> z` reads as `x-->y` pointing at `z`).
fn match_edge_line(line: &str) -> Option<(&str, &str)> {
	let (source, target) = line.rsplit_once(ARROW)?;
	let (source, target) = (source.trim(), target.trim());
	if source.is_empty() || target.is_empty() {
		return None;
	}
	if source.contains(char::is_whitespace) || target.contains(char::is_whitespace) {
		return None;
	}
	Some((source, target))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(data: &GraphData) -> Vec<&str> {
		data.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	fn pairs(data: &GraphData) -> Vec<(&str, &str)> {
		data.links
			.iter()
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect()
	}

	#[test]
	fn empty_text_yields_empty_graph() {
		assert_eq!(parse(""), GraphData::default());
	}

	#[test]
	fn single_edge() {
		let data = parse("A --> B");
		assert_eq!(ids(&data), ["A", "B"]);
		assert_eq!(pairs(&data), [("A", "B")]);
	}

	#[test]
	fn nodes_dedup_in_first_seen_order() {
		let data = parse("A --> B\nB --> A");
		assert_eq!(ids(&data), ["A", "B"]);
		assert_eq!(pairs(&data), [("A", "B"), ("B", "A")]);
	}

	#[test]
	fn duplicate_links_are_preserved() {
		let data = parse("A --> B\nA --> B");
		assert_eq!(ids(&data), ["A", "B"]);
		assert_eq!(pairs(&data), [("A", "B"), ("A", "B")]);
	}

	#[test]
	fn malformed_lines_are_dropped() {
		let data = parse("A --> B\ngarbage\nC-->D");
		assert_eq!(ids(&data), ["A", "B", "C", "D"]);
		assert_eq!(pairs(&data), [("A", "B"), ("C", "D")]);
	}

	#[test]
	fn surrounding_whitespace_is_not_captured() {
		let data = parse("  X   -->   Y  ");
		assert_eq!(pairs(&data), [("X", "Y")]);
	}

	#[test]
	fn endpoints_with_internal_whitespace_are_rejected() {
		assert_eq!(parse("a b --> c"), GraphData::default());
		assert_eq!(parse("a --> b c"), GraphData::default());
	}

	#[test]
	fn arrow_inside_source_token_splits_at_the_last_arrow() {
		let data = parse("x-->y --> z");
		assert_eq!(ids(&data), ["x-->y", "z"]);
		assert_eq!(pairs(&data), [("x-->y", "z")]);
	}

	#[test]
	fn unspaced_arrow_chain_keeps_earlier_arrows_in_the_source() {
		let data = parse("a-->b-->c");
		assert_eq!(pairs(&data), [("a-->b", "c")]);
	}

	#[test]
	fn blank_and_arrow_only_lines_are_dropped() {
		assert_eq!(parse("\n   \n-->\n --> \n"), GraphData::default());
	}

	#[test]
	fn every_link_endpoint_has_a_node() {
		let data = parse("a --> b\nc --> a\nb-->d\nnope\nd --> d");
		let ids: HashSet<_> = data.nodes.iter().map(|n| n.id.as_str()).collect();
		for link in &data.links {
			assert!(ids.contains(link.source.as_str()));
			assert!(ids.contains(link.target.as_str()));
		}
	}

	#[test]
	fn self_edge_introduces_one_node() {
		let data = parse("loop --> loop");
		assert_eq!(ids(&data), ["loop"]);
		assert_eq!(pairs(&data), [("loop", "loop")]);
	}
}
