//! Graph simulation state and pointer-interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node metadata, the
//! pan/zoom view transform, drag state, and the hit-mask color assignment
//! that maps sampled mask pixels back to nodes. The state is rebuilt
//! wholesale whenever the parsed graph changes; only the view transform is
//! carried across rebuilds.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::theme::Theme;
use super::types::GraphData;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// The node id, rendered as the label text.
	pub id: String,
	/// CSS color for the label text.
	pub color: String,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0 by the wheel handler).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Core graph state combining the physics simulation with interaction
/// tracking and hit-mask color slots.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	/// Node currently under the pointer, per the latest mask sample.
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	/// Simulation indices in graph-data order; position doubles as the
	/// node's hit-mask slot.
	node_order: Vec<DefaultNodeIdx>,
	hit_slots: HashMap<DefaultNodeIdx, usize>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, theme: &Theme) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut node_order = Vec::with_capacity(data.nodes.len());
		// First-seen group -> palette slot, so groups color consistently.
		let mut group_slots: HashMap<&str, usize> = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				let slot = match &node.group {
					Some(group) => {
						let next = group_slots.len();
						*group_slots.entry(group.as_str()).or_insert(next)
					}
					None => i,
				};
				theme.palette.get(slot).to_css_rgb()
			});
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					color,
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
			node_order.push(idx);
		}

		// Duplicate links become parallel springs: typed-twice edges pull twice.
		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		let hit_slots = node_order
			.iter()
			.enumerate()
			.map(|(slot, &idx)| (idx, slot))
			.collect();

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			animation_running: true,
			node_order,
			hit_slots,
		}
	}

	/// Carry the camera from a previous state across a graph rebuild.
	pub fn with_transform(mut self, transform: ViewTransform) -> Self {
		self.transform = transform;
		self
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_count(&self) -> usize {
		self.node_order.len()
	}

	/// Simulation indices in graph-data order.
	pub fn node_order(&self) -> &[DefaultNodeIdx] {
		&self.node_order
	}

	/// Solid mask color assigned to a node.
	pub fn hit_color(&self, idx: DefaultNodeIdx) -> Option<String> {
		self.hit_slots.get(&idx).map(|&slot| encode_hit_slot(slot))
	}

	/// Map an RGBA pixel sampled from the hit mask back to a node.
	pub fn node_at_hit_pixel(&self, pixel: &[u8]) -> Option<DefaultNodeIdx> {
		decode_hit_pixel(pixel).and_then(|slot| self.node_order.get(slot).copied())
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

/// Encode a hit-mask slot as a solid CSS color. Slot `i` maps to the value
/// `i + 1` spread over the RGB channels little-endian, so the black mask
/// background can never decode to a node.
pub(crate) fn encode_hit_slot(slot: usize) -> String {
	let v = slot + 1;
	format!(
		"rgb({}, {}, {})",
		v & 0xff,
		(v >> 8) & 0xff,
		(v >> 16) & 0xff
	)
}

/// Decode an RGBA pixel sampled from the hit mask back to a slot.
///
/// Only fully opaque, non-background pixels decode; anything anti-aliased
/// or transparent reads as a miss.
pub(crate) fn decode_hit_pixel(pixel: &[u8]) -> Option<usize> {
	let [r, g, b, a]: [u8; 4] = pixel.try_into().ok()?;
	if a != 0xff {
		return None;
	}
	let v = (r as usize) | ((g as usize) << 8) | ((b as usize) << 16);
	v.checked_sub(1)
}

#[cfg(test)]
mod tests {
	use super::super::parser::parse;
	use super::super::types::{GraphLink, GraphNode};
	use super::*;

	fn state_for(text: &str) -> ForceGraphState {
		ForceGraphState::new(&parse(text), 400.0, 400.0, &Theme::default())
	}

	fn edge_count(state: &ForceGraphState) -> usize {
		let mut n = 0;
		state.graph.visit_edges(|_, _, _| n += 1);
		n
	}

	#[test]
	fn builds_one_simulation_node_per_graph_node() {
		let state = state_for("A --> B\nB --> C");
		assert_eq!(state.node_count(), 3);
		assert_eq!(edge_count(&state), 2);
	}

	#[test]
	fn duplicate_links_become_parallel_edges() {
		let state = state_for("A --> B\nA --> B");
		assert_eq!(state.node_count(), 2);
		assert_eq!(edge_count(&state), 2);
	}

	#[test]
	fn links_to_unknown_ids_are_skipped() {
		// Parser output can't produce these, but host-supplied JSON can.
		let data = GraphData {
			nodes: vec![GraphNode::from_id("a")],
			links: vec![GraphLink {
				source: "a".into(),
				target: "ghost".into(),
			}],
		};
		let state = ForceGraphState::new(&data, 400.0, 400.0, &Theme::default());
		assert_eq!(edge_count(&state), 0);
	}

	#[test]
	fn every_node_gets_a_color() {
		let state = state_for("A --> B\nC --> D");
		state.graph.visit_nodes(|node| {
			assert!(!node.data.user_data.color.is_empty());
		});
	}

	#[test]
	fn group_members_share_a_color() {
		let theme = Theme::default();
		let node = |id: &str, group: &str| GraphNode {
			id: id.into(),
			group: Some(group.into()),
			color: None,
		};
		let data = GraphData {
			nodes: vec![node("a", "x"), node("b", "y"), node("c", "x")],
			links: vec![],
		};
		let state = ForceGraphState::new(&data, 400.0, 400.0, &theme);
		let mut colors = HashMap::new();
		state.graph.visit_nodes(|n| {
			colors.insert(n.data.user_data.id.clone(), n.data.user_data.color.clone());
		});
		assert_eq!(colors["a"], colors["c"]);
		assert_ne!(colors["a"], colors["b"]);
	}

	#[test]
	fn explicit_color_wins_over_group() {
		let data = GraphData {
			nodes: vec![GraphNode {
				id: "a".into(),
				group: Some("x".into()),
				color: Some("#123456".into()),
			}],
			links: vec![],
		};
		let state = ForceGraphState::new(&data, 400.0, 400.0, &Theme::default());
		state.graph.visit_nodes(|n| {
			assert_eq!(n.data.user_data.color, "#123456");
		});
	}

	#[test]
	fn hit_colors_are_unique_and_round_trip() {
		let state = state_for("A --> B\nB --> C\nC --> D");
		let mut seen = std::collections::HashSet::new();
		for &idx in state.node_order() {
			let css = state.hit_color(idx).unwrap();
			assert!(seen.insert(css));
		}
		for (slot, &idx) in state.node_order().iter().enumerate() {
			let v = slot + 1;
			let pixel = [(v & 0xff) as u8, ((v >> 8) & 0xff) as u8, 0, 0xff];
			assert_eq!(state.node_at_hit_pixel(&pixel), Some(idx));
		}
	}

	#[test]
	fn hit_codec_rejects_background_and_translucent_pixels() {
		assert_eq!(decode_hit_pixel(&[0, 0, 0, 255]), None);
		assert_eq!(decode_hit_pixel(&[1, 0, 0, 128]), None);
		assert_eq!(decode_hit_pixel(&[1, 0, 0]), None);
		assert_eq!(decode_hit_pixel(&[1, 0, 0, 255]), Some(0));
	}

	#[test]
	fn hit_slot_encoding_spreads_over_channels() {
		assert_eq!(encode_hit_slot(0), "rgb(1, 0, 0)");
		assert_eq!(encode_hit_slot(255), "rgb(0, 1, 0)");
		assert_eq!(decode_hit_pixel(&[0, 1, 0, 255]), Some(255));
	}

	#[test]
	fn transform_carries_across_rebuilds() {
		let old = ViewTransform {
			x: 10.0,
			y: -4.0,
			k: 2.5,
		};
		let state = state_for("A --> B").with_transform(old.clone());
		assert_eq!(state.transform.k, 2.5);
		let (gx, gy) = state.screen_to_graph(10.0, -4.0);
		assert_eq!((gx, gy), (0.0, 0.0));
	}
}
