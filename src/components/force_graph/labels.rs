//! Label plate rendering and the pointer-area side-table.
//!
//! Every visible node is drawn as its label: a measured, padded,
//! semi-transparent plate with the id text centered on the node position.
//! The plate geometry is recorded in a side-table keyed by node index so
//! the hit-mask pass can repaint the *same* rectangle in the node's solid
//! hit color. Pointer hit-testing samples that mask, so the clickable area
//! matches the visible label pixel for pixel.
//!
//! Ordering contract: the visible pass runs before the hit pass within a
//! frame. A node with no recorded plate yet (first frame) is simply skipped
//! by the hit pass; it has no label on screen to hit.

use std::collections::HashMap;

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use super::scale::ScaledValues;
use super::theme::Theme;

/// Measured plate dimensions for one label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBox {
	pub width: f64,
	pub height: f64,
}

impl LabelBox {
	/// The plate rectangle `(x, y, width, height)` centered on a position.
	///
	/// Both the visible pass and the hit pass go through here, which is what
	/// keeps the two rectangles geometrically identical.
	pub fn rect_at(&self, x: f64, y: f64) -> (f64, f64, f64, f64) {
		(
			x - self.width / 2.0,
			y - self.height / 2.0,
			self.width,
			self.height,
		)
	}
}

/// Plate for a measured text width: padding goes on both dimensions.
pub(crate) fn padded_box(text_width: f64, font_size: f64, padding: f64) -> LabelBox {
	LabelBox {
		width: text_width + padding,
		height: font_size + padding,
	}
}

/// Owns the per-node plate side-table and both label draw phases.
///
/// Boxes are overwritten every frame by [`LabelLayer::draw`] and consumed by
/// [`LabelLayer::draw_hit_area`] in the same frame. [`LabelLayer::clear`]
/// drops all entries when the node set changes, so indices from a previous
/// graph can never leak stale geometry into the mask.
#[derive(Debug, Default)]
pub struct LabelLayer {
	boxes: HashMap<DefaultNodeIdx, LabelBox>,
}

impl LabelLayer {
	/// Forget all recorded plates. Call when the graph is rebuilt.
	pub fn clear(&mut self) {
		self.boxes.clear();
	}

	/// Visible phase: measure, draw plate + text, record the box.
	#[allow(clippy::too_many_arguments)]
	pub fn draw(
		&mut self,
		ctx: &CanvasRenderingContext2d,
		scale: &ScaledValues,
		theme: &Theme,
		idx: DefaultNodeIdx,
		label: &str,
		x: f64,
		y: f64,
		color: &str,
		hovered: bool,
	) {
		ctx.set_font(&scale.label_font);
		let text_width = ctx
			.measure_text(label)
			.map(|m| m.width())
			.unwrap_or_default();
		let plate = padded_box(text_width, scale.label_font_size, scale.label_padding);
		let (rx, ry, rw, rh) = plate.rect_at(x, y);

		ctx.set_fill_style_str(&theme.label_background.to_css());
		ctx.fill_rect(rx, ry, rw, rh);

		if hovered {
			ctx.set_stroke_style_str(&theme.hover_ring.to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke_rect(rx, ry, rw, rh);
		}

		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(color);
		let _ = ctx.fill_text(label, x, y);

		self.boxes.insert(idx, plate);
	}

	/// Hit phase: repaint the recorded plate in the node's solid hit color.
	///
	/// No-op when no plate has been recorded for this node yet.
	pub fn draw_hit_area(
		&self,
		ctx: &CanvasRenderingContext2d,
		idx: DefaultNodeIdx,
		x: f64,
		y: f64,
		hit_color: &str,
	) {
		let Some(plate) = self.boxes.get(&idx) else {
			return;
		};
		let (rx, ry, rw, rh) = plate.rect_at(x, y);
		ctx.set_fill_style_str(hit_color);
		ctx.fill_rect(rx, ry, rw, rh);
	}

	/// Recorded plate for a node, if the visible pass has drawn it.
	pub fn box_for(&self, idx: DefaultNodeIdx) -> Option<LabelBox> {
		self.boxes.get(&idx).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::super::parser::parse;
	use super::super::state::ForceGraphState;
	use super::super::theme::Theme;
	use super::*;

	fn some_idx() -> DefaultNodeIdx {
		let state = ForceGraphState::new(&parse("a --> b"), 400.0, 400.0, &Theme::default());
		state.node_order()[0]
	}

	#[test]
	fn padding_goes_on_both_dimensions() {
		// fontSize 12 at scale 1: padding is 12 * 0.2 = 2.4 on each axis.
		let plate = padded_box(40.0, 12.0, 2.4);
		assert_eq!(plate.width, 42.4);
		assert_eq!(plate.height, 14.4);
	}

	#[test]
	fn rect_is_centered_on_the_node() {
		let plate = LabelBox {
			width: 10.0,
			height: 4.0,
		};
		assert_eq!(plate.rect_at(100.0, 50.0), (95.0, 48.0, 10.0, 4.0));
	}

	#[test]
	fn hit_rect_matches_visible_rect_for_the_same_frame() {
		// Both phases derive their rectangle from the one recorded plate,
		// so for any stored box the two geometries are identical.
		let mut layer = LabelLayer::default();
		let idx = some_idx();
		let plate = padded_box(33.0, 6.0, 1.2);
		layer.boxes.insert(idx, plate);

		let visible = plate.rect_at(12.0, -7.5);
		let hit = layer.box_for(idx).unwrap().rect_at(12.0, -7.5);
		assert_eq!(visible, hit);
	}

	#[test]
	fn missing_plate_reads_as_none() {
		let layer = LabelLayer::default();
		assert_eq!(layer.box_for(some_idx()), None);
	}

	#[test]
	fn clear_drops_recorded_plates() {
		let mut layer = LabelLayer::default();
		let idx = some_idx();
		layer.boxes.insert(
			idx,
			LabelBox {
				width: 1.0,
				height: 1.0,
			},
		);
		layer.clear();
		assert_eq!(layer.box_for(idx), None);
	}
}
