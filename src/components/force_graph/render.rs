//! Canvas rendering for the graph view.
//!
//! Two passes per frame, sharing the same view transform:
//! 1. Visible pass: background, directed edges, then label plates on top.
//!    Drawing a plate records its geometry in the [`LabelLayer`] side-table.
//! 2. Hit pass (offscreen mask): opaque black clear, then each recorded
//!    plate repainted in its node's solid hit color.
//!
//! The hit pass must run after the visible pass of the same frame; plates
//! not yet recorded are skipped, which only happens before a node's first
//! visible draw.

use web_sys::CanvasRenderingContext2d;

use super::labels::LabelLayer;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::ForceGraphState;
use super::theme::Theme;

/// Renders the visible graph and refreshes the label side-table.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	labels: &mut LabelLayer,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, &scale, theme);
	draw_labels(state, ctx, &scale, theme, labels);

	ctx.restore();
}

/// Repaints the hit mask from the recorded label plates.
pub fn render_hit_mask(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	labels: &LabelLayer,
) {
	// Opaque black: decodes to "no node" everywhere a plate isn't.
	ctx.set_fill_style_str("#000000");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	state.graph.visit_nodes(|node| {
		if let Some(color) = state.hit_color(node.index()) {
			labels.draw_hit_area(ctx, node.index(), node.x() as f64, node.y() as f64, &color);
		}
	});

	ctx.restore();
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let edge_css = theme.edge.to_css();
	ctx.set_stroke_style_str(&edge_css);
	ctx.set_fill_style_str(&edge_css);
	ctx.set_line_width(scale.edge_line_width);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		// Mid-edge arrowhead: the endpoints sit under label plates of
		// text-dependent size, so the middle is the one spot guaranteed
		// to stay visible.
		let (ux, uy) = (dx / dist, dy / dist);
		let (mid_x, mid_y) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		let (tip_x, tip_y) = (
			mid_x + ux * scale.arrow_size * 0.5,
			mid_y + uy * scale.arrow_size * 0.5,
		);
		let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
		let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_labels(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	labels: &mut LabelLayer,
) {
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		labels.draw(
			ctx,
			scale,
			theme,
			idx,
			&node.data.user_data.id,
			node.x() as f64,
			node.y() as f64,
			&node.data.user_data.color,
			state.hovered == Some(idx),
		);
	});
}
