//! Leptos component wrapping the graph canvas.
//!
//! The component owns two drawing surfaces: the visible canvas and an
//! offscreen hit-mask canvas of the same size. An animation loop runs via
//! `requestAnimationFrame`, advancing the physics simulation and painting
//! the visible pass followed by the mask pass each frame. Pointer events
//! sample the mask pixel under the cursor to decide what they are over,
//! so hovering and dragging track the visible label plates exactly.
//!
//! When the `data` signal changes, the simulation state is rebuilt from
//! scratch and the label side-table is cleared; the camera transform is
//! carried over so the view doesn't jump while typing.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::labels::LabelLayer;
use super::render;
use super::scale::ScaleConfig;
use super::state::ForceGraphState;
use super::theme::Theme;
use super::types::GraphData;

/// Bundles simulation state with the drawing surfaces and visual config.
struct GraphContext {
	state: ForceGraphState,
	scale: ScaleConfig,
	theme: Theme,
	labels: LabelLayer,
	ctx: CanvasRenderingContext2d,
	hit_ctx: CanvasRenderingContext2d,
	/// Timestamp of the previous frame, in ms since the epoch.
	last_frame: f64,
}

impl GraphContext {
	/// RGBA pixel of the hit mask at canvas coordinates.
	fn mask_pixel(&self, x: f64, y: f64) -> Option<[u8; 4]> {
		let image = self.hit_ctx.get_image_data(x, y, 1.0, 1.0).ok()?;
		let data = image.data();
		data.get(..4)?.try_into().ok()
	}
}

/// Acquire a 2d context from a canvas element.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Offscreen canvas of the given size for the hit mask.
fn create_hit_canvas(width: u32, height: u32) -> Option<HtmlCanvasElement> {
	let document = web_sys::window()?.document()?;
	let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
	canvas.set_width(width);
	canvas.set_height(height);
	Some(canvas)
}

/// Renders a force-directed graph of label plates on a canvas element.
///
/// Pass graph data via the reactive `data` signal; every change rebuilds
/// the simulation wholesale. Drag a label to reposition its node, drag the
/// background to pan, scroll to zoom.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = 400.0)] width: f64,
	#[prop(default = 400.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init) = (context.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = context_2d(&canvas) else {
			return;
		};
		let Some(hit_canvas) = create_hit_canvas(width as u32, height as u32) else {
			return;
		};
		let Some(hit_ctx) = context_2d(&hit_canvas) else {
			return;
		};

		let theme = Theme::default();
		*context_init.borrow_mut() = Some(GraphContext {
			state: ForceGraphState::new(&data.get_untracked(), width, height, &theme),
			scale: ScaleConfig::default(),
			theme,
			labels: LabelLayer::default(),
			ctx,
			hit_ctx,
			last_frame: js_sys::Date::now(),
		});

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let now = js_sys::Date::now();
				// Clamp so a backgrounded tab doesn't explode the simulation.
				let dt = ((now - c.last_frame) / 1000.0).clamp(0.0, 0.1);
				c.last_frame = now;
				if c.state.animation_running {
					c.state.tick(dt as f32);
				}
				// Visible pass records the plates the mask pass repaints.
				render::render(&c.state, &c.ctx, &c.scale, &c.theme, &mut c.labels);
				render::render_hit_mask(&c.state, &c.hit_ctx, &c.labels);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Rebuild the simulation when the parsed graph changes. The mount
	// effect above handles the initial build, so the first run only
	// subscribes to the signal.
	let context_data = context.clone();
	Effect::new(move |prev: Option<()>| {
		let graph = data.get();
		if prev.is_none() {
			return;
		}
		if let Some(ref mut c) = *context_data.borrow_mut() {
			let transform = c.state.transform.clone();
			c.state = ForceGraphState::new(&graph, c.state.width, c.state.height, &c.theme)
				.with_transform(transform);
			c.labels.clear();
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			let hit = c
				.mask_pixel(x, y)
				.and_then(|px| c.state.node_at_hit_pixel(&px));
			if let Some(idx) = hit {
				c.state.drag.active = true;
				c.state.drag.node_idx = Some(idx);
				c.state.drag.start_x = x;
				c.state.drag.start_y = y;
				c.state.graph.visit_nodes(|node| {
					if node.index() == idx {
						c.state.drag.node_start_x = node.x();
						c.state.drag.node_start_y = node.y();
					}
				});
			} else {
				c.state.pan.active = true;
				c.state.pan.start_x = x;
				c.state.pan.start_y = y;
				c.state.pan.transform_start_x = c.state.transform.x;
				c.state.pan.transform_start_y = c.state.transform.y;
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if !c.state.drag.active {
				c.state.hovered = c
					.mask_pixel(x, y)
					.and_then(|px| c.state.node_at_hit_pixel(&px));
			}

			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					let (dx, dy) = (
						(x - c.state.drag.start_x) / c.state.transform.k,
						(y - c.state.drag.start_y) / c.state.transform.k,
					);
					let (nx, ny) = (
						c.state.drag.node_start_x + dx as f32,
						c.state.drag.node_start_y + dy as f32,
					);
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if c.state.pan.active {
				c.state.transform.x = c.state.pan.transform_start_x + (x - c.state.pan.start_x);
				c.state.transform.y = c.state.pan.transform_start_y + (y - c.state.pan.start_y);
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			if c.state.drag.active {
				if let Some(idx) = c.state.drag.node_idx {
					c.state.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.is_anchor = true;
						}
					});
				}
			}
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.state.drag.active = false;
			c.state.drag.node_idx = None;
			c.state.pan.active = false;
			c.state.hovered = None;
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut c) = *context_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (c.state.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / c.state.transform.k;
			c.state.transform.x = x - (x - c.state.transform.x) * ratio;
			c.state.transform.y = y - (y - c.state.transform.y) * ratio;
			c.state.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graphpad-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
