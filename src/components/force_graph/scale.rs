//! Zoom-dependent scaling for graph visuals.
//!
//! The canvas transform multiplies all world-space drawing by the zoom
//! factor `k`, so anything that should keep a constant on-screen size has
//! to divide by `k` first. Labels use exactly that rule: a 12 px base font
//! divided by `k` reads the same at every zoom level, and the measured
//! plate behind it scales along with the text.
//!
//! - [`ScaleBehavior::World`]: constant world size, appears larger zoomed in.
//! - [`ScaleBehavior::Screen`]: constant pixel size, divides by `k`.
//! - [`ScaleBehavior::Clamped`]: world scaling bounded to a screen-size range.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// Compute the world-space value for a base value at zoom level `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => {
				// screen_size = world_size * k, so bounds convert by / k
				base.clamp(min_screen / k, max_screen / k)
			}
		}
	}
}

/// Configuration for label scaling.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Base font size in screen pixels.
	pub font_size: f64,
	/// How the font scales with zoom.
	pub font_behavior: ScaleBehavior,
	/// Plate padding as a fraction of the font size.
	pub padding: f64,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
	/// Base arrowhead size in world units.
	pub arrow_size: f64,
	/// How arrowhead size scales with zoom.
	pub arrow_behavior: ScaleBehavior,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub label: LabelScaleConfig,
	pub edge: EdgeScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			label: LabelScaleConfig {
				font_size: 12.0,
				font_behavior: ScaleBehavior::Screen,
				padding: 0.2,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				arrow_size: 5.0,
				arrow_behavior: ScaleBehavior::Clamped {
					min_screen: 0.0,
					max_screen: 18.0,
				},
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions. All sizes
/// are in world-space, ready to use after the canvas transform.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	/// Label font size in world-space.
	pub label_font_size: f64,
	/// Label font string (e.g., "12px sans-serif").
	pub label_font: String,
	/// Plate padding in world-space.
	pub label_padding: f64,
	/// Edge line width in world-space.
	pub edge_line_width: f64,
	/// Arrowhead size in world-space.
	pub arrow_size: f64,
	/// Hover ring stroke width in world-space.
	pub ring_width: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let label_font_size = config.label.font_behavior.apply(config.label.font_size, k);
		Self {
			k,
			label_font_size,
			label_font: format!("{}px sans-serif", label_font_size),
			label_padding: label_font_size * config.label.padding,
			edge_line_width: config.edge.line_width / k,
			arrow_size: config.edge.arrow_behavior.apply(config.edge.arrow_size, k),
			ring_width: 1.5 / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_behavior_counteracts_zoom() {
		assert_eq!(ScaleBehavior::Screen.apply(12.0, 2.0), 6.0);
		assert_eq!(ScaleBehavior::Screen.apply(12.0, 0.5), 24.0);
	}

	#[test]
	fn world_behavior_ignores_zoom() {
		assert_eq!(ScaleBehavior::World.apply(5.0, 3.0), 5.0);
	}

	#[test]
	fn clamped_behavior_bounds_screen_size() {
		let b = ScaleBehavior::Clamped {
			min_screen: 0.0,
			max_screen: 18.0,
		};
		// At k=10 a base of 5 world units would be 50 px; clamp to 18 px.
		assert_eq!(b.apply(5.0, 10.0), 1.8);
		// At k=1 the base is within bounds.
		assert_eq!(b.apply(5.0, 1.0), 5.0);
	}

	#[test]
	fn label_font_follows_the_twelve_over_k_rule() {
		let config = ScaleConfig::default();
		let scaled = ScaledValues::new(&config, 4.0);
		assert_eq!(scaled.label_font_size, 3.0);
		assert_eq!(scaled.label_font, "3px sans-serif");
		assert_eq!(scaled.label_padding, 3.0 * 0.2);
	}
}
