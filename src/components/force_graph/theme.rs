//! Visual styling for the graph canvas.
//!
//! A single fixed theme: dark background, light dashed-free edges, and
//! white label plates. Node text colors come from the palette.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// A curated color palette for node labels.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// The classic category palette used by d3-style chart tooling.
	pub fn category() -> Self {
		Self {
			colors: vec![
				Color::rgb(0x1f, 0x77, 0xb4), // Blue
				Color::rgb(0xff, 0x7f, 0x0e), // Orange
				Color::rgb(0x2c, 0xa0, 0x2c), // Green
				Color::rgb(0xd6, 0x27, 0x28), // Red
				Color::rgb(0x94, 0x67, 0xbd), // Purple
				Color::rgb(0x8c, 0x56, 0x4b), // Brown
				Color::rgb(0xe3, 0x77, 0xc2), // Pink
				Color::rgb(0x7f, 0x7f, 0x7f), // Gray
				Color::rgb(0xbc, 0xbd, 0x22), // Olive
				Color::rgb(0x17, 0xbe, 0xcf), // Cyan
			],
		}
	}

	/// Palette color for an index, wrapping around.
	pub fn get(&self, i: usize) -> Color {
		self.colors[i % self.colors.len()]
	}
}

/// Complete visual style for the graph view.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas background fill.
	pub background: Color,
	/// Edge stroke and arrowhead color.
	pub edge: Color,
	/// Plate drawn behind every label.
	pub label_background: Color,
	/// Ring stroked around the hovered label's plate.
	pub hover_ring: Color,
	/// Node label colors, assigned by group or insertion order.
	pub palette: NodePalette,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(0x1a, 0x1a, 0x2e),
			edge: Color::rgba(100, 180, 255, 0.6),
			label_background: Color::rgba(255, 255, 255, 0.8),
			hover_ring: Color::rgba(255, 255, 255, 0.9),
			palette: NodePalette::category(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_format_as_hex() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
	}

	#[test]
	fn translucent_colors_format_as_rgba() {
		assert_eq!(
			Color::rgba(255, 255, 255, 0.8).to_css(),
			"rgba(255, 255, 255, 0.8)"
		);
	}

	#[test]
	fn palette_wraps_around() {
		let palette = NodePalette::category();
		let n = palette.colors.len();
		assert_eq!(palette.get(0), palette.get(n));
	}
}
