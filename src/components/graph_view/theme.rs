//! Visual theming for the graph view.
//!
//! Colors here apply only where the data file leaves an attribute unset;
//! per-node and per-edge `color` attributes always win.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha in [0, 1].
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Hex for opaque colors, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Canvas fill behind everything.
	pub background: Color,
	/// Fill for nodes without a `color` attribute.
	pub node: Color,
	/// Stroke for edges without a `color` attribute.
	pub edge: Color,
	/// Label text color.
	pub label: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(255, 255, 255),
			node: Color::rgb(153, 153, 153),
			edge: Color::rgba(204, 204, 204, 0.8),
			label: Color::rgb(34, 34, 34),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(173, 216, 230).to_css(), "#add8e6");
		assert_eq!(Color::rgba(128, 128, 128, 0.5).to_css(), "rgba(128, 128, 128, 0.5)");
	}
}
