//! Zoom-dependent scaling configuration for graph visuals.
//!
//! # Coordinate Spaces
//!
//! - **Graph-space**: normalized node positions, roughly the unit square.
//! - **Screen-space**: pixel coordinates on the canvas.
//!
//! Node and edge `size` attributes are expressed in screen pixels at zoom
//! ratio 1. As the camera zooms in (ratio shrinks) they grow according to a
//! [`ScaleBehavior`], so dense graphs stay readable without nodes ballooning.

/// Defines how a pixel size reacts to zoom (`zoom = 1 / ratio`).
///
/// Sizes grow as `zoom^exponent`. An exponent of 0.5 doubles the size when
/// zooming in four times; 0 keeps a constant screen size.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBehavior {
	#[allow(missing_docs)]
	pub exponent: f64,
}

impl ScaleBehavior {
	/// Size of `base` pixels at the given zoom.
	pub fn apply(&self, base: f64, zoom: f64) -> f64 {
		base * zoom.powf(self.exponent)
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Pixels of radius per unit of `size` at ratio 1.
	pub px_per_size: f64,
	/// Growth of the radius with zoom.
	pub behavior: ScaleBehavior,
	/// Smallest radius ever drawn, so tiny nodes stay visible.
	pub min_radius: f64,
	/// Extra pixels around a node that still count as hovering it.
	pub hit_padding: f64,
}

/// Configuration for edge visual scaling.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Pixels of line width per unit of `size` at ratio 1.
	pub px_per_size: f64,
	/// Growth of the width with zoom.
	pub behavior: ScaleBehavior,
	/// Thinnest line ever drawn.
	pub min_width: f64,
}

/// Configuration for label rendering.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Label font size in screen pixels.
	pub font_size: f64,
	/// Labels of nodes rendered smaller than this radius are culled unless
	/// the node forces its label.
	pub rendered_size_threshold: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
#[allow(missing_docs)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub edge: EdgeScaleConfig,
	pub label: LabelScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				px_per_size: 1.0,
				behavior: ScaleBehavior { exponent: 0.5 },
				min_radius: 1.0,
				hit_padding: 2.0,
			},
			edge: EdgeScaleConfig {
				px_per_size: 1.0,
				behavior: ScaleBehavior { exponent: 0.5 },
				min_width: 0.5,
			},
			label: LabelScaleConfig {
				font_size: 14.0,
				rendered_size_threshold: 6.0,
			},
		}
	}
}

/// Pre-computed scale factors for a specific camera ratio.
///
/// Create this once per frame and pass it to rendering functions.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	node_factor: f64,
	edge_factor: f64,
	min_radius: f64,
	min_width: f64,
	hit_padding: f64,
	label_threshold: f64,
	/// Label font string (e.g., "14px sans-serif").
	pub label_font: String,
}

impl ScaledValues {
	/// Factors for the camera at `ratio`.
	pub fn new(config: &ScaleConfig, ratio: f64) -> Self {
		let zoom = 1.0 / ratio;
		Self {
			node_factor: config.node.behavior.apply(config.node.px_per_size, zoom),
			edge_factor: config.edge.behavior.apply(config.edge.px_per_size, zoom),
			min_radius: config.node.min_radius,
			min_width: config.edge.min_width,
			hit_padding: config.node.hit_padding,
			label_threshold: config.label.rendered_size_threshold,
			label_font: format!("{}px sans-serif", config.label.font_size),
		}
	}

	/// Screen radius of a node with the given `size` attribute.
	pub fn node_radius(&self, size: f64) -> f64 {
		(size * self.node_factor).max(self.min_radius)
	}

	/// Distance from a node center within which the pointer hits it.
	pub fn hit_radius(&self, size: f64) -> f64 {
		self.node_radius(size) + self.hit_padding
	}

	/// Screen line width of an edge with the given `size` attribute.
	pub fn edge_width(&self, size: f64) -> f64 {
		(size * self.edge_factor).max(self.min_width)
	}

	/// Whether a label should be drawn for a node of this radius.
	pub fn shows_label(&self, radius: f64, forced: bool) -> bool {
		forced || radius >= self.label_threshold
	}
}
