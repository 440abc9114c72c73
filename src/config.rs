//! Tunable constants of the viewer.
//!
//! Every field has a default. A host page can override any subset by embedding
//! a JSON object in `<script id="viewer-config" type="application/json">`.

use serde::Deserialize;

use crate::components::graph_view::CameraState;
use crate::error::LoadError;

/// Top-level viewer configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
	/// Location of the graph JSON document, relative to the page.
	pub data_url: String,
	/// Multiplier applied to every node size after defaulting to 1.
	pub node_size_scale: f64,
	/// Multiplier applied to every edge size after defaulting to 1.
	pub edge_size_scale: f64,
	/// Color of the hovered node, its neighbors and connecting edges.
	pub highlight_color: String,
	/// Color of nodes outside the hovered neighborhood.
	pub dim_color: String,
	/// Duration of the camera move to a searched node.
	pub animation_duration_ms: f64,
	/// Zoom ratio the camera ends at after focusing a node.
	pub focus_ratio: f64,
	/// Camera shown before any interaction.
	pub initial_camera: CameraState,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			data_url: "./graph.json".to_string(),
			node_size_scale: 0.6,
			edge_size_scale: 0.05,
			highlight_color: "#ADD8E6".to_string(),
			dim_color: "#80808090".to_string(),
			animation_duration_ms: 1000.0,
			focus_ratio: 0.1,
			initial_camera: CameraState {
				x: 0.5,
				y: 0.5,
				ratio: 1.0,
			},
		}
	}
}

impl ViewerConfig {
	/// Parse overrides from JSON, filling unspecified fields with defaults.
	pub fn from_json(text: &str) -> Result<Self, LoadError> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()?;
		Ok(config)
	}

	/// Reject non-positive scales, durations and ratios, and an empty data URL.
	pub fn validate(&self) -> Result<(), LoadError> {
		let positive = [
			("node_size_scale", self.node_size_scale),
			("edge_size_scale", self.edge_size_scale),
			("animation_duration_ms", self.animation_duration_ms),
			("focus_ratio", self.focus_ratio),
			("initial_camera.ratio", self.initial_camera.ratio),
		];
		for (name, value) in positive {
			if !(value.is_finite() && value > 0.0) {
				return Err(LoadError::Config(format!(
					"{name} must be a positive number, got {value}"
				)));
			}
		}
		if self.data_url.trim().is_empty() {
			return Err(LoadError::Config("data_url must not be empty".into()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_override_keeps_remaining_defaults() {
		let config =
			ViewerConfig::from_json(r##"{ "highlight_color": "#ff0", "focus_ratio": 0.25 }"##)
				.unwrap();
		assert_eq!(config.highlight_color, "#ff0");
		assert_eq!(config.focus_ratio, 0.25);
		assert_eq!(config.node_size_scale, 0.6);
		assert_eq!(config.initial_camera, ViewerConfig::default().initial_camera);
	}

	#[test]
	fn rejects_non_positive_duration() {
		let err = ViewerConfig::from_json(r#"{ "animation_duration_ms": 0 }"#).unwrap_err();
		assert!(matches!(err, LoadError::Config(msg) if msg.contains("animation_duration_ms")));
	}

	#[test]
	fn defaults_are_valid() {
		assert!(ViewerConfig::default().validate().is_ok());
	}
}
