//! Graph data structures as they arrive from the JSON data file.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Attributes of a node in the data file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawNodeAttributes {
	/// Precomputed layout position, rescaled on load.
	pub x: f64,
	#[allow(missing_docs)]
	pub y: f64,
	/// Relative node size. Defaults to 1 before scaling.
	pub size: Option<f64>,
	/// CSS color (e.g., "#ff0000" or "rgb(255, 0, 0)").
	pub color: Option<String>,
	/// Display text; search matches IDs, not labels.
	pub label: Option<String>,
	/// External resource opened when the node is clicked.
	pub url: Option<String>,
	/// Always render the label regardless of zoom.
	#[serde(rename = "forceLabel")]
	pub force_label: Option<bool>,
	/// Rendering hints this viewer does not interpret.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A node in the data file.
#[derive(Clone, Debug, Deserialize)]
pub struct RawNode {
	/// Unique identifier, also the text matched by the search box.
	pub id: String,
	#[allow(missing_docs)]
	pub attributes: RawNodeAttributes,
}

/// Attributes of an edge in the data file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawEdgeAttributes {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Relative thickness. Defaults to 1 before scaling.
	pub size: Option<f64>,
	/// CSS stroke color.
	pub color: Option<String>,
	/// Start hidden.
	pub hidden: Option<bool>,
	/// Rendering hints this viewer does not interpret.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// An edge in the data file. The ID carries no meaning beyond uniqueness.
#[derive(Clone, Debug, Deserialize)]
pub struct RawEdge {
	/// Generated as `e{n}` when missing, skipping IDs already used.
	pub id: Option<String>,
	#[allow(missing_docs)]
	pub attributes: RawEdgeAttributes,
}

/// Complete data file: nodes and edges.
#[derive(Clone, Debug, Default, Deserialize)]
#[allow(missing_docs)]
pub struct GraphData {
	pub nodes: Vec<RawNode>,
	#[serde(default)]
	pub edges: Vec<RawEdge>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_minimal_document_with_optional_fields() {
		let json = r##"{
			"nodes": [
				{ "id": "AMZN", "attributes": { "x": 1.5, "y": -2, "size": 3, "color": "#f00",
					"label": "Amazon", "url": "https://example.com", "sector": "retail" } },
				{ "id": "B", "attributes": { "x": 0, "y": 0 } }
			],
			"edges": [
				{ "id": "e0", "attributes": { "source": "AMZN", "target": "B" } }
			]
		}"##;
		let data: GraphData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		let a = &data.nodes[0].attributes;
		assert_eq!(a.size, Some(3.0));
		assert_eq!(a.url.as_deref(), Some("https://example.com"));
		assert_eq!(a.extra.get("sector"), Some(&Value::from("retail")));
		let b = &data.nodes[1].attributes;
		assert!(b.size.is_none() && b.color.is_none() && b.label.is_none());
		assert_eq!(data.edges[0].attributes.source, "AMZN");
		assert!(data.edges[0].attributes.size.is_none());
	}

	#[test]
	fn rejects_node_without_position() {
		let json = r#"{ "nodes": [ { "id": "A", "attributes": { "y": 1 } } ], "edges": [] }"#;
		assert!(serde_json::from_str::<GraphData>(json).is_err());
	}
}
