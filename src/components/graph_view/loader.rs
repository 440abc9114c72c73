//! Builds the graph store from the fetched data file.

use std::collections::HashSet;

use log::info;

use super::normalize::normalize_positions;
use super::store::{EdgeAttributes, GraphStore, NodeAttributes};
use super::types::GraphData;
use crate::error::LoadError;

/// Size multipliers applied while loading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeScale {
	/// Factor for node sizes.
	pub node: f64,
	/// Factor for edge sizes.
	pub edge: f64,
}

/// First `e{n}` with `n >= start` not already in `taken`; the result is reserved.
fn generated_edge_id(start: usize, taken: &mut HashSet<String>) -> String {
	let id = (start..)
		.map(|n| format!("e{n}"))
		.find(|id| !taken.contains(id))
		.unwrap_or_default();
	taken.insert(id.clone());
	id
}

/// Normalize positions, scale sizes and insert everything into a new store.
///
/// Fails on the first duplicate ID or dangling edge endpoint.
pub fn build_graph(mut data: GraphData, scale: SizeScale) -> Result<GraphStore, LoadError> {
	normalize_positions(&mut data.nodes);

	let mut graph = GraphStore::new();
	for node in data.nodes {
		let a = node.attributes;
		graph.add_node(
			node.id,
			NodeAttributes {
				x: a.x,
				y: a.y,
				size: a.size.unwrap_or(1.0) * scale.node,
				color: a.color,
				label: a.label,
				url: a.url,
				force_label: a.force_label.unwrap_or(false),
				saved: None,
				extra: a.extra,
			},
		)?;
	}

	let mut taken: HashSet<String> = data.edges.iter().filter_map(|e| e.id.clone()).collect();
	for (i, edge) in data.edges.into_iter().enumerate() {
		let a = edge.attributes;
		let id = match edge.id {
			Some(id) => id,
			None => generated_edge_id(i, &mut taken),
		};
		graph.add_edge(
			id,
			&a.source,
			&a.target,
			EdgeAttributes {
				size: a.size.unwrap_or(1.0) * scale.edge,
				color: a.color,
				hidden: a.hidden.unwrap_or(false),
				saved: None,
				extra: a.extra,
			},
		)?;
	}

	info!(
		"graph-lens: loaded {} nodes, {} edges",
		graph.node_count(),
		graph.edge_count()
	);
	Ok(graph)
}

/// Parse a JSON document and build the store.
pub fn parse_graph(json: &str, scale: SizeScale) -> Result<GraphStore, LoadError> {
	let data: GraphData = serde_json::from_str(json)?;
	build_graph(data, scale)
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCALE: SizeScale = SizeScale {
		node: 0.6,
		edge: 0.05,
	};

	const DOC: &str = r##"{
		"nodes": [
			{ "id": "A", "attributes": { "x": 0, "y": 10, "size": 5, "color": "#111", "label": "a" } },
			{ "id": "B", "attributes": { "x": 20, "y": 0 } }
		],
		"edges": [
			{ "id": "ab", "attributes": { "source": "A", "target": "B", "size": 4 } },
			{ "attributes": { "source": "B", "target": "A" } }
		]
	}"##;

	#[test]
	fn applies_size_defaults_and_scales() {
		let g = parse_graph(DOC, SCALE).unwrap();
		assert_eq!(g.node_attrs("A").unwrap().size, 5.0 * 0.6);
		assert_eq!(g.node_attrs("B").unwrap().size, 0.6);
		assert_eq!(g.edge(0).attrs.size, 4.0 * 0.05);
		assert_eq!(g.edge(1).attrs.size, 0.05);
		assert_eq!(g.edge(1).id, "e1");
	}

	#[test]
	fn normalizes_before_insert_and_keeps_optionals_absent() {
		let g = parse_graph(DOC, SCALE).unwrap();
		let b = g.node_attrs("B").unwrap();
		assert_eq!((b.x, b.y), (1.0, 0.0));
		assert!(b.color.is_none() && b.label.is_none() && b.url.is_none());
		assert!(!b.force_label && b.saved.is_none());
		let a = g.node_attrs("A").unwrap();
		assert_eq!((a.x, a.y), (0.0, 1.0));
	}

	#[test]
	fn dangling_edge_fails_the_whole_load() {
		let doc = r#"{ "nodes": [ { "id": "A", "attributes": { "x": 0, "y": 0 } } ],
			"edges": [ { "id": "x", "attributes": { "source": "A", "target": "Z" } } ] }"#;
		assert!(matches!(
			parse_graph(doc, SCALE),
			Err(LoadError::UnknownEndpoint { .. })
		));
	}

	#[test]
	fn generated_edge_ids_skip_explicit_ones() {
		let doc = r#"{
			"nodes": [
				{ "id": "A", "attributes": { "x": 0, "y": 0 } },
				{ "id": "B", "attributes": { "x": 1, "y": 1 } }
			],
			"edges": [
				{ "id": "e1", "attributes": { "source": "A", "target": "B" } },
				{ "attributes": { "source": "B", "target": "A" } },
				{ "id": "e2", "attributes": { "source": "A", "target": "B" } },
				{ "attributes": { "source": "A", "target": "B" } }
			]
		}"#;
		let g = parse_graph(doc, SCALE).unwrap();
		let ids: Vec<&str> = g.edges().iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, ["e1", "e3", "e2", "e4"]);
	}

	#[test]
	fn explicit_duplicate_edge_ids_still_fail() {
		let doc = r#"{
			"nodes": [
				{ "id": "A", "attributes": { "x": 0, "y": 0 } },
				{ "id": "B", "attributes": { "x": 1, "y": 1 } }
			],
			"edges": [
				{ "id": "ab", "attributes": { "source": "A", "target": "B" } },
				{ "id": "ab", "attributes": { "source": "B", "target": "A" } }
			]
		}"#;
		assert!(matches!(
			parse_graph(doc, SCALE),
			Err(LoadError::DuplicateEdge(id)) if id == "ab"
		));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		assert!(matches!(parse_graph("{ nodes: ", SCALE), Err(LoadError::Parse(_))));
	}
}
