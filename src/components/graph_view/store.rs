//! In-memory graph attribute store read by the renderer every frame.
//!
//! Nodes and edges are inserted once at load time and never removed. Their
//! attribute records are mutated in place by the interaction handlers.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::LoadError;

/// Display state saved when a node enters a highlighted or dimmed state.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedNodeStyle {
	/// Color before the episode, `None` when the data left it unset.
	pub color: Option<String>,
	/// Only captured for dimmed nodes, whose label gets cleared.
	pub label: Option<Option<String>>,
	/// `forceLabel` before the episode.
	pub force_label: bool,
}

/// Display state saved when an edge is highlighted or hidden.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedEdgeStyle {
	/// Color before the episode.
	pub color: Option<String>,
	/// Visibility before the episode.
	pub hidden: bool,
}

/// Mutable per-node record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeAttributes {
	/// Normalized horizontal position in [0, 1].
	pub x: f64,
	/// Normalized vertical position in [0, 1], growing upward.
	pub y: f64,
	/// Display size after scaling.
	pub size: f64,
	/// Fill color; the theme default applies when unset.
	pub color: Option<String>,
	/// Text drawn next to the node and matched by search.
	pub label: Option<String>,
	/// Page opened when the node is clicked.
	pub url: Option<String>,
	/// Draw the label regardless of zoom level.
	pub force_label: bool,
	/// Present only while the node is highlighted or dimmed.
	pub saved: Option<SavedNodeStyle>,
	/// Unrecognized attributes from the data file.
	pub extra: Map<String, Value>,
}

impl NodeAttributes {
	/// Part of a hover neighborhood, drawn above every other node.
	pub fn is_highlighted(&self) -> bool {
		self.saved.as_ref().is_some_and(|s| s.label.is_none())
	}

	/// Color captured at the start of the current hover episode.
	pub fn original_color(&self) -> Option<&str> {
		self.saved.as_ref().and_then(|s| s.color.as_deref())
	}

	/// Label captured when the node was dimmed.
	pub fn original_label(&self) -> Option<&str> {
		self.saved
			.as_ref()
			.and_then(|s| s.label.as_ref())
			.and_then(|l| l.as_deref())
	}
}

/// Mutable per-edge record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeAttributes {
	/// Display thickness after scaling.
	pub size: f64,
	/// Stroke color; the theme default applies when unset.
	pub color: Option<String>,
	/// Hidden edges are neither drawn nor hit.
	pub hidden: bool,
	/// Present only while the edge is highlighted or hidden by a hover episode.
	pub saved: Option<SavedEdgeStyle>,
	/// Unrecognized attributes from the data file.
	pub extra: Map<String, Value>,
}

/// A node and its attributes.
#[derive(Clone, Debug)]
pub struct Node {
	#[allow(missing_docs)]
	pub id: String,
	#[allow(missing_docs)]
	pub attrs: NodeAttributes,
}

/// An edge between two node indices.
#[derive(Clone, Debug)]
pub struct Edge {
	#[allow(missing_docs)]
	pub id: String,
	/// Index of the source node.
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
	#[allow(missing_docs)]
	pub attrs: EdgeAttributes,
}

/// Nodes and edges keyed by string IDs, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	node_index: HashMap<String, usize>,
	edge_ids: HashMap<String, usize>,
	/// Incident edge indices per node. Fixed after load.
	incidence: Vec<Vec<usize>>,
}

impl GraphStore {
	/// Empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert a node and return its index. IDs must be unique.
	pub fn add_node(&mut self, id: String, attrs: NodeAttributes) -> Result<usize, LoadError> {
		if self.node_index.contains_key(&id) {
			return Err(LoadError::DuplicateNode(id));
		}
		let idx = self.nodes.len();
		self.node_index.insert(id.clone(), idx);
		self.nodes.push(Node { id, attrs });
		self.incidence.push(Vec::new());
		Ok(idx)
	}

	/// Insert an edge between two existing nodes and return its index.
	pub fn add_edge(
		&mut self,
		id: String,
		source: &str,
		target: &str,
		attrs: EdgeAttributes,
	) -> Result<usize, LoadError> {
		if self.edge_ids.contains_key(&id) {
			return Err(LoadError::DuplicateEdge(id));
		}
		let lookup = |node: &str| {
			self.node_index
				.get(node)
				.copied()
				.ok_or_else(|| LoadError::UnknownEndpoint {
					edge: id.clone(),
					node: node.to_string(),
				})
		};
		let (src, tgt) = (lookup(source)?, lookup(target)?);

		let idx = self.edges.len();
		self.edge_ids.insert(id.clone(), idx);
		self.edges.push(Edge {
			id,
			source: src,
			target: tgt,
			attrs,
		});
		self.incidence[src].push(idx);
		if tgt != src {
			self.incidence[tgt].push(idx);
		}
		Ok(idx)
	}

	/// Index of the node with this ID.
	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.node_index.get(id).copied()
	}

	/// Node at `idx`. Panics when out of range.
	pub fn node(&self, idx: usize) -> &Node {
		&self.nodes[idx]
	}

	/// Attributes of the node with this ID.
	pub fn node_attrs(&self, id: &str) -> Option<&NodeAttributes> {
		self.node_index(id).map(|idx| &self.nodes[idx].attrs)
	}

	#[allow(missing_docs)]
	pub fn node_attrs_mut(&mut self, idx: usize) -> &mut NodeAttributes {
		&mut self.nodes[idx].attrs
	}

	/// Edge at `idx`. Panics when out of range.
	pub fn edge(&self, idx: usize) -> &Edge {
		&self.edges[idx]
	}

	#[allow(missing_docs)]
	pub fn edge_attrs_mut(&mut self, idx: usize) -> &mut EdgeAttributes {
		&mut self.edges[idx].attrs
	}

	/// All nodes in insertion order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	#[allow(missing_docs)]
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	#[allow(missing_docs)]
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Node IDs in insertion order.
	pub fn node_ids(&self) -> impl Iterator<Item = &str> {
		self.nodes.iter().map(|n| n.id.as_str())
	}

	/// Edges whose source or target is `node`.
	pub fn incident_edges(&self, node: usize) -> &[usize] {
		&self.incidence[node]
	}

	/// Distinct endpoints of the incident edges, excluding `node` itself.
	pub fn neighbors(&self, node: usize) -> Vec<usize> {
		let mut out = Vec::new();
		for &e in &self.incidence[node] {
			let edge = &self.edges[e];
			for end in [edge.source, edge.target] {
				if end != node && !out.contains(&end) {
					out.push(end);
				}
			}
		}
		out
	}

	/// Node indices in paint order: ordinary nodes first, then highlighted
	/// ones, each group in insertion order. Later entries are drawn on top.
	pub fn draw_order(&self) -> Vec<usize> {
		let (front, mut order): (Vec<usize>, Vec<usize>) =
			(0..self.nodes.len()).partition(|&i| self.nodes[i].attrs.is_highlighted());
		order.extend(front);
		order
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triangle_with_loop() -> GraphStore {
		let mut g = GraphStore::new();
		for id in ["a", "b", "c"] {
			g.add_node(id.into(), NodeAttributes::default()).unwrap();
		}
		g.add_edge("ab".into(), "a", "b", EdgeAttributes::default()).unwrap();
		g.add_edge("ba".into(), "b", "a", EdgeAttributes::default()).unwrap();
		g.add_edge("bc".into(), "b", "c", EdgeAttributes::default()).unwrap();
		g.add_edge("bb".into(), "b", "b", EdgeAttributes::default()).unwrap();
		g
	}

	#[test]
	fn neighbors_are_distinct_and_exclude_self() {
		let g = triangle_with_loop();
		let b = g.node_index("b").unwrap();
		assert_eq!(g.incident_edges(b).len(), 4);
		let names: Vec<_> = g.neighbors(b).into_iter().map(|i| g.node(i).id.clone()).collect();
		assert_eq!(names, vec!["a", "c"]);
	}

	#[test]
	fn rejects_duplicates_and_dangling_edges() {
		let mut g = triangle_with_loop();
		assert!(matches!(
			g.add_node("a".into(), NodeAttributes::default()),
			Err(LoadError::DuplicateNode(id)) if id == "a"
		));
		assert!(matches!(
			g.add_edge("ab".into(), "a", "c", EdgeAttributes::default()),
			Err(LoadError::DuplicateEdge(_))
		));
		assert!(matches!(
			g.add_edge("ax".into(), "a", "x", EdgeAttributes::default()),
			Err(LoadError::UnknownEndpoint { node, .. }) if node == "x"
		));
		assert_eq!(g.edge_count(), 4);
	}

	#[test]
	fn highlighted_nodes_paint_last() {
		let mut g = triangle_with_loop();
		g.node_attrs_mut(0).saved = Some(SavedNodeStyle {
			color: None,
			label: None,
			force_label: false,
		});
		g.node_attrs_mut(2).saved = Some(SavedNodeStyle {
			color: None,
			label: Some(None),
			force_label: false,
		});
		assert!(g.node(0).attrs.is_highlighted());
		assert!(!g.node(2).attrs.is_highlighted());
		assert_eq!(g.draw_order(), vec![1, 2, 0]);
	}

	#[test]
	fn original_values_distinguish_empty_from_absent() {
		let mut attrs = NodeAttributes::default();
		assert_eq!(attrs.original_label(), None);
		attrs.saved = Some(SavedNodeStyle {
			color: None,
			label: Some(Some(String::new())),
			force_label: false,
		});
		assert_eq!(attrs.original_label(), Some(""));
		assert_eq!(attrs.original_color(), None);
	}
}
