//! Hover highlighting of a node's induced neighborhood.
//!
//! Entering a node recolors it, its neighbors and their connecting edges with
//! the highlight color, hides every other edge and dims every other node while
//! clearing its label. Leaving the node restores exactly what was saved on
//! enter. Only one hover episode is active at a time.

use log::debug;

use super::events::{GraphEvent, GraphEventHandler};
use super::store::{GraphStore, SavedEdgeStyle, SavedNodeStyle};

/// A node's incident edges and adjacent nodes, as membership masks.
struct Neighborhood {
	edges: Vec<bool>,
	nodes: Vec<bool>,
}

impl Neighborhood {
	/// Always recomputed from the store's adjacency, never cached across events.
	fn of(graph: &GraphStore, center: usize) -> Self {
		let mut edges = vec![false; graph.edge_count()];
		let mut nodes = vec![false; graph.node_count()];
		for &e in graph.incident_edges(center) {
			edges[e] = true;
		}
		for n in graph.neighbors(center) {
			nodes[n] = true;
		}
		Self { edges, nodes }
	}
}

/// State machine for hover episodes: idle, or entered on one node.
#[derive(Clone, Debug)]
pub struct HighlightEngine {
	highlight_color: String,
	dim_color: String,
	active: Option<String>,
}

impl HighlightEngine {
	/// Idle engine painting with the given CSS colors.
	pub fn new(highlight_color: impl Into<String>, dim_color: impl Into<String>) -> Self {
		Self {
			highlight_color: highlight_color.into(),
			dim_color: dim_color.into(),
			active: None,
		}
	}

	/// Node of the current hover episode, if any.
	pub fn active(&self) -> Option<&str> {
		self.active.as_deref()
	}

	/// CSS cursor for the canvas.
	pub fn cursor(&self) -> &'static str {
		if self.active.is_some() { "pointer" } else { "default" }
	}

	/// Start a hover episode on `node_id`, ending any other one first.
	///
	/// Every node and edge gets its display state saved before it is restyled.
	pub fn enter(&mut self, graph: &mut GraphStore, node_id: &str) {
		if let Some(current) = self.active.clone() {
			if current == node_id {
				return;
			}
			self.leave(graph, &current);
		}
		let Some(center) = graph.node_index(node_id) else {
			debug!("graph-lens: enter on unknown node {node_id:?} ignored");
			return;
		};
		self.active = Some(node_id.to_string());

		let hovered = graph.node_attrs_mut(center);
		hovered.saved = Some(SavedNodeStyle {
			color: hovered.color.take(),
			label: None,
			force_label: hovered.force_label,
		});
		hovered.color = Some(self.highlight_color.clone());

		let hood = Neighborhood::of(graph, center);

		for (idx, &adjacent) in hood.nodes.iter().enumerate() {
			if idx == center {
				continue;
			}
			let attrs = graph.node_attrs_mut(idx);
			if adjacent {
				attrs.saved = Some(SavedNodeStyle {
					color: attrs.color.take(),
					label: None,
					force_label: attrs.force_label,
				});
				attrs.color = Some(self.highlight_color.clone());
				attrs.force_label = true;
			} else {
				attrs.saved = Some(SavedNodeStyle {
					color: attrs.color.take(),
					label: Some(attrs.label.take()),
					force_label: attrs.force_label,
				});
				attrs.color = Some(self.dim_color.clone());
			}
		}

		for (idx, &incident) in hood.edges.iter().enumerate() {
			let attrs = graph.edge_attrs_mut(idx);
			attrs.saved = Some(SavedEdgeStyle {
				color: attrs.color.clone(),
				hidden: attrs.hidden,
			});
			if incident {
				attrs.color = Some(self.highlight_color.clone());
			} else {
				attrs.hidden = true;
			}
		}
	}

	/// End the episode on `node_id` and put back everything `enter` saved.
	pub fn leave(&mut self, graph: &mut GraphStore, node_id: &str) {
		if self.active.as_deref() != Some(node_id) {
			debug!("graph-lens: leave on {node_id:?} without matching enter ignored");
			return;
		}
		self.active = None;
		let Some(center) = graph.node_index(node_id) else {
			return;
		};

		let hovered = graph.node_attrs_mut(center);
		if let Some(saved) = hovered.saved.take() {
			hovered.color = saved.color;
		}

		let hood = Neighborhood::of(graph, center);

		for idx in 0..hood.edges.len() {
			let attrs = graph.edge_attrs_mut(idx);
			let Some(saved) = attrs.saved.take() else {
				continue;
			};
			// incident edges were recolored, the rest were hidden
			if hood.edges[idx] {
				attrs.color = saved.color;
			} else {
				attrs.hidden = saved.hidden;
			}
		}

		for (idx, &adjacent) in hood.nodes.iter().enumerate() {
			if idx == center {
				continue;
			}
			let attrs = graph.node_attrs_mut(idx);
			let Some(saved) = attrs.saved.take() else {
				continue;
			};
			attrs.color = saved.color;
			if adjacent {
				attrs.force_label = saved.force_label;
			} else if let Some(label) = saved.label {
				attrs.label = label;
			}
		}
	}
}

impl GraphEventHandler for HighlightEngine {
	fn handle(&mut self, event: GraphEvent<'_>, graph: &mut GraphStore) {
		match event {
			GraphEvent::EnterNode(id) => self.enter(graph, id),
			GraphEvent::LeaveNode(id) => self.leave(graph, id),
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::store::{EdgeAttributes, NodeAttributes};

	const HI: &str = "#ADD8E6";
	const DIM: &str = "#80808090";

	/// Star around C with leaves A, B, D, an A-B edge and an isolated E.
	fn star() -> GraphStore {
		let mut g = GraphStore::new();
		for (id, color, label) in [
			("C", Some("#c00"), Some("center")),
			("A", Some("#0a0"), Some("")),
			("B", None, Some("bee")),
			("D", Some("#00d"), None),
			("E", Some("#eee"), Some("lonely")),
		] {
			g.add_node(
				id.into(),
				NodeAttributes {
					color: color.map(String::from),
					label: label.map(String::from),
					..Default::default()
				},
			)
			.unwrap();
		}
		for (id, s, t) in [("ca", "C", "A"), ("bc", "B", "C"), ("cd", "C", "D"), ("ab", "A", "B")] {
			g.add_edge(
				id.into(),
				s,
				t,
				EdgeAttributes {
					color: Some("#999".into()),
					..Default::default()
				},
			)
			.unwrap();
		}
		g
	}

	fn snapshot(g: &GraphStore) -> (Vec<NodeAttributes>, Vec<EdgeAttributes>) {
		(
			g.nodes().iter().map(|n| n.attrs.clone()).collect(),
			g.edges().iter().map(|e| e.attrs.clone()).collect(),
		)
	}

	fn engine() -> HighlightEngine {
		HighlightEngine::new(HI, DIM)
	}

	#[test]
	fn enter_highlights_star_neighborhood() {
		let mut g = star();
		let mut h = engine();
		h.enter(&mut g, "C");

		let c = g.node_attrs("C").unwrap();
		assert_eq!(c.color.as_deref(), Some(HI));
		assert_eq!(c.original_color(), Some("#c00"));
		for leaf in ["A", "B", "D"] {
			let n = g.node_attrs(leaf).unwrap();
			assert_eq!(n.color.as_deref(), Some(HI), "{leaf}");
			assert!(n.force_label, "{leaf}");
		}
		let e = g.node_attrs("E").unwrap();
		assert_eq!(e.color.as_deref(), Some(DIM));
		assert_eq!(e.label, None);
		assert_eq!(e.original_label(), Some("lonely"));

		for edge in g.edges() {
			if edge.id == "ab" {
				assert!(edge.attrs.hidden);
				assert_eq!(edge.attrs.color.as_deref(), Some("#999"));
			} else {
				assert!(!edge.attrs.hidden, "{}", edge.id);
				assert_eq!(edge.attrs.color.as_deref(), Some(HI));
			}
		}
		assert_eq!(h.active(), Some("C"));
		assert_eq!(h.cursor(), "pointer");
	}

	#[test]
	fn leave_restores_exact_snapshot_for_every_node() {
		let ids: Vec<String> = star().node_ids().map(String::from).collect();
		for id in ids {
			let mut g = star();
			let before = snapshot(&g);
			let mut h = engine();
			h.enter(&mut g, &id);
			h.leave(&mut g, &id);
			assert_eq!(snapshot(&g), before, "round trip through {id}");
			assert_eq!(h.cursor(), "default");
		}
	}

	#[test]
	fn preset_hidden_and_forced_label_survive_an_episode() {
		let mut g = star();
		g.edge_attrs_mut(3).hidden = true;
		let d = g.node_index("D").unwrap();
		g.node_attrs_mut(d).force_label = true;
		let before = snapshot(&g);

		let mut h = engine();
		h.enter(&mut g, "C");
		h.leave(&mut g, "C");
		assert_eq!(snapshot(&g), before);
	}

	#[test]
	fn enter_on_new_node_closes_previous_episode_first() {
		let mut g = star();
		let before = snapshot(&g);
		let mut h = engine();
		h.enter(&mut g, "A");
		h.enter(&mut g, "E");
		assert_eq!(h.active(), Some("E"));
		// A's leave never fires; it must be ignored once E owns the episode
		h.leave(&mut g, "A");
		assert_eq!(h.active(), Some("E"));
		h.leave(&mut g, "E");
		assert_eq!(snapshot(&g), before);
	}

	#[test]
	fn repeated_enter_keeps_original_colors() {
		let mut g = star();
		let before = snapshot(&g);
		let mut h = engine();
		h.enter(&mut g, "C");
		h.enter(&mut g, "C");
		h.leave(&mut g, "C");
		h.leave(&mut g, "C");
		assert_eq!(snapshot(&g), before);
	}

	#[test]
	fn isolated_node_dims_everything_else() {
		let mut g = star();
		let mut h = engine();
		h.handle(GraphEvent::EnterNode("E"), &mut g);
		assert!(g.edges().iter().all(|e| e.attrs.hidden));
		for id in ["A", "B", "C", "D"] {
			assert_eq!(g.node_attrs(id).unwrap().color.as_deref(), Some(DIM));
		}
		h.handle(GraphEvent::LeaveNode("E"), &mut g);
		assert!(g.edges().iter().all(|e| !e.attrs.hidden));
	}
}
