//! Incremental node search with a keyboard-navigable results dropdown.
//!
//! The controller owns the query text, the current result list, the keyboard
//! selection and whether the dropdown is open. It never touches the camera
//! itself: operations that pick a node return its ID and the caller performs
//! the focus.

use super::events::{GraphEvent, GraphEventHandler};
use super::store::GraphStore;

/// Keys the search box reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
	/// Move the selection down, wrapping to the top.
	ArrowDown,
	/// Move the selection up, wrapping to the bottom.
	ArrowUp,
	/// Focus the selected node, or the raw input uppercased.
	Enter,
	/// Any other key; only reopens the dropdown.
	Other,
}

impl NavKey {
	/// Map a DOM `KeyboardEvent.key` value.
	pub fn from_key(key: &str) -> Self {
		match key {
			"ArrowDown" => Self::ArrowDown,
			"ArrowUp" => Self::ArrowUp,
			"Enter" => Self::Enter,
			_ => Self::Other,
		}
	}
}

/// Node IDs containing `query`, compared case-insensitively, in graph order.
///
/// An empty query matches every node.
pub fn matching_nodes(graph: &GraphStore, query: &str) -> Vec<String> {
	let needle = query.to_lowercase();
	graph
		.node_ids()
		.filter(|id| id.to_lowercase().contains(&needle))
		.map(String::from)
		.collect()
}

/// Everything the dropdown view needs to render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchView {
	/// Text shown in the input.
	pub input: String,
	/// Matching node IDs, one dropdown row each.
	pub results: Vec<String>,
	/// Row drawn as selected.
	pub focus: Option<usize>,
	/// Whether the dropdown is displayed.
	pub open: bool,
}

/// Search box state machine: closed or open, plus the keyboard selection.
#[derive(Clone, Debug, Default)]
pub struct SearchController {
	input: String,
	results: Vec<String>,
	/// Index into `results`; `None` means no keyboard selection.
	focus: Option<usize>,
	open: bool,
	searched: bool,
}

impl SearchController {
	/// Closed, empty controller.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current input text.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Node IDs matched by the last search.
	pub fn results(&self) -> &[String] {
		&self.results
	}

	/// Keyboard-selected row.
	pub fn current_focus(&self) -> Option<usize> {
		self.focus
	}

	#[allow(missing_docs)]
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Snapshot for the dropdown view.
	pub fn view(&self) -> SearchView {
		SearchView {
			input: self.input.clone(),
			results: self.results.clone(),
			focus: self.focus,
			open: self.open,
		}
	}

	/// The input text changed: recompute matches, drop the selection, open.
	pub fn set_query(&mut self, text: &str, graph: &GraphStore) {
		self.input = text.to_string();
		self.results = matching_nodes(graph, text);
		self.searched = true;
		self.focus = None;
		self.open = true;
	}

	/// Focus or click on the input: show the existing list, computing it on
	/// first use.
	pub fn reopen(&mut self, graph: &GraphStore) {
		if !self.searched {
			let text = self.input.clone();
			self.set_query(&text, graph);
		}
		self.open = true;
	}

	/// Hide the dropdown, keeping the list and the selection.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Select result `index`: mirror it into the input and close the dropdown.
	/// Returns the node to focus.
	pub fn activate(&mut self, index: usize) -> Option<String> {
		let id = self.results.get(index)?.clone();
		self.input = id.clone();
		self.open = false;
		Some(id)
	}

	/// Handle a key press in the input. Returns a node ID to focus on Enter.
	pub fn on_key(&mut self, key: NavKey) -> Option<String> {
		self.open = true;
		let n = self.results.len();
		match key {
			NavKey::ArrowDown if n > 0 => {
				let next = self.focus.map_or(0, |f| (f + 1) % n);
				self.select(next);
				None
			}
			NavKey::ArrowUp if n > 0 => {
				let prev = match self.focus {
					Some(f) if f > 0 && f <= n => f - 1,
					_ => n - 1,
				};
				self.select(prev);
				None
			}
			NavKey::Enter => match self.focus {
				Some(f) if f < n => self.activate(f),
				_ => Some(self.input.trim().to_uppercase()),
			},
			_ => None,
		}
	}

	fn select(&mut self, index: usize) {
		self.focus = Some(index);
		self.input = self.results[index].clone();
	}
}

impl GraphEventHandler for SearchController {
	fn handle(&mut self, event: GraphEvent<'_>, _graph: &mut GraphStore) {
		if matches!(event, GraphEvent::ClickStage | GraphEvent::DownStage) {
			self.close();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::store::NodeAttributes;

	fn graph(ids: &[&str]) -> GraphStore {
		let mut g = GraphStore::new();
		for id in ids {
			g.add_node(id.to_string(), NodeAttributes::default()).unwrap();
		}
		g
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let g = graph(&["AMZN", "AAPL", "GOOG", "amzx"]);
		assert_eq!(matching_nodes(&g, "amz"), vec!["AMZN", "amzx"]);
		assert_eq!(matching_nodes(&g, "Pl"), vec!["AAPL"]);
		assert_eq!(matching_nodes(&g, "").len(), 4);
		assert!(matching_nodes(&g, "zzz").is_empty());
	}

	#[test]
	fn query_resets_focus_and_opens() {
		let g = graph(&["AMZN", "AAPL", "ABNB"]);
		let mut s = SearchController::new();
		s.set_query("a", &g);
		s.on_key(NavKey::ArrowDown);
		assert_eq!(s.current_focus(), Some(0));
		s.close();
		s.set_query("ab", &g);
		assert!(s.is_open());
		assert_eq!(s.current_focus(), None);
		assert_eq!(s.results(), ["ABNB"]);
	}

	#[test]
	fn arrows_wrap_and_mirror_into_input() {
		let g = graph(&["AMZN", "AAPL", "ABNB"]);
		let mut s = SearchController::new();
		s.set_query("a", &g);
		assert_eq!(s.on_key(NavKey::ArrowUp), None);
		assert_eq!(s.current_focus(), Some(2));
		assert_eq!(s.input(), "ABNB");
		s.on_key(NavKey::ArrowDown);
		assert_eq!(s.current_focus(), Some(0));
		assert_eq!(s.input(), "AMZN");
		s.on_key(NavKey::ArrowUp);
		assert_eq!(s.current_focus(), Some(2));
		s.on_key(NavKey::ArrowDown);
		s.on_key(NavKey::ArrowDown);
		assert_eq!(s.current_focus(), Some(1));
		assert_eq!(s.view().focus, Some(1));
	}

	#[test]
	fn enter_activates_selected_entry() {
		let g = graph(&["AMZN", "AAPL"]);
		let mut s = SearchController::new();
		s.set_query("a", &g);
		s.on_key(NavKey::ArrowDown);
		s.on_key(NavKey::ArrowDown);
		assert_eq!(s.on_key(NavKey::Enter), Some("AAPL".to_string()));
		assert_eq!(s.input(), "AAPL");
		assert!(!s.is_open());
	}

	#[test]
	fn enter_without_selection_uses_uppercased_input() {
		let g = graph(&["AMZN"]);
		let mut s = SearchController::new();
		s.set_query("  amzn ", &g);
		assert_eq!(s.current_focus(), None);
		assert_eq!(s.on_key(NavKey::Enter), Some("AMZN".to_string()));
		assert!(s.is_open());
	}

	#[test]
	fn arrows_on_empty_results_keep_no_selection() {
		let g = graph(&["AMZN"]);
		let mut s = SearchController::new();
		s.set_query("zzz", &g);
		s.close();
		s.on_key(NavKey::ArrowDown);
		assert!(s.is_open());
		assert_eq!(s.current_focus(), None);
		assert_eq!(s.input(), "zzz");
	}

	#[test]
	fn stage_events_close_and_reopen_restores_list() {
		let mut g = graph(&["AMZN", "AAPL"]);
		let mut s = SearchController::new();
		s.reopen(&g);
		assert_eq!(s.results().len(), 2);
		s.set_query("pl", &g);
		s.handle(GraphEvent::DownStage, &mut g);
		assert!(!s.is_open());
		s.reopen(&g);
		assert!(s.is_open());
		assert_eq!(s.results(), ["AAPL"]);
		s.handle(GraphEvent::ClickStage, &mut g);
		assert!(!s.is_open());
	}

	#[test]
	fn activate_out_of_range_is_ignored() {
		let g = graph(&["AMZN"]);
		let mut s = SearchController::new();
		s.set_query("", &g);
		assert_eq!(s.activate(5), None);
		assert!(s.is_open());
		assert_eq!(s.activate(0), Some("AMZN".into()));
	}
}
