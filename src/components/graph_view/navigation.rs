//! Opening a node's external resource on click.

use log::{debug, warn};

use super::events::{GraphEvent, GraphEventHandler};
use super::store::GraphStore;

/// Opens a URL in a new browsing context.
pub trait UrlOpener {
	#[allow(missing_docs)]
	fn open(&mut self, url: &str);
}

/// Opens URLs with `window.open(url, "_blank")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
	fn open(&mut self, url: &str) {
		let Some(window) = web_sys::window() else {
			warn!("graph-lens: no window to open {url}");
			return;
		};
		if let Err(e) = window.open_with_url_and_target(url, "_blank") {
			warn!("graph-lens: failed to open {url}: {e:?}");
		}
	}
}

/// Click-to-navigate handler.
pub struct NavigationAction {
	opener: Box<dyn UrlOpener>,
}

impl NavigationAction {
	#[allow(missing_docs)]
	pub fn new(opener: Box<dyn UrlOpener>) -> Self {
		Self { opener }
	}

	/// Open the node's `url`. Nodes without one are ignored.
	pub fn open_node(&mut self, graph: &GraphStore, node_id: &str) {
		match graph.node_attrs(node_id).and_then(|a| a.url.as_deref()) {
			Some(url) if !url.is_empty() => self.opener.open(url),
			_ => debug!("graph-lens: node {node_id:?} has no url"),
		}
	}
}

impl GraphEventHandler for NavigationAction {
	fn handle(&mut self, event: GraphEvent<'_>, graph: &mut GraphStore) {
		if let GraphEvent::ClickNode(id) = event {
			self.open_node(graph, id);
		}
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::components::graph_view::store::NodeAttributes;

	/// Records every URL instead of opening it.
	#[derive(Clone, Default)]
	pub(crate) struct RecordingOpener(pub Rc<RefCell<Vec<String>>>);

	impl UrlOpener for RecordingOpener {
		fn open(&mut self, url: &str) {
			self.0.borrow_mut().push(url.to_string());
		}
	}

	#[test]
	fn click_opens_url_and_skips_nodes_without_one() {
		let mut g = GraphStore::new();
		g.add_node(
			"A".into(),
			NodeAttributes {
				url: Some("https://example.com/a".into()),
				..Default::default()
			},
		)
		.unwrap();
		g.add_node("B".into(), NodeAttributes::default()).unwrap();

		let opened = RecordingOpener::default();
		let mut nav = NavigationAction::new(Box::new(opened.clone()));
		nav.handle(GraphEvent::ClickNode("A"), &mut g);
		nav.handle(GraphEvent::ClickNode("B"), &mut g);
		nav.handle(GraphEvent::ClickNode("missing"), &mut g);
		nav.handle(GraphEvent::ClickStage, &mut g);
		assert_eq!(*opened.0.borrow(), vec!["https://example.com/a".to_string()]);
	}
}
