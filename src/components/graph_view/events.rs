//! Pointer events emitted by the canvas and the handler interface they feed.

use super::store::GraphStore;

/// A pointer event resolved against the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphEvent<'a> {
	/// Pointer moved onto the node with this ID.
	EnterNode(&'a str),
	/// Pointer moved off the node with this ID.
	LeaveNode(&'a str),
	/// Press and release on the same node without dragging.
	ClickNode(&'a str),
	/// Click on empty canvas.
	ClickStage,
	/// Pointer pressed on empty canvas.
	DownStage,
}

/// Implemented by each interaction component. Handlers run one at a time and
/// must finish all graph mutations before returning.
pub trait GraphEventHandler {
	/// React to `event`, restyling `graph` as needed.
	fn handle(&mut self, event: GraphEvent<'_>, graph: &mut GraphStore);
}
