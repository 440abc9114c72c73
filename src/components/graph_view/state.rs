//! Viewer state: the graph store plus every interaction component.
//!
//! Created once when the component mounts, then mutated by DOM event handlers
//! and the animation loop. Raw pointer input is resolved into [`GraphEvent`]s
//! here and dispatched to the highlight engine, the navigation action and the
//! search controller in that order.

use log::error;

use super::camera::{Camera, CameraState};
use super::events::{GraphEvent, GraphEventHandler};
use super::highlight::HighlightEngine;
use super::navigation::{NavigationAction, UrlOpener};
use super::scale::{ScaleConfig, ScaledValues};
use super::search::{NavKey, SearchController};
use super::store::GraphStore;
use crate::config::ViewerConfig;

/// Pointer movement (pixels) below which a press/release counts as a click.
const CLICK_TOLERANCE: f64 = 4.0;
/// Ratio multiplier per wheel notch.
const WHEEL_ZOOM: f64 = 1.1;

/// A pointer press that has not been released yet.
#[derive(Clone, Debug)]
struct Press {
	start: (f64, f64),
	last: (f64, f64),
	node: Option<usize>,
	moved: bool,
}

/// Everything the canvas and the search box read and mutate.
pub struct ViewerState {
	/// Loaded graph, restyled in place by hover episodes.
	pub graph: GraphStore,
	#[allow(missing_docs)]
	pub camera: Camera,
	#[allow(missing_docs)]
	pub highlight: HighlightEngine,
	#[allow(missing_docs)]
	pub navigation: NavigationAction,
	#[allow(missing_docs)]
	pub search: SearchController,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	focus_ratio: f64,
	animation_duration_ms: f64,
	hovered: Option<usize>,
	press: Option<Press>,
}

impl ViewerState {
	/// Wrap a fully loaded graph. `opener` receives clicked node URLs.
	pub fn new(graph: GraphStore, config: &ViewerConfig, opener: Box<dyn UrlOpener>) -> Self {
		Self {
			graph,
			camera: Camera::new(config.initial_camera),
			highlight: HighlightEngine::new(&config.highlight_color, &config.dim_color),
			navigation: NavigationAction::new(opener),
			search: SearchController::new(),
			width: 0.0,
			height: 0.0,
			focus_ratio: config.focus_ratio,
			animation_duration_ms: config.animation_duration_ms,
			hovered: None,
			press: None,
		}
	}

	#[allow(missing_docs)]
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Deliver one event to every handler before returning.
	pub fn dispatch(&mut self, event: GraphEvent<'_>) {
		self.highlight.handle(event, &mut self.graph);
		self.navigation.handle(event, &mut self.graph);
		self.search.handle(event, &mut self.graph);
	}

	/// Pixels per graph unit at the current zoom.
	fn pixel_scale(&self) -> f64 {
		self.width.min(self.height).max(1.0) / self.camera.state.ratio
	}

	/// Graph coordinates to canvas pixels; the graph y axis points up.
	pub fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
		let s = self.pixel_scale();
		let cam = self.camera.state;
		(
			self.width / 2.0 + (gx - cam.x) * s,
			self.height / 2.0 - (gy - cam.y) * s,
		)
	}

	/// Inverse of [`Self::graph_to_screen`].
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		let s = self.pixel_scale();
		let cam = self.camera.state;
		(
			cam.x + (sx - self.width / 2.0) / s,
			cam.y - (sy - self.height / 2.0) / s,
		)
	}

	/// Topmost node under the screen point, in the renderer's paint order.
	pub fn node_at_position(&self, sx: f64, sy: f64, config: &ScaleConfig) -> Option<usize> {
		let scale = ScaledValues::new(config, self.camera.state.ratio);
		self.graph.draw_order().into_iter().rev().find(|&idx| {
			let attrs = &self.graph.node(idx).attrs;
			let (nx, ny) = self.graph_to_screen(attrs.x, attrs.y);
			let (dx, dy) = (nx - sx, ny - sy);
			(dx * dx + dy * dy).sqrt() <= scale.hit_radius(attrs.size)
		})
	}

	fn set_hovered(&mut self, node: Option<usize>) {
		if self.hovered == node {
			return;
		}
		if let Some(old) = self.hovered.take() {
			let id = self.graph.node(old).id.clone();
			self.dispatch(GraphEvent::LeaveNode(&id));
		}
		if let Some(new) = node {
			let id = self.graph.node(new).id.clone();
			self.dispatch(GraphEvent::EnterNode(&id));
		}
		self.hovered = node;
	}

	/// Press on the canvas. Pressing empty stage closes the dropdown.
	pub fn pointer_down(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		let node = self.node_at_position(sx, sy, config);
		self.press = Some(Press {
			start: (sx, sy),
			last: (sx, sy),
			node,
			moved: false,
		});
		if node.is_none() {
			self.dispatch(GraphEvent::DownStage);
		}
	}

	/// Hover tracking, or panning while the stage is dragged.
	pub fn pointer_move(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		if let Some(press) = self.press.as_mut() {
			let (dx, dy) = (sx - press.start.0, sy - press.start.1);
			if (dx * dx + dy * dy).sqrt() > CLICK_TOLERANCE {
				press.moved = true;
			}
			if press.node.is_none() && press.moved {
				let (step_x, step_y) = (sx - press.last.0, sy - press.last.1);
				press.last = (sx, sy);
				let s = self.pixel_scale();
				self.camera.pan_by(-step_x / s, step_y / s);
				return;
			}
			press.last = (sx, sy);
		}
		let hovered = self.node_at_position(sx, sy, config);
		self.set_hovered(hovered);
	}

	/// Release; without movement this is a node or stage click.
	pub fn pointer_up(&mut self, sx: f64, sy: f64, config: &ScaleConfig) {
		let Some(press) = self.press.take() else {
			return;
		};
		if press.moved {
			return;
		}
		match press.node {
			Some(idx) if self.node_at_position(sx, sy, config) == Some(idx) => {
				let id = self.graph.node(idx).id.clone();
				self.dispatch(GraphEvent::ClickNode(&id));
			}
			Some(_) => {}
			None => self.dispatch(GraphEvent::ClickStage),
		}
	}

	/// Pointer left the canvas: end any hover episode and drag.
	pub fn pointer_leave(&mut self) {
		self.press = None;
		self.set_hovered(None);
	}

	/// Zoom one notch around the pointer; positive `delta_y` zooms out.
	pub fn wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { WHEEL_ZOOM } else { 1.0 / WHEEL_ZOOM };
		let anchor = self.screen_to_graph(sx, sy);
		self.camera.zoom_around(factor, anchor);
	}

	/// Close the dropdown and fly the camera to `node_id`.
	///
	/// Unknown IDs are logged and change nothing.
	pub fn focus_on_node(&mut self, node_id: &str, now_ms: f64) -> bool {
		let Some(attrs) = self.graph.node_attrs(node_id) else {
			error!("graph-lens: node with id {node_id:?} not found");
			return false;
		};
		let target = CameraState {
			x: attrs.x,
			y: attrs.y,
			ratio: self.focus_ratio,
		};
		self.search.close();
		self.camera
			.animate_to(target, now_ms, self.animation_duration_ms);
		true
	}

	/// Text typed into the search box.
	pub fn search_input(&mut self, text: &str) {
		self.search.set_query(text, &self.graph);
	}

	/// Search box focused or clicked.
	pub fn search_reopen(&mut self) {
		self.search.reopen(&self.graph);
	}

	/// Navigation key pressed in the search box.
	pub fn search_key(&mut self, key: NavKey, now_ms: f64) {
		if let Some(id) = self.search.on_key(key) {
			self.focus_on_node(&id, now_ms);
		}
	}

	/// A result entry was clicked.
	pub fn search_activate(&mut self, index: usize, now_ms: f64) {
		if let Some(id) = self.search.results().get(index).cloned() {
			self.focus_on_node(&id, now_ms);
			self.search.activate(index);
		}
	}

	/// Advance the camera for this frame. Returns true while animating.
	pub fn frame(&mut self, now_ms: f64) -> bool {
		self.camera.tick(now_ms)
	}
}
