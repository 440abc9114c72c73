//! Viewport camera and its time-boxed move animation.

use serde::Deserialize;

/// Viewport center in normalized graph space plus zoom ratio.
///
/// A ratio of 1 shows the whole unit square; smaller ratios zoom in.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct CameraState {
	/// Horizontal center.
	pub x: f64,
	/// Vertical center, growing upward.
	pub y: f64,
	/// Visible extent relative to the unit square.
	pub ratio: f64,
}

impl CameraState {
	/// Interpolate each field independently: `self + (target - self) * t`.
	pub fn lerp(self, target: CameraState, t: f64) -> Self {
		Self {
			x: self.x + (target.x - self.x) * t,
			y: self.y + (target.y - self.y) * t,
			ratio: self.ratio + (target.ratio - self.ratio) * t,
		}
	}
}

/// A linear move from `from` to `to`, started at `start_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct CameraAnimation {
	pub from: CameraState,
	pub to: CameraState,
	pub start_ms: f64,
	pub duration_ms: f64,
}

impl CameraAnimation {
	/// Camera state at `now_ms`, and whether the animation has finished.
	///
	/// Once finished the returned state is exactly `to`.
	pub fn advance(&self, now_ms: f64) -> (CameraState, bool) {
		let elapsed = (now_ms - self.start_ms).max(0.0);
		let t = (elapsed / self.duration_ms).min(1.0);
		if t >= 1.0 {
			(self.to, true)
		} else {
			(self.from.lerp(self.to, t), false)
		}
	}
}

/// Limits for direct wheel zooming.
const MIN_RATIO: f64 = 0.01;
const MAX_RATIO: f64 = 10.0;

/// The camera read by the renderer, plus at most one running animation.
#[derive(Clone, Debug)]
pub struct Camera {
	/// Where the camera is this frame.
	pub state: CameraState,
	animation: Option<CameraAnimation>,
}

impl Camera {
	/// Resting camera at `state`.
	pub fn new(state: CameraState) -> Self {
		Self {
			state,
			animation: None,
		}
	}

	/// Start moving toward `target` from wherever the camera is now,
	/// replacing any animation already in flight.
	pub fn animate_to(&mut self, target: CameraState, now_ms: f64, duration_ms: f64) {
		self.animation = Some(CameraAnimation {
			from: self.state,
			to: target,
			start_ms: now_ms,
			duration_ms,
		});
	}

	#[allow(missing_docs)]
	pub fn is_animating(&self) -> bool {
		self.animation.is_some()
	}

	/// Apply the running animation for this frame. Returns true while more
	/// frames are needed.
	pub fn tick(&mut self, now_ms: f64) -> bool {
		let Some(anim) = self.animation else {
			return false;
		};
		let (state, done) = anim.advance(now_ms);
		self.state = state;
		if done {
			self.animation = None;
		}
		!done
	}

	/// Multiply the zoom ratio, keeping the graph point `anchor` fixed on screen.
	pub fn zoom_around(&mut self, factor: f64, anchor: (f64, f64)) {
		let ratio = (self.state.ratio * factor).clamp(MIN_RATIO, MAX_RATIO);
		let applied = ratio / self.state.ratio;
		self.state.x = anchor.0 + (self.state.x - anchor.0) * applied;
		self.state.y = anchor.1 + (self.state.y - anchor.1) * applied;
		self.state.ratio = ratio;
		self.animation = None;
	}

	/// Shift the center by a delta in graph units.
	pub fn pan_by(&mut self, dx: f64, dy: f64) {
		self.state.x += dx;
		self.state.y += dy;
		self.animation = None;
	}
}
