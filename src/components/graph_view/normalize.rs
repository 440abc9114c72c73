//! Rescales raw layout coordinates into the unit square.

use log::warn;

use super::types::RawNode;

/// Min/max of one coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct AxisRange {
	pub min: f64,
	pub max: f64,
}

impl AxisRange {
	fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
		values.fold(None, |acc, v| match acc {
			None => Some(Self { min: v, max: v }),
			Some(r) => Some(Self {
				min: r.min.min(v),
				max: r.max.max(v),
			}),
		})
	}

	/// Map `v` linearly so that `min -> 0` and `max -> 1`.
	///
	/// A zero-width range maps every value to 0.
	pub fn normalize(&self, v: f64) -> f64 {
		let span = self.max - self.min;
		if span == 0.0 { 0.0 } else { (v - self.min) / span }
	}

	fn is_degenerate(&self) -> bool {
		self.max == self.min
	}
}

/// Per-axis bounds of a node set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct Bounds {
	pub x: AxisRange,
	pub y: AxisRange,
}

impl Bounds {
	/// Returns `None` for an empty node list.
	pub fn of(nodes: &[RawNode]) -> Option<Self> {
		Some(Self {
			x: AxisRange::of(nodes.iter().map(|n| n.attributes.x))?,
			y: AxisRange::of(nodes.iter().map(|n| n.attributes.y))?,
		})
	}

	/// Normalize a point on both axes.
	pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
		(self.x.normalize(x), self.y.normalize(y))
	}
}

/// Rewrite every node position into `[0, 1]` per axis, in place.
pub fn normalize_positions(nodes: &mut [RawNode]) {
	let Some(bounds) = Bounds::of(nodes) else {
		return;
	};
	if bounds.x.is_degenerate() || bounds.y.is_degenerate() {
		warn!(
			"graph-lens: all nodes share one coordinate on an axis (x: {:?}, y: {:?}); collapsing it to 0",
			bounds.x, bounds.y
		);
	}
	for node in nodes.iter_mut() {
		let (x, y) = bounds.normalize(node.attributes.x, node.attributes.y);
		node.attributes.x = x;
		node.attributes.y = y;
	}
}
