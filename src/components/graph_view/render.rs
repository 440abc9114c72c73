//! Canvas rendering for the graph view.
//!
//! Reads the attribute store every frame. Rendering uses multiple passes for
//! correct z-ordering:
//! 1. Background (screen space)
//! 2. Visible edges
//! 3. Nodes, with highlighted nodes drawn last so they sit on top
//! 4. Labels

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::state::ViewerState;
use super::store::Node;
use super::theme::Theme;

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ViewerState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.camera.state.ratio);

	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	draw_edges(state, ctx, &scale, theme);

	let order = state.graph.draw_order();
	for &i in &order {
		draw_node(state, ctx, &scale, theme, state.graph.node(i));
	}

	ctx.set_font(&scale.label_font);
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&theme.label.to_css());
	for &i in &order {
		draw_label(state, ctx, &scale, state.graph.node(i));
	}
}

fn draw_edges(
	state: &ViewerState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let default_color = theme.edge.to_css();
	for edge in state.graph.edges() {
		if edge.attrs.hidden {
			continue;
		}
		let (src, tgt) = (state.graph.node(edge.source), state.graph.node(edge.target));
		let (x1, y1) = state.graph_to_screen(src.attrs.x, src.attrs.y);
		let (x2, y2) = state.graph_to_screen(tgt.attrs.x, tgt.attrs.y);

		ctx.set_stroke_style_str(edge.attrs.color.as_deref().unwrap_or(&default_color));
		ctx.set_line_width(scale.edge_width(edge.attrs.size));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_node(
	state: &ViewerState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	node: &Node,
) {
	let (x, y) = state.graph_to_screen(node.attrs.x, node.attrs.y);
	let radius = scale.node_radius(node.attrs.size);
	if x + radius < 0.0 || y + radius < 0.0 || x - radius > state.width || y - radius > state.height
	{
		return;
	}

	match node.attrs.color.as_deref() {
		Some(color) => ctx.set_fill_style_str(color),
		None => ctx.set_fill_style_str(&theme.node.to_css()),
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_label(state: &ViewerState, ctx: &CanvasRenderingContext2d, scale: &ScaledValues, node: &Node) {
	let Some(label) = node.attrs.label.as_deref().filter(|l| !l.is_empty()) else {
		return;
	};
	let radius = scale.node_radius(node.attrs.size);
	if !scale.shows_label(radius, node.attrs.force_label) {
		return;
	}
	let (x, y) = state.graph_to_screen(node.attrs.x, node.attrs.y);
	let _ = ctx.fill_text(label, x + radius + 3.0, y);
}
