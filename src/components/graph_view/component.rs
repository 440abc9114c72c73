//! Leptos component wiring the graph canvas and the search box to the DOM.
//!
//! The component creates an HTML canvas element and wires up mouse/wheel event
//! handlers that feed [`ViewerState`]. An animation loop runs via
//! `requestAnimationFrame`, advancing the camera and redrawing each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent,
	WheelEvent, Window,
};

use super::navigation::BrowserOpener;
use super::render;
use super::scale::ScaleConfig;
use super::search::{NavKey, SearchView};
use super::state::ViewerState;
use super::store::GraphStore;
use super::theme::Theme;
use crate::config::ViewerConfig;

/// Bundles viewer state with visual configuration.
struct GraphContext {
	state: ViewerState,
	scale: ScaleConfig,
	theme: Theme,
}

type SharedContext = Rc<RefCell<GraphContext>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Apply the hover cursor and publish search state after a canvas event.
fn after_pointer_event(
	context: &SharedContext,
	canvas_ref: NodeRef<leptos::html::Canvas>,
	search: RwSignal<SearchView>,
) {
	let (cursor, snapshot) = {
		let c = context.borrow();
		(c.state.highlight.cursor(), c.state.search.view())
	};
	if let Some(canvas) = canvas_ref.get() {
		let canvas: HtmlCanvasElement = canvas.into();
		// Inherent call: the leptos prelude's `ElementExt::style` shadows it.
		let _ = HtmlElement::style(&canvas).set_property("cursor", cursor);
	}
	if search.with_untracked(|v| *v != snapshot) {
		search.set(snapshot);
	}
}

/// Renders the loaded graph full-window with a search box overlay.
///
/// The graph must be fully built before this component is created; it never
/// observes a partially loaded store.
#[component]
pub fn GraphViewer(
	/// Fully built graph.
	graph: GraphStore,
	/// Colors, scales and camera settings.
	config: ViewerConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mut state = ViewerState::new(graph, &config, Box::new(BrowserOpener));
	if let Some((w, h)) = web_sys::window().as_ref().and_then(window_size) {
		state.resize(w, h);
	}
	let context: SharedContext = Rc::new(RefCell::new(GraphContext {
		state,
		scale: ScaleConfig::default(),
		theme: Theme::default(),
	}));
	let search = RwSignal::new(SearchView::default());
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let (w, h) = window_size(&window).unwrap_or((800.0, 600.0));
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("graph-lens: canvas has no 2d context");
				return;
			}
		};
		context_init.borrow_mut().state.resize(w, h);

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			context_resize.borrow_mut().state.resize(nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut c = context_anim.borrow_mut();
				c.state.frame(js_sys::Date::now());
				render::render(&c.state, &ctx, &c.scale, &c.theme);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		{
			let mut c = context_md.borrow_mut();
			let c = &mut *c;
			c.state.pointer_down(x, y, &c.scale);
		}
		after_pointer_event(&context_md, canvas_ref, search);
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		{
			let mut c = context_mm.borrow_mut();
			let c = &mut *c;
			c.state.pointer_move(x, y, &c.scale);
		}
		after_pointer_event(&context_mm, canvas_ref, search);
	};

	let context_mu = context.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		{
			let mut c = context_mu.borrow_mut();
			let c = &mut *c;
			c.state.pointer_up(x, y, &c.scale);
		}
		after_pointer_event(&context_mu, canvas_ref, search);
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		context_ml.borrow_mut().state.pointer_leave();
		after_pointer_event(&context_ml, canvas_ref, search);
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		context_wh.borrow_mut().state.wheel(x, y, ev.delta_y());
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: default;"
		/>
		{search_box(context, search)}
	}
}

fn result_class(focused: bool) -> &'static str {
	if focused {
		"result-item result-item-active"
	} else {
		"result-item"
	}
}

/// Index of a dropdown row from its `data-index` attribute.
fn result_index(attr: Option<String>) -> Option<usize> {
	attr?.trim().parse().ok()
}

/// Search input plus results dropdown.
///
/// Every handler mutates the shared controller, then republishes its snapshot
/// so the dropdown re-renders.
fn search_box(context: SharedContext, search: RwSignal<SearchView>) -> impl IntoView {
	let publish = move |context: &SharedContext| {
		let snapshot = context.borrow().state.search.view();
		search.set(snapshot);
	};

	let context_in = context.clone();
	let on_input = move |ev: web_sys::Event| {
		let text = event_target_value(&ev);
		context_in.borrow_mut().state.search_input(&text);
		publish(&context_in);
	};

	let context_key = context.clone();
	let on_keydown = move |ev: KeyboardEvent| {
		let key = NavKey::from_key(&ev.key());
		if key == NavKey::Enter {
			ev.prevent_default();
		}
		context_key
			.borrow_mut()
			.state
			.search_key(key, js_sys::Date::now());
		publish(&context_key);
	};

	let reopen = {
		let context = context.clone();
		move || {
			context.borrow_mut().state.search_reopen();
			publish(&context);
		}
	};
	let reopen_click = reopen.clone();

	let context_pick = context.clone();
	let on_pick = move |ev: MouseEvent| {
		let index = ev
			.target()
			.and_then(|t| t.dyn_into::<Element>().ok())
			.and_then(|el| el.closest(".result-item").ok().flatten())
			.and_then(|el| result_index(el.get_attribute("data-index")));
		if let Some(index) = index {
			context_pick
				.borrow_mut()
				.state
				.search_activate(index, js_sys::Date::now());
			publish(&context_pick);
		}
	};

	view! {
		<div class="search-container">
			<input
				id="search-input"
				type="text"
				placeholder="Search nodes..."
				autocomplete="off"
				prop:value=move || search.with(|v| v.input.clone())
				on:input=on_input
				on:keydown=on_keydown
				on:focus=move |_| reopen()
				on:click=move |_| reopen_click()
			/>
			<div
				id="search-results"
				class="search-results"
				style:display=move || if search.with(|v| v.open) { "block" } else { "none" }
				on:click=on_pick
			>
				{move || {
					search
						.with(|v| {
							v.results
								.iter()
								.enumerate()
								.map(|(i, id)| {
									let class = result_class(v.focus == Some(i));
									view! {
										<div class=class data-index=i.to_string()>
											{id.clone()}
										</div>
									}
								})
								.collect_view()
						})
				}}
			</div>
		</div>
	}
}
