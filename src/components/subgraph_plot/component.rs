use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::PlotState;
use crate::visual::{Layout, Visual};

/// Canvas size for a layout: its explicit size, else the parent element's
/// when autosizing, else the plot default of 700 x 450.
fn canvas_size(layout: &Layout, canvas: &HtmlCanvasElement) -> (f64, f64) {
	let parent = |dim: fn(&web_sys::Element) -> i32| {
		canvas
			.parent_element()
			.map(|p| dim(&p) as f64)
			.filter(|v| *v > 0.0)
	};
	let width = layout.width.map(f64::from).or_else(|| {
		layout
			.autosize
			.then(|| parent(web_sys::Element::client_width))
			.flatten()
	});
	let height = layout.height.map(f64::from).or_else(|| {
		layout
			.autosize
			.then(|| parent(web_sys::Element::client_height))
			.flatten()
	});
	(width.unwrap_or(700.0), height.unwrap_or(450.0))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

type Shared<T> = Rc<RefCell<Option<T>>>;

fn redraw(state: &Shared<PlotState>, ctx: &Shared<CanvasRenderingContext2d>) {
	if let (Some(s), Some(c)) = (&*state.borrow(), &*ctx.borrow()) {
		render::render(s, c);
	}
}

/// Draws a [`Visual`] on a canvas with hover labels, drag-to-pan and
/// wheel zoom.
#[component]
pub fn SubgraphPlot(#[prop(into)] visual: Signal<Visual>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Shared<PlotState> = Rc::new(RefCell::new(None));
	let ctx: Shared<CanvasRenderingContext2d> = Rc::new(RefCell::new(None));
	let (state_init, ctx_init) = (state.clone(), ctx.clone());

	Effect::new(move |_| {
		let visual = visual.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = canvas_size(&visual.layout, &canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(context) = context_2d(&canvas) else {
			warn!("canvas has no 2d context; subgraph not drawn");
			return;
		};
		*state_init.borrow_mut() = Some(PlotState::new(visual, w, h));
		*ctx_init.borrow_mut() = Some(context);
		redraw(&state_init, &ctx_init);
	});

	let pointer = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let (state_md, ctx_md) = (state.clone(), ctx.clone());
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.start_pan(x, y);
			s.set_hover(None);
		}
		redraw(&state_md, &ctx_md);
	};

	let (state_mm, ctx_mm) = (state.clone(), ctx.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		let changed = match *state_mm.borrow_mut() {
			Some(ref mut s) if s.pan.active => s.pan_to(x, y),
			Some(ref mut s) => {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered)
			}
			None => false,
		};
		if changed {
			redraw(&state_mm, &ctx_mm);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.end_pan();
		}
	};

	let (state_ml, ctx_ml) = (state.clone(), ctx.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.end_pan();
			s.set_hover(None);
		}
		redraw(&state_ml, &ctx_ml);
	};

	let (state_wh, ctx_wh) = (state.clone(), ctx.clone());
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
		}
		redraw(&state_wh, &ctx_wh);
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="subgraph-plot"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: crosshair;"
		/>
	}
}
