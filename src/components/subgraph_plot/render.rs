use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{COLORBAR_GAP, PlotState};
use crate::visual::scale::{self, Rgb};

const PAPER_COLOR: &str = "#ffffff";
const PLOT_COLOR: &str = "#e5ecf6";
const TEXT_COLOR: &str = "#2a3f5f";
const MARKER_OUTLINE: &str = "#ffffff";
const FONT: &str = "\"Open Sans\", verdana, arial, sans-serif";

/// Most tick labels drawn along the colorbar.
const MAX_COLORBAR_TICKS: usize = 6;

pub fn render(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(PAPER_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	let area = state.area;
	ctx.set_fill_style_str(PLOT_COLOR);
	ctx.fill_rect(area.left, area.top, area.width, area.height);

	ctx.save();
	ctx.begin_path();
	ctx.rect(area.left, area.top, area.width, area.height);
	ctx.clip();
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();

	draw_title(state, ctx);
	if state.visual.nodes.marker.show_scale {
		draw_colorbar(state, ctx);
	}
	if let Some(idx) = state.hovered {
		draw_hover_label(state, ctx, idx);
	}
}

fn draw_title(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let layout = &state.visual.layout;
	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font(&format!("{}px {}", layout.title_font_size, FONT));
	ctx.set_text_baseline("middle");
	ctx.set_text_align("left");
	let _ = ctx.fill_text(&layout.title, state.width * 0.05, layout.margin.t / 2.0);
}

fn draw_edges(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let edges = &state.visual.edges;
	ctx.set_stroke_style_str(edges.line.color);
	ctx.set_line_width(edges.line.width);
	ctx.begin_path();
	for (from, to) in edges.segments() {
		let (x1, y1) = state.project(from.0, from.1);
		let (x2, y2) = state.project(to.0, to.1);
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
	}
	ctx.stroke();
}

fn draw_nodes(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let nodes = &state.visual.nodes;
	let radius = nodes.marker.size / 2.0;
	ctx.set_line_width(nodes.marker.line_width);
	ctx.set_stroke_style_str(MARKER_OUTLINE);

	for (idx, &degree) in nodes.marker.color.iter().enumerate() {
		let Some((x, y)) = state.node_position(idx) else {
			continue;
		};
		let radius = if state.hovered == Some(idx) {
			radius * 1.4
		} else {
			radius
		};
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&scale::css(nodes.marker.color_for(degree)));
		ctx.fill();
		ctx.stroke();
	}
}

/// Integer tick values spread over `min..=max`.
fn colorbar_ticks(min: usize, max: usize) -> Vec<usize> {
	let span = max - min;
	let step = span.div_ceil(MAX_COLORBAR_TICKS - 1).max(1);
	let mut ticks: Vec<usize> = (min..=max).step_by(step).collect();
	if ticks.last() != Some(&max) {
		ticks.push(max);
	}
	ticks
}

fn draw_colorbar(state: &PlotState, ctx: &CanvasRenderingContext2d) {
	let marker = &state.visual.nodes.marker;
	let Some((min, max)) = marker.color_range() else {
		return;
	};
	let area = state.area;
	let (left, top, bottom) = (area.right() + COLORBAR_GAP, area.top, area.bottom());
	let thickness = marker.color_bar.thickness;

	// Bottom of the bar is the minimum value
	let gradient = ctx.create_linear_gradient(0.0, bottom, 0.0, top);
	const SAMPLES: usize = 16;
	for i in 0..=SAMPLES {
		let t = i as f64 / SAMPLES as f64;
		let color = marker.color_scale.color_at(t, marker.reverse_scale);
		let _ = gradient.add_color_stop(t as f32, &scale::css(color));
	}
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(left, top, thickness, bottom - top);

	ctx.set_fill_style_str(TEXT_COLOR);
	ctx.set_font(&format!("12px {FONT}"));
	ctx.set_text_baseline("middle");
	ctx.set_text_align("left");
	for tick in colorbar_ticks(min, max) {
		let t = if max > min {
			(tick - min) as f64 / (max - min) as f64
		} else {
			0.5
		};
		let y = bottom - t * (bottom - top);
		let _ = ctx.fill_text(&tick.to_string(), left + thickness + 4.0, y);
	}

	// Title runs along the right side of the bar
	ctx.save();
	let _ = ctx.translate(left + thickness + 36.0, (top + bottom) / 2.0);
	let _ = ctx.rotate(PI / 2.0);
	ctx.set_font(&format!("14px {FONT}"));
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&marker.color_bar.title, 0.0, 0.0);
	ctx.restore();
}

fn draw_hover_label(state: &PlotState, ctx: &CanvasRenderingContext2d, idx: usize) {
	let nodes = &state.visual.nodes;
	let (Some((x, y)), Some(text), Some(&degree)) = (
		state.node_position(idx),
		nodes.text.get(idx),
		nodes.marker.color.get(idx),
	) else {
		return;
	};
	let fill: Rgb = nodes.marker.color_for(degree);

	ctx.set_font(&format!("13px {FONT}"));
	ctx.set_text_baseline("middle");
	ctx.set_text_align("left");
	let text_width = ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0);
	let (box_w, box_h) = (text_width + 12.0, 22.0);

	// Flip to the left of the point when the label would leave the canvas
	let offset = nodes.marker.size;
	let box_x = if x + offset + box_w > state.width {
		x - offset - box_w
	} else {
		x + offset
	};
	let box_y = y - box_h / 2.0;

	ctx.set_fill_style_str(&scale::css(fill));
	ctx.fill_rect(box_x, box_y, box_w, box_h);
	ctx.set_stroke_style_str(if scale::is_light(fill) { "#444" } else { "#fff" });
	ctx.set_line_width(1.0);
	ctx.stroke_rect(box_x, box_y, box_w, box_h);
	ctx.set_fill_style_str(if scale::is_light(fill) { "#000" } else { "#fff" });
	let _ = ctx.fill_text(text, box_x + 6.0, y);
}
