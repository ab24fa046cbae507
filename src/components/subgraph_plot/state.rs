use crate::visual::{HoverInfo, HoverMode, Visual};

/// Farthest a pointer may be from a marker, in pixels, and still hover it.
pub const HOVER_DISTANCE: f64 = 20.0;
/// Width reserved right of the plot area for the colorbar and its labels.
pub const COLORBAR_SPACE: f64 = 90.0;
/// Gap between the plot area and the colorbar.
pub const COLORBAR_GAP: f64 = 10.0;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Rectangle inside the canvas where data is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

impl PlotArea {
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
	x_min: f64,
	x_max: f64,
	y_min: f64,
	y_max: f64,
}

impl Bounds {
	fn of(visual: &Visual) -> Self {
		let xs = visual.nodes.x.iter().copied().chain(visual.edges.x.iter().flatten().copied());
		let ys = visual.nodes.y.iter().copied().chain(visual.edges.y.iter().flatten().copied());
		let (x_min, x_max) = extent(xs);
		let (y_min, y_max) = extent(ys);
		Self {
			x_min,
			x_max,
			y_min,
			y_max,
		}
	}
}

fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
	let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
		(lo.min(v), hi.max(v))
	});
	if min.is_finite() && max.is_finite() {
		(min, max)
	} else {
		(0.0, 1.0)
	}
}

/// Where `value` falls between `min` and `max`; the middle for a flat range.
fn fraction(value: f64, min: f64, max: f64) -> f64 {
	if max > min {
		(value - min) / (max - min)
	} else {
		0.5
	}
}

/// A visual placed on a canvas, plus the pointer interaction state.
pub struct PlotState {
	pub visual: Visual,
	pub width: f64,
	pub height: f64,
	pub area: PlotArea,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hovered: Option<usize>,
	bounds: Bounds,
}

impl PlotState {
	pub fn new(visual: Visual, width: f64, height: f64) -> Self {
		let margin = visual.layout.margin;
		let colorbar = if visual.nodes.marker.show_scale {
			COLORBAR_SPACE
		} else {
			0.0
		};
		let area = PlotArea {
			left: margin.l,
			top: margin.t,
			width: (width - margin.l - margin.r - colorbar).max(1.0),
			height: (height - margin.t - margin.b).max(1.0),
		};

		Self {
			bounds: Bounds::of(&visual),
			visual,
			width,
			height,
			area,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			pan: PanState::default(),
			hovered: None,
		}
	}

	/// Data coordinates to canvas pixels, after pan and zoom.
	pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
		// Inset by one marker so points on the bounds are drawn whole
		let pad = self.visual.nodes.marker.size.min(self.area.width / 4.0);
		let b = self.bounds;
		let bx = self.area.left
			+ pad + fraction(x, b.x_min, b.x_max) * (self.area.width - 2.0 * pad);
		let by = self.area.top
			+ pad + (1.0 - fraction(y, b.y_min, b.y_max)) * (self.area.height - 2.0 * pad);
		(
			bx * self.transform.k + self.transform.x,
			by * self.transform.k + self.transform.y,
		)
	}

	/// Canvas position of node `idx` of the node trace.
	pub fn node_position(&self, idx: usize) -> Option<(f64, f64)> {
		let x = *self.visual.nodes.x.get(idx)?;
		let y = *self.visual.nodes.y.get(idx)?;
		Some(self.project(x, y))
	}

	/// The marker closest to a canvas position, within [`HOVER_DISTANCE`].
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		if self.visual.layout.hover_mode == HoverMode::Off
			|| self.visual.nodes.hover_info == HoverInfo::Skip
		{
			return None;
		}

		let mut closest: Option<(usize, f64)> = None;
		for idx in 0..self.visual.nodes.len() {
			let Some((x, y)) = self.node_position(idx) else {
				continue;
			};
			let dist = ((x - sx).powi(2) + (y - sy).powi(2)).sqrt();
			if dist <= HOVER_DISTANCE && closest.is_none_or(|(_, best)| dist < best) {
				closest = Some((idx, dist));
			}
		}
		closest.map(|(idx, _)| idx)
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<usize>) -> bool {
		if self.hovered == node {
			return false;
		}
		self.hovered = node;
		true
	}

	pub fn start_pan(&mut self, sx: f64, sy: f64) {
		self.pan.active = true;
		self.pan.start_x = sx;
		self.pan.start_y = sy;
		self.pan.transform_start_x = self.transform.x;
		self.pan.transform_start_y = self.transform.y;
	}

	/// Moves the view with the pointer. Returns false when no pan is active.
	pub fn pan_to(&mut self, sx: f64, sy: f64) -> bool {
		if !self.pan.active {
			return false;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		true
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms around the pointer; scrolling down zooms out.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{ComponentSelection, GraphStore};
	use crate::visual::render;

	const TRIANGLE: &str = r#"{
		"nodes": [
			{ "id": "left", "pos": [0.0, 0.0] },
			{ "id": "right", "pos": [4.0, 0.0] },
			{ "id": "top", "pos": [2.0, 2.0] }
		],
		"links": [
			{ "source": "left", "target": "right" },
			{ "source": "right", "target": "top" },
			{ "source": "top", "target": "left" }
		]
	}"#;

	fn state() -> PlotState {
		let graph = GraphStore::new(TRIANGLE, ComponentSelection::Largest)
			.load()
			.unwrap();
		let visual = render(&graph, "top").unwrap().with_canvas(500, 300, true);
		PlotState::new(visual, 500.0, 300.0)
	}

	fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
		assert!(
			(actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
			"{actual:?} != {expected:?}"
		);
	}

	#[test]
	fn plot_area_leaves_room_for_margins_and_colorbar() {
		let s = state();
		assert_eq!(
			s.area,
			PlotArea {
				left: 5.0,
				top: 40.0,
				width: 500.0 - 5.0 - 5.0 - COLORBAR_SPACE,
				height: 300.0 - 40.0 - 20.0,
			}
		);
	}

	#[test]
	fn projection_maps_bounds_inside_area() {
		let s = state();
		let pad = s.visual.nodes.marker.size;
		// Minimum x, minimum y lands bottom-left; y grows upwards
		assert_close(
			s.project(0.0, 0.0),
			(s.area.left + pad, s.area.bottom() - pad),
		);
		assert_close(s.project(4.0, 2.0), (s.area.right() - pad, s.area.top + pad));
	}

	#[test]
	fn hover_picks_closest_marker() {
		let s = state();
		let (x, y) = s.node_position(2).unwrap();
		assert_eq!(s.visual.nodes.ids[2], "top");
		assert_eq!(s.node_at_position(x + 3.0, y - 2.0), Some(2));
		assert_eq!(s.node_at_position(x + HOVER_DISTANCE + 1.0, y), None);
	}

	#[test]
	fn hover_disabled_by_layout() {
		let mut s = state();
		let (x, y) = s.node_position(0).unwrap();
		s.visual.layout.hover_mode = HoverMode::Off;
		assert_eq!(s.node_at_position(x, y), None);
	}

	#[test]
	fn set_hover_reports_changes() {
		let mut s = state();
		assert!(s.set_hover(Some(1)));
		assert!(!s.set_hover(Some(1)));
		assert!(s.set_hover(None));
	}

	#[test]
	fn zoom_keeps_pointer_fixed() {
		let mut s = state();
		let before = s.project(2.0, 2.0);
		s.zoom_at(before.0, before.1, -1.0);
		assert!((s.transform.k - 1.1).abs() < 1e-12);
		assert_close(s.project(2.0, 2.0), before);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut s = state();
		for _ in 0..100 {
			s.zoom_at(0.0, 0.0, 1.0);
		}
		assert!((s.transform.k - MIN_ZOOM).abs() < 1e-12);
	}

	#[test]
	fn pan_shifts_projection() {
		let mut s = state();
		let before = s.project(0.0, 0.0);
		assert!(!s.pan_to(10.0, 10.0));

		s.start_pan(100.0, 100.0);
		assert!(s.pan_to(130.0, 80.0));
		s.end_pan();

		assert_close(s.project(0.0, 0.0), (before.0 + 30.0, before.1 - 20.0));
		assert!(!s.pan_to(0.0, 0.0));
	}
}
