//! The plot model: two traces plus layout.

use super::scale::{ColorScale, Rgb, YL_GN_BU};

/// How a trace draws its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Lines,
	Markers,
}

/// What a trace shows on hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverInfo {
	/// Not hoverable.
	Skip,
	/// The trace's per-point text.
	Text,
}

/// How the hovered point is picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverMode {
	/// The point nearest the cursor.
	Closest,
	/// Hover disabled.
	Off,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub width: f64,
	pub color: &'static str,
}

/// Edges as one polyline; `None` entries break it into segments.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeTrace {
	pub x: Vec<Option<f64>>,
	pub y: Vec<Option<f64>>,
	pub line: Line,
	pub hover_info: HoverInfo,
	pub mode: Mode,
}

impl EdgeTrace {
	pub(crate) fn new() -> Self {
		Self {
			x: Vec::new(),
			y: Vec::new(),
			line: Line {
				width: 0.5,
				color: "#888",
			},
			hover_info: HoverInfo::Skip,
			mode: Mode::Lines,
		}
	}

	/// Appends one edge followed by a break marker.
	pub(crate) fn push_edge(&mut self, from: (f64, f64), to: (f64, f64)) {
		self.x.extend([Some(from.0), Some(to.0), None]);
		self.y.extend([Some(from.1), Some(to.1), None]);
	}

	/// Line segments between consecutive defined points.
	pub fn segments(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
		let points: Vec<Option<(f64, f64)>> = self
			.x
			.iter()
			.zip(&self.y)
			.map(|(&x, &y)| x.zip(y))
			.collect();
		(0..points.len().saturating_sub(1))
			.filter_map(move |i| points[i].zip(points[i + 1]))
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorBar {
	pub thickness: f64,
	pub title: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
	/// Value per point, mapped through the color scale.
	pub color: Vec<usize>,
	/// Diameter in pixels.
	pub size: f64,
	/// Outline width in pixels.
	pub line_width: f64,
	pub color_scale: ColorScale,
	pub reverse_scale: bool,
	pub show_scale: bool,
	pub color_bar: ColorBar,
}

impl Marker {
	/// Smallest and largest color value, if any.
	pub fn color_range(&self) -> Option<(usize, usize)> {
		let min = self.color.iter().min()?;
		let max = self.color.iter().max()?;
		Some((*min, *max))
	}

	/// Maps a value onto the color scale relative to this marker's range.
	/// A flat range lands in the middle of the scale.
	pub fn color_for(&self, value: usize) -> Rgb {
		let t = match self.color_range() {
			Some((min, max)) if max > min => (value as f64 - min as f64) / (max - min) as f64,
			_ => 0.5,
		};
		self.color_scale.color_at(t, self.reverse_scale)
	}
}

/// Nodes as markers, one entry per node in every vector.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeTrace {
	pub ids: Vec<String>,
	pub x: Vec<f64>,
	pub y: Vec<f64>,
	/// Hover label per node.
	pub text: Vec<String>,
	pub marker: Marker,
	pub hover_info: HoverInfo,
	pub mode: Mode,
}

impl NodeTrace {
	pub(crate) fn new() -> Self {
		Self {
			ids: Vec::new(),
			x: Vec::new(),
			y: Vec::new(),
			text: Vec::new(),
			marker: Marker {
				color: Vec::new(),
				size: 10.0,
				line_width: 2.0,
				color_scale: YL_GN_BU,
				reverse_scale: true,
				show_scale: true,
				color_bar: ColorBar {
					thickness: 15.0,
					title: "Node Connections".into(),
				},
			},
			hover_info: HoverInfo::Text,
			mode: Mode::Markers,
		}
	}

	pub(crate) fn push_node(&mut self, id: &str, pos: (f64, f64), degree: usize) {
		self.ids.push(id.to_owned());
		self.x.push(pos.0);
		self.y.push(pos.1);
		self.text.push(format!("{id} has {degree} connection(s)"));
		self.marker.color.push(degree);
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
	pub b: f64,
	pub l: f64,
	pub r: f64,
	pub t: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
	pub show_grid: bool,
	pub zero_line: bool,
	pub show_tick_labels: bool,
}

impl Axis {
	/// An axis with grid, zero line and ticks all hidden.
	pub const HIDDEN: Axis = Axis {
		show_grid: false,
		zero_line: false,
		show_tick_labels: false,
	};
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
	pub title: String,
	pub title_font_size: f64,
	pub show_legend: bool,
	pub hover_mode: HoverMode,
	pub margin: Margin,
	pub x_axis: Axis,
	pub y_axis: Axis,
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub autosize: bool,
}

/// A rendered neighborhood: edge trace under node trace, plus layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
	pub edges: EdgeTrace,
	pub nodes: NodeTrace,
	pub layout: Layout,
}

impl Visual {
	/// Sets the canvas size the visual is displayed at.
	pub fn with_canvas(mut self, width: u32, height: u32, autosize: bool) -> Self {
		self.layout.width = Some(width);
		self.layout.height = Some(height);
		self.layout.autosize = autosize;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segments_split_on_breaks() {
		let mut trace = EdgeTrace::new();
		trace.push_edge((0.0, 0.0), (1.0, 1.0));
		trace.push_edge((2.0, 2.0), (3.0, 3.0));

		let segments: Vec<_> = trace.segments().collect();
		assert_eq!(
			segments,
			vec![((0.0, 0.0), (1.0, 1.0)), ((2.0, 2.0), (3.0, 3.0))]
		);
	}

	#[test]
	fn empty_trace_has_no_segments() {
		assert_eq!(EdgeTrace::new().segments().count(), 0);
	}

	#[test]
	fn marker_colors_span_the_range() {
		let mut nodes = NodeTrace::new();
		nodes.push_node("a", (0.0, 0.0), 1);
		nodes.push_node("b", (0.0, 0.0), 3);
		let marker = &nodes.marker;

		assert_eq!(marker.color_range(), Some((1, 3)));
		// Reversed scale: the lowest value takes the dark end
		assert_eq!(marker.color_for(1), (8, 29, 88));
		assert_eq!(marker.color_for(3), (255, 255, 217));
	}

	#[test]
	fn flat_range_uses_scale_middle() {
		let mut nodes = NodeTrace::new();
		nodes.push_node("a", (0.0, 0.0), 2);
		assert_eq!(nodes.marker.color_for(2), YL_GN_BU.color_at(0.5, true));
	}

	#[test]
	fn node_label_format() {
		let mut nodes = NodeTrace::new();
		nodes.push_node("Doe, Jane", (0.0, 0.0), 1);
		assert_eq!(nodes.text, vec!["Doe, Jane has 1 connection(s)"]);
	}
}
