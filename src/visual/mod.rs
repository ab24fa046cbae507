mod figure;
mod project;
pub mod scale;

pub use figure::{
	Axis, ColorBar, EdgeTrace, HoverInfo, HoverMode, Layout, Line, Margin, Marker, Mode, NodeTrace,
	Visual,
};
pub use project::render;
