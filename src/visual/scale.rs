//! Sequential color scales for coloring markers by value.

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// A piecewise-linear color scale over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScale {
	pub name: &'static str,
	stops: &'static [(f64, Rgb)],
}

/// Yellow-green-blue, light at 0 and dark at 1.
pub const YL_GN_BU: ColorScale = ColorScale {
	name: "YlGnBu",
	stops: &[
		(0.0, (255, 255, 217)),
		(0.125, (237, 248, 217)),
		(0.25, (199, 233, 180)),
		(0.375, (127, 205, 187)),
		(0.5, (65, 182, 196)),
		(0.625, (29, 145, 192)),
		(0.75, (34, 94, 168)),
		(0.875, (37, 52, 148)),
		(1.0, (8, 29, 88)),
	],
};

impl ColorScale {
	/// Color at position `t`, clamped to `[0, 1]`. `reverse` flips the scale.
	pub fn color_at(&self, t: f64, reverse: bool) -> Rgb {
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
		let t = if reverse { 1.0 - t } else { t };

		for pair in self.stops.windows(2) {
			let ((t0, c0), (t1, c1)) = (pair[0], pair[1]);
			if t <= t1 {
				let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
				return lerp(c0, c1, f);
			}
		}
		self.stops.last().map(|&(_, c)| c).unwrap_or((0, 0, 0))
	}
}

fn lerp(a: Rgb, b: Rgb, f: f64) -> Rgb {
	let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
	(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// CSS `rgb(...)` string for a color.
pub fn css(rgb: Rgb) -> String {
	format!("rgb({}, {}, {})", rgb.0, rgb.1, rgb.2)
}

/// Whether dark text reads better than light text on `rgb`.
pub fn is_light(rgb: Rgb) -> bool {
	let luma = 0.299 * rgb.0 as f64 + 0.587 * rgb.1 as f64 + 0.114 * rgb.2 as f64;
	luma > 150.0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoints() {
		assert_eq!(YL_GN_BU.color_at(0.0, false), (255, 255, 217));
		assert_eq!(YL_GN_BU.color_at(1.0, false), (8, 29, 88));
	}

	#[test]
	fn reverse_flips_endpoints() {
		assert_eq!(YL_GN_BU.color_at(0.0, true), (8, 29, 88));
		assert_eq!(YL_GN_BU.color_at(1.0, true), (255, 255, 217));
	}

	#[test]
	fn interpolates_between_stops() {
		// Halfway between (0.5, (65,182,196)) and (0.625, (29,145,192))
		assert_eq!(YL_GN_BU.color_at(0.5625, false), (47, 164, 194));
	}

	#[test]
	fn out_of_range_is_clamped() {
		assert_eq!(YL_GN_BU.color_at(-3.0, false), YL_GN_BU.color_at(0.0, false));
		assert_eq!(YL_GN_BU.color_at(7.0, false), YL_GN_BU.color_at(1.0, false));
		assert_eq!(YL_GN_BU.color_at(f64::NAN, false), YL_GN_BU.color_at(0.0, false));
	}

	#[test]
	fn css_and_lightness() {
		assert_eq!(css((8, 29, 88)), "rgb(8, 29, 88)");
		assert!(is_light((255, 255, 217)));
		assert!(!is_light((8, 29, 88)));
	}
}
