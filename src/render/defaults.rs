//! Default render settings (in drawing units, the same units as the path)

pub const STROKE: &str = "black";
pub const FILL: &str = "none";
pub const STROKE_WIDTH: f64 = 0.5;
pub const MARGIN: f64 = 5.0;
/// Significant figures for SVG path coordinates
pub const SVG_SIG_FIGS: i32 = 6;
/// SVG coordinates closer to zero than this are written as `0`
pub const SNAP_EPSILON: f64 = 1e-9;
/// Feed rate for the first cutting move, in units per minute
pub const FEED_RATE: f64 = 600.0;
