//! Rendering surfaces for generated paths
//!
//! This module is organized into submodules:
//! - `defaults`: Default stroke, fill and margin settings
//! - `svg`: Standalone SVG documents
//! - `gcode`: Line-oriented G-code programs
//! - `recording`: A renderer that records calls, for inspection and tests
//!
//! Paths talk to every surface through [`Renderer`], the same four calls a
//! canvas-style 2D context exposes.

pub mod defaults;
pub mod gcode;
pub mod recording;
pub mod svg;

pub use gcode::GcodeRenderer;
pub use recording::{RecordingRenderer, RenderCommand};
pub use svg::{SvgOptions, SvgRenderer};

/// A surface that can trace straight-edged closed paths.
///
/// Callers invoke `begin_path`, one `move_to`, any number of `line_to`, then
/// `close_path`, which joins the current point back to the `move_to` point.
pub trait Renderer {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }
}

/// Format a number with specified significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return if value.is_finite() {
            "0".to_string()
        } else {
            value.to_string()
        };
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        return "0".to_string();
    }

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    s.to_string()
}
