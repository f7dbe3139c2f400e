//! G-code output.
//!
//! `move_to` is a rapid positioning move (`G0`), `line_to` a linear cut
//! (`G1`). Coordinates use the same two-decimal form as [`Point`]'s text.
//!
//! [`Point`]: crate::point::Point

use super::{Renderer, defaults};
use crate::point::fmt_coord;

#[derive(Debug, Clone)]
pub struct GcodeRenderer {
    lines: Vec<String>,
    feed_rate: Option<f64>,
    feed_emitted: bool,
    subpath_start: Option<(f64, f64)>,
}

impl Default for GcodeRenderer {
    fn default() -> Self {
        GcodeRenderer {
            lines: Vec::new(),
            feed_rate: Some(defaults::FEED_RATE),
            feed_emitted: false,
            subpath_start: None,
        }
    }
}

impl GcodeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed rate attached to the first cutting move; `None` omits `F`.
    pub fn with_feed_rate(mut self, feed_rate: Option<f64>) -> Self {
        self.feed_rate = feed_rate;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The program, one command per line.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    fn cut(&mut self, x: f64, y: f64) {
        let mut line = format!("G1 X{} Y{}", fmt_coord(x), fmt_coord(y));
        if !self.feed_emitted {
            if let Some(feed) = self.feed_rate {
                line.push_str(&format!(" F{}", fmt_coord(feed)));
            }
            self.feed_emitted = true;
        }
        self.lines.push(line);
    }
}

impl Renderer for GcodeRenderer {
    fn begin_path(&mut self) {
        self.subpath_start = None;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.lines
            .push(format!("G0 X{} Y{}", fmt_coord(x), fmt_coord(y)));
        self.subpath_start = Some((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if self.subpath_start.is_none() {
            self.move_to(x, y);
            return;
        }
        self.cut(x, y);
    }

    fn close_path(&mut self) {
        if let Some((x, y)) = self.subpath_start {
            self.cut(x, y);
        }
    }
}
