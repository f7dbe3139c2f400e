//! SVG generation

use glam::dvec2;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::defaults;
use super::{Renderer, fmt_num_precision};
use crate::errors::RenderError;
use crate::path::Bounds;
use crate::point::Point;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Presentation settings for [`SvgRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    /// Space added around the drawn bounds on every side
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            stroke: defaults::STROKE.to_string(),
            stroke_width: defaults::STROKE_WIDTH,
            fill: defaults::FILL.to_string(),
            margin: defaults::MARGIN,
        }
    }
}

/// Builds a standalone SVG document, one `<path>` element per `begin_path`.
///
/// Incoming coordinates are y-up; they are flipped on the way in so the
/// picture is not upside down in SVG's y-down space.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    options: SvgOptions,
    paths: Vec<String>,
    current: Option<String>,
    bounds: Option<Bounds>,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SvgOptions) -> Self {
        SvgRenderer {
            options,
            ..Self::default()
        }
    }

    fn flush(&mut self) {
        if let Some(data) = self.current.take().filter(|d| !d.is_empty()) {
            self.paths.push(data);
        }
    }

    fn segment(&mut self, cmd: char, x: f64, y: f64) {
        let p = Point::new(snap(x), snap(-y));
        match self.bounds.as_mut() {
            Some(bounds) => bounds.expand_point(p),
            None => self.bounds = Some(Bounds::at(p)),
        }

        let data = self.current.get_or_insert_with(String::new);
        // A line with nothing to start from behaves like a move
        let cmd = if data.is_empty() { 'M' } else { cmd };
        if !data.is_empty() {
            data.push(' ');
        }
        data.push(cmd);
        data.push_str(&fmt_num_precision(p.x, defaults::SVG_SIG_FIGS));
        data.push(' ');
        data.push_str(&fmt_num_precision(p.y, defaults::SVG_SIG_FIGS));
    }

    /// Finish the document.
    pub fn finish(mut self) -> Result<String, RenderError> {
        self.flush();
        let bounds = match self.bounds {
            Some(bounds) if !self.paths.is_empty() => bounds,
            _ => return Err(RenderError::EmptyDrawing),
        };
        if !bounds.is_finite() {
            return Err(RenderError::InvalidBounds);
        }

        let margin = dvec2(self.options.margin, self.options.margin);
        let min = bounds.min - margin;
        let size = (bounds.max + margin) - min;
        if !size.is_finite() {
            return Err(RenderError::InvalidBounds);
        }

        crate::log::debug!(
            min_x = min.x,
            min_y = min.y,
            width = size.x,
            height = size.y,
            paths = self.paths.len(),
            "svg viewBox"
        );

        let num = |v: f64| fmt_num_precision(v, defaults::SVG_SIG_FIGS);
        let view_box = [min.x, min.y, size.x, size.y].map(num).join(" ");
        let stroke_width = num(self.options.stroke_width);

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", SVG_NS));
        svg.push_attribute(("viewBox", view_box.as_str()));

        let mut writer = Writer::new(Vec::new());
        write(&mut writer, Event::Start(svg))?;
        write(&mut writer, Event::Text(BytesText::new("\n")))?;
        for data in &self.paths {
            let mut path = BytesStart::new("path");
            path.push_attribute(("d", data.as_str()));
            path.push_attribute(("fill", self.options.fill.as_str()));
            path.push_attribute(("stroke", self.options.stroke.as_str()));
            path.push_attribute(("stroke-width", stroke_width.as_str()));
            write(&mut writer, Event::Empty(path))?;
            write(&mut writer, Event::Text(BytesText::new("\n")))?;
        }
        write(&mut writer, Event::End(BytesEnd::new("svg")))?;
        write(&mut writer, Event::Text(BytesText::new("\n")))?;

        String::from_utf8(writer.into_inner()).map_err(|e| RenderError::Write {
            message: e.to_string(),
        })
    }
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), RenderError> {
    writer.write_event(event).map_err(|e| RenderError::Write {
        message: e.to_string(),
    })
}

/// Rotation noise such as `1e-15` would otherwise print as a long decimal.
fn snap(v: f64) -> f64 {
    if v.abs() < defaults::SNAP_EPSILON { 0.0 } else { v }
}

impl Renderer for SvgRenderer {
    fn begin_path(&mut self) {
        self.flush();
        self.current = Some(String::new());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.segment('M', x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.segment('L', x, y);
    }

    fn close_path(&mut self) {
        if let Some(data) = self.current.as_mut().filter(|d| !d.is_empty()) {
            data.push_str(" Z");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(r: &mut impl Renderer) {
        r.begin_path();
        r.move_to(0.0, 0.0);
        r.line_to(10.0, 0.0);
        r.line_to(10.0, 5.0);
        r.close_path();
    }

    #[test]
    fn renders_flipped_path_with_view_box() {
        let mut svg = SvgRenderer::with_options(SvgOptions {
            margin: 1.0,
            ..SvgOptions::default()
        });
        triangle(&mut svg);
        insta::assert_snapshot!(svg.finish().unwrap().trim_end(), @r#"
        <svg xmlns="http://www.w3.org/2000/svg" viewBox="-1 -6 12 7">
        <path d="M0 0 L10 0 L10 -5 Z" fill="none" stroke="black" stroke-width="0.5"/>
        </svg>
        "#);
    }

    #[test]
    fn presentation_attributes_are_escaped() {
        let mut svg = SvgRenderer::with_options(SvgOptions {
            stroke: "red\" onload=\"x".to_string(),
            fill: "a<b&c".to_string(),
            ..SvgOptions::default()
        });
        triangle(&mut svg);
        let doc = svg.finish().unwrap();
        assert!(doc.contains("stroke=\"red&quot; onload=&quot;x\""), "{doc}");
        assert!(doc.contains("fill=\"a&lt;b&amp;c\""), "{doc}");
        assert!(!doc.contains("onload=\"x\""), "{doc}");
        assert_eq!(doc.matches('<').count(), 3, "{doc}");
    }

    #[test]
    fn one_element_per_subpath() {
        let mut svg = SvgRenderer::new();
        triangle(&mut svg);
        triangle(&mut svg);
        let doc = svg.finish().unwrap();
        assert_eq!(doc.matches("<path ").count(), 2);
    }

    #[test]
    fn line_without_move_starts_subpath() {
        let mut svg = SvgRenderer::new();
        svg.begin_path();
        svg.line_to(1.0, 1.0);
        svg.line_to(2.0, 1.0);
        let doc = svg.finish().unwrap();
        assert!(doc.contains("d=\"M1 -1 L2 -1\""), "{doc}");
    }

    #[test]
    fn nothing_drawn_is_an_error() {
        assert_eq!(SvgRenderer::new().finish(), Err(RenderError::EmptyDrawing));

        let mut svg = SvgRenderer::new();
        svg.begin_path();
        svg.close_path();
        assert_eq!(svg.finish(), Err(RenderError::EmptyDrawing));
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        let mut svg = SvgRenderer::new();
        svg.begin_path();
        svg.move_to(f64::INFINITY, 0.0);
        svg.line_to(1.0, 1.0);
        assert_eq!(svg.finish(), Err(RenderError::InvalidBounds));
    }

    #[test]
    fn overflowing_extent_is_rejected() {
        let mut svg = SvgRenderer::new();
        svg.begin_path();
        svg.move_to(-f64::MAX, 0.0);
        svg.line_to(f64::MAX, 1.0);
        assert_eq!(svg.finish(), Err(RenderError::InvalidBounds));
    }
}
