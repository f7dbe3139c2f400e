//! A renderer that remembers what it was asked to draw.

use super::Renderer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderCommand {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
}

/// Records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Every `move_to`/`line_to` coordinate, in call order.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                RenderCommand::MoveTo(x, y) | RenderCommand::LineTo(x, y) => Some((x, y)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_path(&mut self) {
        self.commands.push(RenderCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(RenderCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(RenderCommand::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.commands.push(RenderCommand::ClosePath);
    }
}
