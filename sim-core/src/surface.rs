//! The drawing boundary between the simulation and its host.

use crate::{
    gradient::Gradient,
    style::{Rgba, Stroke},
};
use glam::Vec2;

/// A 2D drawing target in surface coordinates: origin at the top-left,
/// `x` to the right, `y` down.
pub trait Surface {
    /// Fills the rectangle `(0, 0)..(width, height)` with `gradient`.
    fn fill_gradient(&mut self, gradient: &Gradient, width: f32, height: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke);
}

/// A single call made on a [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Gradient {
        gradient: Gradient,
        width: f32,
        height: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Ring {
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    },
}

/// A headless surface that records every draw call in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
    }

    pub fn rings(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Ring { .. }))
    }
}

impl Surface for Recorder {
    fn fill_gradient(&mut self, gradient: &Gradient, width: f32, height: f32) {
        self.commands.push(DrawCommand::Gradient {
            gradient: gradient.clone(),
            width,
            height,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke) {
        self.commands.push(DrawCommand::Ring {
            center,
            radius,
            stroke,
        });
    }
}
