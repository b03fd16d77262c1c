//! Backend-agnostic drawing commands.
//!
//! A [`CommandList`] is the only thing the engine hands to the graphics
//! layer. Commands carry primitive geometry and colours only, and their order
//! is the paint order. `Save`/`Restore` bracket transform and clip changes.

use nebula_core::geometry::Rect;
use nebula_core::math::Vec2;

use crate::color::Color;
use crate::node::{ImageHandle, TextAlign};

/// Outline of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Fill and/or outline of a shape. Both absent draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill the whole surface.
    Clear { color: Color },
    /// Push the current transform and clip.
    Save,
    /// Pop the transform and clip pushed by the matching `Save`.
    Restore,
    Translate { x: f32, y: f32 },
    Scale { x: f32, y: f32 },
    /// Rotate about the current origin.
    Rotate { radians: f32 },
    /// Intersect the clip with `rect`.
    ClipRect { rect: Rect<f32> },
    Rect {
        rect: Rect<f32>,
        style: ShapeStyle,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        style: ShapeStyle,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    PolygonFill { points: Vec<Vec2>, color: Color },
    PolygonStroke {
        points: Vec<Vec2>,
        color: Color,
        width: f32,
    },
    /// `position.y` is the top of the line; `position.x` is the left edge,
    /// centre or right edge of the text per `align`.
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    ImageRect {
        image: ImageHandle,
        rect: Rect<f32>,
        tint: Color,
        /// Radians about the rect centre.
        rotation: Option<f32>,
    },
}

/// Receives commands in order. Implemented by graphics backends.
pub trait CommandExecutor {
    fn begin_frame(&mut self) {}

    fn execute(&mut self, command: &Command);

    fn end_frame(&mut self) {}
}

/// Ordered command list for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Replay the list into `executor`, wrapped in one frame.
    pub fn execute(&self, executor: &mut impl CommandExecutor) {
        executor.begin_frame();
        for command in &self.commands {
            executor.execute(command);
        }
        executor.end_frame();
    }
}

impl<'l> IntoIterator for &'l CommandList {
    type Item = &'l Command;
    type IntoIter = std::slice::Iter<'l, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        frames: usize,
        commands: usize,
        open: bool,
    }

    impl CommandExecutor for Counter {
        fn begin_frame(&mut self) {
            self.open = true;
        }

        fn execute(&mut self, _command: &Command) {
            assert!(self.open);
            self.commands += 1;
        }

        fn end_frame(&mut self) {
            self.open = false;
            self.frames += 1;
        }
    }

    #[test]
    fn test_execute_brackets_frame() {
        let mut list = CommandList::new();
        list.push(Command::Clear { color: Color::BLACK });
        list.push(Command::Save);
        list.push(Command::Restore);

        let mut counter = Counter::default();
        list.execute(&mut counter);
        assert_eq!(counter.frames, 1);
        assert_eq!(counter.commands, 3);
        assert!(!counter.open);
    }
}
