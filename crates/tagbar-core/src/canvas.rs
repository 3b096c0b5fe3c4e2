//! In-memory [`Canvas`] used to inspect what widgets paint.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// Canvas that keeps every paint call as a [`DrawCommand`], in order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything painted so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many paint calls were made.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was painted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { content, .. } => Some(content.as_str()),
            DrawCommand::Rect { .. } => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::filled_rect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let stroke = StrokeStyle { color, width };
        self.commands.push(DrawCommand::stroked_rect(rect, stroke));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_owned(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BoxStyle;

    #[test]
    fn test_starts_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.texts().count(), 0);
    }

    #[test]
    fn test_records_in_call_order() {
        let swatch = Rect::new(2.0, 2.0, 12.0, 12.0);
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(swatch, Color::WHITE);
        canvas.stroke_rect(swatch, Color::BLACK, 1.5);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Rect {
                    bounds: swatch,
                    style: BoxStyle::fill(Color::WHITE),
                },
                DrawCommand::Rect {
                    bounds: swatch,
                    style: BoxStyle::stroke(StrokeStyle {
                        color: Color::BLACK,
                        width: 1.5,
                    }),
                },
            ]
        );
    }

    #[test]
    fn test_texts_skip_rects() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("Grid", Point::ORIGIN, &TextStyle::default());
        canvas.fill_rect(Rect::default(), Color::BLACK);
        canvas.draw_text("Snap", Point::new(80.0, 0.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 3);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Grid", "Snap"]);
    }
}
