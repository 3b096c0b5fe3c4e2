//! Draw commands recorded by [`RecordingCanvas`](crate::RecordingCanvas).
//!
//! Everything a widget paints reduces to these primitives.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Outline pen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Pen color
    pub color: Color,
    /// Line width in pixels
    pub width: f32,
}

/// How a rectangle is painted: fill, outline, or both.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxStyle {
    /// Interior color, if filled
    pub fill: Option<Color>,
    /// Outline, if stroked
    pub stroke: Option<StrokeStyle>,
}

impl BoxStyle {
    /// Interior only.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Outline only.
    #[must_use]
    pub const fn stroke(style: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(style),
        }
    }
}

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled or outlined rectangle
    Rect {
        /// Where
        bounds: Rect,
        /// How
        style: BoxStyle,
    },

    /// One line of text
    Text {
        /// The string drawn
        content: String,
        /// Top-left corner
        position: Point,
        /// Font
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Solid rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::fill(color),
        }
    }

    /// Rectangle outline.
    #[must_use]
    pub const fn stroked_rect(bounds: Rect, stroke: StrokeStyle) -> Self {
        Self::Rect {
            bounds,
            style: BoxStyle::stroke(stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_style_default_paints_nothing() {
        let style = BoxStyle::default();
        assert!(style.fill.is_none() && style.stroke.is_none());
    }

    #[test]
    fn test_rect_helpers_pick_one_style() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0);
        let pen = StrokeStyle {
            color: Color::WHITE,
            width: 2.0,
        };
        assert_eq!(
            DrawCommand::filled_rect(r, Color::BLACK),
            DrawCommand::Rect {
                bounds: r,
                style: BoxStyle {
                    fill: Some(Color::BLACK),
                    stroke: None,
                },
            }
        );
        let DrawCommand::Rect { style, .. } = DrawCommand::stroked_rect(r, pen) else {
            panic!("expected a rect");
        };
        assert_eq!(style.stroke, Some(pen));
        assert_eq!(style.fill, None);
    }
}
