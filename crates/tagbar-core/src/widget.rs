//! The [`Widget`] trait and the paint surface it draws on.
//!
//! A widget is sized with [`Widget::measure`], placed with
//! [`Widget::layout`] and drawn with [`Widget::paint`]. Direct pointer input
//! arrives through [`Widget::event`]; widgets that must also react to clicks
//! landing *elsewhere* implement [`ClickTarget`](crate::ClickTarget) and
//! subscribe to a [`ClickDispatcher`](crate::ClickDispatcher).
//!
//! # Examples
//!
//! ```
//! use tagbar_core::TypeId;
//!
//! assert_eq!(TypeId::of::<u8>(), TypeId::of::<u8>());
//! assert_ne!(TypeId::of::<u8>(), TypeId::of::<String>());
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Value a widget emits in response to input; callers downcast it.
pub type Message = Box<dyn Any + Send>;

/// Identifies a concrete widget type behind `dyn Widget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Identifier of `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Outcome of [`Widget::layout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Size the widget settled on
    pub size: Size,
}

/// Something that can be measured, placed, painted and clicked.
pub trait Widget: Send + Sync {
    /// Concrete type of this widget.
    fn type_id(&self) -> TypeId;

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept `bounds` as the widget's rendered region.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Draw at the bounds from the last layout.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// React to pointer input aimed at this widget.
    fn event(&mut self, event: &Event) -> Option<Message>;

    /// Whether the widget takes pointer input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Name announced by assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Role announced by assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Stable id for test queries (`data-testid`).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Region from the last layout.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Paint surface.
pub trait Canvas {
    /// Solid rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Rectangle outline `width` pixels wide.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Single line of text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// Font settings for [`Canvas::draw_text`].
///
/// # Examples
///
/// ```
/// use tagbar_core::{FontWeight, TextStyle};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 14.0);
/// assert_eq!(style.weight, FontWeight::Normal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Fill color
    pub color: Color,
    /// Weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// 400
    #[default]
    Normal,
    /// 600, used for open toggles
    Semibold,
}

/// ARIA role of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// No specific role
    #[default]
    Generic,
    /// Two-state checkbox
    Checkbox,
}
