//! Button records
//!
//! A [`Button`] is a plain caller-owned description of one button: what
//! kind it is, where it sits, and what it shows. The renderer only reads it.
//! Icons, text and visual settings are borrowed; the drawing surface and
//! font are named by handle. Nothing here owns or frees those resources.

pub mod layout;
pub mod render;
pub mod style;

use serde::{Deserialize, Serialize};

use crate::display::Rect;
use crate::icon::Icon;

pub use layout::ButtonLayout;
pub use render::ButtonRenderer;
pub use style::{resolve, StyleTuple};

/// Which family of button this is; selects the color palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    Label,
    #[default]
    Menu,
    MenuActive,
    Tray,
    TrayActive,
    Task,
    TaskActive,
}

impl ButtonKind {
    /// Whether this is the pressed-in variant of its family
    pub fn is_active(self) -> bool {
        matches!(
            self,
            ButtonKind::MenuActive | ButtonKind::TrayActive | ButtonKind::TaskActive
        )
    }
}

/// Horizontal placement of the icon and label group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Icon slot of a button
#[derive(Debug, Clone, Copy, Default)]
pub enum ButtonIcon<'a> {
    #[default]
    None,
    /// Square placeholder sized to fit the button
    Empty,
    /// A real icon, scaled to fit while keeping its aspect ratio
    Named(&'a Icon),
}

impl ButtonIcon<'_> {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, ButtonIcon::None)
    }
}

/// Font slot; the display maps slots to loaded faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontId {
    #[default]
    Tray,
    Menu,
    Task,
    Popup,
    Clock,
}

/// Handle naming a surface owned by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Drawable(pub u32);

/// Visual settings passed through to icon and text drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visual {
    /// Blend glyph coverage; when false, glyphs are thresholded
    pub antialias: bool,
}

impl Default for Visual {
    fn default() -> Self {
        Self { antialias: true }
    }
}

/// One button, as described by its owner
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub kind: ButtonKind,
    pub x: i32,
    pub y: i32,
    /// Always at least 1 after [`Button::reset`]
    pub width: i32,
    /// Always at least 1 after [`Button::reset`]
    pub height: i32,
    pub alignment: Alignment,
    pub icon: ButtonIcon<'a>,
    pub text: Option<&'a str>,
    pub font: FontId,
    pub fill: bool,
    pub border: bool,
    pub visual: &'a Visual,
    pub drawable: Drawable,
}

impl<'a> Button<'a> {
    /// Create a button in its reset state
    pub fn new(drawable: Drawable, visual: &'a Visual) -> Self {
        Self {
            kind: ButtonKind::Menu,
            x: 0,
            y: 0,
            width: 1,
            height: 1,
            alignment: Alignment::Left,
            icon: ButtonIcon::None,
            text: None,
            font: FontId::Tray,
            fill: true,
            border: false,
            visual,
            drawable,
        }
    }

    /// Restore every field to its default, retargeting the button
    pub fn reset(&mut self, drawable: Drawable, visual: &'a Visual) {
        *self = Self::new(drawable, visual);
    }

    /// The button's box on its surface
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move and resize in one call
    pub fn set_geometry(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_defaults() {
        let visual = Visual::default();
        let other_visual = Visual { antialias: false };
        let mut button = Button::new(Drawable(3), &visual);
        button.kind = ButtonKind::TaskActive;
        button.set_geometry(10, 20, 300, 40);
        button.alignment = Alignment::Center;
        button.icon = ButtonIcon::Empty;
        button.text = Some("xterm");
        button.font = FontId::Clock;
        button.fill = false;
        button.border = true;

        button.reset(Drawable(9), &other_visual);

        assert_eq!(button.kind, ButtonKind::Menu);
        assert_eq!(button.rect(), Rect::new(0, 0, 1, 1));
        assert_eq!(button.alignment, Alignment::Left);
        assert!(button.icon.is_none());
        assert!(button.text.is_none());
        assert_eq!(button.font, FontId::Tray);
        assert!(button.fill);
        assert!(!button.border);
        assert_eq!(button.drawable, Drawable(9));
        assert!(!button.visual.antialias);
    }

    #[test]
    fn test_active_kinds() {
        assert!(ButtonKind::MenuActive.is_active());
        assert!(ButtonKind::TaskActive.is_active());
        assert!(!ButtonKind::Label.is_active());
        assert!(!ButtonKind::Tray.is_active());
    }
}
