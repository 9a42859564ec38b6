//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bevel::button::{Drawable, FontId, Visual};
use bevel::display::{Display, FontMetrics, IconRef, Rect};
use bevel::theme::{Color, ColorId, ColorTable, DecorationSettings, Decorations, Theme};

/// Advance of every glyph in the synthetic font
pub const CHAR_WIDTH: i32 = 8;

/// Line height of the synthetic font
pub const LINE_HEIGHT: i32 = 10;

/// Icon as seen by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Placeholder,
    Image { width: u32, height: u32 },
}

/// One recorded primitive call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    FillSolid {
        color: u32,
        rect: Rect,
    },
    FillGradient {
        from: u32,
        to: u32,
        rect: Rect,
    },
    Line {
        color: u32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Outline {
        color: u32,
        rect: Rect,
    },
    Icon {
        icon: IconKind,
        tint: u32,
        rect: Rect,
    },
    Text {
        font: FontId,
        color: u32,
        x: i32,
        y: i32,
        max_width: i32,
        text: String,
    },
}

/// Display double that records every primitive and measures text with a
/// fixed-advance font
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub ops: Vec<DrawOp>,
    pub acquired: usize,
    pub released: usize,
    pub drawables: Vec<Drawable>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillSolid { .. } | DrawOp::FillGradient { .. }))
            .collect()
    }

    pub fn lines(&self) -> Vec<(u32, i32, i32, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Line { color, x1, y1, x2, y2 } => Some((color, x1, y1, x2, y2)),
                _ => None,
            })
            .collect()
    }

    pub fn icons(&self) -> Vec<(IconKind, u32, Rect)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Icon { icon, tint, rect } => Some((icon, tint, rect)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }
}

impl Display for RecordingDisplay {
    type Context = usize;

    fn acquire_context(&mut self, drawable: Drawable) -> usize {
        self.acquired += 1;
        self.drawables.push(drawable);
        self.acquired
    }

    fn release_context(&mut self, _context: usize) {
        self.released += 1;
    }

    fn fill_solid_rect(&mut self, _drawable: Drawable, _context: &usize, color: u32, rect: Rect) {
        self.ops.push(DrawOp::FillSolid { color, rect });
    }

    fn fill_horizontal_gradient(
        &mut self,
        _drawable: Drawable,
        _context: &usize,
        from: u32,
        to: u32,
        rect: Rect,
    ) {
        self.ops.push(DrawOp::FillGradient { from, to, rect });
    }

    fn draw_line(
        &mut self,
        _drawable: Drawable,
        _context: &usize,
        color: u32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) {
        self.ops.push(DrawOp::Line { color, x1, y1, x2, y2 });
    }

    fn draw_rect_outline(&mut self, _drawable: Drawable, _context: &usize, color: u32, rect: Rect) {
        self.ops.push(DrawOp::Outline { color, rect });
    }

    fn draw_icon(&mut self, _visual: &Visual, icon: IconRef<'_>, _drawable: Drawable, tint: u32, rect: Rect) {
        let icon = match icon {
            IconRef::Placeholder => IconKind::Placeholder,
            IconRef::Image(icon) => {
                let (width, height) = icon.primary_size().unwrap_or((0, 0));
                IconKind::Image { width, height }
            }
        };
        self.ops.push(DrawOp::Icon { icon, tint, rect });
    }

    fn draw_text(
        &mut self,
        _visual: &Visual,
        _drawable: Drawable,
        font: FontId,
        color: u32,
        x: i32,
        y: i32,
        max_width: i32,
        text: &str,
    ) {
        self.ops.push(DrawOp::Text {
            font,
            color,
            x,
            y,
            max_width,
            text: text.to_string(),
        });
    }
}

impl FontMetrics for RecordingDisplay {
    fn text_width(&self, _font: FontId, text: &str) -> i32 {
        text.chars().count() as i32 * CHAR_WIDTH
    }

    fn text_height(&self, _font: FontId) -> i32 {
        LINE_HEIGHT
    }
}

/// Distinct color per palette slot so tests can tell them apart
pub fn slot_color(id: ColorId) -> Color {
    let index = ColorId::ALL.iter().position(|c| *c == id).unwrap_or(0) as u8;
    Color::rgb(index + 1, 0x10, 0x20)
}

/// Theme where every slot has its own color
pub fn synthetic_theme(menu: Decorations, tray: Decorations) -> Theme {
    Theme::new(
        "synthetic",
        ColorTable::from_fn(slot_color),
        DecorationSettings { menu, tray },
    )
}

/// Pixel the renderer will use for `id` in [`synthetic_theme`]
pub fn pixel(id: ColorId) -> u32 {
    slot_color(id).to_argb_u32()
}
