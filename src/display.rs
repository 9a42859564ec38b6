//! Drawing collaborators consumed by the button renderer
//!
//! The renderer never touches pixels itself. Everything it draws goes
//! through a [`Display`], and text is measured through [`FontMetrics`].
//! `view::backend::PixelDisplay` is the in-memory implementation; tests
//! use a recording double.

use crate::button::{Drawable, FontId, Visual};
use crate::icon::Icon;

/// Integer rectangle in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// What to put in an icon box
#[derive(Debug, Clone, Copy)]
pub enum IconRef<'a> {
    /// Placeholder square, drawn in the tint color
    Placeholder,
    /// A real icon resource
    Image(&'a Icon),
}

/// A drawing target holding surfaces addressed by [`Drawable`] handles.
///
/// Colors are ARGB pixels. Lines include both endpoints; rectangles cover
/// exactly `width × height` pixels.
pub trait Display {
    /// Per-render drawing state
    type Context;

    fn acquire_context(&mut self, drawable: Drawable) -> Self::Context;

    fn release_context(&mut self, context: Self::Context);

    fn fill_solid_rect(&mut self, drawable: Drawable, context: &Self::Context, color: u32, rect: Rect);

    /// Fill `rect` with colors running from `from` at the left column to
    /// `to` at the right column, constant down each column.
    fn fill_horizontal_gradient(
        &mut self,
        drawable: Drawable,
        context: &Self::Context,
        from: u32,
        to: u32,
        rect: Rect,
    );

    #[allow(clippy::too_many_arguments)]
    fn draw_line(
        &mut self,
        drawable: Drawable,
        context: &Self::Context,
        color: u32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    );

    fn draw_rect_outline(&mut self, drawable: Drawable, context: &Self::Context, color: u32, rect: Rect);

    /// Draw (and scale) an icon into `rect`
    fn draw_icon(&mut self, visual: &Visual, icon: IconRef<'_>, drawable: Drawable, tint: u32, rect: Rect);

    /// Draw `text` with its top-left corner at (x, y), clipped to `max_width`
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        visual: &Visual,
        drawable: Drawable,
        font: FontId,
        color: u32,
        x: i32,
        y: i32,
        max_width: i32,
        text: &str,
    );
}

/// Text measurement
pub trait FontMetrics {
    /// Natural width of `text` in pixels
    fn text_width(&self, font: FontId, text: &str) -> i32;

    /// Line height of `font` in pixels
    fn text_height(&self, font: FontId) -> i32;
}

/// A drawing context held for the duration of one render.
///
/// The context is released when the scope is dropped, whichever drawing
/// steps ran before that.
pub struct DrawScope<'d, D: Display> {
    display: &'d mut D,
    drawable: Drawable,
    context: Option<D::Context>,
}

impl<'d, D: Display> DrawScope<'d, D> {
    pub fn acquire(display: &'d mut D, drawable: Drawable) -> Self {
        let context = display.acquire_context(drawable);
        Self {
            display,
            drawable,
            context: Some(context),
        }
    }

    /// The display behind this scope (for measurement and icon/text calls)
    #[inline]
    pub fn display(&self) -> &D {
        &*self.display
    }

    #[inline]
    pub fn drawable(&self) -> Drawable {
        self.drawable
    }

    /// Run `f` with the display and the live context
    fn with_context(&mut self, f: impl FnOnce(&mut D, Drawable, &D::Context)) {
        if let Some(context) = self.context.as_ref() {
            f(&mut *self.display, self.drawable, context);
        }
    }

    pub fn fill_solid_rect(&mut self, color: u32, rect: Rect) {
        self.with_context(|d, drawable, ctx| d.fill_solid_rect(drawable, ctx, color, rect));
    }

    pub fn fill_horizontal_gradient(&mut self, from: u32, to: u32, rect: Rect) {
        self.with_context(|d, drawable, ctx| {
            d.fill_horizontal_gradient(drawable, ctx, from, to, rect)
        });
    }

    pub fn draw_line(&mut self, color: u32, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.with_context(|d, drawable, ctx| d.draw_line(drawable, ctx, color, x1, y1, x2, y2));
    }

    pub fn draw_rect_outline(&mut self, color: u32, rect: Rect) {
        self.with_context(|d, drawable, ctx| d.draw_rect_outline(drawable, ctx, color, rect));
    }

    pub fn draw_icon(&mut self, visual: &Visual, icon: IconRef<'_>, tint: u32, rect: Rect) {
        self.display.draw_icon(visual, icon, self.drawable, tint, rect);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        visual: &Visual,
        font: FontId,
        color: u32,
        x: i32,
        y: i32,
        max_width: i32,
        text: &str,
    ) {
        self.display
            .draw_text(visual, self.drawable, font, color, x, y, max_width, text);
    }
}

impl<D: Display> Drop for DrawScope<'_, D> {
    fn drop(&mut self) {
        if let Some(context) = self.context.take() {
            self.display.release_context(context);
        }
    }
}
