//! In-memory display
//!
//! `PixelDisplay` owns a set of ARGB surfaces and the loaded fonts, and
//! implements the drawing collaborators on top of [`Frame`] and
//! [`TextPainter`].

use std::collections::HashMap;
use std::path::Path;

use crate::button::{Drawable, FontId, Visual};
use crate::display::{Display, FontMetrics, IconRef, Rect};

use super::frame::Frame;
use super::text::{FontFace, TextPainter};

/// An ARGB pixel surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or 0 outside the surface
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            0
        }
    }

    /// Drawing wrapper over this surface
    pub fn frame(&mut self) -> Frame<'_> {
        Frame::new(&mut self.pixels, self.width, self.height)
    }

    /// Convert to an RGBA8 image
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let p = self.pixel(x as usize, y as usize);
            image::Rgba([(p >> 16) as u8, (p >> 8) as u8, p as u8, (p >> 24) as u8])
        })
    }

    /// Write the surface as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }
}

/// Drawing context handed out by [`PixelDisplay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsContext {
    pub id: u64,
    pub drawable: Drawable,
}

/// Software implementation of [`Display`] and [`FontMetrics`]
#[derive(Debug, Default)]
pub struct PixelDisplay {
    surfaces: Vec<PixelSurface>,
    fonts: HashMap<FontId, FontFace>,
    next_context: u64,
    live_contexts: usize,
}

/// Frame for `drawable`, logging unknown handles
fn surface_frame(surfaces: &mut [PixelSurface], drawable: Drawable) -> Option<Frame<'_>> {
    match surfaces.get_mut(drawable.0 as usize) {
        Some(surface) => Some(surface.frame()),
        None => {
            tracing::warn!(?drawable, "draw call on unknown drawable");
            None
        }
    }
}

impl PixelDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a surface and return its handle
    pub fn create_surface(&mut self, width: usize, height: usize, background: u32) -> Drawable {
        let drawable = Drawable(self.surfaces.len() as u32);
        self.surfaces.push(PixelSurface::new(width, height, background));
        tracing::debug!(?drawable, width, height, "created surface");
        drawable
    }

    pub fn surface(&self, drawable: Drawable) -> Option<&PixelSurface> {
        self.surfaces.get(drawable.0 as usize)
    }

    pub fn surface_mut(&mut self, drawable: Drawable) -> Option<&mut PixelSurface> {
        self.surfaces.get_mut(drawable.0 as usize)
    }

    /// Register the face used for a font slot
    pub fn set_font(&mut self, id: FontId, face: FontFace) {
        self.fonts.insert(id, face);
    }

    pub fn font(&self, id: FontId) -> Option<&FontFace> {
        self.fonts.get(&id)
    }

    /// Number of contexts acquired and not yet released
    pub fn live_contexts(&self) -> usize {
        self.live_contexts
    }

    fn check_context(context: &GraphicsContext, drawable: Drawable) {
        if context.drawable != drawable {
            tracing::warn!(
                context = context.id,
                ?drawable,
                "context used with a different drawable"
            );
        }
    }
}

impl Display for PixelDisplay {
    type Context = GraphicsContext;

    fn acquire_context(&mut self, drawable: Drawable) -> GraphicsContext {
        self.next_context += 1;
        self.live_contexts += 1;
        GraphicsContext {
            id: self.next_context,
            drawable,
        }
    }

    fn release_context(&mut self, context: GraphicsContext) {
        self.live_contexts = self.live_contexts.saturating_sub(1);
        tracing::trace!(context = context.id, "released context");
    }

    fn fill_solid_rect(&mut self, drawable: Drawable, context: &GraphicsContext, color: u32, rect: Rect) {
        Self::check_context(context, drawable);
        if let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) {
            frame.fill_rect(rect, color);
        }
    }

    fn fill_horizontal_gradient(
        &mut self,
        drawable: Drawable,
        context: &GraphicsContext,
        from: u32,
        to: u32,
        rect: Rect,
    ) {
        Self::check_context(context, drawable);
        if let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) {
            frame.fill_horizontal_gradient(rect, from, to);
        }
    }

    fn draw_line(
        &mut self,
        drawable: Drawable,
        context: &GraphicsContext,
        color: u32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) {
        Self::check_context(context, drawable);
        if let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) {
            frame.draw_line(x1, y1, x2, y2, color);
        }
    }

    fn draw_rect_outline(&mut self, drawable: Drawable, context: &GraphicsContext, color: u32, rect: Rect) {
        Self::check_context(context, drawable);
        if let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) {
            frame.draw_rect_outline(rect, color);
        }
    }

    fn draw_icon(&mut self, _visual: &Visual, icon: IconRef<'_>, drawable: Drawable, tint: u32, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) else {
            return;
        };
        match icon {
            IconRef::Placeholder => frame.draw_rect_outline(rect, tint | 0xFF000000),
            IconRef::Image(icon) => {
                if let Some(img) = icon.best_image(rect.width as u32, rect.height as u32) {
                    frame.blit_rgba_scaled(&img.pixels, img.width, img.height, rect);
                }
            }
        }
    }

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
    ) {
        let Some(face) = self.fonts.get_mut(&font) else {
            tracing::debug!(?font, "no face registered for font slot");
            return;
        };
        let Some(mut frame) = surface_frame(&mut self.surfaces, drawable) else {
            return;
        };
        frame.set_clip(Rect::new(x, y, max_width, face.line_height()));
        TextPainter::new(face, visual.antialias).draw(&mut frame, x, y, text, color);
    }
}

impl FontMetrics for PixelDisplay {
    fn text_width(&self, font: FontId, text: &str) -> i32 {
        self.fonts
            .get(&font)
            .map_or(0, |face| face.measure_width(text).ceil() as i32)
    }

    fn text_height(&self, font: FontId) -> i32 {
        self.fonts.get(&font).map_or(0, |face| face.line_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;

    #[test]
    fn test_contexts_are_counted() {
        let mut display = PixelDisplay::new();
        let d = display.create_surface(4, 4, 0);
        let a = display.acquire_context(d);
        let b = display.acquire_context(d);
        assert_ne!(a.id, b.id);
        assert_eq!(display.live_contexts(), 2);
        display.release_context(a);
        display.release_context(b);
        assert_eq!(display.live_contexts(), 0);
    }

    #[test]
    fn test_unknown_drawable_is_ignored() {
        let mut display = PixelDisplay::new();
        let ctx = display.acquire_context(Drawable(5));
        display.fill_solid_rect(Drawable(5), &ctx, 0xFFFFFFFF, Rect::new(0, 0, 2, 2));
        display.release_context(ctx);
        assert!(display.surface(Drawable(5)).is_none());
    }

    #[test]
    fn test_placeholder_icon_is_tinted_outline() {
        let mut display = PixelDisplay::new();
        let d = display.create_surface(10, 10, 0xFF000000);
        display.draw_icon(&Visual::default(), IconRef::Placeholder, d, 0x00FF0000, Rect::new(2, 2, 6, 6));
        let surface = display.surface(d).unwrap();
        assert_eq!(surface.pixel(2, 2), 0xFFFF0000);
        assert_eq!(surface.pixel(7, 7), 0xFFFF0000);
        assert_eq!(surface.pixel(4, 4), 0xFF000000);
    }

    #[test]
    fn test_image_icon_fills_box() {
        let mut display = PixelDisplay::new();
        let d = display.create_surface(10, 10, 0xFF000000);
        let icon = Icon::from_rgba(1, 1, vec![0, 255, 0, 255]).unwrap();
        display.draw_icon(&Visual::default(), IconRef::Image(&icon), d, 0, Rect::new(1, 1, 3, 3));
        let surface = display.surface(d).unwrap();
        assert_eq!(surface.pixel(1, 1), 0xFF00FF00);
        assert_eq!(surface.pixel(3, 3), 0xFF00FF00);
        assert_eq!(surface.pixel(4, 4), 0xFF000000);
    }

    #[test]
    fn test_unregistered_font_measures_zero() {
        let display = PixelDisplay::new();
        assert_eq!(display.text_width(FontId::Menu, "hello"), 0);
        assert_eq!(display.text_height(FontId::Menu), 0);
    }

    fn lit_columns(surface: &PixelSurface, bg: u32) -> Vec<usize> {
        (0..surface.width())
            .filter(|&x| (0..surface.height()).any(|y| surface.pixel(x, y) != bg))
            .collect()
    }

    #[test]
    fn test_draw_text_stays_within_max_width() {
        let mut display = PixelDisplay::new();
        display.set_font(FontId::Tray, FontFace::default_face(13.0).unwrap());
        let d = display.create_surface(40, 20, 0xFF000000);

        let label = "Overflowing tray label text";
        assert!(display.text_width(FontId::Tray, label) > 35);
        display.draw_text(&Visual::default(), d, FontId::Tray, 0xFFFFFFFF, 2, 2, 35, label);

        let cols = lit_columns(display.surface(d).unwrap(), 0xFF000000);
        assert!(!cols.is_empty());
        assert!(cols.iter().all(|&x| (2..37).contains(&x)), "lit columns: {:?}", cols);
    }

    #[test]
    fn test_draw_text_without_antialias_uses_solid_ink() {
        let mut display = PixelDisplay::new();
        display.set_font(FontId::Menu, FontFace::default_face(13.0).unwrap());
        let d = display.create_surface(40, 20, 0xFF000000);

        let visual = Visual { antialias: false };
        display.draw_text(&visual, d, FontId::Menu, 0x0000FF00, 0, 0, 40, "Menu");

        let surface = display.surface(d).unwrap();
        let mut ink = 0;
        for y in 0..20 {
            for x in 0..40 {
                let p = surface.pixel(x, y);
                assert!(p == 0xFF000000 || p == 0xFF00FF00, "partial pixel {:08X} at ({}, {})", p, x, y);
                ink += (p == 0xFF00FF00) as usize;
            }
        }
        assert!(ink > 0);
    }

    #[test]
    fn test_rgba_export_swizzles_channels() {
        let surface = PixelSurface::new(1, 1, 0x80112233);
        let img = surface.to_rgba_image();
        assert_eq!(img.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0x80]);
    }
}
