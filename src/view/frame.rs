//! Frame abstraction for drawing primitives
//!
//! Provides a simple, safe API for pixel buffer operations. Coordinates are
//! signed so callers can position things partly off-surface; everything is
//! clipped to the buffer and to the optional clip rectangle.

use crate::display::Rect;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). Returns the blended color
/// with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Linear interpolation between two ARGB colors, `step` of `steps`
#[inline]
pub fn lerp_color(from: u32, to: u32, step: i32, steps: i32) -> u32 {
    if steps <= 0 {
        return from;
    }
    let channel = |shift: u32| {
        let a = ((from >> shift) & 0xFF) as i64;
        let b = ((to >> shift) & 0xFF) as i64;
        ((a + (b - a) * step as i64 / steps as i64) as u32 & 0xFF) << shift
    };
    channel(24) | channel(16) | channel(8) | channel(0)
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are safely clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced to
    /// what the buffer actually holds.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let expected_size = width * height;
        let actual_size = buffer.len();

        let height = if actual_size < expected_size && width > 0 {
            actual_size / width
        } else {
            height
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    /// Get the frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a clipping rectangle. All subsequent drawing operations will be
    /// constrained to this region.
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(ClipRect {
            x0: rect.x,
            y0: rect.y,
            x1: rect.x.saturating_add(rect.width.max(0)),
            y1: rect.y.saturating_add(rect.height.max(0)),
        });
    }

    /// Remove the clipping rectangle, restoring full-frame drawing.
    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Effective drawable area (inclusive start, exclusive end)
    #[inline]
    fn bounds(&self) -> (i32, i32, i32, i32) {
        let w = self.width.min(i32::MAX as usize) as i32;
        let h = self.height.min(i32::MAX as usize) as i32;
        match self.clip {
            Some(c) => (c.x0.max(0), c.y0.max(0), c.x1.min(w), c.y1.min(h)),
            None => (0, 0, w, h),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let x0 = rect.x.max(min_x);
        let y0 = rect.y.max(min_y);
        let x1 = rect.right().min(max_x);
        let y1 = rect.bottom().min(max_y);
        if x0 >= x1 {
            return;
        }

        for y in y0..y1 {
            let start = self.index(x0, y);
            let end = self.index(x1, y);
            self.buffer[start..end].fill(color);
        }
    }

    /// Fill a rectangle with a left-to-right gradient, constant down each column
    pub fn fill_horizontal_gradient(&mut self, rect: Rect, from: u32, to: u32) {
        if rect.is_empty() {
            return;
        }
        let (min_x, min_y, max_x, max_y) = self.bounds();
        let y0 = rect.y.max(min_y);
        let y1 = rect.bottom().min(max_y);
        let steps = rect.width - 1;

        for x in rect.x.max(min_x)..rect.right().min(max_x) {
            let color = lerp_color(from, to, x - rect.x, steps);
            for y in y0..y1 {
                let idx = self.index(x, y);
                self.buffer[idx] = color;
            }
        }
    }

    /// Set a single pixel (bounds-checked, respects clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        if x >= min_x && x < max_x && y >= min_y && y < max_y {
            let idx = self.index(x, y);
            self.buffer[idx] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> u32 {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buffer[self.index(x, y)]
        } else {
            0
        }
    }

    /// Blend `color` over a pixel with the given coverage (0.0..=1.0)
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: u32, alpha: f32) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        if x < min_x || x >= max_x || y < min_y || y >= max_y || alpha <= 0.0 {
            return;
        }

        let idx = self.index(x, y);
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Draw a 1px line, both endpoints included
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        if y1 == y2 {
            let (a, b) = (x1.min(x2), x1.max(x2));
            return self.fill_rect(Rect::new(a, y1, b - a + 1, 1), color);
        }
        if x1 == x2 {
            let (a, b) = (y1.min(y2), y1.max(y2));
            return self.fill_rect(Rect::new(x1, a, 1, b - a + 1), color);
        }

        // Bresenham
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);
        loop {
            self.set_pixel(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a 1px outline covering exactly `rect`
    pub fn draw_rect_outline(&mut self, rect: Rect, color: u32) {
        if rect.is_empty() {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        // Top
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, 1), color);
        // Bottom
        self.fill_rect(Rect::new(rect.x, bottom, rect.width, 1), color);
        // Left
        self.fill_rect(Rect::new(rect.x, rect.y, 1, rect.height), color);
        // Right
        self.fill_rect(Rect::new(right, rect.y, 1, rect.height), color);
    }

    /// Blit an RGBA8 image into the frame, scaled to exactly fill `dest`.
    /// Uses nearest-neighbor scaling and alpha blending.
    pub fn blit_rgba_scaled(&mut self, pixels: &[u8], img_width: u32, img_height: u32, dest: Rect) {
        if img_width == 0 || img_height == 0 || dest.is_empty() {
            return;
        }

        let dest_w = dest.width as u64;
        let dest_h = dest.height as u64;

        for dy in 0..dest.height {
            let src_y = ((dy as u64 * img_height as u64) / dest_h).min(img_height as u64 - 1);
            for dx in 0..dest.width {
                let src_x = ((dx as u64 * img_width as u64) / dest_w).min(img_width as u64 - 1);
                let src_idx = ((src_y * img_width as u64 + src_x) * 4) as usize;

                let Some(px) = pixels.get(src_idx..src_idx + 4) else {
                    continue;
                };

                let argb = 0xFF000000 | ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
                self.blend_pixel(dest.x + dx, dest.y + dy, argb, px[3] as f32 / 255.0);
            }
        }
    }
}
