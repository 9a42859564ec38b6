//! Text rendering with fontdue
//!
//! A [`FontFace`] is a loaded font at one pixel size together with its
//! glyph cache. [`TextPainter`] draws a string from a face into a
//! [`Frame`], honouring the frame's clip rectangle.

use std::collections::HashMap;
use std::path::Path;

use fontdue::{Font, FontSettings, Metrics};

use super::frame::Frame;

// Glyph cache key: (character, font_size as bits)
pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// DejaVu Sans, used when no font file is configured
pub const DEFAULT_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// A font at a fixed pixel size
pub struct FontFace {
    font: Font,
    font_size: f32,
    ascent: f32,
    line_height: i32,
    glyph_cache: GlyphCache,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("font_size", &self.font_size)
            .field("line_height", &self.line_height)
            .field("cached_glyphs", &self.glyph_cache.len())
            .finish()
    }
}

impl FontFace {
    /// Parse a TrueType/OpenType font from memory
    pub fn from_bytes(bytes: &[u8], font_size: f32) -> Result<Self, String> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| format!("Failed to load font: {}", e))?;

        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| "Font missing horizontal line metrics".to_string())?;

        Ok(Self {
            font,
            font_size,
            ascent: line_metrics.ascent,
            line_height: line_metrics.new_line_size.ceil() as i32,
            glyph_cache: HashMap::new(),
        })
    }

    /// The embedded default face
    pub fn default_face(font_size: f32) -> Result<Self, String> {
        Self::from_bytes(DEFAULT_FONT, font_size)
    }

    /// Load a font file
    pub fn load(path: &Path, font_size: f32) -> Result<Self, String> {
        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read font file {}: {}", path.display(), e))?;
        let face = Self::from_bytes(&bytes, font_size)?;
        tracing::info!("Loaded font {} at {}px", path.display(), font_size);
        Ok(face)
    }

    #[inline]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    #[inline]
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Line height in pixels
    #[inline]
    pub fn line_height(&self) -> i32 {
        self.line_height
    }

    /// Get the number of cached glyphs
    #[inline]
    pub fn glyph_cache_size(&self) -> usize {
        self.glyph_cache.len()
    }

    /// Measure text width in pixels (sum of advance widths)
    pub fn measure_width(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.font_size).advance_width)
            .sum()
    }
}

/// Draws text from one face into a frame
pub struct TextPainter<'a> {
    face: &'a mut FontFace,
    antialias: bool,
}

impl<'a> TextPainter<'a> {
    pub fn new(face: &'a mut FontFace, antialias: bool) -> Self {
        Self { face, antialias }
    }

    /// Draw text with its line box's top-left corner at (x, y)
    pub fn draw(&mut self, frame: &mut Frame, x: i32, y: i32, text: &str, color: u32) {
        let mut current_x = x as f32;
        let baseline = y as f32 + self.face.ascent;
        let font_size = self.face.font_size;

        for ch in text.chars() {
            let key = (ch, font_size.to_bits());
            let font = &self.face.font;
            let (metrics, bitmap) = self
                .face
                .glyph_cache
                .entry(key)
                .or_insert_with(|| font.rasterize(ch, font_size));

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let Some(&coverage) = bitmap.get(bitmap_y * metrics.width + bitmap_x) else {
                        continue;
                    };
                    if coverage == 0 {
                        continue;
                    }

                    let px = current_x as i32 + bitmap_x as i32 + metrics.xmin;
                    let py = (glyph_top + bitmap_y as f32) as i32;

                    if self.antialias {
                        frame.blend_pixel(px, py, color, coverage as f32 / 255.0);
                    } else if coverage >= 128 {
                        frame.set_pixel(px, py, color | 0xFF000000);
                    }
                }
            }

            current_x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    const BG: u32 = 0xFF000000;
    const INK: u32 = 0x00F0E0D0;

    fn render(antialias: bool, clip: Option<Rect>, text: &str) -> (Vec<u32>, FontFace) {
        let mut face = FontFace::default_face(13.0).unwrap();
        let mut buffer = vec![BG; 40 * 20];
        {
            let mut frame = Frame::new(&mut buffer, 40, 20);
            if let Some(clip) = clip {
                frame.set_clip(clip);
            }
            TextPainter::new(&mut face, antialias).draw(&mut frame, 2, 0, text, INK);
        }
        (buffer, face)
    }

    fn lit_columns(buffer: &[u32]) -> Vec<usize> {
        let mut cols: Vec<usize> = buffer
            .iter()
            .enumerate()
            .filter(|(_, p)| **p != BG)
            .map(|(i, _)| i % 40)
            .collect();
        cols.sort_unstable();
        cols.dedup();
        cols
    }

    #[test]
    fn test_default_face_metrics() {
        let face = FontFace::default_face(13.0).unwrap();
        assert_eq!(face.font_size(), 13.0);
        assert!(face.line_height() > 0);
        assert!(face.ascent() > 0.0);
        assert!(face.measure_width("xterm") > 0.0);
        assert!(face.measure_width("xterm xterm") > face.measure_width("xterm"));
        assert_eq!(face.measure_width(""), 0.0);
    }

    #[test]
    fn test_rejects_garbage_font() {
        assert!(FontFace::from_bytes(b"not a font", 13.0).is_err());
    }

    #[test]
    fn test_glyphs_are_cached() {
        let (_, face) = render(true, None, "abba");
        assert_eq!(face.glyph_cache_size(), 2);
    }

    #[test]
    fn test_clip_bounds_long_label() {
        let text = "A label far wider than its button";
        let face = FontFace::default_face(13.0).unwrap();
        assert!(face.measure_width(text) > 35.0);

        let clip = Rect::new(2, 0, 35, face.line_height());
        let (buffer, _) = render(true, Some(clip), text);
        let cols = lit_columns(&buffer);

        assert!(!cols.is_empty());
        assert!(cols.iter().all(|&x| (2..37).contains(&x)), "lit columns: {:?}", cols);
    }

    #[test]
    fn test_aliased_text_is_thresholded() {
        let (buffer, _) = render(false, None, "Menu");
        assert!(buffer.iter().any(|&p| p != BG));
        for &p in &buffer {
            assert!(p == BG || p == INK | 0xFF000000, "partial pixel {:08X}", p);
        }
    }

    #[test]
    fn test_antialiased_text_blends_edges() {
        let (buffer, _) = render(true, None, "Menu");
        assert!(buffer.iter().any(|&p| p != BG && p != INK | 0xFF000000));
    }
}
