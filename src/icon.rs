//! Icon resources
//!
//! An icon is one or more RGBA images of the same picture at different
//! sizes. The first image decides the aspect ratio used for layout; drawing
//! picks whichever image scales best into the target box.

use std::path::Path;

/// A single RGBA8 bitmap
#[derive(Clone, PartialEq, Eq)]
pub struct IconImage {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for IconImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl IconImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(format!(
                "Icon data is {} bytes, expected {} for {}x{}",
                pixels.len(),
                expected,
                width,
                height
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A `width × height` image filled with one RGBA color
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// An icon resource, borrowed by buttons and never owned by them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    images: Vec<IconImage>,
}

impl Icon {
    /// Build an icon from one or more images; the first is the primary
    pub fn with_images(images: Vec<IconImage>) -> Result<Self, String> {
        if images.is_empty() {
            return Err("Icon needs at least one image".to_string());
        }
        Ok(Self { images })
    }

    /// Build a single-image icon from raw RGBA8 data
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, String> {
        Self::with_images(vec![IconImage::new(width, height, pixels)?])
    }

    /// Load an icon from an image file (PNG, JPEG, ICO, ...)
    pub fn load(path: &Path) -> Result<Self, String> {
        let img = image::open(path)
            .map_err(|e| format!("Failed to load icon {}: {}", path.display(), e))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!("Loaded icon {} ({}x{})", path.display(), width, height);
        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Add another size of the same picture
    pub fn push_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    pub fn images(&self) -> &[IconImage] {
        &self.images
    }

    /// Intrinsic size of the primary image
    pub fn primary_size(&self) -> Option<(u32, u32)> {
        self.images.first().map(|img| (img.width, img.height))
    }

    /// Image to scale into a `width × height` box.
    ///
    /// Prefers the smallest image that covers the box, so scaling only ever
    /// shrinks; otherwise the largest image available.
    pub fn best_image(&self, width: u32, height: u32) -> Option<&IconImage> {
        let covering = self
            .images
            .iter()
            .filter(|img| img.width >= width && img.height >= height && img.area() > 0)
            .min_by_key(|img| img.area());
        covering.or_else(|| self.images.iter().max_by_key(|img| img.area()))
    }
}
