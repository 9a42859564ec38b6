//! Software rendering backend
//!
//! Pixel-buffer drawing primitives, fontdue text, and the in-memory
//! display that ties them to the button renderer's collaborator traits.

pub mod backend;
pub mod frame;
pub mod text;

pub use backend::{GraphicsContext, PixelDisplay, PixelSurface};
pub use frame::Frame;
pub use text::{FontFace, TextPainter};
