//! bevel - themed button rendering
//!
//! This crate draws window-manager style buttons (menu items and tray/task
//! entries) with a background fill, a Motif bevel or flat border, an
//! aspect-fitted icon and a clipped text label. Drawing goes through the
//! [`display::Display`] trait; [`view::PixelDisplay`] is an in-memory
//! implementation used by the `bevel` command.

pub mod button;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod display;
pub mod icon;
pub mod scene;
pub mod theme;
pub mod tracing;
pub mod view;

// Re-export commonly used types
pub use button::{Alignment, Button, ButtonIcon, ButtonKind, ButtonRenderer, Drawable, FontId, Visual};
pub use config::BevelConfig;
pub use display::{Display, FontMetrics, Rect};
pub use icon::Icon;
pub use theme::Theme;
