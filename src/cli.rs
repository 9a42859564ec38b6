//! Command-line argument parsing
//!
//! Supports:
//! - Rendering a scene file to PNG
//! - Theme override by id or YAML path
//! - Font selection for button labels
//! - Listing available themes

use clap::Parser;
use std::path::{Path, PathBuf};

/// Default label font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 13.0;

/// Render themed buttons to an image
#[derive(Parser, Debug)]
#[command(name = "bevel", version, about = "Render themed buttons to an image")]
pub struct CliArgs {
    /// Scene YAML file describing the canvas and its buttons
    #[arg(value_name = "SCENE", required_unless_present = "list_themes")]
    pub scene: Option<PathBuf>,

    /// Output PNG path (defaults to the scene path with a .png extension)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Theme id or path to a theme YAML file
    #[arg(short, long, value_name = "ID|PATH")]
    pub theme: Option<String>,

    /// TrueType/OpenType font for button labels (default: built-in DejaVu Sans)
    #[arg(short, long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Label font size in pixels
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: f32,

    /// Disable text antialiasing
    #[arg(long)]
    pub no_antialias: bool,

    /// Print available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl CliArgs {
    /// Where the rendered image goes
    pub fn output_path(&self, scene: &Path) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| scene.with_extension("png"))
    }

    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(format!("Font size must be positive, got {}", self.font_size));
        }
        Ok(())
    }
}
