//! bevel - render themed buttons from a scene file
//!
//! Usage:
//!   bevel scenes/tray.yaml --out tray.png
//!   bevel scenes/menu.yaml --theme classic-motif --font DejaVuSans.ttf
//!   bevel --list-themes

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bevel::button::{FontId, Visual};
use bevel::cli::CliArgs;
use bevel::config::BevelConfig;
use bevel::scene::Scene;
use bevel::theme::{self, Theme, ThemeSource};
use bevel::view::text::DEFAULT_FONT;
use bevel::view::{FontFace, PixelDisplay};

const FONT_SLOTS: [FontId; 5] = [
    FontId::Tray,
    FontId::Menu,
    FontId::Task,
    FontId::Popup,
    FontId::Clock,
];

/// Resolve the theme: command line, then scene, then user config
fn resolve_theme(cli_theme: Option<&str>, scene_theme: Option<&str>, config: &BevelConfig) -> Theme {
    let mut theme = match cli_theme.or(scene_theme) {
        Some(t) => {
            let path = PathBuf::from(t);
            if path.exists() {
                match theme::from_file(&path) {
                    Ok(theme) => Some(theme),
                    Err(e) => {
                        tracing::warn!("Failed to load theme file {}: {}", t, e);
                        None
                    }
                }
            } else {
                match theme::load_theme(t) {
                    Ok(theme) => Some(theme),
                    Err(e) => {
                        tracing::warn!("Failed to load theme '{}': {}", t, e);
                        None
                    }
                }
            }
        }
        None => None,
    }
    .unwrap_or_else(|| config.resolve_theme());

    config.apply(&mut theme);
    theme
}

fn list_themes() {
    for info in theme::list_available_themes() {
        let source = match info.source {
            ThemeSource::User => "user",
            ThemeSource::Builtin => "builtin",
        };
        println!("{:<20} {:<24} ({})", info.id, info.name, source);
    }
}

/// Register one face for every font slot
fn load_fonts(display: &mut PixelDisplay, path: Option<&Path>, size: f32) -> Result<()> {
    let bytes = match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?,
        None => DEFAULT_FONT.to_vec(),
    };
    for slot in FONT_SLOTS {
        let face = FontFace::from_bytes(&bytes, size)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Failed to load font for {:?}", slot))?;
        display.set_font(slot, face);
    }
    match path {
        Some(path) => tracing::info!("Loaded font {} at {}px", path.display(), size),
        None => tracing::info!("Loaded built-in font at {}px", size),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    bevel::tracing::init();

    if args.list_themes {
        list_themes();
        return Ok(());
    }

    args.validate().map_err(|e| anyhow::anyhow!(e))?;
    let scene_path = args
        .scene
        .clone()
        .context("A scene file is required")?;

    let scene = Scene::load(&scene_path)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;

    let config = BevelConfig::load();
    let theme = resolve_theme(args.theme.as_deref(), scene.theme.as_deref(), &config);
    tracing::info!(theme = %theme.name, "using theme");

    let base_dir = scene_path.parent().unwrap_or_else(|| Path::new("."));
    let icons = scene
        .load_icons(base_dir)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to load scene icons")?;

    let mut display = PixelDisplay::new();
    load_fonts(&mut display, args.font.as_deref(), args.font_size)?;

    let visual = Visual {
        antialias: !args.no_antialias,
    };
    let drawable = scene
        .render(&theme, &icons, &mut display, &visual)
        .map_err(|e| anyhow::anyhow!(e))?;

    let out_path = args.output_path(&scene_path);
    display
        .surface(drawable)
        .context("Rendered surface missing")?
        .save_png(&out_path)
        .map_err(|e| anyhow::anyhow!(e))?;

    eprintln!("Wrote {}", out_path.display());
    Ok(())
}
