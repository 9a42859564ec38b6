//! Scene files
//!
//! A scene is a YAML description of a canvas and the buttons on it, used by
//! the `bevel` command to render previews:
//!
//! ```yaml
//! width: 320
//! height: 28
//! background: "#202020"
//! theme: classic-motif
//! buttons:
//!   - kind: tray_active
//!     x: 0
//!     y: 0
//!     width: 120
//!     height: 28
//!     icon: icons/term.png   # or "empty" for a placeholder square
//!     text: "xterm"
//!     border: true
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::button::{Alignment, Button, ButtonIcon, ButtonKind, ButtonRenderer, Drawable, FontId, Visual};
use crate::icon::Icon;
use crate::theme::{Color, Theme};
use crate::view::PixelDisplay;

/// Icon value meaning "placeholder square"
pub const EMPTY_ICON: &str = "empty";

#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: String,
    /// Theme id or path; the command line may override it
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub buttons: Vec<SceneButton>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneButton {
    #[serde(default)]
    pub kind: ButtonKind,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub alignment: Alignment,
    /// Icon file path, or [`EMPTY_ICON`]
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font: FontId,
    #[serde(default = "default_true")]
    pub fill: bool,
    #[serde(default)]
    pub border: bool,
}

fn default_background() -> String {
    "#000000".to_string()
}

fn default_true() -> bool {
    true
}

/// Icons loaded for a scene, keyed by button index
#[derive(Debug, Default)]
pub struct SceneIcons {
    icons: HashMap<usize, Icon>,
}

impl SceneIcons {
    pub fn get(&self, index: usize) -> Option<&Icon> {
        self.icons.get(&index)
    }

    pub fn insert(&mut self, index: usize, icon: Icon) {
        self.icons.insert(index, icon);
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Scene {
    /// Parse and validate a scene
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let scene: Scene =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Read a scene file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene {}: {}", path.display(), e))?;
        Self::from_yaml(&content)
    }

    fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Scene canvas must be at least 1x1, got {}x{}",
                self.width, self.height
            ));
        }
        for (i, b) in self.buttons.iter().enumerate() {
            if b.width < 1 || b.height < 1 {
                return Err(format!(
                    "Button {} must be at least 1x1, got {}x{}",
                    i, b.width, b.height
                ));
            }
        }
        Color::from_hex(&self.background).map(|_| ())
    }

    pub fn background(&self) -> Result<Color, String> {
        Color::from_hex(&self.background)
    }

    /// Load every icon file the scene names, resolving paths against `base_dir`
    pub fn load_icons(&self, base_dir: &Path) -> Result<SceneIcons, String> {
        let mut icons = SceneIcons::default();
        for (i, button) in self.buttons.iter().enumerate() {
            match button.icon.as_deref() {
                None | Some(EMPTY_ICON) => {}
                Some(path) => icons.insert(i, Icon::load(&base_dir.join(path))?),
            }
        }
        Ok(icons)
    }

    /// Buttons for this scene, targeting `drawable`
    pub fn buttons<'a>(&'a self, icons: &'a SceneIcons, drawable: Drawable, visual: &'a Visual) -> Vec<Button<'a>> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut button = Button::new(drawable, visual);
                button.kind = entry.kind;
                button.set_geometry(entry.x, entry.y, entry.width, entry.height);
                button.alignment = entry.alignment;
                button.icon = match entry.icon.as_deref() {
                    None => ButtonIcon::None,
                    Some(EMPTY_ICON) => ButtonIcon::Empty,
                    Some(_) => icons.get(i).map_or(ButtonIcon::None, ButtonIcon::Named),
                };
                button.text = entry.text.as_deref();
                button.font = entry.font;
                button.fill = entry.fill;
                button.border = entry.border;
                button
            })
            .collect()
    }

    /// Create a surface on `display` and draw every button onto it
    pub fn render(
        &self,
        theme: &Theme,
        icons: &SceneIcons,
        display: &mut PixelDisplay,
        visual: &Visual,
    ) -> Result<Drawable, String> {
        let background = self.background()?.to_argb_u32();
        let drawable = display.create_surface(self.width as usize, self.height as usize, background);

        let renderer = ButtonRenderer::new(theme);
        for button in self.buttons(icons, drawable, visual) {
            renderer.render(&button, display);
        }

        tracing::info!(
            scene = self.name.as_deref().unwrap_or("<unnamed>"),
            buttons = self.buttons.len(),
            "rendered scene"
        );
        Ok(drawable)
    }
}
