//! Theme system for button rendering
//!
//! A theme is the process-wide color palette plus the decoration settings
//! for menus and trays. It is loaded from YAML, either compiled into the
//! binary or from the user's config directory, and then handed to the
//! renderer by reference.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/bevel/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::{Deserialize, Serialize};

// Embed theme YAML files at compile time
pub const DEFAULT_YAML: &str = include_str!("../themes/default.yaml");
pub const CLASSIC_MOTIF_YAML: &str = include_str!("../themes/classic-motif.yaml");
pub const FLAT_DARK_YAML: &str = include_str!("../themes/flat-dark.yaml");

/// Shade factor used to derive a bevel-up color from a background
pub const LIGHTEN_FACTOR: f32 = 1.45;

/// Shade factor used to derive a bevel-down color from a background
pub const DARKEN_FACTOR: f32 = 0.55;

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default", "flat-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default",
        yaml: DEFAULT_YAML,
    },
    BuiltinTheme {
        id: "classic-motif",
        yaml: CLASSIC_MOTIF_YAML,
    },
    BuiltinTheme {
        id: "flat-dark",
        yaml: FLAT_DARK_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/bevel/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "default", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Classic Motif")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let name = from_file(&path)
                        .map(|t| t.name)
                        .unwrap_or_else(|_| id.to_string());
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to an ARGB pixel
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Scale every color channel by `factor`, saturating at 255
    pub fn shade(&self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            a: self.a,
        }
    }

    /// Lighter variant used for the raised edge of a bevel
    pub fn lighten(&self) -> Self {
        self.shade(LIGHTEN_FACTOR)
    }

    /// Darker variant used for the sunken edge of a bevel
    pub fn darken(&self) -> Self {
        self.shade(DARKEN_FACTOR)
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|part| u8::from_str_radix(part, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Palette slot names
///
/// Buttons never carry colors directly, only these ids; the pixel values
/// come from whichever [`ColorTable`] the renderer was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    MenuFg,
    MenuBg,
    MenuUp,
    MenuDown,
    MenuActiveFg,
    MenuActiveBg1,
    MenuActiveBg2,
    MenuActiveUp,
    MenuActiveDown,
    TrayFg,
    TrayBg1,
    TrayBg2,
    TrayUp,
    TrayDown,
    TrayActiveFg,
    TrayActiveBg1,
    TrayActiveBg2,
    TrayActiveUp,
    TrayActiveDown,
}

impl ColorId {
    pub const COUNT: usize = 19;

    pub const ALL: [ColorId; ColorId::COUNT] = [
        ColorId::MenuFg,
        ColorId::MenuBg,
        ColorId::MenuUp,
        ColorId::MenuDown,
        ColorId::MenuActiveFg,
        ColorId::MenuActiveBg1,
        ColorId::MenuActiveBg2,
        ColorId::MenuActiveUp,
        ColorId::MenuActiveDown,
        ColorId::TrayFg,
        ColorId::TrayBg1,
        ColorId::TrayBg2,
        ColorId::TrayUp,
        ColorId::TrayDown,
        ColorId::TrayActiveFg,
        ColorId::TrayActiveBg1,
        ColorId::TrayActiveBg2,
        ColorId::TrayActiveUp,
        ColorId::TrayActiveDown,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Read-only (from the renderer's point of view) color palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: [Color; ColorId::COUNT],
}

impl ColorTable {
    /// A table with every slot set to the same color
    pub fn filled(color: Color) -> Self {
        Self {
            colors: [color; ColorId::COUNT],
        }
    }

    /// Build a table by asking `f` for every slot
    pub fn from_fn(mut f: impl FnMut(ColorId) -> Color) -> Self {
        let mut table = Self::filled(Color::default());
        for id in ColorId::ALL {
            table.set(id, f(id));
        }
        table
    }

    #[inline]
    pub fn get(&self, id: ColorId) -> Color {
        self.colors[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: ColorId, color: Color) {
        self.colors[id.index()] = color;
    }

    /// Look up a slot as an ARGB pixel
    #[inline]
    pub fn pixel(&self, id: ColorId) -> u32 {
        self.get(id).to_argb_u32()
    }
}

impl std::ops::Index<ColorId> for ColorTable {
    type Output = Color;

    fn index(&self, id: ColorId) -> &Color {
        &self.colors[id.index()]
    }
}

/// Border decoration style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decorations {
    /// Two-tone 3-D bevel
    #[default]
    Motif,
    /// Single-color outline
    Flat,
}

/// Decoration style per button family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecorationSettings {
    #[serde(default)]
    pub menu: Decorations,
    #[serde(default)]
    pub tray: Decorations,
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub decorations: DecorationSettings,
    pub colors: ColorsData,
}

/// Color groups (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct ColorsData {
    pub menu: ColorGroupData,
    pub menu_active: ColorGroupData,
    pub tray: ColorGroupData,
    pub tray_active: ColorGroupData,
}

/// One button family's colors
///
/// `background2` defaults to `background` (solid fill). Missing bevel
/// colors are derived from `background`.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorGroupData {
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub background2: Option<String>,
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
}

/// Resolved colors of one button family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColorGroup {
    foreground: Color,
    background: Color,
    background2: Color,
    up: Color,
    down: Color,
}

impl ColorGroup {
    fn from_data(data: &ColorGroupData) -> Result<Self, String> {
        let parse = |s: &Option<String>| s.as_deref().map(Color::from_hex).transpose();

        let background = Color::from_hex(&data.background)?;
        Ok(Self {
            foreground: Color::from_hex(&data.foreground)?,
            background,
            background2: parse(&data.background2)?.unwrap_or(background),
            up: parse(&data.up)?.unwrap_or_else(|| background.lighten()),
            down: parse(&data.down)?.unwrap_or_else(|| background.darken()),
        })
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub author: Option<String>,
    pub colors: ColorTable,
    pub decorations: DecorationSettings,
}

impl Theme {
    /// Build a theme from an explicit palette
    pub fn new(name: impl Into<String>, colors: ColorTable, decorations: DecorationSettings) -> Self {
        Self {
            name: name.into(),
            author: None,
            colors,
            decorations,
        }
    }

    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }

        let menu = ColorGroup::from_data(&data.colors.menu)?;
        let menu_active = ColorGroup::from_data(&data.colors.menu_active)?;
        let tray = ColorGroup::from_data(&data.colors.tray)?;
        let tray_active = ColorGroup::from_data(&data.colors.tray_active)?;

        // Plain menus have a single background slot
        let colors = ColorTable::from_fn(|id| match id {
            ColorId::MenuFg => menu.foreground,
            ColorId::MenuBg => menu.background,
            ColorId::MenuUp => menu.up,
            ColorId::MenuDown => menu.down,
            ColorId::MenuActiveFg => menu_active.foreground,
            ColorId::MenuActiveBg1 => menu_active.background,
            ColorId::MenuActiveBg2 => menu_active.background2,
            ColorId::MenuActiveUp => menu_active.up,
            ColorId::MenuActiveDown => menu_active.down,
            ColorId::TrayFg => tray.foreground,
            ColorId::TrayBg1 => tray.background,
            ColorId::TrayBg2 => tray.background2,
            ColorId::TrayUp => tray.up,
            ColorId::TrayDown => tray.down,
            ColorId::TrayActiveFg => tray_active.foreground,
            ColorId::TrayActiveBg1 => tray_active.background,
            ColorId::TrayActiveBg2 => tray_active.background2,
            ColorId::TrayActiveUp => tray_active.up,
            ColorId::TrayActiveDown => tray_active.down,
        });

        Ok(Theme {
            name: data.name,
            author: data.author,
            colors,
            decorations: data.decorations,
        })
    }

    /// Default theme (YAML-backed with Rust fallback)
    pub fn default_theme() -> Self {
        match Theme::from_yaml(DEFAULT_YAML) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Embedded default theme failed to parse: {}", e);
                Self::fallback()
            }
        }
    }

    /// Hardcoded palette used when the embedded YAML cannot be parsed
    fn fallback() -> Self {
        let menu_bg = Color::rgb(0xEE, 0xEE, 0xEE);
        let menu_active_bg = Color::rgb(0x00, 0x77, 0xCC);
        let tray_bg = Color::rgb(0x33, 0x33, 0x33);
        let tray_active_bg = Color::rgb(0x55, 0x55, 0x55);

        let colors = ColorTable::from_fn(|id| match id {
            ColorId::MenuFg => Color::rgb(0x00, 0x00, 0x00),
            ColorId::MenuBg => menu_bg,
            ColorId::MenuUp => menu_bg.lighten(),
            ColorId::MenuDown => menu_bg.darken(),
            ColorId::MenuActiveFg => Color::rgb(0xFF, 0xFF, 0xFF),
            ColorId::MenuActiveBg1 | ColorId::MenuActiveBg2 => menu_active_bg,
            ColorId::MenuActiveUp => menu_active_bg.lighten(),
            ColorId::MenuActiveDown => menu_active_bg.darken(),
            ColorId::TrayFg => Color::rgb(0xFF, 0xFF, 0xFF),
            ColorId::TrayBg1 | ColorId::TrayBg2 => tray_bg,
            ColorId::TrayUp => tray_bg.lighten(),
            ColorId::TrayDown => tray_bg.darken(),
            ColorId::TrayActiveFg => Color::rgb(0xFF, 0xFF, 0xFF),
            ColorId::TrayActiveBg1 | ColorId::TrayActiveBg2 => tray_active_bg,
            ColorId::TrayActiveUp => tray_active_bg.lighten(),
            ColorId::TrayActiveDown => tray_active_bg.darken(),
        });

        Theme::new("Default", colors, DecorationSettings::default())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
