//! Button kind → palette slots and decoration style

use crate::theme::{ColorId, DecorationSettings, Decorations};

use super::ButtonKind;

/// Colors and border style used to draw one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTuple {
    pub fg: ColorId,
    pub bg1: ColorId,
    pub bg2: ColorId,
    pub up: ColorId,
    pub down: ColorId,
    pub decorations: Decorations,
}

/// Resolve the style for `kind`.
///
/// Seven kinds collapse into four visual classes. The active variants take
/// their family's "down" color as the top/left bevel and "up" as the
/// bottom/right one, so they read as pressed in.
pub fn resolve(kind: ButtonKind, decorations: &DecorationSettings) -> StyleTuple {
    match kind {
        ButtonKind::MenuActive => StyleTuple {
            fg: ColorId::MenuActiveFg,
            bg1: ColorId::MenuActiveBg1,
            bg2: ColorId::MenuActiveBg2,
            up: ColorId::MenuActiveDown,
            down: ColorId::MenuActiveUp,
            decorations: decorations.menu,
        },
        ButtonKind::Tray | ButtonKind::Task => StyleTuple {
            fg: ColorId::TrayFg,
            bg1: ColorId::TrayBg1,
            bg2: ColorId::TrayBg2,
            up: ColorId::TrayUp,
            down: ColorId::TrayDown,
            decorations: decorations.tray,
        },
        ButtonKind::TrayActive | ButtonKind::TaskActive => StyleTuple {
            fg: ColorId::TrayActiveFg,
            bg1: ColorId::TrayActiveBg1,
            bg2: ColorId::TrayActiveBg2,
            up: ColorId::TrayActiveDown,
            down: ColorId::TrayActiveUp,
            decorations: decorations.tray,
        },
        ButtonKind::Label | ButtonKind::Menu => StyleTuple {
            fg: ColorId::MenuFg,
            bg1: ColorId::MenuBg,
            bg2: ColorId::MenuBg,
            up: ColorId::MenuUp,
            down: ColorId::MenuDown,
            decorations: decorations.menu,
        },
    }
}
