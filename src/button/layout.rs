//! Icon and label placement inside a button
//!
//! Everything here is integer arithmetic on the button's size; no drawing
//! happens. Icon aspect ratios are carried as 16.16 fixed point so results
//! do not depend on floating point behaviour.

use crate::display::Rect;

use super::{Alignment, ButtonIcon};

/// Pixels kept clear between the icon and each button edge (total, both sides)
pub const ICON_MARGIN: i32 = 4;

/// Space reserved around text when an icon is present
pub const TEXT_MARGIN_WITH_ICON: i32 = 7;

/// Space reserved around text when there is no icon
pub const TEXT_MARGIN: i32 = 5;

/// Left inset used for left-aligned content
pub const LEFT_PADDING: i32 = 2;

/// Gap between the icon and the label
pub const ICON_TEXT_GAP: i32 = 2;

const FIXED_SHIFT: u32 = 16;

/// Where the label goes, relative to the button origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub x: i32,
    pub y: i32,
    /// Width the label may occupy; it is clipped beyond this
    pub max_width: i32,
    pub height: i32,
}

/// Computed placement of a button's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLayout {
    /// Icon box relative to the button origin
    pub icon: Option<Rect>,
    /// Label box relative to the button origin, present only when there is
    /// room for at least one pixel of text
    pub text: Option<TextBox>,
}

impl ButtonLayout {
    /// Lay out an icon and a label inside a `width × height` button.
    ///
    /// `text` is the label's natural `(width, height)` as reported by the
    /// font, or `None` when the button has no label.
    pub fn compute(
        width: i32,
        height: i32,
        alignment: Alignment,
        icon: &ButtonIcon<'_>,
        text: Option<(i32, i32)>,
    ) -> Self {
        let icon_size = icon_size(width, height, icon);
        let icon_width = icon_size.map_or(0, |(w, _)| w);

        let (text_width, text_height) = match text {
            Some((natural, line_height)) => (text_budget(width, icon_width, natural), line_height),
            None => (0, 0),
        };

        let mut offset = horizontal_offset(alignment, width, icon_width, text_width);

        let icon = icon_size.map(|(w, h)| {
            let rect = Rect::new(offset, (height - h + 1) / 2, w, h);
            offset += w + ICON_TEXT_GAP;
            rect
        });

        let text = (text_width > 0).then(|| TextBox {
            x: offset,
            y: (height - text_height + 1) / 2,
            max_width: text_width,
            height: text_height,
        });

        ButtonLayout { icon, text }
    }
}

/// Size of the icon box for a button, or `None` when no icon is drawn
pub fn icon_size(width: i32, height: i32, icon: &ButtonIcon<'_>) -> Option<(i32, i32)> {
    match icon {
        ButtonIcon::None => None,
        ButtonIcon::Empty => {
            let side = (width - ICON_MARGIN).min(height - ICON_MARGIN).max(0);
            Some((side, side))
        }
        ButtonIcon::Named(icon) => {
            let (iw, ih) = icon.primary_size()?;
            fit_icon(width, height, iw, ih)
        }
    }
}

/// Fit an `iw × ih` image into the button's icon area, keeping its ratio.
///
/// The icon first takes the full available height; if that makes it too
/// wide it takes the full available width instead. Images with a zero
/// dimension are not drawn.
pub fn fit_icon(width: i32, height: i32, iw: u32, ih: u32) -> Option<(i32, i32)> {
    if iw == 0 || ih == 0 {
        return None;
    }

    let ratio = ((iw as i64) << FIXED_SHIFT) / ih as i64;
    if ratio == 0 {
        return None;
    }

    let max_width = (width - ICON_MARGIN).max(0) as i64;
    let max_height = (height - ICON_MARGIN).max(0) as i64;

    let mut icon_height = max_height;
    let mut icon_width = (icon_height * ratio) >> FIXED_SHIFT;
    if icon_width > max_width {
        icon_width = max_width;
        icon_height = (icon_width << FIXED_SHIFT) / ratio;
    }

    Some((icon_width as i32, icon_height as i32))
}

/// Width the label may use given the icon's width and the label's natural width
pub fn text_budget(width: i32, icon_width: i32, natural_width: i32) -> i32 {
    let budget = if icon_width > 0 && natural_width + icon_width + TEXT_MARGIN_WITH_ICON > width {
        width - icon_width - TEXT_MARGIN_WITH_ICON
    } else if icon_width == 0 && natural_width + TEXT_MARGIN > width {
        width - TEXT_MARGIN
    } else {
        natural_width
    };
    budget.max(0)
}

/// Left edge of the icon+label group, relative to the button
pub fn horizontal_offset(alignment: Alignment, width: i32, icon_width: i32, text_width: i32) -> i32 {
    match alignment {
        Alignment::Center => ((width - icon_width - text_width + 1) / 2).max(0),
        Alignment::Left => LEFT_PADDING,
    }
}
