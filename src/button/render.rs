//! Button rendering
//!
//! Draws one button as a fixed sequence of independently gated steps:
//! background, border, icon, label. A button without fill, border, icon or
//! text simply skips that step; nothing here can fail.

use crate::display::{Display, DrawScope, FontMetrics, IconRef, Rect};
use crate::theme::{Decorations, Theme};

use super::layout::ButtonLayout;
use super::style::{resolve, StyleTuple};
use super::{Button, ButtonIcon};

/// Renders buttons against a theme's palette and decoration settings
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderer<'t> {
    theme: &'t Theme,
}

impl<'t> ButtonRenderer<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Style used for `button`
    pub fn style(&self, button: &Button<'_>) -> StyleTuple {
        resolve(button.kind, &self.theme.decorations)
    }

    /// Content placement for `button`, measuring its label with `metrics`
    pub fn layout<M: FontMetrics>(&self, button: &Button<'_>, metrics: &M) -> ButtonLayout {
        let text = button
            .text
            .map(|t| (metrics.text_width(button.font, t), metrics.text_height(button.font)));
        ButtonLayout::compute(button.width, button.height, button.alignment, &button.icon, text)
    }

    /// Draw `button` onto its drawable
    pub fn render<D: Display + FontMetrics>(&self, button: &Button<'_>, display: &mut D) {
        let style = self.style(button);
        let colors = &self.theme.colors;
        let rect = button.rect();

        let mut scope = DrawScope::acquire(display, button.drawable);

        if button.fill {
            let bg1 = colors.pixel(style.bg1);
            let bg2 = colors.pixel(style.bg2);
            if bg1 == bg2 {
                scope.fill_solid_rect(bg1, rect);
            } else {
                scope.fill_horizontal_gradient(bg1, bg2, rect);
            }
        }

        if button.border {
            self.draw_border(&mut scope, &style, rect);
        }

        let layout = self.layout(button, scope.display());
        tracing::trace!(kind = ?button.kind, ?rect, ?layout, "render button");

        let fg = colors.pixel(style.fg);

        let icon = match button.icon {
            ButtonIcon::None => None,
            ButtonIcon::Empty => Some(IconRef::Placeholder),
            ButtonIcon::Named(icon) => Some(IconRef::Image(icon)),
        };
        if let (Some(icon), Some(icon_box)) = (icon, layout.icon) {
            let target = Rect::new(
                button.x + icon_box.x,
                button.y + icon_box.y,
                icon_box.width,
                icon_box.height,
            );
            scope.draw_icon(button.visual, icon, fg, target);
        }

        if let (Some(text), Some(text_box)) = (button.text, layout.text) {
            scope.draw_text(
                button.visual,
                button.font,
                fg,
                button.x + text_box.x,
                button.y + text_box.y,
                text_box.max_width,
                text,
            );
        }
    }

    fn draw_border<D: Display>(&self, scope: &mut DrawScope<'_, D>, style: &StyleTuple, rect: Rect) {
        let colors = &self.theme.colors;
        let down = colors.pixel(style.down);

        match style.decorations {
            Decorations::Motif => {
                let up = colors.pixel(style.up);
                let right = rect.x + rect.width - 1;
                let bottom = rect.y + rect.height - 1;

                scope.draw_line(up, rect.x, rect.y, right, rect.y);
                scope.draw_line(up, rect.x, rect.y, rect.x, bottom);
                scope.draw_line(down, rect.x, bottom, right, bottom);
                scope.draw_line(down, right, rect.y, right, bottom);
            }
            Decorations::Flat => scope.draw_rect_outline(down, rect),
        }
    }
}
