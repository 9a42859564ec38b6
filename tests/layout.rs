//! Layout properties over a sweep of button sizes

use bevel::button::layout::{fit_icon, ButtonLayout, ICON_MARGIN, TEXT_MARGIN, TEXT_MARGIN_WITH_ICON};
use bevel::button::{Alignment, Button, ButtonIcon, ButtonKind, Drawable, FontId, Visual};
use bevel::icon::Icon;

const ICON_SHAPES: &[(u32, u32)] = &[(16, 16), (200, 100), (100, 200), (1, 64), (64, 1), (48, 33)];

#[test]
fn test_fit_icon_keeps_bounds_and_touches_one() {
    for &(iw, ih) in ICON_SHAPES {
        for width in 5..80 {
            for height in 5..40 {
                let (w, h) = fit_icon(width, height, iw, ih).unwrap();
                let max_w = width - ICON_MARGIN;
                let max_h = height - ICON_MARGIN;
                assert!(w >= 0 && w <= max_w, "{}x{} in {}x{} -> w {}", iw, ih, width, height, w);
                assert!(h >= 0 && h <= max_h, "{}x{} in {}x{} -> h {}", iw, ih, width, height, h);
                assert!(
                    w == max_w || h == max_h,
                    "{}x{} in {}x{} -> {}x{} touches neither bound",
                    iw,
                    ih,
                    width,
                    height,
                    w,
                    h
                );
            }
        }
    }
}

#[test]
fn test_fit_icon_keeps_ratio() {
    // Cross-multiplied so integer truncation stays within one pixel
    for &(iw, ih) in ICON_SHAPES {
        let (w, h) = fit_icon(300, 120, iw, ih).unwrap();
        let lhs = w as i64 * ih as i64;
        let rhs = h as i64 * iw as i64;
        assert!(
            (lhs - rhs).abs() <= iw.max(ih) as i64,
            "{}x{} -> {}x{}",
            iw,
            ih,
            w,
            h
        );
    }
}

#[test]
fn test_text_budget_bounds() {
    let icon = Icon::from_rgba(2, 1, vec![0; 8]).unwrap();
    let icons = [ButtonIcon::None, ButtonIcon::Empty, ButtonIcon::Named(&icon)];

    for icon in &icons {
        for width in 1..90 {
            for height in 1..30 {
                for natural in [0, 7, 40, 200] {
                    for alignment in [Alignment::Left, Alignment::Center] {
                        let layout = ButtonLayout::compute(width, height, alignment, icon, Some((natural, 10)));
                        let icon_width = layout.icon.map_or(0, |r| r.width);

                        if let Some(text) = layout.text {
                            assert!(text.max_width > 0);
                            assert!(text.max_width <= natural);
                            let bound = if icon_width > 0 {
                                width - icon_width - TEXT_MARGIN_WITH_ICON
                            } else {
                                width - TEXT_MARGIN
                            };
                            assert!(
                                text.max_width <= bound,
                                "text {} over bound {} ({}x{})",
                                text.max_width,
                                bound,
                                width,
                                height
                            );
                            assert!(text.x >= 0);
                        }
                        if let Some(icon) = layout.icon {
                            assert!(icon.x >= 0);
                            assert!(icon.width >= 0 && icon.height >= 0);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_reference_scenarios() {
    // 100x20, no icon, 80px text, centered
    let layout = ButtonLayout::compute(100, 20, Alignment::Center, &ButtonIcon::None, Some((80, 10)));
    let text = layout.text.unwrap();
    assert_eq!(text.x, 10);
    assert_eq!(text.max_width, 80);
    assert_eq!(text.y, 5);

    // 40x40 placeholder
    let layout = ButtonLayout::compute(40, 40, Alignment::Left, &ButtonIcon::Empty, None);
    let icon = layout.icon.unwrap();
    assert_eq!((icon.width, icon.height), (36, 36));

    // 50x20 with a 2:1 icon
    assert_eq!(fit_icon(50, 20, 200, 100), Some((32, 16)));
}

#[test]
fn test_left_alignment_ignores_content_width() {
    for natural in [0, 10, 500] {
        let layout = ButtonLayout::compute(120, 24, Alignment::Left, &ButtonIcon::Empty, Some((natural, 12)));
        assert_eq!(layout.icon.unwrap().x, 2);
    }
}

#[test]
fn test_reset_state() {
    let visual = Visual::default();
    let visual2 = Visual { antialias: false };
    let mut button = Button::new(Drawable(1), &visual);
    button.kind = ButtonKind::Tray;
    button.set_geometry(5, 6, 70, 18);
    button.icon = ButtonIcon::Empty;
    button.text = Some("x");
    button.font = FontId::Clock;
    button.fill = false;
    button.border = true;
    button.alignment = Alignment::Center;

    button.reset(Drawable(9), &visual2);

    assert_eq!((button.width, button.height), (1, 1));
    assert!(button.fill);
    assert!(!button.border);
    assert!(button.icon.is_none());
    assert!(button.text.is_none());
    assert_eq!(button.alignment, Alignment::Left);
    assert_eq!(button.kind, ButtonKind::Menu);
    assert_eq!(button.font, FontId::Tray);
    assert_eq!(button.drawable, Drawable(9));
    assert!(!button.visual.antialias);
}
