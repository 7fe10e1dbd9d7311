// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::config::BACKDROP_MAX_ALPHA;
use crate::ui::design_tokens::{palette, radius};
use iced::border::Radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed layer behind the language sheet.
///
/// `opacity` is the transition's overlay factor; the backdrop is never
/// darker than [`BACKDROP_MAX_ALPHA`].
pub fn backdrop(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let alpha = opacity.clamp(0.0, 1.0) * BACKDROP_MAX_ALPHA;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Bottom sheet surface with rounded top corners.
pub fn sheet(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(Background::Color(base.color)),
        text_color: Some(base.text),
        border: Border {
            radius: Radius {
                top_left: radius::SHEET,
                top_right: radius::SHEET,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hairline between language rows.
pub fn separator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        ..Default::default()
    }
}
