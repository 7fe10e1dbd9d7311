// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Row in the language list. The active language is tinted.
pub fn language_row(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = if selected {
            palette::PRIMARY_500
        } else {
            theme.extended_palette().background.base.text
        };
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
                a: 0.08,
                ..palette::PRIMARY_500
            })),
            _ => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_uses_primary_text() {
        let style = language_row(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.text_color, palette::PRIMARY_500);
        assert!(style.background.is_none());
    }

    #[test]
    fn hovered_row_is_highlighted() {
        let style = language_row(false)(&Theme::Light, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
