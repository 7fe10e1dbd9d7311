// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the settings screen and the language sheet.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.898, 0.918); // Row separators
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.478, 1.0);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 34.0;
}

pub mod sizing {
    /// Tallest the language sheet may grow before its rows scroll.
    pub const SHEET_MAX_HEIGHT: f32 = 400.0;
    pub const SETTINGS_MAX_WIDTH: f32 = 560.0;
}

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Sheet title.
    pub const TITLE_MD: f32 = 20.0;
    /// Language rows.
    pub const BODY_LG: f32 = 16.0;
    /// Most labels.
    pub const BODY: f32 = 14.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    /// Top corners of the bottom sheet.
    pub const SHEET: f32 = 20.0;
}
