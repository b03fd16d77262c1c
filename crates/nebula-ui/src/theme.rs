//! Theme system for the workspace chrome.
//!
//! The command builder reads every colour it does not find on a node from the
//! active [`Theme`].
//!
//! ```
//! use nebula_ui::{Color, Theme};
//!
//! let mut theme = Theme::dark();
//! theme.palette.accent = Color::from_rgb_u8(240, 160, 60);
//! assert_eq!(theme.font_size, 13.0);
//! ```

use crate::color::Color;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Frame clear color
    pub background: Color,
    /// Window body and dock panel color
    pub surface: Color,
    /// Window title bar color
    pub header: Color,
    /// Accent color (slider fill, active tab underline, focus)
    pub accent: Color,
    /// Button background
    pub button: Color,
    /// Window and panel border color
    pub border: Color,
    /// Drop shadow under floating windows
    pub shadow: Color,
    /// Dock tab strip background
    pub tab_bar: Color,
    /// Active tab background
    pub tab_active: Color,
    /// Inactive tab background
    pub tab_inactive: Color,
    /// Primary text color
    pub text_primary: Color,
    /// Secondary/muted text color
    pub text_secondary: Color,
    /// Slider track color
    pub slider_track: Color,
    /// Minimap background
    pub minimap_background: Color,
    /// Minimap hyperlane color
    pub minimap_lane: Color,
    /// Minimap camera rectangle
    pub minimap_view: Color,
    /// Default bar chart fill
    pub chart_bar: Color,
}

impl ColorPalette {
    /// Create a dark color palette.
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb_u8(8, 10, 20),
            surface: Color::from_rgba_u8(24, 28, 44, 235),
            header: Color::from_rgb_u8(36, 42, 66),
            accent: Color::from_rgb_u8(90, 150, 240),
            button: Color::from_rgb_u8(52, 60, 92),
            border: Color::from_rgb_u8(70, 80, 120),
            shadow: Color::from_rgba_u8(0, 0, 0, 90),
            tab_bar: Color::from_rgb_u8(20, 24, 38),
            tab_active: Color::from_rgb_u8(44, 52, 80),
            tab_inactive: Color::from_rgb_u8(28, 32, 50),
            text_primary: Color::from_rgb_u8(230, 235, 250),
            text_secondary: Color::from_rgb_u8(150, 160, 190),
            slider_track: Color::from_rgb_u8(50, 56, 80),
            minimap_background: Color::from_rgb_u8(4, 6, 14),
            minimap_lane: Color::from_rgba_u8(120, 140, 200, 110),
            minimap_view: Color::from_rgb_u8(240, 220, 120),
            chart_bar: Color::from_rgb_u8(100, 180, 255),
        }
    }

    /// Create a light color palette.
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb_u8(236, 238, 244),
            surface: Color::from_rgb_u8(255, 255, 255),
            header: Color::from_rgb_u8(214, 220, 236),
            accent: Color::from_rgb_u8(50, 100, 200),
            button: Color::from_rgb_u8(200, 208, 228),
            border: Color::from_rgb_u8(180, 186, 204),
            shadow: Color::from_rgba_u8(0, 0, 0, 40),
            tab_bar: Color::from_rgb_u8(222, 226, 238),
            tab_active: Color::from_rgb_u8(255, 255, 255),
            tab_inactive: Color::from_rgb_u8(206, 212, 228),
            text_primary: Color::from_rgb_u8(20, 22, 30),
            text_secondary: Color::from_rgb_u8(90, 96, 116),
            slider_track: Color::from_rgb_u8(190, 196, 214),
            minimap_background: Color::from_rgb_u8(16, 20, 32),
            minimap_lane: Color::from_rgba_u8(140, 160, 220, 120),
            minimap_view: Color::from_rgb_u8(220, 160, 40),
            chart_bar: Color::from_rgb_u8(60, 120, 210),
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Complete theme used by the command builder.
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: ColorPalette,
    /// Body text size
    pub font_size: f32,
    /// Title bar and tab text size
    pub title_font_size: f32,
    /// Corner radius for buttons and tabs
    pub corner_radius: f32,
    /// Stroke width for borders
    pub border_width: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            font_size: 13.0,
            title_font_size: 13.0,
            corner_radius: 3.0,
            border_width: 1.0,
        }
    }

    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            ..Self::dark()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
