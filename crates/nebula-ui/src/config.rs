//! Engine configuration.
//!
//! Every geometry constant the layout and interaction passes depend on lives
//! here so a client can tune the chrome without touching the engine.

use nebula_core::geometry::Size;

/// Configuration for layout and pointer handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Height of a window title bar.
    pub window_header_height: f32,
    /// Inner padding of window content when the node sets none.
    pub window_padding: f32,
    /// Minimum size of a floating window.
    pub window_min_size: Size<f32>,
    /// Grab distance from a floating window edge that starts a resize.
    pub resize_margin: f32,
    /// Height of a dock container's tab strip.
    pub tab_bar_height: f32,
    /// Horizontal padding around a tab label.
    pub tab_padding: f32,
    /// Grab distance from a dock region's inner edge that starts a resize.
    pub dock_resize_margin: f32,
    /// Smallest size an occupied dock side is given.
    pub dock_min_size: f32,
    /// Space always left to the center region.
    pub center_min_size: f32,
    /// Text size used when a node does not set one.
    pub default_font_size: f32,
    /// Approximate glyph advance as a fraction of the font size.
    pub char_width_factor: f32,
    /// Radius of a slider handle.
    pub slider_handle_radius: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_header_height: 24.0,
            window_padding: 8.0,
            window_min_size: Size::new(120.0, 80.0),
            resize_margin: 6.0,
            tab_bar_height: 28.0,
            tab_padding: 12.0,
            dock_resize_margin: 4.0,
            dock_min_size: 80.0,
            center_min_size: 160.0,
            default_font_size: 13.0,
            char_width_factor: 0.6,
            slider_handle_radius: 7.0,
        }
    }
}

impl UiConfig {
    pub fn window_header_height(mut self, height: f32) -> Self {
        self.window_header_height = height.max(0.0);
        self
    }

    pub fn window_padding(mut self, padding: f32) -> Self {
        self.window_padding = padding.max(0.0);
        self
    }

    pub fn window_min_size(mut self, width: f32, height: f32) -> Self {
        self.window_min_size = Size::new(width.max(0.0), height.max(0.0));
        self
    }

    pub fn resize_margin(mut self, margin: f32) -> Self {
        self.resize_margin = margin.max(0.0);
        self
    }

    pub fn tab_bar_height(mut self, height: f32) -> Self {
        self.tab_bar_height = height.max(0.0);
        self
    }

    pub fn dock_resize_margin(mut self, margin: f32) -> Self {
        self.dock_resize_margin = margin.max(0.0);
        self
    }

    pub fn dock_min_size(mut self, size: f32) -> Self {
        self.dock_min_size = size.max(0.0);
        self
    }

    pub fn center_min_size(mut self, size: f32) -> Self {
        self.center_min_size = size.max(0.0);
        self
    }

    pub fn default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size.max(1.0);
        self
    }

    /// Estimated width of `text` at `font_size`.
    ///
    /// There is no shaper in the engine; this is the same monospace estimate
    /// used for tabs and labels everywhere.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_factor
    }

    /// Estimated line height at `font_size`.
    pub fn line_height(&self, font_size: f32) -> f32 {
        (font_size * 1.4).ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_clamp_negative() {
        let config = UiConfig::default().tab_bar_height(-4.0).resize_margin(-1.0);
        assert_eq!(config.tab_bar_height, 0.0);
        assert_eq!(config.resize_margin, 0.0);
    }

    #[test]
    fn test_text_width_counts_chars() {
        let config = UiConfig::default();
        assert_eq!(config.text_width("Stars", 10.0), 30.0);
        assert_eq!(config.text_width("", 10.0), 0.0);
    }
}
