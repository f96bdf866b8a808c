//! Theme module for the widget set
//!
//! Holds the fixed palette the components are drawn with and the
//! light/dark backdrop the gallery applies to its egui context.

use egui::Color32;

/// Colors embedded in the components. These are not configurable; the only
/// styling path open to callers is the icon button's style override.
pub mod palette {
    use egui::Color32;

    /// Card and button surface
    pub const SURFACE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
    /// Headings and default icon color (slate-800)
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
    /// Secondary text and chevrons (slate-500)
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b);
    /// Calendar glyph on the day selector (blue-800)
    pub const CALENDAR_ICON: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
    /// Inactive pagination dot (slate-300)
    pub const DOT_INACTIVE: Color32 = Color32::from_rgb(0xcb, 0xd5, 0xe1);
    /// Active pagination dot (blue-500)
    pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
    /// Selected day label and check badge in the day menu (blue-800)
    pub const ACCENT_STRONG: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
    /// Unselected day labels (slate-600)
    pub const LABEL_MUTED: Color32 = Color32::from_rgb(0x47, 0x55, 0x69);
    /// Dates under the day menu labels (slate-400)
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
    /// Text on accent fills
    pub const ON_ACCENT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
    /// Selected row background in the day menu (blue-50)
    pub const ACCENT_TINT: Color32 = Color32::from_rgb(0xef, 0xf6, 0xff);
    /// Hairline dividers (gray-200)
    pub const DIVIDER: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
    /// Dividers between day menu rows (slate-100)
    pub const ROW_DIVIDER: Color32 = Color32::from_rgb(0xf1, 0xf5, 0xf9);
    /// Shadow base color
    pub const SHADOW: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Return `color` with its alpha replaced by `opacity` (0.0..=1.0).
pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Backdrop the gallery paints behind the components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryTheme {
    #[default]
    Light,
    Dark,
}

impl GalleryTheme {
    /// Resolve a settings theme name; anything but "dark" is light
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            GalleryTheme::Dark
        } else {
            GalleryTheme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, GalleryTheme::Dark)
    }

    /// Application background color
    pub fn app_background(self) -> Color32 {
        match self {
            GalleryTheme::Light => Color32::from_rgb(0xf1, 0xf5, 0xf9),
            GalleryTheme::Dark => Color32::from_rgb(0x0f, 0x17, 0x2a),
        }
    }

    /// Text drawn by the gallery itself (slide copy, section headings)
    pub fn text(self) -> Color32 {
        match self {
            GalleryTheme::Light => palette::TEXT_PRIMARY,
            GalleryTheme::Dark => Color32::from_rgb(0xe2, 0xe8, 0xf0),
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background();
        visuals.panel_fill = self.app_background();

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_opacity() {
        let color = with_opacity(palette::SHADOW, 0.1);
        assert_eq!(color.a(), 26);

        let clamped = with_opacity(palette::ACCENT, 3.0);
        assert_eq!(clamped.a(), 255);
    }

    #[test]
    fn test_default_theme_is_light() {
        assert_eq!(GalleryTheme::default(), GalleryTheme::Light);
        assert!(!GalleryTheme::Light.is_dark());
        assert!(GalleryTheme::Dark.is_dark());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(GalleryTheme::from_name("dark"), GalleryTheme::Dark);
        assert_eq!(GalleryTheme::from_name(" Dark "), GalleryTheme::Dark);
        assert_eq!(GalleryTheme::from_name("light"), GalleryTheme::Light);
        assert_eq!(GalleryTheme::from_name("solarized"), GalleryTheme::Light);
    }

    #[test]
    fn test_theme_backgrounds_differ() {
        assert_ne!(
            GalleryTheme::Light.app_background(),
            GalleryTheme::Dark.app_background()
        );
    }
}
