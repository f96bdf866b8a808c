//! Icon name to glyph catalogue.
//!
//! Components refer to icons by Feather-style names ("calendar",
//! "chevron-down", ...). Turning a name into something drawable is this
//! module's job; an unknown name falls back to a placeholder glyph.

/// Glyph drawn for names the catalogue does not know
pub const PLACEHOLDER_GLYPH: &str = "□";

const GLYPHS: &[(&str, &str)] = &[
    ("arrow-left", "⬅"),
    ("arrow-right", "➡"),
    ("bell", "🔔"),
    ("calendar", "📅"),
    ("check", "✔"),
    ("chevron-down", "⏷"),
    ("chevron-left", "⏴"),
    ("chevron-right", "⏵"),
    ("chevron-up", "⏶"),
    ("crosshair", "⌖"),
    ("home", "🏠"),
    ("info", "ℹ"),
    ("layers", "🗐"),
    ("map-pin", "📍"),
    ("menu", "☰"),
    ("minus", "➖"),
    ("navigation", "➤"),
    ("plus", "➕"),
    ("refresh-cw", "🔄"),
    ("search", "🔍"),
    ("settings", "⚙"),
    ("user", "👤"),
    ("wind", "🌬"),
    ("x", "❌"),
];

/// Look up the glyph for an icon name.
pub fn lookup(name: &str) -> Option<&'static str> {
    GLYPHS
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|idx| GLYPHS[idx].1)
}

/// Glyph for an icon name, or [`PLACEHOLDER_GLYPH`] when unknown.
pub fn glyph(name: &str) -> &'static str {
    lookup(name).unwrap_or_else(|| {
        log::debug!("Unknown icon name '{}', drawing placeholder", name);
        PLACEHOLDER_GLYPH
    })
}
