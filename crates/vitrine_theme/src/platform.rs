//! System color-scheme detection

use crate::style::ColorScheme;

/// Detect the system color scheme, defaulting to light when the platform
/// gives no answer.
pub fn detect_system_color_scheme() -> ColorScheme {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorScheme::Dark,
        dark_light::Mode::Light | dark_light::Mode::Default => ColorScheme::Light,
    }
}
