//! Built-in themes

mod dark;
mod light;

pub use dark::dark;
pub use light::light;

use crate::style::ThemeBundle;

/// The built-in light/dark bundle.
pub fn builtin_bundle() -> ThemeBundle {
    ThemeBundle {
        light: light(),
        dark: dark(),
    }
}
