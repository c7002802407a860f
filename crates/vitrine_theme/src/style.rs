//! Style tables
//!
//! The table shape mirrors what widgets draw: a widget kind owns one
//! [`StateStyles`] per drawn element, and each table maps a
//! [`WidgetState`] to the element's fill and outline colors.

use vitrine_core::{Color, WidgetState};

/// Light or dark variant of a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Appearance of one drawn element in one widget state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateStyle {
    pub fill: Color,
    pub outline: Color,
}

impl StateStyle {
    pub const fn new(fill: Color, outline: Color) -> Self {
        Self { fill, outline }
    }

    /// A style whose outline matches its fill.
    pub const fn solid(fill: Color) -> Self {
        Self {
            fill,
            outline: fill,
        }
    }

    /// Linear interpolation between two styles.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            fill: Color::lerp(&from.fill, &to.fill, t),
            outline: Color::lerp(&from.outline, &to.outline, t),
        }
    }
}

/// Per-state style table for one drawn element.
///
/// Only `normal` is required; missing states fall back to it, so elements
/// that do not react to hover or press stay visually stable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateStyles {
    pub normal: StateStyle,
    pub hover: Option<StateStyle>,
    pub active: Option<StateStyle>,
    pub disabled: Option<StateStyle>,
}

impl StateStyles {
    /// A table that looks the same in every state.
    pub const fn uniform(style: StateStyle) -> Self {
        Self {
            normal: style,
            hover: None,
            active: None,
            disabled: None,
        }
    }

    pub const fn new(normal: StateStyle) -> Self {
        Self::uniform(normal)
    }

    pub const fn with_hover(mut self, style: StateStyle) -> Self {
        self.hover = Some(style);
        self
    }

    pub const fn with_active(mut self, style: StateStyle) -> Self {
        self.active = Some(style);
        self
    }

    pub const fn with_disabled(mut self, style: StateStyle) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Resolve the style for a widget state, falling back to `normal`.
    pub fn get(&self, state: WidgetState) -> StateStyle {
        match state {
            WidgetState::Normal => self.normal,
            WidgetState::Hover => self.hover.unwrap_or(self.normal),
            WidgetState::Active => self.active.or(self.hover).unwrap_or(self.normal),
            WidgetState::Disabled => self.disabled.unwrap_or(self.normal),
        }
    }
}

/// Styles for a plain container surface (window, canvas, frame).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerTheme {
    pub background: Color,
}

/// Styles for the button widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonTheme {
    pub frame: StateStyles,
    pub text: StateStyles,
}

/// Styles for the check button widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckButtonTheme {
    pub frame: StateStyles,
    /// The check mark drawn when the widget is checked.
    pub mark: StateStyles,
    pub text: StateStyles,
}

/// Styles for the label widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelTheme {
    pub frame: StateStyles,
    pub text: StateStyles,
}

/// Styles for the progress bar widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressBarTheme {
    pub trough: StateStyles,
    pub bar: StateStyles,
    pub text: StateStyles,
}

/// Styles for the slider widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderTheme {
    pub track: StateStyles,
    /// The filled portion of the track, up to the current value.
    pub fill: StateStyles,
    pub knob: StateStyles,
}

/// Styles for the switch widget. Track and knob have separate tables for
/// the on and off positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwitchTheme {
    pub track_off: StateStyles,
    pub track_on: StateStyles,
    pub knob_off: StateStyles,
    pub knob_on: StateStyles,
}

/// A complete style table set for one color scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub scheme: ColorScheme,
    pub window: ContainerTheme,
    pub canvas: ContainerTheme,
    pub frame: ContainerTheme,
    pub button: ButtonTheme,
    pub check_button: CheckButtonTheme,
    pub label: LabelTheme,
    pub progress_bar: ProgressBarTheme,
    pub slider: SliderTheme,
    pub switch: SwitchTheme,
}

/// A light/dark theme pair.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemeBundle {
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Theme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_styles_fallback_chain() {
        let normal = StateStyle::solid(Color::from_hex(0xE1E1E1));
        let hover = StateStyle::solid(Color::from_hex(0xE5F1FB));

        let styles = StateStyles::new(normal).with_hover(hover);

        assert_eq!(styles.get(WidgetState::Normal), normal);
        assert_eq!(styles.get(WidgetState::Hover), hover);
        // Active falls back to hover before normal
        assert_eq!(styles.get(WidgetState::Active), hover);
        // Disabled falls straight back to normal
        assert_eq!(styles.get(WidgetState::Disabled), normal);
    }

    #[test]
    fn test_uniform_table_ignores_state() {
        let style = StateStyle::new(Color::WHITE, Color::BLACK);
        let styles = StateStyles::uniform(style);
        for state in [
            WidgetState::Normal,
            WidgetState::Hover,
            WidgetState::Active,
            WidgetState::Disabled,
        ] {
            assert_eq!(styles.get(state), style);
        }
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
    }
}
