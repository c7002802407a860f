//! Theme override files
//!
//! Partial themes load from TOML and patch over a base theme. Every table
//! and key is optional; only what the file names changes:
//!
//! ```toml
//! [canvas]
//! background = "#FFFFFF"
//!
//! [button.frame.hover]
//! fill = "#E5F1FB"
//! outline = "#288CDB"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use vitrine_core::{Color, ColorParseError};

use crate::style::{StateStyle, StateStyles, Theme};

/// Errors produced while loading or applying a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color in theme file: {0}")]
    Color(#[from] ColorParseError),
}

/// A partial style for one element state.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StateStylePatch {
    fill: Option<String>,
    outline: Option<String>,
}

impl StateStylePatch {
    fn apply_to(&self, style: &mut StateStyle) -> Result<(), ThemeError> {
        if let Some(fill) = &self.fill {
            style.fill = fill.parse::<Color>()?;
        }
        if let Some(outline) = &self.outline {
            style.outline = outline.parse::<Color>()?;
        }
        Ok(())
    }
}

/// A partial per-state table for one element.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StateStylesPatch {
    normal: Option<StateStylePatch>,
    hover: Option<StateStylePatch>,
    active: Option<StateStylePatch>,
    disabled: Option<StateStylePatch>,
}

impl StateStylesPatch {
    fn apply_to(&self, styles: &mut StateStyles) -> Result<(), ThemeError> {
        if let Some(patch) = &self.normal {
            patch.apply_to(&mut styles.normal)?;
        }
        // Optional states patch over their current value, or over normal
        // when the state was previously absent.
        let base = styles.normal;
        if let Some(patch) = &self.hover {
            let mut style = styles.hover.unwrap_or(base);
            patch.apply_to(&mut style)?;
            styles.hover = Some(style);
        }
        if let Some(patch) = &self.active {
            let mut style = styles.active.unwrap_or(base);
            patch.apply_to(&mut style)?;
            styles.active = Some(style);
        }
        if let Some(patch) = &self.disabled {
            let mut style = styles.disabled.unwrap_or(base);
            patch.apply_to(&mut style)?;
            styles.disabled = Some(style);
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ContainerPatch {
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonPatch {
    frame: Option<StateStylesPatch>,
    text: Option<StateStylesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CheckButtonPatch {
    frame: Option<StateStylesPatch>,
    mark: Option<StateStylesPatch>,
    text: Option<StateStylesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LabelPatch {
    frame: Option<StateStylesPatch>,
    text: Option<StateStylesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ProgressBarPatch {
    trough: Option<StateStylesPatch>,
    bar: Option<StateStylesPatch>,
    text: Option<StateStylesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SliderPatch {
    track: Option<StateStylesPatch>,
    fill: Option<StateStylesPatch>,
    knob: Option<StateStylesPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SwitchPatch {
    track_off: Option<StateStylesPatch>,
    track_on: Option<StateStylesPatch>,
    knob_off: Option<StateStylesPatch>,
    knob_on: Option<StateStylesPatch>,
}

/// A partial theme loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeOverrides {
    window: Option<ContainerPatch>,
    canvas: Option<ContainerPatch>,
    frame: Option<ContainerPatch>,
    button: Option<ButtonPatch>,
    check_button: Option<CheckButtonPatch>,
    label: Option<LabelPatch>,
    progress_bar: Option<ProgressBarPatch>,
    slider: Option<SliderPatch>,
    switch: Option<SwitchPatch>,
}

impl ThemeOverrides {
    /// Parse overrides from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(text)?)
    }

    /// Load overrides from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Patch a theme in place.
    pub fn apply(&self, theme: &mut Theme) -> Result<(), ThemeError> {
        if let Some(patch) = &self.window {
            if let Some(background) = &patch.background {
                theme.window.background = background.parse::<Color>()?;
            }
        }
        if let Some(patch) = &self.canvas {
            if let Some(background) = &patch.background {
                theme.canvas.background = background.parse::<Color>()?;
            }
        }
        if let Some(patch) = &self.frame {
            if let Some(background) = &patch.background {
                theme.frame.background = background.parse::<Color>()?;
            }
        }
        if let Some(patch) = &self.button {
            apply_opt(&patch.frame, &mut theme.button.frame)?;
            apply_opt(&patch.text, &mut theme.button.text)?;
        }
        if let Some(patch) = &self.check_button {
            apply_opt(&patch.frame, &mut theme.check_button.frame)?;
            apply_opt(&patch.mark, &mut theme.check_button.mark)?;
            apply_opt(&patch.text, &mut theme.check_button.text)?;
        }
        if let Some(patch) = &self.label {
            apply_opt(&patch.frame, &mut theme.label.frame)?;
            apply_opt(&patch.text, &mut theme.label.text)?;
        }
        if let Some(patch) = &self.progress_bar {
            apply_opt(&patch.trough, &mut theme.progress_bar.trough)?;
            apply_opt(&patch.bar, &mut theme.progress_bar.bar)?;
            apply_opt(&patch.text, &mut theme.progress_bar.text)?;
        }
        if let Some(patch) = &self.slider {
            apply_opt(&patch.track, &mut theme.slider.track)?;
            apply_opt(&patch.fill, &mut theme.slider.fill)?;
            apply_opt(&patch.knob, &mut theme.slider.knob)?;
        }
        if let Some(patch) = &self.switch {
            apply_opt(&patch.track_off, &mut theme.switch.track_off)?;
            apply_opt(&patch.track_on, &mut theme.switch.track_on)?;
            apply_opt(&patch.knob_off, &mut theme.switch.knob_off)?;
            apply_opt(&patch.knob_on, &mut theme.switch.knob_on)?;
        }
        Ok(())
    }
}

fn apply_opt(
    patch: &Option<StateStylesPatch>,
    styles: &mut StateStyles,
) -> Result<(), ThemeError> {
    if let Some(patch) = patch {
        patch.apply_to(styles)?;
    }
    Ok(())
}
