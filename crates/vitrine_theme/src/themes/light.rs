//! Light theme
//!
//! Fluent-flavored light palette: near-white surfaces, `#1A1A1A` text, and
//! the `#288CDB`/`#0067C0` accent blues on hover and active states.

use vitrine_core::Color;

use crate::style::{
    ButtonTheme, CheckButtonTheme, ColorScheme, ContainerTheme, LabelTheme, ProgressBarTheme,
    SliderTheme, StateStyle, StateStyles, SwitchTheme, Theme,
};

fn text() -> StateStyles {
    StateStyles::new(StateStyle::solid(Color::from_hex(0x1A1A1A)))
        .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0)))
}

fn button_frame() -> StateStyles {
    StateStyles::new(StateStyle::new(
        Color::from_hex(0xE1E1E1),
        Color::from_hex(0xC0C0C0),
    ))
    .with_hover(StateStyle::new(
        Color::from_hex(0xE5F1FB),
        Color::from_hex(0x288CDB),
    ))
    .with_active(StateStyle::new(
        Color::from_hex(0xCCE4F7),
        Color::from_hex(0x4884B4),
    ))
    .with_disabled(StateStyle::new(
        Color::from_hex(0xF5F5F5),
        Color::from_hex(0xDCDCDC),
    ))
}

/// The built-in light theme.
pub fn light() -> Theme {
    Theme {
        name: "light",
        scheme: ColorScheme::Light,
        window: ContainerTheme {
            background: Color::from_hex(0xF1F1F1),
        },
        canvas: ContainerTheme {
            background: Color::from_hex(0xF1F1F1),
        },
        frame: ContainerTheme {
            background: Color::from_hex(0xEAEAEA),
        },
        button: ButtonTheme {
            frame: button_frame(),
            text: text(),
        },
        check_button: CheckButtonTheme {
            frame: StateStyles::new(StateStyle::new(
                Color::from_hex(0xFBFBFB),
                Color::from_hex(0xC0C0C0),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0xF6F6F6),
                Color::from_hex(0x414141),
            ))
            .with_active(StateStyle::new(
                Color::from_hex(0xFFFFFF),
                Color::from_hex(0x288CDB),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0xF5F5F5),
                Color::from_hex(0xDCDCDC),
            )),
            mark: StateStyles::new(StateStyle::solid(Color::from_hex(0x0067C0)))
                .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0))),
            text: text(),
        },
        label: LabelTheme {
            frame: StateStyles::new(StateStyle::new(
                Color::from_hex(0xFBFBFB),
                Color::from_hex(0xDCDCDC),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0xF6F6F6),
                Color::from_hex(0xDCDCDC),
            )),
            text: text(),
        },
        progress_bar: ProgressBarTheme {
            trough: StateStyles::new(StateStyle::new(
                Color::from_hex(0xE1E1E1),
                Color::from_hex(0xC0C0C0),
            )),
            bar: StateStyles::new(StateStyle::solid(Color::from_hex(0x0067C0)))
                .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0))),
            text: text(),
        },
        slider: SliderTheme {
            track: StateStyles::new(StateStyle::new(
                Color::from_hex(0xE1E1E1),
                Color::from_hex(0xC0C0C0),
            )),
            fill: StateStyles::new(StateStyle::solid(Color::from_hex(0x0067C0)))
                .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0))),
            knob: StateStyles::new(StateStyle::new(
                Color::from_hex(0x0067C0),
                Color::from_hex(0xFFFFFF),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0x197CD5),
                Color::from_hex(0xFFFFFF),
            ))
            .with_active(StateStyle::new(
                Color::from_hex(0x0F5A9E),
                Color::from_hex(0xFFFFFF),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0xA0A0A0),
                Color::from_hex(0xFFFFFF),
            )),
        },
        switch: SwitchTheme {
            track_off: StateStyles::new(StateStyle::new(
                Color::from_hex(0xFBFBFB),
                Color::from_hex(0x868686),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0xF6F6F6),
                Color::from_hex(0x868686),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0xF5F5F5),
                Color::from_hex(0xC0C0C0),
            )),
            track_on: StateStyles::new(StateStyle::solid(Color::from_hex(0x0067C0)))
                .with_hover(StateStyle::solid(Color::from_hex(0x197CD5)))
                .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0))),
            knob_off: StateStyles::new(StateStyle::solid(Color::from_hex(0x5D5D5D)))
                .with_disabled(StateStyle::solid(Color::from_hex(0xA0A0A0))),
            knob_on: StateStyles::new(StateStyle::solid(Color::from_hex(0xFFFFFF))),
        },
    }
}
