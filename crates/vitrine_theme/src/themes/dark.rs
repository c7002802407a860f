//! Dark theme
//!
//! The dark counterpart of the light palette: `#202020` surfaces, `#F1F1F1`
//! text, and the `#4CC2FF` accent blue.

use vitrine_core::Color;

use crate::style::{
    ButtonTheme, CheckButtonTheme, ColorScheme, ContainerTheme, LabelTheme, ProgressBarTheme,
    SliderTheme, StateStyle, StateStyles, SwitchTheme, Theme,
};

fn text() -> StateStyles {
    StateStyles::new(StateStyle::solid(Color::from_hex(0xF1F1F1)))
        .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C)))
}

fn button_frame() -> StateStyles {
    StateStyles::new(StateStyle::new(
        Color::from_hex(0x333333),
        Color::from_hex(0x505050),
    ))
    .with_hover(StateStyle::new(
        Color::from_hex(0x3D3D3D),
        Color::from_hex(0x4CC2FF),
    ))
    .with_active(StateStyle::new(
        Color::from_hex(0x2E2E2E),
        Color::from_hex(0x3A8FB7),
    ))
    .with_disabled(StateStyle::new(
        Color::from_hex(0x2A2A2A),
        Color::from_hex(0x3D3D3D),
    ))
}

/// The built-in dark theme.
pub fn dark() -> Theme {
    Theme {
        name: "dark",
        scheme: ColorScheme::Dark,
        window: ContainerTheme {
            background: Color::from_hex(0x202020),
        },
        canvas: ContainerTheme {
            background: Color::from_hex(0x202020),
        },
        frame: ContainerTheme {
            background: Color::from_hex(0x282828),
        },
        button: ButtonTheme {
            frame: button_frame(),
            text: text(),
        },
        check_button: CheckButtonTheme {
            frame: StateStyles::new(StateStyle::new(
                Color::from_hex(0x2B2B2B),
                Color::from_hex(0x9E9E9E),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0x323232),
                Color::from_hex(0xCCCCCC),
            ))
            .with_active(StateStyle::new(
                Color::from_hex(0x262626),
                Color::from_hex(0x4CC2FF),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0x2A2A2A),
                Color::from_hex(0x3D3D3D),
            )),
            mark: StateStyles::new(StateStyle::solid(Color::from_hex(0x4CC2FF)))
                .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C))),
            text: text(),
        },
        label: LabelTheme {
            frame: StateStyles::new(StateStyle::new(
                Color::from_hex(0x2B2B2B),
                Color::from_hex(0x3D3D3D),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0x323232),
                Color::from_hex(0x3D3D3D),
            )),
            text: text(),
        },
        progress_bar: ProgressBarTheme {
            trough: StateStyles::new(StateStyle::new(
                Color::from_hex(0x333333),
                Color::from_hex(0x505050),
            )),
            bar: StateStyles::new(StateStyle::solid(Color::from_hex(0x4CC2FF)))
                .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C))),
            text: text(),
        },
        slider: SliderTheme {
            track: StateStyles::new(StateStyle::new(
                Color::from_hex(0x333333),
                Color::from_hex(0x505050),
            )),
            fill: StateStyles::new(StateStyle::solid(Color::from_hex(0x4CC2FF)))
                .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C))),
            knob: StateStyles::new(StateStyle::new(
                Color::from_hex(0x4CC2FF),
                Color::from_hex(0x454545),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0x5BC9FF),
                Color::from_hex(0x454545),
            ))
            .with_active(StateStyle::new(
                Color::from_hex(0x3A9FD6),
                Color::from_hex(0x454545),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0x6C6C6C),
                Color::from_hex(0x454545),
            )),
        },
        switch: SwitchTheme {
            track_off: StateStyles::new(StateStyle::new(
                Color::from_hex(0x2B2B2B),
                Color::from_hex(0x9E9E9E),
            ))
            .with_hover(StateStyle::new(
                Color::from_hex(0x323232),
                Color::from_hex(0x9E9E9E),
            ))
            .with_disabled(StateStyle::new(
                Color::from_hex(0x2A2A2A),
                Color::from_hex(0x505050),
            )),
            track_on: StateStyles::new(StateStyle::solid(Color::from_hex(0x4CC2FF)))
                .with_hover(StateStyle::solid(Color::from_hex(0x5BC9FF)))
                .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C))),
            knob_off: StateStyles::new(StateStyle::solid(Color::from_hex(0xCCCCCC)))
                .with_disabled(StateStyle::solid(Color::from_hex(0x6C6C6C))),
            knob_on: StateStyles::new(StateStyle::solid(Color::from_hex(0x1B1B1B))),
        },
    }
}
