// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action pill (brand green, darkens on hover).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::KISAN_DARK_GREEN,
        button::Status::Disabled => palette::GRAY_200,
        _ => palette::KISAN_GREEN,
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark secondary pill used by the hero's second call to action.
pub fn secondary_dark(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_700,
        _ => palette::GRAY_900,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral gray pill (the simulation Reset button).
pub fn neutral(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_200,
        button::Status::Disabled => palette::GRAY_100,
        _ => Color::from_rgb(0.9, 0.9, 0.9),
    };
    let text_color = if status == button::Status::Disabled {
        palette::GRAY_400
    } else {
        palette::GRAY_900
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill inside the dark navbar: solid white when active, translucent white
/// on hover otherwise.
pub fn navbar_pill(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            Some(Background::Color(WHITE))
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(Background::Color(Color {
                        a: 0.2,
                        ..WHITE
                    }))
                }
                _ => None,
            }
        };
        let text_color = if active {
            palette::KISAN_DARKER_GREEN
        } else {
            WHITE
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Borderless text button (the About close control, toast dismiss).
pub fn plain_text(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_900,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}
