use iced::widget::container::Style;
use iced::{Background, Border};

use super::palette::ContainerPalette;
use super::{Theme, RADIUS};

fn notification(palette: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(palette.background)),
        text_color: palette.text,
        border: if let Some(color) = palette.border {
            Border {
                width: 1.0,
                color,
                radius: RADIUS.into(),
            }
        } else {
            Border {
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

pub fn info(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.info)
}

pub fn success(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.success)
}

pub fn warning(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.warning)
}

pub fn error(theme: &Theme) -> Style {
    notification(&theme.colors.notifications.error)
}
