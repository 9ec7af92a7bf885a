use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;
pub const LIGHT_BLACK: Color = Color::from_rgb(
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
    0x14 as f32 / 255.0,
);
pub const GREY_7: Color = Color::from_rgb(
    0x37 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x51 as f32 / 255.0,
);
pub const GREY_5: Color = Color::from_rgb(
    0x6F as f32 / 255.0,
    0x6F as f32 / 255.0,
    0x6F as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
);
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0xFC as f32 / 255.0,
    0xE7 as f32 / 255.0,
);
pub const ORANGE: Color =
    Color::from_rgb(0xFF as f32 / 255.0, 0xa7 as f32 / 255.0, 0x0 as f32 / 255.0);

// Accent used by primary actions.
pub const INDIGO: Color = Color::from_rgb(
    0x4F as f32 / 255.0,
    0x46 as f32 / 255.0,
    0xE5 as f32 / 255.0,
);
pub const DARK_INDIGO: Color = Color::from_rgb(
    0x43 as f32 / 255.0,
    0x38 as f32 / 255.0,
    0xCA as f32 / 255.0,
);
pub const LIGHT_INDIGO: Color = Color::from_rgb(
    0xE0 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xFF as f32 / 255.0,
);

pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);
