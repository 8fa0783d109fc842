use iced::Color;

pub const BLACK: Color = iced::Color::BLACK;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const INK: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x1D as f32 / 255.0,
    0x1D as f32 / 255.0,
);
pub const INK_LIGHT: Color = Color::from_rgb(
    0x2A as f32 / 255.0,
    0x2A as f32 / 255.0,
    0x2A as f32 / 255.0,
);
pub const GREY_4: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
    0x6B as f32 / 255.0,
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
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);

// Brand accent, the lime of the generate and login call-to-actions.
pub const LIME: Color = Color::from_rgb(
    0xC3 as f32 / 255.0,
    0xF5 as f32 / 255.0,
    0x3B as f32 / 255.0,
);
pub const LIME_SOFT: Color = Color::from_rgb(
    0xB5 as f32 / 255.0,
    0xE4 as f32 / 255.0,
    0x8C as f32 / 255.0,
);
pub const MINT: Color = Color::from_rgb(
    0xE8 as f32 / 255.0,
    0xFF as f32 / 255.0,
    0xD6 as f32 / 255.0,
);

// Panel backgrounds.
pub const CREAM: Color = Color::from_rgb(
    0xF8 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xF0 as f32 / 255.0,
);
pub const SAGE: Color = Color::from_rgb(
    0xA3 as f32 / 255.0,
    0xBA as f32 / 255.0,
    0xAE as f32 / 255.0,
);

pub const GREEN: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xE2 as f32 / 255.0,
    0x4E as f32 / 255.0,
    0x1B as f32 / 255.0,
);
pub const AMBER: Color = Color::from_rgb(
    0xFC as f32 / 255.0,
    0xC1 as f32 / 255.0,
    0x07 as f32 / 255.0,
);

// Box color swatches of the studio configurator.
pub const SWATCH_YELLOW: Color = Color::from_rgb(
    0xFD as f32 / 255.0,
    0xE0 as f32 / 255.0,
    0x47 as f32 / 255.0,
);
pub const SWATCH_GRAY: Color = GREY_2;
