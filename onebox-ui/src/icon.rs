use crate::{component::text::P1_SIZE, widget::*};
use iced::{alignment, Font, Length};

const BOOTSTRAP_ICONS: Font = Font::with_name("bootstrap-icons");

fn bootstrap_icon<'a>(unicode: char) -> Text<'a> {
    Text::new(unicode)
        .font(BOOTSTRAP_ICONS)
        .width(Length::Fixed(20.0))
        .align_x(alignment::Horizontal::Center)
        .size(P1_SIZE)
}

pub fn cross_icon() -> Text<'static> {
    bootstrap_icon('\u{F62A}')
}

pub fn cube_icon() -> Text<'static> {
    bootstrap_icon('\u{F1C8}')
}

pub fn lightning_icon() -> Text<'static> {
    bootstrap_icon('\u{F46E}')
}

pub fn person_icon() -> Text<'static> {
    bootstrap_icon('\u{F4DA}')
}

pub fn eye_icon() -> Text<'static> {
    bootstrap_icon('\u{F341}')
}

pub fn eye_slash_icon() -> Text<'static> {
    bootstrap_icon('\u{F33F}')
}

pub fn warning_icon() -> Text<'static> {
    bootstrap_icon('\u{F33B}')
}

pub fn send_icon() -> Text<'static> {
    bootstrap_icon('\u{F603}')
}

pub fn check_icon() -> Text<'static> {
    bootstrap_icon('\u{F633}')
}

pub fn magic_icon() -> Text<'static> {
    bootstrap_icon('\u{F484}')
}
