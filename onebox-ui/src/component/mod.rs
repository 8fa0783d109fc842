pub mod button;
pub mod form;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{color, theme, widget::*};

/// Wordmark displayed at the top of the navigation rail.
pub fn logotype<'a, T: 'a>() -> Container<'a, T> {
    Container::new(text::h4_bold("onebox").color(color::LIME))
        .padding(10)
        .center_x(Length::Fill)
}

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new().push(text::text(" ")))
        .style(theme::container::custom(color::GREY_1))
        .height(Length::Fixed(1.0))
}
