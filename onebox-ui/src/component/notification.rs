use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn warning<'a, T: 'a>(message: String, detail: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(message))
            .push(text::p2_regular(detail)),
    )
    .padding(15)
    .style(theme::banner::warning)
    .width(Length::Fill)
}

pub fn pending<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p1_medium(message))
        .padding(10)
        .style(theme::notification::pending)
        .width(Length::Fill)
}
