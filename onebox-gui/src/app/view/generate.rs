use iced::Length;

use onebox_ui::{
    component::{button, text::*},
    icon, theme,
    widget::*,
};

use super::{warn, DesignMessage, Message};
use crate::{
    app::{error::Error, menu::Menu},
    services::DesignArtifact,
};

pub fn panel<'a>(
    generating: bool,
    artifact: Option<&'a DesignArtifact>,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(h3("Quick generate"))
        .push(p1_regular(
            "Generate a box design in one click from the house defaults, \
             no configuration needed.",
        ))
        .push(
            button::primary(Some(icon::lightning_icon()), "Generate design")
                .width(Length::Fixed(220.0))
                .on_press_maybe(if generating {
                    None
                } else {
                    Some(Message::Design(DesignMessage::Generate))
                }),
        )
        .push_maybe(artifact.map(|a| {
            Container::new(p2_medium(format!("Design {} is ready.", a.id)))
                .padding(10)
                .style(theme::notification::pending)
        }))
        .push(
            button::secondary(None, "Fine-tune in the studio")
                .width(Length::Fixed(220.0))
                .on_press(Message::Menu(Menu::Studio)),
        )
        .into()
}
