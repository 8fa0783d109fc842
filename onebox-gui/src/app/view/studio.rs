use iced::{alignment::Vertical, widget::Space, Length};

use onebox::design::{BoxColor, DesignConfig, DesignStyle, FlowerPattern};
use onebox_ui::{
    color,
    component::{button, form, text::*},
    icon, theme,
    theme::Theme,
    widget::*,
};

use super::{warn, DesignMessage, Message};
use crate::{app::error::Error, services::DesignArtifact};

fn section<'a>(title: &'static str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .push(p2_medium(title))
            .push(content.into()),
    )
    .padding(15)
    .width(Length::Fill)
    .style(theme::container::custom(color::CREAM))
    .into()
}

fn color_swatch<'a>(swatch: BoxColor, selected: bool) -> Button<'a, Message> {
    let fill = match swatch {
        BoxColor::Yellow => color::SWATCH_YELLOW,
        BoxColor::Gray => color::SWATCH_GRAY,
    };
    Button::new(Space::new(Length::Fixed(24.0), Length::Fixed(24.0)))
        .style(move |_theme: &Theme, _status| iced::widget::button::Style {
            background: Some(iced::Background::Color(fill)),
            border: iced::Border {
                radius: 25.0.into(),
                width: if selected { 2.0 } else { 0.0 },
                color: color::INK,
            },
            ..Default::default()
        })
        .on_press(Message::Design(DesignMessage::ColorSelected(swatch)))
}

fn style_chips<'a>(selected: DesignStyle) -> Row<'a, Message> {
    DesignStyle::ALL.iter().fold(Row::new().spacing(10), |row, style| {
        row.push(
            button::chip(style.to_string(), *style == selected)
                .on_press(Message::Design(DesignMessage::StyleSelected(*style))),
        )
    })
}

fn display_pill<'a>(label: String, highlighted: bool) -> Container<'a, Message> {
    Container::new(p2_regular(label)).padding(5).style(if highlighted {
        theme::pill::primary
    } else {
        theme::pill::simple
    })
}

fn prompt_card<'a>(
    question: &'static str,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    Container::new(
        Column::new()
            .spacing(10)
            .push(p2_regular(question))
            .push(content.into()),
    )
    .padding(10)
    .width(Length::Fill)
    .style(theme::card::simple)
}

fn options<'a>(config: &'a DesignConfig) -> Element<'a, Message> {
    Column::new()
        .spacing(10)
        .push(section(
            "Product type",
            Row::new()
                .spacing(10)
                .push(display_pill(config.product_type.clone(), true))
                .push(display_pill(config.brand_name.clone(), false)),
        ))
        .push(section(
            "Box color",
            BoxColor::ALL
                .iter()
                .fold(Row::new().spacing(10), |row, swatch| {
                    row.push(color_swatch(*swatch, *swatch == config.box_color))
                }),
        ))
        .push(section("Design style", style_chips(config.style)))
        .push(section(
            "Pattern",
            FlowerPattern::ALL
                .iter()
                .fold(Row::new().spacing(10), |row, pattern| {
                    row.push(
                        button::chip(pattern.to_string(), *pattern == config.pattern)
                            .on_press(Message::Design(DesignMessage::PatternSelected(*pattern))),
                    )
                }),
        ))
        .into()
}

fn assistant<'a>(config: &'a DesignConfig, prompt: &'a form::Value<String>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(15)
            .push(p2_regular(
                "Hi, I'm your packaging design assistant. Answer the questions \
                 below and I will put together a custom design.",
            ))
            .push(prompt_card(
                "Which style of box design would you like?",
                style_chips(config.style),
            ))
            .push(prompt_card(
                "Which colors should the box combine?",
                Row::new()
                    .spacing(10)
                    .push(display_pill("Pink + White".to_string(), false))
                    .push(display_pill("Gold + Gray".to_string(), false)),
            ))
            .push(prompt_card(
                "Your product name and category",
                Row::new()
                    .spacing(10)
                    .push(display_pill(format!("Brand: {}", config.brand_name), false))
                    .push(display_pill(
                        format!("Category: {}", config.product_type),
                        false,
                    )),
            ))
            .push(
                Row::new()
                    .spacing(10)
                    .align_y(Vertical::Center)
                    .push(
                        form::Form::new("Type here...", prompt, |s| {
                            Message::Design(DesignMessage::PromptEdited(s))
                        })
                        .padding(10),
                    )
                    .push(icon::send_icon().style(theme::text::secondary)),
            ),
    )
    .padding(15)
    .style(theme::container::custom(color::CREAM))
    .into()
}

pub fn panel<'a>(
    config: &'a DesignConfig,
    prompt: &'a form::Value<String>,
    generating: bool,
    artifact: Option<&'a DesignArtifact>,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let generate_button: Element<'a, Message> = Container::new(
        button::primary(Some(icon::magic_icon()), "Generate design")
            .width(Length::Fixed(220.0))
            .on_press_maybe(if generating {
                None
            } else {
                Some(Message::Design(DesignMessage::Generate))
            }),
    )
    .center_x(Length::Fill)
    .into();

    Column::new()
        .spacing(20)
        .push(warn(warning))
        .push(h3("Box packaging designer"))
        .push(
            Container::new(
                Row::new()
                    .spacing(20)
                    .push(Container::new(options(config)).width(Length::FillPortion(1)))
                    .push(Container::new(assistant(config, prompt)).width(Length::FillPortion(2))),
            )
            .padding(20)
            .style(theme::card::simple),
        )
        .push(generate_button)
        .push_maybe(artifact.map(|a| {
            Container::new(p2_medium(format!("Design {} is ready.", a.id)))
                .padding(10)
                .style(theme::notification::pending)
        }))
        .into()
}
