mod message;
mod warning;

pub mod generate;
pub mod login;
pub mod studio;

pub use message::*;
pub use warning::warn;

use iced::{
    widget::{column, row, scrollable, Space},
    Length,
};

use onebox_ui::{
    color,
    component::{button, logotype, text::text},
    icon::{cube_icon, lightning_icon, person_icon},
    theme,
    widget::*,
};

use crate::{app::menu::Menu, services::Account};

fn menu_bar_highlight<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Space::with_width(Length::Fixed(5.0)))
        .height(Length::Fixed(50.0))
        .style(theme::container::custom(color::LIME))
}

pub fn sidebar<'a>(
    menu: &Menu,
    account: Option<&'a Account>,
    login_open: bool,
) -> Container<'a, Message> {
    let studio_button = if *menu == Menu::Studio && !login_open {
        row!(
            button::menu_active(Some(cube_icon()), "One Box")
                .on_press(Message::Menu(Menu::Studio))
                .width(Length::Fill),
            menu_bar_highlight(),
        )
    } else {
        row!(button::menu(Some(cube_icon()), "One Box")
            .on_press(Message::Menu(Menu::Studio))
            .width(Length::Fill),)
    };

    let generate_button = if *menu == Menu::QuickGenerate && !login_open {
        row!(
            button::menu_active(Some(lightning_icon()), "Quick generate")
                .on_press(Message::Menu(Menu::QuickGenerate))
                .width(Length::Fill),
            menu_bar_highlight(),
        )
    } else {
        row!(button::menu(Some(lightning_icon()), "Quick generate")
            .on_press(Message::Menu(Menu::QuickGenerate))
            .width(Length::Fill),)
    };

    // The account entry is pinned at the bottom, highlighted while the
    // login modal is on screen.
    let account_label = match account {
        Some(account) => text(account.alias()),
        None => text("Log in"),
    };
    let account_content = row![person_icon().style(theme::text::secondary), account_label]
        .spacing(10)
        .align_y(iced::alignment::Vertical::Center)
        .padding(10);
    let account_button = if login_open {
        row!(
            Button::new(account_content)
                .style(theme::button::menu_pressed)
                .on_press(Message::OpenLogin)
                .width(Length::Fill),
            menu_bar_highlight(),
        )
    } else {
        row!(Button::new(account_content)
            .style(theme::button::menu)
            .on_press(Message::OpenLogin)
            .width(Length::Fill),)
    };

    Container::new(
        Column::new()
            .push(
                Column::new()
                    .push(logotype().width(Length::Fill))
                    .push(studio_button)
                    .push(generate_button)
                    .height(Length::Fill),
            )
            .push(account_button),
    )
    .style(theme::container::foreground)
}

pub fn dashboard<'a, T: Into<Element<'a, Message>>>(
    menu: &'a Menu,
    account: Option<&'a Account>,
    login_open: bool,
    content: T,
) -> Element<'a, Message> {
    Row::new()
        .push(
            sidebar(menu, account, login_open)
                .width(Length::Fixed(180.0))
                .height(Length::Fill),
        )
        .push(
            Container::new(scrollable(row!(
                Space::with_width(Length::FillPortion(1)),
                column!(Space::with_height(Length::Fixed(30.0)), content.into())
                    .width(Length::FillPortion(8))
                    .max_width(1500),
                Space::with_width(Length::FillPortion(1)),
            )))
            .center_x(Length::Fill)
            .style(theme::container::background)
            .height(Length::Fill)
            .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
