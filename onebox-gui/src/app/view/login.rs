use iced::{alignment::Vertical, widget::Space, Length};

use onebox::{
    countdown::Countdown,
    login::{LoginMethod, PHONE_NUMBER_LEN, VERIFICATION_CODE_LEN},
};
use onebox_ui::{
    component::{button, form, text::*},
    icon, theme,
    widget::*,
};

use super::{warn, LoginMessage, Message};
use crate::app::error::Error;

const TERMS_URL: &str = "https://onebox.studio/terms";
const PRIVACY_URL: &str = "https://onebox.studio/privacy";
const REGISTER_URL: &str = "https://onebox.studio/register";

fn method_tab<'a>(label: &'static str, active: bool, method: LoginMethod) -> Button<'a, Message> {
    let title = if active {
        h4_bold(label)
    } else {
        h4_regular(label).style(theme::text::secondary)
    };
    Button::new(title)
        .style(theme::button::transparent)
        .on_press(Message::Login(LoginMessage::MethodSelected(method)))
}

fn inline_link<'a>(label: &'static str, url: &str) -> Button<'a, Message> {
    Button::new(caption(label).style(theme::text::success))
        .style(theme::button::link)
        .padding(0)
        .on_press(Message::OpenUrl(url.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn modal<'a>(
    method: LoginMethod,
    phone_number: &'a form::Value<String>,
    password: &'a form::Value<String>,
    verification_code: &'a form::Value<String>,
    show_password: bool,
    agreed_to_terms: bool,
    countdown: &'a Countdown,
    processing: bool,
    warning: Option<&'a Error>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(20)
        .align_y(Vertical::Center)
        .push(method_tab(
            "Password login",
            method == LoginMethod::Password,
            LoginMethod::Password,
        ))
        .push(method_tab(
            "Code login",
            method == LoginMethod::SmsCode,
            LoginMethod::SmsCode,
        ))
        .push(Space::with_width(Length::Fill))
        .push(
            Button::new(icon::cross_icon().size(25))
                .style(theme::button::transparent)
                .on_press(Message::CloseLogin),
        );

    let phone = Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(
            Container::new(p1_medium("+86"))
                .padding(10)
                .style(theme::pill::primary),
        )
        .push(
            form::Form::new_digits("Mobile number", phone_number, PHONE_NUMBER_LEN, |s| {
                Message::Login(LoginMessage::PhoneEdited(s))
            })
            .warning("Please enter a valid 11-digit phone number")
            .padding(10),
        );

    let credential = match method {
        LoginMethod::Password => Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(
                form::Form::new("Password", password, |s| {
                    Message::Login(LoginMessage::PasswordEdited(s))
                })
                .secure(!show_password)
                .warning("Please enter your password")
                .padding(10),
            )
            .push(
                Button::new(if show_password {
                    icon::eye_slash_icon()
                } else {
                    icon::eye_icon()
                })
                .style(theme::button::transparent)
                .on_press(Message::Login(LoginMessage::TogglePasswordVisibility)),
            ),
        LoginMethod::SmsCode => {
            let send: Element<'a, Message> = if countdown.resend_allowed() {
                Button::new(text("Send code"))
                    .style(theme::button::link)
                    .on_press_maybe(if processing {
                        None
                    } else {
                        Some(Message::Login(LoginMessage::SendCode))
                    })
                    .into()
            } else {
                // Disabled until the countdown runs out.
                Button::new(
                    text(format!("Resend in {}s", countdown.remaining_secs()))
                        .style(theme::text::secondary),
                )
                .style(theme::button::link)
                .into()
            };
            Row::new()
                .spacing(10)
                .align_y(Vertical::Center)
                .push(
                    form::Form::new_digits(
                        "Verification code",
                        verification_code,
                        VERIFICATION_CODE_LEN,
                        |s| Message::Login(LoginMessage::CodeEdited(s)),
                    )
                    .warning("Please enter the verification code")
                    .padding(10),
                )
                .push(send)
        }
    };

    let terms = Row::new()
        .align_y(Vertical::Center)
        .spacing(5)
        .push(
            CheckBox::new("", agreed_to_terms)
                .on_toggle(|agreed| Message::Login(LoginMessage::TermsAgreed(agreed))),
        )
        .push(caption("I have read and agree to the").style(theme::text::secondary))
        .push(inline_link("User Agreement", TERMS_URL))
        .push(caption("and").style(theme::text::secondary))
        .push(inline_link("Privacy Policy", PRIVACY_URL));

    Container::new(
        Column::new()
            .spacing(20)
            .push(header)
            .push(warn(warning))
            .push(phone)
            .push(credential)
            .push(terms)
            .push(
                button::primary(None, "Log in")
                    .width(Length::Fill)
                    .on_press_maybe(if processing {
                        None
                    } else {
                        Some(Message::Login(LoginMessage::Submit))
                    }),
            )
            .push(
                Container::new(
                    Button::new(caption("No account yet? Register >").style(theme::text::secondary))
                        .style(theme::button::link)
                        .on_press(Message::OpenUrl(REGISTER_URL.to_string())),
                )
                .center_x(Length::Fill),
            ),
    )
    .padding(30)
    .max_width(460)
    .style(theme::card::modal)
    .into()
}
