use std::time::Duration;

use iced::{time, Subscription, Task};

use onebox::{
    countdown::Countdown,
    login::{Credentials, LoginMethod, ValidationError},
};
use onebox_ui::{component::form, widget::Element};

use crate::{
    app::{error::Error, message::Message, view},
    services::Services,
};

/// The login modal.
///
/// Both credential fields keep their value while the user switches between
/// the password and SMS-code methods, so switching back restores whatever
/// was typed before. The modal owns the resend countdown; its tick
/// subscription only exists while the countdown runs and is dropped with
/// the modal, so no timer outlives the view.
pub struct LoginModal {
    method: LoginMethod,
    phone_number: form::Value<String>,
    password: form::Value<String>,
    verification_code: form::Value<String>,
    show_password: bool,
    agreed_to_terms: bool,
    countdown: Countdown,
    processing: bool,
    warning: Option<Error>,
}

impl LoginModal {
    pub fn new() -> Self {
        Self {
            method: LoginMethod::default(),
            phone_number: form::Value::default(),
            password: form::Value::default(),
            verification_code: form::Value::default(),
            show_password: false,
            agreed_to_terms: false,
            countdown: Countdown::new(),
            processing: false,
            warning: None,
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            phone_number: self.phone_number.value.clone(),
            password: self.password.value.clone(),
            verification_code: self.verification_code.value.clone(),
            method: self.method,
        }
    }

    pub fn update(&mut self, services: &Services, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.countdown.tick();
            }
            Message::CodeSent(res) => {
                if let Err(e) = res {
                    tracing::warn!("{}", e);
                    self.warning = Some(e.into());
                }
            }
            // Message::LoggedIn(Ok(..)) is handled by the upper level owning
            // the modal.
            Message::LoggedIn(Err(e)) => {
                tracing::warn!("{}", e);
                self.processing = false;
                self.warning = Some(e.into());
            }
            Message::View(view::Message::Login(msg)) => return self.update_view(services, msg),
            _ => {}
        }
        Task::none()
    }

    fn update_view(&mut self, services: &Services, message: view::LoginMessage) -> Task<Message> {
        match message {
            view::LoginMessage::MethodSelected(method) => {
                // Only the visible field changes, values are retained.
                self.method = method;
                self.password.valid = true;
                self.verification_code.valid = true;
                self.warning = None;
            }
            view::LoginMessage::PhoneEdited(value) => {
                self.phone_number.value = value;
                self.phone_number.valid = true;
            }
            view::LoginMessage::PasswordEdited(value) => {
                self.password.value = value;
                self.password.valid = true;
            }
            view::LoginMessage::CodeEdited(value) => {
                self.verification_code.value = value;
                self.verification_code.valid = true;
            }
            view::LoginMessage::TogglePasswordVisibility => {
                self.show_password = !self.show_password;
            }
            view::LoginMessage::TermsAgreed(agreed) => {
                self.agreed_to_terms = agreed;
            }
            view::LoginMessage::SendCode => {
                self.warning = None;
                match self.countdown.request_code(&self.phone_number.value) {
                    Ok(()) => {
                        let auth = services.auth.clone();
                        let phone_number = self.phone_number.value.clone();
                        return Task::perform(
                            async move { auth.send_verification_code(&phone_number).await },
                            Message::CodeSent,
                        );
                    }
                    Err(e) => {
                        if e == ValidationError::InvalidPhoneNumber {
                            self.phone_number.valid = false;
                        }
                        self.warning = Some(e.into());
                    }
                }
            }
            view::LoginMessage::Submit => {
                self.warning = None;
                let credentials = self.credentials();
                match credentials.validate(self.agreed_to_terms) {
                    Ok(()) => {
                        self.processing = true;
                        let auth = services.auth.clone();
                        return Task::perform(
                            async move { auth.login(credentials).await },
                            Message::LoggedIn,
                        );
                    }
                    Err(e) => {
                        match e {
                            ValidationError::InvalidPhoneNumber => {
                                self.phone_number.valid = false;
                            }
                            ValidationError::MissingPassword => {
                                self.password.valid = false;
                            }
                            ValidationError::MissingCode => {
                                self.verification_code.valid = false;
                            }
                            _ => {}
                        }
                        self.warning = Some(e.into());
                    }
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, view::Message> {
        view::login::modal(
            self.method,
            &self.phone_number,
            &self.password,
            &self.verification_code,
            self.show_password,
            self.agreed_to_terms,
            &self.countdown,
            self.processing,
            self.warning.as_ref(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Cancelled as soon as the countdown reaches zero: exactly one tick
        // per remaining second fires, none at zero.
        if self.countdown.resend_allowed() {
            Subscription::none()
        } else {
            time::every(Duration::from_secs(1)).map(|_| Message::Tick)
        }
    }
}

impl Default for LoginModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onebox::countdown::RESEND_DELAY_SECS;
    use onebox::login::PHONE_NUMBER_LEN;

    const PHONE: &str = "13800138000";

    fn edit(modal: &mut LoginModal, services: &Services, msg: view::LoginMessage) {
        let _cmd = modal.update(services, Message::View(view::Message::Login(msg)));
    }

    #[test]
    fn send_code_rejects_short_phone_number() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(&mut modal, &services, view::LoginMessage::PhoneEdited("123".into()));
        edit(&mut modal, &services, view::LoginMessage::SendCode);

        assert!(!modal.phone_number.valid);
        assert_eq!(
            modal.warning,
            Some(Error::Validation(ValidationError::InvalidPhoneNumber))
        );
        assert!(modal.countdown.resend_allowed());
    }

    #[test]
    fn send_code_arms_the_countdown_once() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(&mut modal, &services, view::LoginMessage::PhoneEdited(PHONE.into()));
        edit(&mut modal, &services, view::LoginMessage::SendCode);
        assert_eq!(modal.countdown.remaining_secs(), RESEND_DELAY_SECS);

        let _cmd = modal.update(&services, Message::Tick);
        let _cmd = modal.update(&services, Message::Tick);

        // A second request must not reset the running countdown.
        edit(&mut modal, &services, view::LoginMessage::SendCode);
        assert_eq!(modal.countdown.remaining_secs(), RESEND_DELAY_SECS - 2);
        assert_eq!(
            modal.warning,
            Some(Error::Validation(ValidationError::AlreadyCounting))
        );
    }

    #[test]
    fn countdown_expires_after_sixty_ticks() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(&mut modal, &services, view::LoginMessage::PhoneEdited(PHONE.into()));
        edit(&mut modal, &services, view::LoginMessage::SendCode);

        for _ in 0..RESEND_DELAY_SECS {
            let _cmd = modal.update(&services, Message::Tick);
        }
        assert!(modal.countdown.resend_allowed());
    }

    #[test]
    fn method_switch_retains_both_credentials() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(
            &mut modal,
            &services,
            view::LoginMessage::PasswordEdited("hunter2".into()),
        );
        edit(
            &mut modal,
            &services,
            view::LoginMessage::MethodSelected(LoginMethod::SmsCode),
        );
        edit(&mut modal, &services, view::LoginMessage::CodeEdited("652901".into()));
        edit(
            &mut modal,
            &services,
            view::LoginMessage::MethodSelected(LoginMethod::Password),
        );

        assert_eq!(modal.password.value, "hunter2");
        assert_eq!(modal.verification_code.value, "652901");
    }

    #[test]
    fn submit_applies_validation_order() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(&mut modal, &services, view::LoginMessage::PhoneEdited(PHONE.into()));
        edit(
            &mut modal,
            &services,
            view::LoginMessage::MethodSelected(LoginMethod::SmsCode),
        );
        edit(&mut modal, &services, view::LoginMessage::CodeEdited("652901".into()));

        // Terms come before the method-specific credential.
        edit(&mut modal, &services, view::LoginMessage::Submit);
        assert_eq!(
            modal.warning,
            Some(Error::Validation(ValidationError::TermsNotAccepted))
        );

        edit(&mut modal, &services, view::LoginMessage::TermsAgreed(true));
        edit(&mut modal, &services, view::LoginMessage::CodeEdited(String::new()));
        edit(&mut modal, &services, view::LoginMessage::Submit);
        assert_eq!(
            modal.warning,
            Some(Error::Validation(ValidationError::MissingCode))
        );
        assert!(!modal.verification_code.valid);
        assert!(!modal.processing);
    }

    #[test]
    fn submit_with_valid_credentials_starts_processing() {
        let services = Services::default();
        let mut modal = LoginModal::new();

        edit(&mut modal, &services, view::LoginMessage::PhoneEdited(PHONE.into()));
        edit(
            &mut modal,
            &services,
            view::LoginMessage::PasswordEdited("hunter2".into()),
        );
        edit(&mut modal, &services, view::LoginMessage::TermsAgreed(true));
        edit(&mut modal, &services, view::LoginMessage::Submit);

        assert!(modal.processing);
        assert_eq!(modal.warning, None);
    }

    #[test]
    fn phone_number_constant_matches_form_cap() {
        // The digit cap applied by the view must match the validated length.
        assert_eq!(PHONE.len(), PHONE_NUMBER_LEN);
    }
}
