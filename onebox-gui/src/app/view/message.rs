use onebox::{
    design::{BoxColor, DesignStyle, FlowerPattern},
    login::LoginMethod,
};

use crate::app::menu::Menu;

#[derive(Debug, Clone)]
pub enum Message {
    Menu(Menu),
    OpenLogin,
    CloseLogin,
    OpenUrl(String),
    Login(LoginMessage),
    Design(DesignMessage),
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    MethodSelected(LoginMethod),
    PhoneEdited(String),
    PasswordEdited(String),
    CodeEdited(String),
    TogglePasswordVisibility,
    TermsAgreed(bool),
    SendCode,
    Submit,
}

#[derive(Debug, Clone)]
pub enum DesignMessage {
    ColorSelected(BoxColor),
    StyleSelected(DesignStyle),
    PatternSelected(FlowerPattern),
    PromptEdited(String),
    Generate,
}
