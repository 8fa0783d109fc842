pub mod config;
pub mod error;
pub mod menu;
pub mod message;
pub mod state;
pub mod view;

use iced::{Subscription, Task};
use tracing::{error, info};

use onebox_ui::widget::{Element, Modal};

pub use config::Config;
pub use message::Message;

use menu::Menu;
use state::{GeneratePanel, LoginModal, State, StudioPanel};

use crate::services::{Account, Services};

struct Panels {
    current: Menu,
    studio: StudioPanel,
    generate: GeneratePanel,
}

impl Panels {
    fn new() -> Panels {
        Self {
            current: Menu::Studio,
            studio: StudioPanel::new(),
            generate: GeneratePanel::new(),
        }
    }

    fn current(&self) -> &dyn State {
        match self.current {
            Menu::Studio => &self.studio,
            Menu::QuickGenerate => &self.generate,
        }
    }

    fn current_mut(&mut self) -> &mut dyn State {
        match self.current {
            Menu::Studio => &mut self.studio,
            Menu::QuickGenerate => &mut self.generate,
        }
    }
}

pub struct App {
    panels: Panels,
    login: Option<LoginModal>,
    account: Option<Account>,
    services: Services,
}

impl App {
    pub fn new() -> (App, Task<Message>) {
        (
            Self {
                panels: Panels::new(),
                login: None,
                account: None,
                services: Services::default(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("OneBox Studio v{}", crate::VERSION)
    }

    fn set_current_panel(&mut self, menu: Menu) -> Task<Message> {
        self.panels.current = menu;
        self.panels.current_mut().reload()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Menu(menu)) => self.set_current_panel(menu),
            Message::View(view::Message::OpenLogin) => {
                // A fresh modal, so the resend countdown always starts idle.
                if self.login.is_none() {
                    self.login = Some(LoginModal::new());
                }
                Task::none()
            }
            Message::View(view::Message::CloseLogin) => {
                self.login = None;
                Task::none()
            }
            Message::View(view::Message::OpenUrl(url)) => {
                if let Err(e) = open::that_detached(&url) {
                    error!("Error opening '{}': {}", url, e);
                }
                Task::none()
            }
            Message::LoggedIn(Ok(account)) => {
                info!("Logged in as {}", account.alias());
                self.account = Some(account);
                self.login = None;
                Task::none()
            }
            Message::Tick
            | Message::CodeSent(_)
            | Message::LoggedIn(Err(_))
            | Message::View(view::Message::Login(_)) => {
                if let Some(login) = &mut self.login {
                    login.update(&self.services, message)
                } else {
                    Task::none()
                }
            }
            Message::View(view::Message::Design(_)) | Message::DesignGenerated(_) => {
                self.panels.current_mut().update(&self.services, message)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = view::dashboard(
            &self.panels.current,
            self.account.as_ref(),
            self.login.is_some(),
            self.panels.current().view(),
        )
        .map(Message::View);
        if let Some(login) = &self.login {
            Modal::new(content, login.view().map(Message::View))
                .on_blur(Some(Message::View(view::Message::CloseLogin)))
                .into()
        } else {
            content
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![self.panels.current().subscription()];
        if let Some(login) = &self.login {
            subscriptions.push(login.subscription());
        }
        Subscription::batch(subscriptions)
    }
}
