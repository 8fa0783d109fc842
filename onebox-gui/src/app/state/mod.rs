mod generate;
mod login;
mod studio;

pub use generate::GeneratePanel;
pub use login::LoginModal;
pub use studio::StudioPanel;

use iced::{Subscription, Task};

use onebox_ui::widget::Element;

use crate::{
    app::{message::Message, view},
    services::Services,
};

pub trait State {
    fn view(&self) -> Element<'_, view::Message>;
    fn update(&mut self, _services: &Services, _message: Message) -> Task<Message> {
        Task::none()
    }
    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
    fn reload(&mut self) -> Task<Message> {
        Task::none()
    }
}
