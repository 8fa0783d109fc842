use iced::Task;

use onebox::design::DesignConfig;
use onebox_ui::widget::Element;

use crate::{
    app::{error::Error, message::Message, state::State, view},
    services::{DesignArtifact, Services},
};

/// One-click generation from the default configuration, without going
/// through the studio configurator.
pub struct GeneratePanel {
    generating: bool,
    artifact: Option<DesignArtifact>,
    warning: Option<Error>,
}

impl GeneratePanel {
    pub fn new() -> Self {
        Self {
            generating: false,
            artifact: None,
            warning: None,
        }
    }
}

impl State for GeneratePanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::generate::panel(self.generating, self.artifact.as_ref(), self.warning.as_ref())
    }

    fn update(&mut self, services: &Services, message: Message) -> Task<Message> {
        match message {
            Message::DesignGenerated(res) => {
                self.generating = false;
                match res {
                    Ok(artifact) => {
                        tracing::info!("Design {} generated", artifact.id);
                        self.artifact = Some(artifact);
                    }
                    Err(e) => {
                        tracing::warn!("{}", e);
                        self.warning = Some(e.into());
                    }
                }
            }
            Message::View(view::Message::Design(view::DesignMessage::Generate)) => {
                self.warning = None;
                self.generating = true;
                let design = services.design.clone();
                return Task::perform(
                    async move { design.generate(DesignConfig::default()).await },
                    Message::DesignGenerated,
                );
            }
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self) -> Task<Message> {
        self.warning = None;
        Task::none()
    }
}

impl Default for GeneratePanel {
    fn default() -> Self {
        Self::new()
    }
}
