use iced::Task;

use onebox::design::DesignConfig;
use onebox_ui::{component::form, widget::Element};

use crate::{
    app::{error::Error, message::Message, state::State, view},
    services::{DesignArtifact, Services},
};

/// The studio panel, where the packaging configuration is assembled and
/// sent for generation.
pub struct StudioPanel {
    config: DesignConfig,
    prompt: form::Value<String>,
    generating: bool,
    artifact: Option<DesignArtifact>,
    warning: Option<Error>,
}

impl StudioPanel {
    pub fn new() -> Self {
        Self {
            config: DesignConfig::default(),
            prompt: form::Value::default(),
            generating: false,
            artifact: None,
            warning: None,
        }
    }
}

impl State for StudioPanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::studio::panel(
            &self.config,
            &self.prompt,
            self.generating,
            self.artifact.as_ref(),
            self.warning.as_ref(),
        )
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
            Message::View(view::Message::Design(msg)) => match msg {
                view::DesignMessage::ColorSelected(color) => {
                    self.config.box_color = color;
                }
                view::DesignMessage::StyleSelected(style) => {
                    self.config.style = style;
                }
                view::DesignMessage::PatternSelected(pattern) => {
                    self.config.pattern = pattern;
                }
                view::DesignMessage::PromptEdited(value) => {
                    self.prompt.value = value;
                }
                view::DesignMessage::Generate => {
                    self.warning = None;
                    self.generating = true;
                    let design = services.design.clone();
                    let config = self.config.clone();
                    return Task::perform(
                        async move { design.generate(config).await },
                        Message::DesignGenerated,
                    );
                }
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self) -> Task<Message> {
        self.warning = None;
        Task::none()
    }
}

impl Default for StudioPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onebox::design::{BoxColor, DesignStyle};

    fn select(panel: &mut StudioPanel, services: &Services, msg: view::DesignMessage) {
        let _cmd = panel.update(services, Message::View(view::Message::Design(msg)));
    }

    #[test]
    fn selections_overwrite_config() {
        let services = Services::default();
        let mut panel = StudioPanel::new();

        select(&mut panel, &services, view::DesignMessage::ColorSelected(BoxColor::Gray));
        select(
            &mut panel,
            &services,
            view::DesignMessage::StyleSelected(DesignStyle::Retro),
        );
        select(
            &mut panel,
            &services,
            view::DesignMessage::StyleSelected(DesignStyle::Minimalist),
        );

        assert_eq!(panel.config.box_color, BoxColor::Gray);
        assert_eq!(panel.config.style, DesignStyle::Minimalist);
    }

    #[test]
    fn generate_snapshots_config() {
        let services = Services::default();
        let mut panel = StudioPanel::new();

        select(&mut panel, &services, view::DesignMessage::Generate);
        assert!(panel.generating);

        let artifact = DesignArtifact {
            id: "design-1".to_string(),
            config: panel.config.clone(),
        };
        let _cmd = panel.update(&services, Message::DesignGenerated(Ok(artifact)));
        assert!(!panel.generating);
        assert_eq!(panel.artifact.as_ref().map(|a| a.id.as_str()), Some("design-1"));
    }
}
