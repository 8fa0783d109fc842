use std::convert::From;

use iced::Length;

use onebox_ui::{component::notification, widget::*};

use crate::{app::error::Error, services::ServiceError};

/// Simple warning message displayed to non technical user.
pub struct WarningMessage(String);

impl From<&Error> for WarningMessage {
    fn from(error: &Error) -> WarningMessage {
        match error {
            Error::Validation(_) => WarningMessage("Some fields need attention".to_string()),
            Error::Config(e) => WarningMessage(e.to_owned()),
            Error::Service(ServiceError::Unreachable(_)) => {
                WarningMessage("Communication with the service failed".to_string())
            }
            Error::Service(_) => WarningMessage("Internal error".to_string()),
            Error::Unexpected(_) => WarningMessage("Unknown error".to_string()),
        }
    }
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn warn<'a, T: 'a>(error: Option<&Error>) -> Container<'a, T> {
    if let Some(w) = error {
        let message: WarningMessage = w.into();
        notification::warning(message.to_string(), w.to_string()).width(Length::Fill)
    } else {
        Container::new(Column::new()).width(Length::Fill)
    }
}
