use crate::{
    app::view,
    services::{Account, DesignArtifact, ServiceError},
};

#[derive(Debug, Clone)]
pub enum Message {
    /// One second of the resend countdown elapsed.
    Tick,
    View(view::Message),
    CodeSent(Result<(), ServiceError>),
    LoggedIn(Result<Account, ServiceError>),
    DesignGenerated(Result<DesignArtifact, ServiceError>),
}
