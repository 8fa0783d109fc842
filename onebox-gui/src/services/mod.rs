//! Remote service clients.
//!
//! The backend API is not deployed yet: every client here logs the request it
//! would perform and resolves successfully. The signatures are the contract
//! the views are written against.

pub mod auth;
pub mod design;

pub use auth::{Account, AuthClient};
pub use design::{DesignArtifact, DesignClient};

/// Clients shared by all panels.
#[derive(Debug, Clone, Default)]
pub struct Services {
    pub auth: AuthClient,
    pub design: DesignClient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service could not be reached or answered with garbage.
    Unreachable(String),
    Unexpected(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unreachable(e) => write!(f, "Service unreachable: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected service error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}
