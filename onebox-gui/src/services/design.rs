use onebox::design::DesignConfig;
use tracing::info;

use super::ServiceError;

/// Identifier of a generated design on the rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignArtifact {
    pub id: String,
    pub config: DesignConfig,
}

#[derive(Debug, Clone, Default)]
pub struct DesignClient {}

impl DesignClient {
    pub fn new() -> Self {
        Self {}
    }

    /// Submits a configuration snapshot for generation.
    // TODO: call the generation endpoint once it is deployed.
    pub async fn generate(&self, config: DesignConfig) -> Result<DesignArtifact, ServiceError> {
        let payload = serde_json::to_string(&config)
            .map_err(|e| ServiceError::Unexpected(e.to_string()))?;
        info!("Requesting design generation: {}", payload);
        Ok(DesignArtifact {
            id: format!("design-{}", chrono::Utc::now().timestamp()),
            config,
        })
    }
}
