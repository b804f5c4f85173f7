use shared::protocol::ResolutionSource;
use thiserror::Error;

pub const INSUFFICIENT_INPUTS_MESSAGE: &str = "需要至少两种物质才能启动反应堆。";
pub const COLLABORATOR_UNAVAILABLE_MESSAGE: &str = "反应堆数据连接中断。";
pub const NO_REACTION_MESSAGE: &str = "无明显反应。";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("at least two substances required, got {count}")]
    InsufficientInputs { count: usize },
    #[error("reaction generator unavailable: {0:#}")]
    CollaboratorUnavailable(anyhow::Error),
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
}

impl ResolveError {
    /// Fixed text shown to the player for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResolveError::InsufficientInputs { .. } => INSUFFICIENT_INPUTS_MESSAGE,
            ResolveError::CollaboratorUnavailable(_) | ResolveError::MalformedResponse(_) => {
                COLLABORATOR_UNAVAILABLE_MESSAGE
            }
        }
    }

    pub fn resolution_source(&self) -> ResolutionSource {
        match self {
            ResolveError::InsufficientInputs { .. } => ResolutionSource::Rejected,
            ResolveError::CollaboratorUnavailable(_) | ResolveError::MalformedResponse(_) => {
                ResolutionSource::Unavailable
            }
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(value: serde_json::Error) -> Self {
        ResolveError::MalformedResponse(value.to_string())
    }
}
