use serde::{Deserialize, Serialize};

use crate::domain::{ReactionOutcome, Substance};

/// Which tier of the resolver produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Fewer than two inputs; nothing was looked up.
    Rejected,
    Table,
    Cache,
    Generated,
    /// The generation service failed or answered with an unusable payload.
    Unavailable,
}

impl ResolutionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionSource::Rejected => "rejected",
            ResolutionSource::Table => "table",
            ResolutionSource::Cache => "cache",
            ResolutionSource::Generated => "generated",
            ResolutionSource::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub substances: Vec<Substance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub source: ResolutionSource,
    pub outcome: ReactionOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionSummary {
    pub key: String,
    pub reactants: Vec<String>,
    pub product_symbol: String,
    pub product_name: String,
    pub equation: String,
}
