use std::sync::Arc;

use catalog::{canonical_key_for, ReactionTable};
use chrono::Utc;
use shared::{
    domain::{ReactionOutcome, Substance},
    protocol::ResolutionSource,
};
use tracing::{debug, info, warn};

pub mod cache;
pub mod error;
pub mod generator;
pub mod identity;
pub mod response;

pub use cache::ResolutionCache;
pub use error::{
    ResolveError, COLLABORATOR_UNAVAILABLE_MESSAGE, INSUFFICIENT_INPUTS_MESSAGE,
    NO_REACTION_MESSAGE,
};
pub use generator::{GenerationRequest, ReactantLabel, ReactionGenerator, UnconfiguredGenerator};
pub use identity::IdMinter;
pub use response::GeneratedReaction;

pub const MIN_REACTANTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub key: Option<String>,
    pub source: ResolutionSource,
    pub outcome: ReactionOutcome,
}

/// Resolves reactant combinations: reaction table first, then outcomes
/// already generated in this process, then the generation service.
pub struct Resolver {
    table: ReactionTable,
    generator: Arc<dyn ReactionGenerator>,
    cache: Arc<ResolutionCache>,
    ids: IdMinter,
}

impl Resolver {
    pub fn new(
        table: ReactionTable,
        generator: Arc<dyn ReactionGenerator>,
        cache: Arc<ResolutionCache>,
    ) -> Self {
        Self {
            table,
            generator,
            cache,
            ids: IdMinter::new(),
        }
    }

    pub fn table(&self) -> &ReactionTable {
        &self.table
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    pub async fn resolve(&self, inputs: &[Substance]) -> ReactionOutcome {
        self.resolve_traced(inputs).await.outcome
    }

    pub async fn resolve_traced(&self, inputs: &[Substance]) -> Resolution {
        let key = match canonical_inputs(inputs) {
            Ok(key) => key,
            Err(err) => {
                debug!(error = %err, "synthesis: rejected");
                return Resolution {
                    key: None,
                    source: err.resolution_source(),
                    outcome: ReactionOutcome::failed(err.user_message()),
                };
            }
        };

        if let Some(template) = self.table.get(&key) {
            let id = self.ids.mint(&template.product.symbol);
            info!(%key, product = %template.product.symbol, "synthesis: table hit");
            return Resolution {
                key: Some(key),
                source: ResolutionSource::Table,
                outcome: template.outcome(id, Utc::now()),
            };
        }

        if let Some(outcome) = self.cache.get(&key).await {
            info!(%key, success = outcome.success, "synthesis: cache hit");
            return Resolution {
                key: Some(key),
                source: ResolutionSource::Cache,
                outcome,
            };
        }

        match self.generate(inputs).await {
            Ok(outcome) => {
                let outcome = self.cache.get_or_insert(key.clone(), outcome).await;
                info!(%key, success = outcome.success, "synthesis: generated and cached");
                Resolution {
                    key: Some(key),
                    source: ResolutionSource::Generated,
                    outcome,
                }
            }
            Err(err) => {
                warn!(%key, error = %err, "synthesis: generator failed");
                Resolution {
                    key: Some(key),
                    source: err.resolution_source(),
                    outcome: ReactionOutcome::failed(err.user_message()),
                }
            }
        }
    }

    async fn generate(&self, inputs: &[Substance]) -> Result<ReactionOutcome, ResolveError> {
        let request = GenerationRequest::for_reactants(inputs);
        let raw = self
            .generator
            .generate(&request)
            .await
            .map_err(ResolveError::CollaboratorUnavailable)?;
        GeneratedReaction::parse(&raw)?.into_outcome(&self.ids)
    }
}

fn canonical_inputs(inputs: &[Substance]) -> Result<String, ResolveError> {
    if inputs.len() < MIN_REACTANTS {
        return Err(ResolveError::InsufficientInputs {
            count: inputs.len(),
        });
    }
    Ok(canonical_key_for(inputs))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
