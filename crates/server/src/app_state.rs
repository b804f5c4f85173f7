use std::sync::Arc;

use catalog::ReactionTable;
use gemini_integration::GeminiClient;
use resolver::{ReactionGenerator, ResolutionCache, Resolver, UnconfiguredGenerator};
use tracing::{info, warn};

use crate::config::Settings;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) resolver: Arc<Resolver>,
}

impl AppState {
    pub(crate) fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    pub(crate) fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let mut table = ReactionTable::builtin();
        if let Some(raw) = settings.read_reaction_table()? {
            let added = table.extend_from_toml_str(&raw)?;
            info!(added, total = table.len(), "reaction table extended");
        }

        let generator: Arc<dyn ReactionGenerator> = match settings.gemini_config()? {
            Some(config) => {
                info!(model = %config.model, endpoint = %config.endpoint, "gemini generator enabled");
                Arc::new(GeminiClient::new(config)?)
            }
            None => {
                warn!("no GEMINI_API_KEY set; only table reactions will resolve");
                Arc::new(UnconfiguredGenerator)
            }
        };

        Ok(Self::new(Resolver::new(
            table,
            generator,
            Arc::new(ResolutionCache::new()),
        )))
    }
}
