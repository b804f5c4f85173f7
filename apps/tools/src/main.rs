use std::{fs, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use catalog::{canonical_key_for, find_starter_by_symbol, starter_inventory, ReactionTable};
use chrono::Utc;
use clap::{Parser, Subcommand};
use gemini_integration::{GeminiClient, GeminiConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use resolver::{ReactionGenerator, ResolutionCache, Resolver, UnconfiguredGenerator};
use shared::{
    domain::{ColorTag, Substance, SubstanceId, SubstanceKind},
    protocol::SynthesisResponse,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chemimix", about = "Inspect and resolve element synthesis reactions")]
struct Cli {
    /// Extra reactions merged over the built-in table.
    #[arg(long, env = "APP__REACTION_TABLE_PATH")]
    reactions_file: Option<PathBuf>,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    gemini_api_key: Option<String>,
    #[arg(long, env = "APP__GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    gemini_model: String,
    #[arg(long, env = "APP__GEMINI_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    gemini_endpoint: String,
    #[arg(long, env = "APP__GEMINI_TIMEOUT_SECONDS")]
    gemini_timeout_seconds: Option<u64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every reaction in the table.
    Reactions,
    /// Print the canonical key for a combination.
    Key {
        #[arg(required = true)]
        substances: Vec<String>,
    },
    /// Print the starter inventory.
    Inventory,
    /// Resolve a combination the same way the server does.
    Resolve {
        #[arg(required = true)]
        substances: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let table = load_table(cli.reactions_file.as_ref())?;

    match &cli.command {
        Command::Reactions => print_json(&table.summaries())?,
        Command::Key { substances } => {
            let inputs = lookup_all(substances);
            println!("{}", canonical_key_for(&inputs));
        }
        Command::Inventory => print_json(&starter_inventory(Utc::now()))?,
        Command::Resolve { substances } => {
            let resolver = Resolver::new(table, generator(&cli)?, Arc::new(ResolutionCache::new()));
            let resolution = resolver.resolve_traced(&lookup_all(substances)).await;
            print_json(&SynthesisResponse {
                key: resolution.key,
                source: resolution.source,
                outcome: resolution.outcome,
            })?;
        }
    }

    Ok(())
}

fn load_table(path: Option<&PathBuf>) -> Result<ReactionTable> {
    let mut table = ReactionTable::builtin();
    if let Some(path) = path {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let added = table.extend_from_toml_str(&raw)?;
        debug!(added, path = %path.display(), "loaded extra reactions");
    }
    Ok(table)
}

fn generator(cli: &Cli) -> Result<Arc<dyn ReactionGenerator>> {
    let Some(api_key) = cli.gemini_api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
        return Ok(Arc::new(UnconfiguredGenerator));
    };
    let mut config = GeminiConfig::new(api_key.trim())?.with_endpoint(&cli.gemini_endpoint)?;
    config.model = cli.gemini_model.clone();
    config.request_timeout = cli.gemini_timeout_seconds.map(Duration::from_secs);
    Ok(Arc::new(GeminiClient::new(config)?))
}

fn lookup_all(tokens: &[String]) -> Vec<Substance> {
    let now = Utc::now();
    tokens.iter().map(|token| lookup(token, now)).collect()
}

/// Starters match by symbol (`O₂`) or id (`o`); anything else becomes an
/// ad-hoc basic substance named after the token.
fn lookup(token: &str, now: chrono::DateTime<Utc>) -> Substance {
    let token = token.trim();
    if let Some(found) = find_starter_by_symbol(token, now) {
        return found;
    }
    let id = token.to_lowercase();
    if let Some(found) = starter_inventory(now).into_iter().find(|s| s.id.as_str() == id) {
        return found;
    }
    Substance {
        id: SubstanceId::new(id),
        symbol: token.to_owned(),
        name: token.to_owned(),
        description: String::new(),
        kind: SubstanceKind::Basic,
        color: ColorTag::default(),
        discovered_at: None,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
