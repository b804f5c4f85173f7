use thiserror::Error;

mod builtin;
pub mod inventory;
pub mod key;
pub mod table;

pub use inventory::{find_starter_by_symbol, starter_inventory};
pub use key::{canonical_key, canonical_key_for, KEY_SEPARATOR};
pub use table::{ProductTemplate, ReactionTable, ReactionTemplate};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reaction '{key}' is already defined")]
    DuplicateReaction { key: String },
    #[error("reaction '{key}' needs at least two distinct reactants")]
    TooFewReactants { key: String },
    #[error("invalid reaction file: {0}")]
    Parse(#[from] toml::de::Error),
}
