use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{
    domain::{ColorTag, ReactionDetails, ReactionOutcome, Substance, SubstanceId, SubstanceKind},
    protocol::ReactionSummary,
};

use crate::{
    builtin::BUILTIN_REACTIONS,
    key::{canonical_key, reactant_count},
    CatalogError,
};

/// Product of a known reaction, minus the identity fields that are only
/// filled in when the reaction actually happens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductTemplate {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub kind: SubstanceKind,
    #[serde(default)]
    pub color: ColorTag,
}

impl ProductTemplate {
    pub fn materialize(&self, id: SubstanceId, discovered_at: Option<DateTime<Utc>>) -> Substance {
        Substance {
            id,
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
            color: self.color,
            discovered_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReactionTemplate {
    pub reactants: Vec<String>,
    pub product: ProductTemplate,
    pub message: String,
    #[serde(flatten)]
    pub details: ReactionDetails,
}

impl ReactionTemplate {
    pub fn key(&self) -> String {
        canonical_key(&self.reactants)
    }

    pub fn outcome(&self, id: SubstanceId, discovered_at: DateTime<Utc>) -> ReactionOutcome {
        ReactionOutcome::succeeded(
            self.product.materialize(id, Some(discovered_at)),
            self.message.clone(),
            self.details.clone(),
        )
    }

    pub fn summary(&self) -> ReactionSummary {
        ReactionSummary {
            key: self.key(),
            reactants: self.reactants.clone(),
            product_symbol: self.product.symbol.clone(),
            product_name: self.product.name.clone(),
            equation: self.details.equation.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ReactionFile {
    #[serde(default)]
    reaction: Vec<ReactionTemplate>,
}

/// Statically authored reactions keyed by canonical key.
#[derive(Debug, Clone, Default)]
pub struct ReactionTable {
    entries: BTreeMap<String, ReactionTemplate>,
}

impl ReactionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for authored in BUILTIN_REACTIONS {
            let template = authored.to_template();
            let key = template.key();
            table.entries.insert(key, template);
        }
        table
    }

    pub fn insert(&mut self, template: ReactionTemplate) -> Result<String, CatalogError> {
        let key = self.check_insertable(&template)?;
        self.entries.insert(key.clone(), template);
        Ok(key)
    }

    /// Adds every `[[reaction]]` from a TOML document. Nothing is inserted
    /// unless the whole document is valid.
    pub fn extend_from_toml_str(&mut self, raw: &str) -> Result<usize, CatalogError> {
        let file: ReactionFile = toml::from_str(raw)?;
        let mut seen = HashSet::new();
        for template in &file.reaction {
            let key = self.check_insertable(template)?;
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateReaction { key });
            }
        }

        let added = file.reaction.len();
        for template in file.reaction {
            self.entries.insert(template.key(), template);
        }
        Ok(added)
    }

    pub fn get(&self, key: &str) -> Option<&ReactionTemplate> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReactionTemplate)> {
        self.entries.iter().map(|(key, template)| (key.as_str(), template))
    }

    pub fn summaries(&self) -> Vec<ReactionSummary> {
        self.entries.values().map(ReactionTemplate::summary).collect()
    }

    fn check_insertable(&self, template: &ReactionTemplate) -> Result<String, CatalogError> {
        let key = template.key();
        if reactant_count(&key) < 2 {
            return Err(CatalogError::TooFewReactants { key });
        }
        if self.entries.contains_key(&key) {
            return Err(CatalogError::DuplicateReaction { key });
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::canonical_key;

    #[test]
    fn builtin_table_has_every_authored_reaction() {
        let table = ReactionTable::builtin();
        assert_eq!(table.len(), BUILTIN_REACTIONS.len());
        assert!(table.contains("H₂+O₂"));
        assert!(table.contains("CO₂+Ca(OH)₂"));
        assert!(table.contains("O₂+P"));
    }

    #[test]
    fn builtin_keys_match_runtime_key_function() {
        let table = ReactionTable::builtin();
        for (key, template) in table.iter() {
            let reversed: Vec<&str> = template.reactants.iter().rev().map(String::as_str).collect();
            assert_eq!(canonical_key(reversed), key);
        }
    }

    #[test]
    fn water_entry_carries_narrative() {
        let table = ReactionTable::builtin();
        let water = table.get("H₂+O₂").expect("water reaction");
        assert_eq!(water.product.symbol, "H₂O");
        assert!(water
            .details
            .equation
            .as_deref()
            .is_some_and(|eq| eq.contains("2H₂ + O₂")));
    }

    #[test]
    fn toml_entries_are_keyed_canonically() {
        let mut table = ReactionTable::empty();
        let added = table
            .extend_from_toml_str(
                r#"
                [[reaction]]
                reactants = ["Zn", "S"]
                message = "锌粉与硫粉混合加热。"
                equation = "Zn + S →(△) ZnS"
                [reaction.product]
                symbol = "ZnS"
                name = "硫化锌"
                description = "白色固体，可作荧光材料。"
                kind = "compound"
                color = "stone"
                "#,
            )
            .expect("valid reactions");
        assert_eq!(added, 1);
        let entry = table.get("S+Zn").expect("canonical key");
        assert_eq!(entry.product.color, ColorTag::Stone);
        assert_eq!(entry.details.equation.as_deref(), Some("Zn + S →(△) ZnS"));
    }

    #[test]
    fn toml_duplicate_of_builtin_is_rejected_without_partial_insert() {
        let mut table = ReactionTable::builtin();
        let before = table.len();
        let err = table
            .extend_from_toml_str(
                r#"
                [[reaction]]
                reactants = ["Zn", "S"]
                message = "new"
                [reaction.product]
                symbol = "ZnS"
                name = "硫化锌"
                description = "d"
                kind = "compound"

                [[reaction]]
                reactants = ["O₂", "H₂"]
                message = "dup"
                [reaction.product]
                symbol = "H₂O"
                name = "水"
                description = "d"
                kind = "compound"
                "#,
            )
            .expect_err("duplicate");
        assert!(matches!(err, CatalogError::DuplicateReaction { ref key } if key == "H₂+O₂"));
        assert_eq!(table.len(), before);
    }

    #[test]
    fn single_reactant_entries_are_rejected() {
        let mut table = ReactionTable::empty();
        let err = table
            .insert(ReactionTemplate {
                reactants: vec!["Fe".into(), "Fe".into()],
                product: ProductTemplate {
                    symbol: "Fe".into(),
                    name: "铁".into(),
                    description: String::new(),
                    kind: SubstanceKind::Basic,
                    color: ColorTag::Orange,
                },
                message: String::new(),
                details: ReactionDetails::default(),
            })
            .expect_err("too few");
        assert!(matches!(err, CatalogError::TooFewReactants { .. }));
    }
}
