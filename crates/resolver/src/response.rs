use serde::Deserialize;
use shared::domain::{
    ColorTag, ReactionDetails, ReactionOutcome, Substance, SubstanceKind,
};

use crate::{
    error::{ResolveError, NO_REACTION_MESSAGE},
    identity::IdMinter,
};

/// Structured answer from the generation service, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedReaction {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_symbol: Option<String>,
    #[serde(default)]
    pub product_description: Option<String>,
    #[serde(default)]
    pub product_color: Option<ColorTag>,
    #[serde(default)]
    pub product_type: Option<SubstanceKind>,
    #[serde(default)]
    pub equation: Option<String>,
    #[serde(default)]
    pub reaction_kind: Option<String>,
    #[serde(default)]
    pub phenomenon: Option<String>,
    #[serde(default)]
    pub fact: Option<String>,
}

impl GeneratedReaction {
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        Ok(serde_json::from_str(strip_code_fence(raw))?)
    }

    /// Turns the answer into an outcome. A successful answer without a
    /// complete product fails closed; the product gets a fresh id and no
    /// discovery stamp.
    pub fn into_outcome(self, ids: &IdMinter) -> Result<ReactionOutcome, ResolveError> {
        if !self.success {
            let message = non_empty(self.message).unwrap_or_else(|| NO_REACTION_MESSAGE.to_owned());
            return Ok(ReactionOutcome::failed(message));
        }

        let symbol = required(self.product_symbol, "productSymbol")?;
        let product = Substance {
            id: ids.mint(&symbol),
            name: required(self.product_name, "productName")?,
            description: required(self.product_description, "productDescription")?,
            color: self
                .product_color
                .ok_or_else(|| missing("productColor"))?,
            kind: self.product_type.ok_or_else(|| missing("productType"))?,
            symbol,
            discovered_at: None,
        };
        let message = required(self.message, "message")?;

        Ok(ReactionOutcome::succeeded(
            product,
            message,
            ReactionDetails {
                equation: non_empty(self.equation),
                reaction_kind: non_empty(self.reaction_kind),
                phenomenon: non_empty(self.phenomenon),
                fact: non_empty(self.fact),
            },
        ))
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &str) -> Result<String, ResolveError> {
    non_empty(value).ok_or_else(|| missing(field))
}

fn missing(field: &str) -> ResolveError {
    ResolveError::MalformedResponse(format!("successful reaction is missing '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: &str = r#"{
        "success": true,
        "productName": "氯化钠",
        "productSymbol": "NaCl",
        "productDescription": "食盐的主要成分。",
        "productColor": "stone",
        "productType": "compound",
        "message": "钠在氯气中燃烧。",
        "equation": "2Na + Cl₂ → 2NaCl",
        "reactionKind": "化合反应",
        "phenomenon": "黄色火焰，白烟",
        "fact": ""
    }"#;

    #[test]
    fn complete_success_becomes_undiscovered_product() {
        let outcome = GeneratedReaction::parse(SALT)
            .expect("parse")
            .into_outcome(&IdMinter::new())
            .expect("outcome");
        let product = outcome.product.as_ref().expect("product");
        assert!(outcome.success);
        assert_eq!(product.symbol, "NaCl");
        assert_eq!(product.color, ColorTag::Stone);
        assert!(product.id.as_str().starts_with("nacl-"));
        assert!(product.discovered_at.is_none());
        assert_eq!(outcome.details.fact, None);
        assert_eq!(outcome.details.reaction_kind.as_deref(), Some("化合反应"));
    }

    #[test]
    fn success_without_product_symbol_fails_closed() {
        let raw = r#"{"success": true, "productName": "x", "productDescription": "d",
            "productColor": "red", "productType": "rare", "message": "m"}"#;
        let err = GeneratedReaction::parse(raw)
            .expect("parse")
            .into_outcome(&IdMinter::new())
            .expect_err("missing symbol");
        assert!(err.to_string().contains("productSymbol"));
    }

    #[test]
    fn colour_outside_palette_is_malformed() {
        let raw = SALT.replace("\"stone\"", "\"magenta\"");
        assert!(matches!(
            GeneratedReaction::parse(&raw),
            Err(ResolveError::MalformedResponse(_))
        ));
    }

    #[test]
    fn missing_success_flag_is_malformed() {
        assert!(GeneratedReaction::parse(r#"{"message": "?"}"#).is_err());
        assert!(GeneratedReaction::parse("not json").is_err());
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let outcome = GeneratedReaction::parse(r#"{"success": false, "message": "  "}"#)
            .expect("parse")
            .into_outcome(&IdMinter::new())
            .expect("outcome");
        assert!(!outcome.success);
        assert!(outcome.product.is_none());
        assert_eq!(outcome.message, NO_REACTION_MESSAGE);
    }

    #[test]
    fn fenced_json_is_accepted() {
        let fenced = format!("```json\n{SALT}\n```");
        assert!(GeneratedReaction::parse(&fenced).expect("parse").success);
    }
}
