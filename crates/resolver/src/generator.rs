use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use shared::domain::{ColorTag, Substance, SubstanceKind};

pub const SYSTEM_INSTRUCTION: &str = "\
Role: high school chemistry teacher.
Task: decide what happens when the listed substances are combined in a school laboratory.

Answer with one JSON object. Write every text field in Simplified Chinese.
- success: whether a reaction happens at high school level.
- productName, productSymbol, productDescription, productColor, productType: the main product. Leave them out when success is false.
- equation: the balanced equation.
- reactionKind: the reaction category, for example 化合反应 or 置换反应.
- phenomenon: what can be observed, under 20 characters.
- fact: one short exam point or curiosity, under 30 characters.
- message: one sentence describing the reaction, or why nothing happens.

Rules:
- If nothing reacts at high school level, set success to false.
- If the reaction needs a catalyst or condition that is not present, either assume standard lab conditions allow it or fail it, but keep it fun.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactantLabel {
    pub name: String,
    pub symbol: String,
}

impl ReactantLabel {
    fn render(&self) -> String {
        format!("{}({})", self.name, self.symbol)
    }
}

/// Everything the generation service needs to invent a reaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub reactants: Vec<ReactantLabel>,
    pub response_schema: Value,
}

impl GenerationRequest {
    /// Reactants are listed in input order, repeats included.
    pub fn for_reactants(inputs: &[Substance]) -> Self {
        let reactants: Vec<ReactantLabel> = inputs
            .iter()
            .map(|substance| ReactantLabel {
                name: substance.name.clone(),
                symbol: substance.symbol.clone(),
            })
            .collect();
        let listing = reactants
            .iter()
            .map(ReactantLabel::render)
            .collect::<Vec<_>>()
            .join(" + ");

        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_owned(),
            prompt: format!("Inputs: {listing}"),
            reactants,
            response_schema: response_schema(),
        }
    }
}

/// OpenAPI-style schema for the structured answer. Colour and kind are closed
/// enumerations.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean" },
            "productName": { "type": "string" },
            "productSymbol": { "type": "string" },
            "productDescription": { "type": "string" },
            "productColor": { "type": "string", "enum": ColorTag::ALL.map(ColorTag::as_str) },
            "productType": { "type": "string", "enum": SubstanceKind::ALL.map(SubstanceKind::as_str) },
            "message": { "type": "string" },
            "equation": { "type": "string" },
            "reactionKind": { "type": "string" },
            "phenomenon": { "type": "string" },
            "fact": { "type": "string" }
        },
        "required": ["success", "message"]
    })
}

/// External text-generation service. Returns the raw JSON text of the
/// structured answer; parsing and validation happen in the resolver.
#[async_trait]
pub trait ReactionGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// Stand-in used when no generation backend is configured.
pub struct UnconfiguredGenerator;

#[async_trait]
impl ReactionGenerator for UnconfiguredGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        Err(anyhow!(
            "no reaction generator configured for {} reactants",
            request.reactants.len()
        ))
    }
}
