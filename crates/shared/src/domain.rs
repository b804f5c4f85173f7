use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(SubstanceId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstanceKind {
    Basic,
    Compound,
    Rare,
    Dangerous,
}

impl SubstanceKind {
    pub const ALL: [SubstanceKind; 4] = [
        SubstanceKind::Basic,
        SubstanceKind::Compound,
        SubstanceKind::Rare,
        SubstanceKind::Dangerous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SubstanceKind::Basic => "basic",
            SubstanceKind::Compound => "compound",
            SubstanceKind::Rare => "rare",
            SubstanceKind::Dangerous => "dangerous",
        }
    }
}

impl fmt::Display for SubstanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette key used by front ends to pick a gradient for a substance card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Cyan,
    Blue,
    Indigo,
    #[default]
    Slate,
    Stone,
    Yellow,
    Green,
    Orange,
    Purple,
    Red,
    Teal,
}

impl ColorTag {
    pub const ALL: [ColorTag; 11] = [
        ColorTag::Cyan,
        ColorTag::Blue,
        ColorTag::Indigo,
        ColorTag::Slate,
        ColorTag::Stone,
        ColorTag::Yellow,
        ColorTag::Green,
        ColorTag::Orange,
        ColorTag::Purple,
        ColorTag::Red,
        ColorTag::Teal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Cyan => "cyan",
            ColorTag::Blue => "blue",
            ColorTag::Indigo => "indigo",
            ColorTag::Slate => "slate",
            ColorTag::Stone => "stone",
            ColorTag::Yellow => "yellow",
            ColorTag::Green => "green",
            ColorTag::Orange => "orange",
            ColorTag::Purple => "purple",
            ColorTag::Red => "red",
            ColorTag::Teal => "teal",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color tag '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substance {
    pub id: SubstanceId,
    /// Chemical notation; the identity used for reaction lookups.
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub kind: SubstanceKind,
    pub color: ColorTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phenomenon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact: Option<String>,
}

/// Result of one synthesis attempt. `product` is present exactly when
/// `success` is true; build values through [`ReactionOutcome::succeeded`]
/// and [`ReactionOutcome::failed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Substance>,
    pub message: String,
    #[serde(flatten)]
    pub details: ReactionDetails,
}

impl ReactionOutcome {
    pub fn succeeded(product: Substance, message: impl Into<String>, details: ReactionDetails) -> Self {
        Self {
            success: true,
            product: Some(product),
            message: message.into(),
            details,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            product: None,
            message: message.into(),
            details: ReactionDetails::default(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.success == self.product.is_some()
    }
}
