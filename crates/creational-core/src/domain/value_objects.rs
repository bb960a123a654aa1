//! Domain value objects: Family, Variant.
//!
//! # Design
//!
//! These are pure selectors — `Copy`, equality-by-value, no identity.
//! They decide *which* concrete factory or creator gets built; the factories
//! themselves live in `abstract_factory.rs` and `factory_method.rs`.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add the concrete types and the selection arm in the pattern module
//! 4. Add a catalog entry in `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Family ───────────────────────────────────────────────────────────────────

/// A product family of the Abstract Factory demo.
///
/// Products A and B created by one factory always share its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Family {
    One,
    Two,
}

impl Family {
    /// Every family, in demo order.
    pub const ALL: [Family; 2] = [Family::One, Family::Two];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }

    /// Ordinal used in banner text ("first", "second").
    pub const fn ordinal(&self) -> &'static str {
        match self {
            Self::One => "first",
            Self::Two => "second",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(DomainError::UnknownFamily {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Family {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Family> for String {
    fn from(family: Family) -> Self {
        family.as_str().to_string()
    }
}

// ── Variant ──────────────────────────────────────────────────────────────────

/// A creator/product pair of the Factory Method demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Variant {
    One,
    Two,
}

impl Variant {
    /// Every variant, in demo order.
    pub const ALL: [Variant; 2] = [Variant::One, Variant::Two];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(Self::One),
            "2" | "two" => Ok(Self::Two),
            other => Err(DomainError::UnknownVariant {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.as_str().to_string()
    }
}
