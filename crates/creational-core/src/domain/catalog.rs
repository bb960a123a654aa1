//! Pattern catalog.
//!
//! Each demo is described exactly once by a [`PatternDef`] in
//! [`PATTERN_REGISTRY`]. `creational list` prints the table, and
//! `creational list <ID>` resolves one entry through [`find_pattern`].

use serde::Serialize;

use crate::domain::error::DomainError;

/// Identifier of a demonstrated pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    AbstractFactory,
    FactoryMethod,
}

impl PatternId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "abstract-factory",
            Self::FactoryMethod => "factory-method",
        }
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one demo.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternDef {
    pub id: PatternId,
    pub name: &'static str,
    pub description: &'static str,
    /// Selectable concrete factories or creators.
    pub variants: &'static [&'static str],
}

/// Single source of truth for the available demos.
pub static PATTERN_REGISTRY: &[PatternDef] = &[
    PatternDef {
        id: PatternId::AbstractFactory,
        name: "Abstract Factory",
        description: "Create a family of related products without naming concrete types",
        variants: &["ConcreteFactory1", "ConcreteFactory2"],
    },
    PatternDef {
        id: PatternId::FactoryMethod,
        name: "Factory Method",
        description: "Share one workflow while subclasses choose the product type",
        variants: &["ConcreteCreator1", "ConcreteCreator2"],
    },
];

/// Look up a pattern by its id string.
pub fn find_pattern(id: &str) -> Result<&'static PatternDef, DomainError> {
    PATTERN_REGISTRY
        .iter()
        .find(|def| def.id.as_str() == id)
        .ok_or_else(|| DomainError::UnknownPattern { id: id.to_string() })
}
