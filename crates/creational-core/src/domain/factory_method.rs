//! Factory Method: a shared workflow with one overridable creation step.
//!
//! [`Creator::some_operation`] is written once as a provided trait method.
//! Concrete creators only implement [`Creator::factory_method`] to pick the
//! product type the workflow works with.

use tracing::debug;

use crate::domain::value_objects::Variant;

/// Prefix owned by the creator workflow.
pub const WORKFLOW_PREFIX: &str = "Creator: The same creator's code has just worked with ";

/// Object produced by a creator.
pub trait Product {
    fn operation(&self) -> String;

    fn variant(&self) -> Variant;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProduct1;

impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "クラス ConcreteProduct1からのリターン".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProduct2;

impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "クラス ConcreteProduct2からのリターン".to_string()
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}

/// Owner of the fixed workflow.
///
/// Implementors provide [`Creator::factory_method`] and must not override
/// [`Creator::some_operation`].
pub trait Creator {
    /// The creation step. Returns a fresh product on every call.
    fn factory_method(&self) -> Box<dyn Product>;

    fn variant(&self) -> Variant;

    /// Run the workflow against whatever product the creation step returns.
    fn some_operation(&self) -> String {
        let product = self.factory_method();
        debug!(variant = %product.variant(), "Product created");
        format!("{WORKFLOW_PREFIX}{}", product.operation())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteCreator1;

impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteCreator2;

impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}

/// Select the concrete creator for a variant.
pub fn creator_for(variant: Variant) -> Box<dyn Creator> {
    match variant {
        Variant::One => Box::new(ConcreteCreator1),
        Variant::Two => Box::new(ConcreteCreator2),
    }
}

/// Type name shown in demo banners, e.g. `ConcreteCreator1`.
pub fn creator_name(variant: Variant) -> String {
    format!("ConcreteCreator{variant}")
}
