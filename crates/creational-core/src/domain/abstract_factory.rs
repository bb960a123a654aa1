//! Abstract Factory: one factory per product family.
//!
//! A factory hands out a product A and a product B that always belong to
//! the factory's own [`Family`]. Callers only see the trait objects, so the
//! client code in [`client_code`] works unchanged with either factory.
//!
//! ```rust
//! use creational_core::domain::{Family, abstract_factory::{client_code, factory_for}};
//!
//! let factory = factory_for(Family::One);
//! let lines = client_code(factory.as_ref());
//! assert_eq!(lines[0], "The result of the product B1.");
//! ```

use tracing::debug;

use crate::domain::value_objects::Family;

// ── Products ─────────────────────────────────────────────────────────────────

/// First member of every product family.
pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;

    /// Family this product was built for.
    fn family(&self) -> Family;
}

/// Second member of every product family.
///
/// B can collaborate with an A. The collaborator is taken as a trait object
/// so B never depends on a concrete A type.
pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;

    /// Family this product was built for.
    fn family(&self) -> Family;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }

    fn family(&self) -> Family {
        Family::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with ({result} )")
    }

    fn family(&self) -> Family {
        Family::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with ( {result} )")
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

// ── Factories ────────────────────────────────────────────────────────────────

/// Creates one matched product A and product B.
///
/// Every product is returned as a fresh single-owner box; nothing is cached.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;

    fn create_product_b(&self) -> Box<dyn AbstractProductB>;

    /// Family of every product this factory creates.
    fn family(&self) -> Family;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }

    fn family(&self) -> Family {
        Family::One
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }

    fn family(&self) -> Family {
        Family::Two
    }
}

/// Select the concrete factory for a family.
pub fn factory_for(family: Family) -> Box<dyn AbstractFactory> {
    match family {
        Family::One => Box::new(ConcreteFactory1),
        Family::Two => Box::new(ConcreteFactory2),
    }
}

/// Client code that only knows the abstract types.
///
/// Returns B's own output followed by B collaborating with A. Both products
/// are dropped before returning.
pub fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();
    debug!(family = %factory.family(), "Products created");

    vec![
        product_b.useful_function_b(),
        product_b.another_useful_function_b(product_a.as_ref()),
    ]
}
