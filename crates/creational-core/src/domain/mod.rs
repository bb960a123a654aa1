//! Core domain layer.
//!
//! Pure pattern logic with no I/O. Products are built on demand, returned as
//! single-owner boxes and dropped at the end of the caller's scope.
//!
//! - `abstract_factory`: families of matched products
//! - `factory_method`: one workflow, overridable creation step
//! - `catalog`: static description of the demos
pub mod abstract_factory;
pub mod catalog;
pub mod error;
pub mod factory_method;
pub mod transcript;
pub mod value_objects;

pub use abstract_factory::{AbstractFactory, AbstractProductA, AbstractProductB, factory_for};
pub use catalog::{PATTERN_REGISTRY, PatternDef, PatternId, find_pattern};
pub use error::{DomainError, ErrorCategory};
pub use factory_method::{Creator, Product, creator_for};
pub use transcript::Transcript;
pub use value_objects::{Family, Variant};
