//! Creational Core: Abstract Factory and Factory Method behind one service.
//!
//! ## Layout
//!
//! ```text
//!   creational-cli ──► DemoService ──► Console (port)
//!                          │                ▲
//!                          ▼                │ implemented in
//!                  domain: factories,   creational-adapters
//!                  creators, products   (WriterConsole, MemoryConsole)
//! ```
//!
//! The domain never performs I/O. [`application::DemoService`] turns a
//! selection of families or creators into a [`domain::Transcript`] and hands
//! each line to whatever [`application::Console`] it was built with.
//!
//! ## Usage
//!
//! ```rust
//! use creational_core::{
//!     application::{Console, DemoService},
//!     domain::Family,
//!     error::DemoResult,
//! };
//!
//! struct Print;
//!
//! impl Console for Print {
//!     fn write_line(&self, line: &str) -> DemoResult<()> {
//!         println!("{line}");
//!         Ok(())
//!     }
//! }
//!
//! let service = DemoService::new(Box::new(Print));
//! let transcript = service.abstract_factory(&Family::ALL).unwrap();
//! assert!(transcript.contains("The result of the product B2."));
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// The names a front end usually needs.
pub mod prelude {
    pub use crate::application::{Console, DemoService};
    pub use crate::domain::{
        AbstractFactory, AbstractProductA, AbstractProductB, Creator, Family, PatternId, Product,
        Transcript, Variant, creator_for, factory_for,
    };
    pub use crate::error::{DemoError, DemoResult};
}
