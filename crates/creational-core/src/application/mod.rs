//! Application layer.
//!
//! - **Services**: demo orchestration (`DemoService`)
//! - **Ports**: interface definitions for the outside world (`Console`)
//! - **Errors**: orchestration failures
//!
//! The pattern logic itself lives in `crate::domain`; this layer only
//! sequences it and hands the resulting lines to a port.

pub mod error;
pub mod ports;
pub mod services;

pub use services::DemoService;

pub use ports::Console;

pub use error::ApplicationError;
