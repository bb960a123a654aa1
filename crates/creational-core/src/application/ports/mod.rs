//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by
//!   `creational-adapters`
//!   - `Console`: line-oriented text output

use crate::error::DemoResult;

/// Port for demo output.
///
/// Implemented by:
/// - `creational_adapters::StdoutConsole` (production)
/// - `creational_adapters::MemoryConsole` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Write one line of output.
    fn write_line(&self, line: &str) -> DemoResult<()>;
}
