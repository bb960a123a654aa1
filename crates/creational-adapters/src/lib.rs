//! Infrastructure adapters for creational.
//!
//! This crate implements the ports defined in `creational-core::application::ports`.
//! It owns every I/O operation.

pub mod console;

// Re-export commonly used adapters
pub use console::{MemoryConsole, StdoutConsole, WriterConsole};
