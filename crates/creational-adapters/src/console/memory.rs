//! In-memory console adapter for testing.

use std::sync::{Arc, RwLock};

use creational_core::{
    application::{ApplicationError, ports::Console},
    error::DemoResult,
};

/// In-memory console capturing every written line.
///
/// Clones share the same buffer, so a test can keep one handle and pass
/// another to the service.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryConsole {
    /// Create a new empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Lines joined with `\n`, as they would appear on a terminal.
    pub fn contents(&self) -> String {
        self.lines().join("\n")
    }

    /// Clear all captured lines.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.inner.write() {
            lines.clear();
        }
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        let mut lines = self
            .inner
            .write()
            .map_err(|_| ApplicationError::ConsoleLockError)?;
        lines.push(line.to_string());
        Ok(())
    }
}
