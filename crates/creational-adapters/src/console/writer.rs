//! Console adapter over any `std::io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use creational_core::{
    application::{ApplicationError, ports::Console},
    error::{DemoError, DemoResult},
};
use tracing::trace;

/// Production console writing newline-terminated lines to a writer.
#[derive(Debug)]
pub struct WriterConsole<W> {
    writer: Mutex<W>,
}

/// Console bound to the process's standard output.
pub type StdoutConsole = WriterConsole<io::Stdout>;

impl<W: Write + Send> WriterConsole<W> {
    /// Wrap an arbitrary writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> DemoResult<W> {
        self.writer
            .into_inner()
            .map_err(|_| ApplicationError::ConsoleLockError.into())
    }
}

impl WriterConsole<io::Stdout> {
    /// Create a console adapter for standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for WriterConsole<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> Console for WriterConsole<W> {
    fn write_line(&self, line: &str) -> DemoResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::ConsoleLockError)?;

        trace!(bytes = line.len(), "Writing line");
        writeln!(writer, "{line}")
            .and_then(|()| writer.flush())
            .map_err(map_io_error)
    }
}

fn map_io_error(e: io::Error) -> DemoError {
    ApplicationError::Output {
        reason: format!("Failed to write line: {}", e),
    }
    .into()
}
