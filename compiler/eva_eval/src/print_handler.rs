//! Destination for the `print` native.
//!
//! - Stdout (default)
//! - Buffer: captures output for tests and embedding hosts
//! - Silent: discards output
//!
//! Enum dispatch; the handler is shared between the interpreter and the
//! `print` native it installs in the global environment.

use std::sync::Arc;

use parking_lot::Mutex;

/// Print handler implementation.
pub enum PrintHandlerImpl {
    /// Writes each line to stdout.
    Stdout,
    /// Appends each line to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    /// Write one line (a newline is appended).
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Shared print handler. `Arc` so a host thread can drain a buffer handler.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler writing to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler capturing output in memory.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

/// Handler discarding output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
