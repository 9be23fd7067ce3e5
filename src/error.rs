use crate::outline::OutlineLevel;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by the page-object layer
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// The element handle outlived the document it was queried from
    #[error("Stale element: {0}")]
    StaleElement(String),

    /// Any other failure reported by the underlying browser driver
    #[error("Browser driver error: {0}")]
    Driver(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A section or subsection title is absent from the outline
    #[error("Could not find {kind} '{title}'{}", scope_suffix(.scope))]
    NotFound {
        kind: OutlineLevel,
        title: String,
        /// Section the lookup was scoped to, for subsections
        scope: Option<String>,
    },

    #[error("{kind} index {index}{} is out of range (expected < {len})", section_suffix(.section_index))]
    IndexOutOfRange {
        kind: OutlineLevel,
        index: usize,
        len: usize,
        /// Enclosing section index, for subsections
        section_index: Option<usize>,
    },

    #[error("Timed out after {timeout:?}: {description}")]
    Timeout { description: String, timeout: Duration },
}

fn scope_suffix(scope: &Option<String>) -> String {
    match scope {
        Some(section) => format!(" in section '{}'", section),
        None => String::new(),
    }
}

fn section_suffix(section_index: &Option<usize>) -> String {
    match section_index {
        Some(index) => format!(" in section index {}", index),
        None => String::new(),
    }
}

impl PageError {
    /// Errors a polling wait treats as "not yet" rather than fatal
    pub fn is_transient(&self) -> bool {
        matches!(self, PageError::Driver(_) | PageError::StaleElement(_))
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
