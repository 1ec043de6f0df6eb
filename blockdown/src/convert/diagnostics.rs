//! Dropped-item accounting.
//!
//! Conversions never fail over a single bad item; they omit it and record
//! one of these. The `*_with_diagnostics` entry points return the collected
//! vector so callers can inspect exactly what was lost instead of inferring
//! it from a shorter output. This library never prints; surfacing the
//! diagnostics (stderr, logs, UI) is the caller's concern.

use std::fmt;

/// One skipped block or node, with an optional underlying cause.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub message: String,
    pub cause: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
