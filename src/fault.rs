//! Descriptive failures with a trail of context
//!
//! [`Fault`] is the error value produced when a raw failure (a parser error, a
//! panic, an `Err` from foreign code) is converted into an [`Either`](crate::Either)
//! at the boundary. It carries a human-readable message and the breadcrumbs that
//! were added while it propagated.
//!
//! # Examples
//!
//! ```
//! use quiver::Fault;
//!
//! let fault = Fault::new("'xyz' is not a number")
//!     .context("reading age field")
//!     .context("registering user");
//!
//! assert_eq!(fault.message(), "'xyz' is not a number");
//! assert_eq!(fault.context_trail().len(), 2);
//! ```

use std::error::Error as StdError;
use std::fmt;

/// A failure message plus the context it was raised in.
///
/// ```
/// use quiver::Fault;
///
/// let fault = Fault::new("connection refused").context("opening users.db");
/// assert_eq!(
///     fault.to_string(),
///     "connection refused\n  -> opening users.db"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fault {
    message: String,
    context: Vec<String>,
}

impl Fault {
    /// Create a fault with an empty context trail.
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Append a context layer. Layers are kept innermost first.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Context layers in the order they were added.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Consume the fault, keeping only its message.
    pub fn into_message(self) -> String {
        self.message
    }

    pub(crate) fn trace(self, boundary: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(boundary, fault = %self.message, "converted raw failure into Fault");
        #[cfg(not(feature = "tracing"))]
        let _ = boundary;
        self
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        Ok(())
    }
}

impl StdError for Fault {}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Fault::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Fault::new(message)
    }
}
