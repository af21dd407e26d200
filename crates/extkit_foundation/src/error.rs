//! Error types for extkit operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout extkit.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for extkit operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Shorthand for attaching the name of the failing operation.
    #[must_use]
    pub fn in_operation(mut self, operation: &'static str) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.with_context(context.with_operation(operation))
    }

    /// Creates a missing input error.
    #[must_use]
    pub fn missing_input(argument: &'static str) -> Self {
        Self::new(ErrorKind::MissingInput { argument })
    }

    /// Creates an empty sequence error.
    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::new(ErrorKind::EmptySequence)
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(argument: &'static str, value: i64, min: i64, max: i64) -> Self {
        Self::new(ErrorKind::OutOfRange {
            argument,
            value,
            min,
            max,
        })
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(what.into()))
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(input: impl Into<String>, target: &'static str) -> Self {
        Self::new(ErrorKind::Parse {
            input: input.into(),
            target,
        })
    }

    /// Returns true if this error reports an absent input.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingInput { .. })
    }

    /// Returns true if this error belongs to the invalid argument family.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::EmptySequence
                | ErrorKind::InvalidArgument(_)
                | ErrorKind::OutOfRange { .. }
                | ErrorKind::Parse { .. }
        )
    }

    /// Returns true if this error reports a search miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required input was absent.
    #[error("missing input: {argument}")]
    MissingInput {
        /// Name of the absent argument.
        argument: &'static str,
    },

    /// The operation needs at least one element.
    #[error("the sequence is empty")]
    EmptySequence,

    /// An argument was semantically invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument fell outside its allowed range.
    #[error("argument out of range: {argument} = {value} (allowed {min}..={max})")]
    OutOfRange {
        /// Name of the offending argument.
        argument: &'static str,
        /// The value that was passed.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A search found no matching element.
    #[error("not found: {0}")]
    NotFound(String),

    /// A string could not be converted to the target type.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        /// The rejected input.
        input: String,
        /// Name of the type or format that was expected.
        target: &'static str,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation that failed.
    pub operation: Option<&'static str>,
    /// Extra detail, such as the offending value.
    pub detail: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets a free-form detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(detail) = &self.detail {
            if self.operation.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "{detail}")?;
        }
        Ok(())
    }
}

/// Unwraps an optional input, failing with [`ErrorKind::MissingInput`].
///
/// # Errors
///
/// Returns a missing input error naming `argument` when `value` is `None`.
pub fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::trace!(argument, "required input is absent");
        Error::missing_input(argument)
    })
}
