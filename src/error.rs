//! Calculator error kinds and diagnostic formatting.
//!
//! Every stage of the pipeline reports failures as a `CalcDiagnostic`: a
//! closed error kind plus an optional detail string. The kind alone decides
//! the user-facing message; the detail is extra context for the curious.

use std::fmt;

/// The kinds of failure a line of input can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed expression: bad operator, unbalanced parentheses,
    /// missing operands.
    InvalidExpression,
    /// Reference to a variable that has no value.
    UnknownVariable,
    /// Assignment with the wrong shape or an unusable right-hand side.
    InvalidAssignment,
    /// Assignment target is not a valid identifier.
    InvalidIdentifier,
    /// Right operand of `/` was zero.
    DivisionByZero,
    /// Line started with `/` but named no known command.
    UnknownCommand,
}

impl CalcError {
    /// Fixed message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidExpression => "Invalid expression",
            Self::UnknownVariable => "Unknown variable",
            Self::InvalidAssignment => "Invalid assignment",
            Self::InvalidIdentifier => "Invalid identifier",
            Self::DivisionByZero => "Division by zero",
            Self::UnknownCommand => "Unknown command",
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A calculator error with optional context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcDiagnostic {
    pub error: CalcError,
    pub detail: Option<String>,
}

impl CalcDiagnostic {
    pub fn new(error: CalcError) -> Self {
        Self {
            error,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<CalcError> for CalcDiagnostic {
    fn from(error: CalcError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for CalcDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error.message())?;

        if let Some(ref detail) = self.detail {
            write!(f, ": {detail}")?;
        }

        Ok(())
    }
}

impl std::error::Error for CalcDiagnostic {}

/// Convenience alias.
pub type CalcResult<T> = Result<T, CalcDiagnostic>;
