//! Error taxonomy for construction requests.
//!
//! Every error is raised during validation, before any table is built, with
//! the single exception of [`ConstructError::LimitExceeded`], which only a
//! caller-configured limit can trigger. An unconstructible target is never an
//! error: it is an empty result.

use std::fmt;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = ConstructError> = std::result::Result<T, E>;

/// Which part of the input an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Target,
    WordBank,
    /// Element `index` of the word bank.
    Word { index: usize },
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Target => f.write_str("target"),
            InputField::WordBank => f.write_str("word bank"),
            InputField::Word { index } => write!(f, "word bank element {index}"),
        }
    }
}

/// Empty-input failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmptyInput {
    #[error("target string cannot be empty")]
    Target,
    #[error("word bank cannot contain empty strings (element {index})")]
    Word { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructError {
    /// A value had the wrong type (only reachable through loosely-typed input).
    #[error("{field} must be {expected}, found {found}")]
    TypeMismatch {
        field: InputField,
        expected: &'static str,
        found: &'static str,
    },

    #[error(transparent)]
    EmptyInput(#[from] EmptyInput),

    /// The DP table grew past the configured number of decompositions.
    #[error("construction exceeded the limit of {limit} decompositions")]
    LimitExceeded { limit: usize },
}

impl ConstructError {
    pub(crate) fn type_mismatch(
        field: InputField,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ConstructError::TypeMismatch {
            field,
            expected,
            found,
        }
    }
}
