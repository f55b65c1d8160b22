//! All-construct: every way to spell a target from a bank of words
//!
//! Given a target string and a bank of reusable words, this crate enumerates
//! every ordered sequence of words whose concatenation is exactly the target.
//!
//! ## Core idea
//! 1. Index, for each offset of the target, the bank words that occur there.
//! 2. Fill a table with one slot per offset: slot `k` holds all decompositions
//!    of `target[0..k]`, seeded with the empty decomposition at slot 0.
//! 3. Scan offsets left to right, extending every decomposition in a reachable
//!    slot by every word matching at that offset.
//!
//! The output is inherently exponential for some inputs (`"aaaa…"` with
//! `["a", "aa"]` produces Fibonacci-many decompositions).
//! [`Constructor::count`] sizes the answer without materialising it and
//! [`ConstructorBuilder::with_limit`] caps the work of a run.
//!
//! ## Quick start
//! ```
//! use all_construct::all_construct;
//!
//! let all = all_construct("purple", Some(["purp", "p", "ur", "le", "purpl"])).unwrap();
//! assert_eq!(all, vec![vec!["purp", "le"], vec!["p", "ur", "p", "le"]]);
//!
//! let none = all_construct("impossible", Some(["imp", "possible"])).unwrap();
//! assert!(none.is_empty());
//! ```
//!
//! Untyped input (JSON values) is handled by [`dynamic::construct_value`].

pub mod bank;
pub mod builder;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod index;

pub use crate::bank::{Target, WordBank};
pub use crate::builder::ConstructorBuilder;
pub use crate::engine::{Constructor, Decomposition};
pub use crate::error::{ConstructError, EmptyInput, InputField, Result};

/// Enumerate every decomposition of `target` over `word_bank`.
///
/// A `None` bank is treated as empty. Validation happens before any work:
/// an empty `target` or an empty word fails with
/// [`ConstructError::EmptyInput`]. An unconstructible target returns an empty
/// vector.
pub fn all_construct<I>(target: &str, word_bank: Option<I>) -> Result<Vec<Vec<String>>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let target = Target::new(target)?;
    let bank = match word_bank {
        Some(words) => WordBank::new(words.into_iter().map(|w| w.as_ref().to_owned()))?,
        None => WordBank::empty(),
    };
    Constructor::from_parts(target, &bank, None).run_owned()
}
