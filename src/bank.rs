//! Validated inputs: the target string and the word bank.
//!
//! Both types can only be obtained through their checked constructors, so the
//! engine never has to re-validate.

use crate::error::{EmptyInput, Result};

/// A non-empty string to be reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    text: &'a str,
}

impl<'a> Target<'a> {
    pub fn new(text: &'a str) -> Result<Self> {
        if text.is_empty() {
            return Err(EmptyInput::Target.into());
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in bytes; DP slots are indexed by byte offset.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// A `Target` is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A collection of non-empty candidate words.
///
/// Duplicates are allowed. Bank order is preserved because it decides the
/// order in which decompositions are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Validate and collect `words`, rejecting the first empty one.
    pub fn new<I>(words: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if let Some(index) = words.iter().position(String::is_empty) {
            return Err(EmptyInput::Word { index }.into());
        }
        Ok(Self { words })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Length in bytes of the longest word, or 0 for an empty bank.
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

impl TryFrom<Vec<String>> for WordBank {
    type Error = crate::error::ConstructError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::new(words)
    }
}

impl<'b> TryFrom<&'b [&'b str]> for WordBank {
    type Error = crate::error::ConstructError;

    fn try_from(words: &'b [&'b str]) -> Result<Self> {
        Self::new(words.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstructError;

    #[test]
    fn empty_target_is_rejected() {
        assert_eq!(
            Target::new(""),
            Err(ConstructError::EmptyInput(EmptyInput::Target))
        );
        let t = Target::new("abc").unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.as_str(), "abc");
        assert!(!t.is_empty());
    }

    #[test]
    fn first_empty_word_is_reported() {
        let err = WordBank::new(["a", "", "b", ""]).unwrap_err();
        assert_eq!(err, ConstructError::EmptyInput(EmptyInput::Word { index: 1 }));
    }

    #[test]
    fn bank_keeps_duplicates_and_order() {
        let bank = WordBank::new(["ab", "a", "ab"]).unwrap();
        assert_eq!(bank.words(), ["ab", "a", "ab"]);
        assert_eq!(bank.len(), 3);
        assert!(bank.contains("a"));
        assert!(!bank.contains("b"));
        assert_eq!(bank.max_word_len(), 2);
    }

    #[test]
    fn empty_bank_defaults() {
        let bank = WordBank::empty();
        assert!(bank.is_empty());
        assert_eq!(bank.max_word_len(), 0);
        assert_eq!(WordBank::new(Vec::<String>::new()).unwrap(), bank);
    }

    #[test]
    fn try_from_slices_and_vecs() {
        let words: &[&str] = &["x", "y"];
        let bank = WordBank::try_from(words).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(WordBank::try_from(vec![String::new()]).is_err());
    }
}
