//! Position index: which bank words occur at each offset of the target.
//!
//! Built once per construction and read-only afterwards. Offsets are byte
//! offsets; because every word is valid UTF-8, a match can only start (and
//! end) on a character boundary, so only those offsets are ever populated.

use crate::bank::{Target, WordBank};

/// For each offset `i` in `[0, n)`, the distinct words matching at `i`.
#[derive(Debug, Clone)]
pub struct PositionIndex<'w> {
    slots: Vec<Vec<&'w str>>,
}

impl<'w> PositionIndex<'w> {
    /// Scan every character boundary of `target` against every bank word.
    ///
    /// Words within an offset keep first-occurrence bank order; a word listed
    /// more than once in the bank contributes a single entry per offset.
    pub fn build(target: &Target<'_>, bank: &'w WordBank) -> Self {
        let text = target.as_str();
        let mut slots: Vec<Vec<&'w str>> = vec![Vec::new(); text.len()];

        for (i, _) in text.char_indices() {
            let rest = &text[i..];
            let slot = &mut slots[i];
            for word in bank.words() {
                if rest.starts_with(word.as_str()) && !slot.contains(&word.as_str()) {
                    slot.push(word.as_str());
                }
            }
        }

        Self { slots }
    }

    /// Words matching at `offset`; empty past the end or inside a character.
    pub fn words_at(&self, offset: usize) -> &[&'w str] {
        self.slots.get(offset).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of offsets covered (the target length in bytes).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total number of (offset, word) matches.
    pub fn match_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}
