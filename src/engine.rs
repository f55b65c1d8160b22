//! Forward DP over target positions.
//!
//! The table has one slot per byte offset `0..=n`. Slot `k` holds every
//! decomposition spelling `target[0..k]`; slot 0 is seeded with the empty
//! decomposition and slot `n` is the answer. Writes only ever go forward
//! (`end = current + word.len() > current`), so a single ascending scan
//! finalises each slot before it is read.

use crate::bank::{Target, WordBank};
use crate::error::{ConstructError, Result};
use crate::index::PositionIndex;

/// An ordered sequence of bank words whose concatenation is the target.
pub type Decomposition<'w> = Vec<&'w str>;

/// One construction request: a validated target and the bank to draw from.
///
/// Typical usage:
/// ```
/// use all_construct::{Constructor, WordBank};
///
/// let bank = WordBank::new(["purp", "p", "ur", "le", "purpl"]).unwrap();
/// let constructor = Constructor::new("purple", &bank).unwrap();
/// let all = constructor.run().unwrap();
/// assert_eq!(all, vec![vec!["purp", "le"], vec!["p", "ur", "p", "le"]]);
/// assert_eq!(constructor.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Constructor<'a> {
    target: Target<'a>,
    bank: &'a WordBank,
    limit: Option<usize>,
}

impl<'a> Constructor<'a> {
    /// Validate `target` and bind it to `bank`. No limit is applied.
    pub fn new(target: &'a str, bank: &'a WordBank) -> Result<Self> {
        Ok(Self::from_parts(Target::new(target)?, bank, None))
    }

    pub(crate) fn from_parts(target: Target<'a>, bank: &'a WordBank, limit: Option<usize>) -> Self {
        Self {
            target,
            bank,
            limit,
        }
    }

    pub fn target(&self) -> Target<'a> {
        self.target
    }

    pub fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// Maximum number of decompositions the table may hold, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Enumerate every decomposition of the target.
    ///
    /// Decompositions come out in the order they reach the final slot:
    /// ascending start of the last word, then bank order of that word, then
    /// the order of the prefixes it extends. An unconstructible target yields
    /// an empty vector.
    ///
    /// # Errors
    /// [`ConstructError::LimitExceeded`] if a limit is configured and the
    /// total number of decompositions written to the table passes it.
    pub fn run(&self) -> Result<Vec<Decomposition<'a>>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "all_construct",
            target_len = self.target.len(),
            words = self.bank.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let index = self.build_index();
        let n = self.target.len();

        let mut table: Vec<Vec<Decomposition<'a>>> = vec![Vec::new(); n + 1];
        table[0].push(Vec::new());
        let mut written = 0usize;

        #[cfg(feature = "tracing")]
        let fill_span = tracing::info_span!("fill_table", slots = n + 1);
        #[cfg(feature = "tracing")]
        let _fill = fill_span.enter();

        for current in 0..n {
            if table[current].is_empty() {
                continue;
            }
            // Nothing writes back to `current`, so the slot can be moved out.
            let prefixes = std::mem::take(&mut table[current]);

            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!(
                "expand_position",
                position = current,
                prefixes = prefixes.len()
            );
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            for &word in index.words_at(current) {
                written = written.saturating_add(prefixes.len());
                if let Some(limit) = self.limit {
                    if written > limit {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(limit, position = current, "decomposition limit exceeded");
                        return Err(ConstructError::LimitExceeded { limit });
                    }
                }

                let end = current + word.len();
                table[end].extend(prefixes.iter().map(|prefix| {
                    let mut next = Vec::with_capacity(prefix.len() + 1);
                    next.extend_from_slice(prefix);
                    next.push(word);
                    next
                }));
            }
        }

        let result = std::mem::take(&mut table[n]);
        #[cfg(feature = "tracing")]
        tracing::debug!(written, decompositions = result.len(), "table filled");
        Ok(result)
    }

    /// Same as [`run`](Self::run) but with owned words.
    pub fn run_owned(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .run()?
            .into_iter()
            .map(|d| d.into_iter().map(str::to_owned).collect())
            .collect())
    }

    /// Count decompositions without materialising them.
    ///
    /// Uses the same position index as [`run`](Self::run) and saturates at
    /// `u128::MAX`. Ignores any configured limit.
    pub fn count(&self) -> u128 {
        let index = self.build_index();
        let n = self.target.len();
        let mut ways = vec![0u128; n + 1];
        ways[0] = 1;

        for current in 0..n {
            let here = ways[current];
            if here == 0 {
                continue;
            }
            for word in index.words_at(current) {
                let end = current + word.len();
                ways[end] = ways[end].saturating_add(here);
            }
        }

        ways[n]
    }

    fn build_index(&self) -> PositionIndex<'a> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("build_position_index");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let index = PositionIndex::build(&self.target, self.bank);
        #[cfg(feature = "tracing")]
        tracing::trace!(matches = index.match_count(), "position index built");
        index
    }
}
