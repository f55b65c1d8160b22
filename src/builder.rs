use crate::bank::{Target, WordBank};
use crate::error::Result;
use crate::Constructor;

/// Configures a [`Constructor`] before validation.
///
/// ```
/// use all_construct::{ConstructError, ConstructorBuilder, WordBank};
///
/// let bank = WordBank::new(["a", "aa"]).unwrap();
/// let target = "a".repeat(30);
/// let constructor = ConstructorBuilder::new(&target, &bank)
///     .with_limit(1_000)
///     .build()
///     .unwrap();
/// assert!(matches!(constructor.run(), Err(ConstructError::LimitExceeded { .. })));
/// ```
pub struct ConstructorBuilder<'a> {
    target: &'a str,
    bank: &'a WordBank,
    limit: Option<usize>,
}

impl<'a> ConstructorBuilder<'a> {
    pub fn new(target: &'a str, bank: &'a WordBank) -> Self {
        Self {
            target,
            bank,
            limit: None,
        }
    }

    /// Fail the run once more than `limit` decompositions have been written.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Constructor<'a>> {
        let target = Target::new(self.target)?;
        Ok(Constructor::from_parts(target, self.bank, self.limit))
    }
}
