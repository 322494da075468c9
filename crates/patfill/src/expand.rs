//! Pattern expansion.
//!
//! Expansion runs in three steps: the options are validated, the custom
//! tokens are overlaid on the built-in table, and the pattern is walked once.
//! Each token character is replaced by a character drawn uniformly from its
//! alphabet; every other character is copied through unchanged.

use patfill_spec::validation::validate_options;
use patfill_spec::{ExpandOptions, TokenTable};
use rand::Rng;

use crate::error::{ExpandError, ExpandResult};
use crate::rng::{create_item_rng, create_rng, entropy_rng};

/// A validated, merged token table ready to expand patterns.
///
/// Building an `Expander` performs the validation and merge steps once.
/// The expander holds no RNG state, so it can be shared between threads and
/// reused with any RNG.
#[derive(Debug, Clone)]
pub struct Expander {
    table: TokenTable,
}

impl Expander {
    /// Validates `options` and merges them over the built-in tokens.
    ///
    /// Fails with the first invalid custom token key, in key order. This
    /// happens even if the expander is never used.
    pub fn new(options: &ExpandOptions) -> ExpandResult<Self> {
        let result = validate_options(options);
        if let Some(err) = result.errors.into_iter().next() {
            tracing::debug!(code = %err.code, "rejected expansion options");
            return Err(ExpandError::InvalidOptions(err));
        }

        for warning in &result.warnings {
            if warning.code.is_advisory() {
                tracing::debug!(code = %warning.code, "{}", warning.message);
            } else {
                tracing::warn!(code = %warning.code, "{}", warning.message);
            }
        }

        let table = TokenTable::merged(options);
        tracing::debug!(
            tokens = table.len(),
            overrides = options.custom_tokens.len(),
            "built token table"
        );

        Ok(Self { table })
    }

    /// Creates an expander over an already-merged table.
    pub fn from_table(table: TokenTable) -> Self {
        Self { table }
    }

    /// The effective token table.
    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    /// Expands `pattern`, drawing from `rng`.
    ///
    /// The output has the same number of characters as `pattern`. An empty
    /// alphabet is only an error when the pattern actually uses its token.
    pub fn expand_with_rng<R: Rng + ?Sized>(
        &self,
        pattern: &str,
        rng: &mut R,
    ) -> ExpandResult<String> {
        let mut out = String::with_capacity(pattern.len());

        for c in pattern.chars() {
            match self.table.get(c) {
                Some([]) => return Err(ExpandError::empty_alphabet(c)),
                Some(alphabet) => out.push(alphabet[rng.gen_range(0..alphabet.len())]),
                None => out.push(c),
            }
        }

        Ok(out)
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::from_table(TokenTable::defaults())
    }
}

/// Expands `pattern` with a fresh entropy-seeded RNG.
///
/// # Example
/// ```
/// use patfill::expand;
/// use patfill_spec::ExpandOptions;
///
/// let code = expand("AA-####", &ExpandOptions::default()).unwrap();
/// assert_eq!(code.len(), 7);
/// assert_eq!(&code[2..3], "-");
/// ```
pub fn expand(pattern: &str, options: &ExpandOptions) -> ExpandResult<String> {
    expand_with_rng(pattern, options, &mut entropy_rng())
}

/// Expands `pattern`, drawing from a caller-supplied RNG.
pub fn expand_with_rng<R: Rng + ?Sized>(
    pattern: &str,
    options: &ExpandOptions,
    rng: &mut R,
) -> ExpandResult<String> {
    let result = Expander::new(options).and_then(|e| e.expand_with_rng(pattern, rng));
    if let Err(ref err) = result {
        tracing::debug!(code = err.code(), "expansion failed: {}", err);
    }
    result
}

/// Expands `pattern` deterministically from `seed`.
///
/// # Example
/// ```
/// use patfill::expand_seeded;
/// use patfill_spec::ExpandOptions;
///
/// let options = ExpandOptions::default();
/// let a = expand_seeded("a#a#", &options, 7).unwrap();
/// let b = expand_seeded("a#a#", &options, 7).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn expand_seeded(pattern: &str, options: &ExpandOptions, seed: u32) -> ExpandResult<String> {
    expand_with_rng(pattern, options, &mut create_rng(seed))
}

/// Expands `pattern` `count` times, item `i` using a seed derived from
/// `base_seed` and `i`.
///
/// Options are validated once. Any failing item fails the whole batch.
pub fn expand_batch(
    pattern: &str,
    options: &ExpandOptions,
    base_seed: u32,
    count: u32,
) -> ExpandResult<Vec<String>> {
    let expander = Expander::new(options)?;

    (0..count)
        .map(|index| {
            tracing::trace!(base_seed, index, "expanding batch item");
            expander.expand_with_rng(pattern, &mut create_item_rng(base_seed, index))
        })
        .collect()
}
