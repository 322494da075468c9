//! Shared helpers for patfill integration tests.

use std::collections::BTreeMap;

use patfill_spec::ExpandOptions;

/// Builds options from `(token, alphabet)` pairs.
pub fn options_with(tokens: &[(char, &str)]) -> ExpandOptions {
    tokens
        .iter()
        .fold(ExpandOptions::builder(), |builder, (token, alphabet)| {
            builder.token(*token, *alphabet)
        })
        .build()
}

/// Counts how often each character occurs across `samples`.
pub fn char_counts<'a>(samples: impl IntoIterator<Item = &'a str>) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for sample in samples {
        for c in sample.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}

/// Pearson's chi-squared statistic of `counts` against a uniform
/// distribution over `categories` buckets.
pub fn chi_squared_uniform(counts: &BTreeMap<char, usize>, categories: usize) -> f64 {
    let total: usize = counts.values().sum();
    let expected = total as f64 / categories as f64;
    let observed: f64 = counts
        .values()
        .map(|&n| {
            let d = n as f64 - expected;
            d * d / expected
        })
        .sum();
    // Categories never drawn contribute `expected` each
    let missing = categories.saturating_sub(counts.len()) as f64;
    observed + missing * expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_counts() {
        let counts = char_counts(["aab", "b"]);
        assert_eq!(counts[&'a'], 2);
        assert_eq!(counts[&'b'], 2);
    }

    #[test]
    fn test_chi_squared_perfectly_uniform_is_zero() {
        let counts = char_counts(["abcd"]);
        assert_eq!(chi_squared_uniform(&counts, 4), 0.0);
    }

    #[test]
    fn test_chi_squared_counts_missing_categories() {
        let counts = char_counts(["aa"]);
        // expected = 1 per bucket: (2-1)^2/1 + 1 (missing 'b')
        assert_eq!(chi_squared_uniform(&counts, 2), 2.0);
    }
}
