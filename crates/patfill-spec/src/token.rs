//! Token tables: the mapping from token characters to their alphabets.

use std::collections::BTreeMap;

use crate::options::ExpandOptions;

/// Alphabet of the built-in `A` token.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Alphabet of the built-in `a` token.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Alphabet of the built-in `#` token.
pub const DIGITS: &str = "0123456789";

/// Built-in tokens, in the order they are documented.
pub const DEFAULT_TOKENS: [(char, &str); 3] = [('A', UPPERCASE), ('a', LOWERCASE), ('#', DIGITS)];

/// Returns true if `token` is one of the built-in tokens.
pub fn is_default_token(token: char) -> bool {
    DEFAULT_TOKENS.iter().any(|(t, _)| *t == token)
}

/// An effective token table.
///
/// Alphabets are stored as `Vec<char>` so sampling picks whole Unicode
/// scalar values. An alphabet may be empty; that is only an error once the
/// token is actually used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    entries: BTreeMap<char, Vec<char>>,
}

impl TokenTable {
    /// Creates a table with no tokens at all.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a table holding the built-in tokens.
    pub fn defaults() -> Self {
        DEFAULT_TOKENS
            .iter()
            .fold(Self::empty(), |table, (token, alphabet)| {
                table.with_token(*token, alphabet)
            })
    }

    /// Builds the effective table for `options`: defaults overlaid by the
    /// custom tokens.
    ///
    /// Keys that are not exactly one character are skipped; run
    /// [`validate_options`](crate::validation::validate_options) first to
    /// reject them.
    pub fn merged(options: &ExpandOptions) -> Self {
        options
            .token_overrides()
            .fold(Self::defaults(), |table, (token, alphabet)| {
                table.with_token(token, alphabet)
            })
    }

    /// Returns the table with `token` mapped to `alphabet`, replacing any
    /// previous entry.
    pub fn with_token(mut self, token: char, alphabet: &str) -> Self {
        self.entries.insert(token, alphabet.chars().collect());
        self
    }

    /// Returns the alphabet for `token`, if it is a token.
    pub fn get(&self, token: char) -> Option<&[char]> {
        self.entries.get(&token).map(Vec::as_slice)
    }

    /// Returns true if `token` is a key in the table.
    pub fn contains(&self, token: char) -> bool {
        self.entries.contains_key(&token)
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no tokens.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over token characters in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::defaults()
    }
}
