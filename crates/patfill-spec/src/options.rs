//! Expansion options and their builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::validation::token_char;

/// Per-call expansion options.
///
/// `custom_tokens` maps a token to its alphabet and is overlaid on the
/// built-in tokens. Keys are kept as strings so that malformed keys coming
/// from JSON survive until validation reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpandOptions {
    /// Token overrides and additions.
    #[serde(default, alias = "customTokens", skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_tokens: BTreeMap<String, String>,
}

impl ExpandOptions {
    /// Creates a new builder.
    pub fn builder() -> ExpandOptionsBuilder {
        ExpandOptionsBuilder::new()
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses options from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, OptionsError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serializes options to a JSON string.
    pub fn to_json(&self) -> Result<String, OptionsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Returns true if no custom tokens are set.
    pub fn is_empty(&self) -> bool {
        self.custom_tokens.is_empty()
    }

    /// Iterates over overrides whose key is exactly one character.
    pub fn token_overrides(&self) -> impl Iterator<Item = (char, &str)> {
        self.custom_tokens
            .iter()
            .filter_map(|(key, alphabet)| token_char(key).map(|token| (token, alphabet.as_str())))
    }
}

/// Builder for [`ExpandOptions`].
#[derive(Debug, Clone, Default)]
pub struct ExpandOptionsBuilder {
    custom_tokens: BTreeMap<String, String>,
}

impl ExpandOptionsBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `token` to `alphabet`.
    pub fn token(mut self, token: char, alphabet: impl Into<String>) -> Self {
        self.custom_tokens.insert(token.to_string(), alphabet.into());
        self
    }

    /// Maps an arbitrary string key to `alphabet`. The key is checked at
    /// validation time, not here.
    pub fn raw_token(mut self, key: impl Into<String>, alphabet: impl Into<String>) -> Self {
        self.custom_tokens.insert(key.into(), alphabet.into());
        self
    }

    /// Builds the options.
    pub fn build(self) -> ExpandOptions {
        ExpandOptions {
            custom_tokens: self.custom_tokens,
        }
    }
}
