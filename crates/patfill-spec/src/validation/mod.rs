//! Option validation logic.


use std::collections::HashSet;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::options::ExpandOptions;
use crate::token::is_default_token;

/// Returns the token character if `key` is exactly one character (one
/// Unicode scalar value).
pub fn token_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}

/// Returns true if `key` is exactly one character (one Unicode scalar value).
pub fn is_valid_token_key(key: &str) -> bool {
    token_char(key).is_some()
}

/// Validates expansion options and returns a validation result.
///
/// Every custom token key must be exactly one character. Problems that only
/// matter once a token is used (an empty alphabet) or that skew sampling
/// (repeated characters) are reported as warnings.
///
/// # Arguments
/// * `options` - The options to validate
///
/// # Returns
/// * `ValidationResult` with `ok=true` if validation passed, with any warnings.
/// * `ValidationResult` with `ok=false` and errors if validation failed.
///
/// # Example
/// ```
/// use patfill_spec::ExpandOptions;
/// use patfill_spec::validation::validate_options;
///
/// let options = ExpandOptions::builder().token('X', "xyz").build();
/// assert!(validate_options(&options).is_ok());
///
/// let options = ExpandOptions::builder().raw_token("XY", "xyz").build();
/// assert!(!validate_options(&options).is_ok());
/// ```
pub fn validate_options(options: &ExpandOptions) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (key, alphabet) in &options.custom_tokens {
        let path = format!("custom_tokens.{}", key);

        match token_char(key) {
            Some(token) => validate_alphabet(token, alphabet, &path, &mut result),
            None => result.add_error(ValidationError::with_path(
                ErrorCode::InvalidTokenKey,
                format!("custom token key must be a single character, got: {}", key),
                path,
            )),
        }
    }

    result
}

fn validate_alphabet(token: char, alphabet: &str, path: &str, result: &mut ValidationResult) {
    if is_default_token(token) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OverridesDefault,
            format!("custom token '{}' replaces the built-in alphabet", token),
            path,
        ));
    }

    if alphabet.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::EmptyAlphabet,
            format!("token set for '{}' is empty; patterns using it will fail", token),
            path,
        ));
        return;
    }

    let mut seen = HashSet::new();
    let duplicates: String = alphabet.chars().filter(|c| !seen.insert(*c)).collect();
    if !duplicates.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::DuplicateAlphabetChars,
            format!(
                "token set for '{}' repeats characters '{}'; they will be drawn more often",
                token, duplicates
            ),
            path,
        ));
    }
}
