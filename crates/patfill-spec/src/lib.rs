//! patfill Token and Options Library
//!
//! This crate provides the data model behind patfill pattern expansion:
//! token tables, per-call options, option validation, and seed derivation.
//! The expander itself lives in the `patfill` crate.
//!
//! # Overview
//!
//! A pattern such as `"AA-####"` is expanded by replacing each token
//! character with a random character from its alphabet. Three tokens are
//! built in:
//!
//! - `A` - uppercase Latin letters
//! - `a` - lowercase Latin letters
//! - `#` - decimal digits
//!
//! Options can add tokens or replace the built-in ones for a single call.
//!
//! # Example
//!
//! ```
//! use patfill_spec::{ExpandOptions, TokenTable};
//! use patfill_spec::validation::validate_options;
//!
//! let options = ExpandOptions::builder()
//!     .token('X', "0123456789ABCDEF")
//!     .build();
//!
//! let result = validate_options(&options);
//! assert!(result.is_ok());
//!
//! let table = TokenTable::merged(&options);
//! assert!(table.contains('X'));
//! assert!(table.contains('A'));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`options`]: Expansion options and builder
//! - [`token`]: Built-in alphabets and the merged token table
//! - [`validation`]: Option validation functions
//! - [`hash`]: Seed derivation for batch expansion

pub mod error;
pub mod hash;
pub mod options;
pub mod token;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, OptionsError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use hash::derive_item_seed;
pub use options::{ExpandOptions, ExpandOptionsBuilder};
pub use token::{TokenTable, DEFAULT_TOKENS, DIGITS, LOWERCASE, UPPERCASE};
pub use validation::{is_valid_token_key, token_char, validate_options};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Options loaded from JSON validate and merge like builder options.
    #[test]
    fn test_json_options_merge() {
        let json = r##"{
            "customTokens": {
                "X": "xyz",
                "#": "01"
            }
        }"##;

        let options = ExpandOptions::from_json(json).expect("should parse");
        let result = validate_options(&options);
        assert!(result.is_ok(), "errors: {:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::OverridesDefault);

        let table = TokenTable::merged(&options);
        assert_eq!(table.get('#'), Some(&['0', '1'][..]));
        assert_eq!(table.get('X'), Some(&['x', 'y', 'z'][..]));
        assert_eq!(table.get('A').map(<[char]>::len), Some(UPPERCASE.len()));
    }

    /// Validation error messages name the offending key.
    #[test]
    fn test_validation_error_messages() {
        let options = ExpandOptions::from_json(r#"{"custom_tokens": {"key": "abc"}}"#).unwrap();
        let errors = validate_options(&options).into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ErrorCode::InvalidTokenKey);
        assert!(errors[0].message.ends_with("got: key"));
    }
}
