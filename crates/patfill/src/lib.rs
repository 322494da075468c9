//! patfill Pattern Expander
//!
//! This crate turns short patterns into random strings:
//!
//! - `A` becomes a random uppercase letter
//! - `a` becomes a random lowercase letter
//! - `#` becomes a random digit
//! - any other character is copied through unchanged
//!
//! Custom tokens from [`ExpandOptions`](patfill_spec::ExpandOptions) extend or
//! replace the built-in ones for a single call.
//!
//! # Determinism
//!
//! [`expand`] draws from an entropy-seeded PCG32. Every other entry point is
//! reproducible: [`expand_seeded`] seeds PCG32 from a `u32`,
//! [`expand_with_rng`] takes any [`rand::Rng`], and [`expand_batch`] derives
//! one seed per item via BLAKE3.
//!
//! # Example
//!
//! ```
//! use patfill::{expand, expand_seeded, ExpandError};
//! use patfill_spec::ExpandOptions;
//!
//! let options = ExpandOptions::builder().token('H', "0123456789abcdef").build();
//!
//! let id = expand("HHHH-HHHH", &options)?;
//! assert_eq!(id.chars().count(), 9);
//!
//! let plate = expand_seeded("AAA ###", &ExpandOptions::default(), 42)?;
//! assert_eq!(plate, expand_seeded("AAA ###", &ExpandOptions::default(), 42)?);
//! # Ok::<(), ExpandError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`expand()`] - Main entry point
//! - [`expand::Expander`] - Validated token table for repeated use
//! - [`error`] - Expansion errors
//! - [`rng`] - Deterministic RNG construction

pub mod error;
pub mod expand;
pub mod rng;

// Re-export main types at crate root
pub use error::{ExpandError, ExpandResult};
pub use expand::{expand, expand_batch, expand_seeded, expand_with_rng, Expander};
pub use rng::create_rng;
