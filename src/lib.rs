//! Random password generation with per-class composition rules.
//!
//! A password is built from four character classes: lowercase letters,
//! uppercase letters, digits and special characters. Each class can be
//! disabled or given a minimum count; the special alphabet can be replaced
//! and individual characters excluded from it.
//!
//! ```
//! use passgen::{Options, PasswordError};
//!
//! let password = passgen::generate(16, &Options {
//!     minimum_digits: 2,
//!     special_characters: "-_".into(),
//!     ..Options::default()
//! })?;
//! assert_eq!(password.len(), 16);
//!
//! assert_eq!(
//!     passgen::generate(0, &Options::default()),
//!     Err(PasswordError::InvalidLength),
//! );
//! # Ok::<(), PasswordError>(())
//! ```

mod error;
mod pass;
mod rng;
mod settings;

pub use error::{PasswordError, Result};
pub use pass::charset::{CharClass, DIGITS, LOWER_LETTERS, SPECIAL_CHARACTERS, UPPER_LETTERS};
pub use pass::{generate, generate_with, must_generate};
pub use settings::Options;
