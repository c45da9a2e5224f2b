//! Generation errors.

use thiserror::Error;

use crate::pass::charset::CharClass;

/// Reasons a password cannot be generated for a given length and options.
///
/// Every variant is terminal: the same input always fails the same way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("the requested password length needs to be larger than 0")]
    InvalidLength,

    #[error("the minimum lower letters should be a positive number")]
    InvalidMinimumLowerLetters,

    #[error("the minimum upper letters should be a positive number")]
    InvalidMinimumUpperLetters,

    #[error("the minimum digits should be a positive number")]
    InvalidMinimumDigits,

    #[error("the minimum special characters should be a positive number")]
    InvalidMinimumSpecialCharacters,

    #[error("the minimum values are in sum larger than the requested length")]
    MinimumsExceedLength,

    #[error("you should not disable all character types")]
    AllClassesDisabled,

    #[error("special characters are required but every one of them was excluded")]
    EmptySpecialCharacters,
}

impl PasswordError {
    /// The negative-minimum error for `class`.
    pub fn invalid_minimum(class: CharClass) -> Self {
        match class {
            CharClass::Lower => Self::InvalidMinimumLowerLetters,
            CharClass::Upper => Self::InvalidMinimumUpperLetters,
            CharClass::Digit => Self::InvalidMinimumDigits,
            CharClass::Special => Self::InvalidMinimumSpecialCharacters,
        }
    }
}

pub type Result<T> = std::result::Result<T, PasswordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_minimum_maps_each_class() {
        let errors: Vec<_> = CharClass::ALL
            .iter()
            .map(|&c| PasswordError::invalid_minimum(c))
            .collect();
        assert_eq!(
            errors,
            vec![
                PasswordError::InvalidMinimumLowerLetters,
                PasswordError::InvalidMinimumUpperLetters,
                PasswordError::InvalidMinimumDigits,
                PasswordError::InvalidMinimumSpecialCharacters,
            ]
        );
    }

    #[test]
    fn messages_are_distinct() {
        let all = [
            PasswordError::InvalidLength,
            PasswordError::InvalidMinimumLowerLetters,
            PasswordError::InvalidMinimumUpperLetters,
            PasswordError::InvalidMinimumDigits,
            PasswordError::InvalidMinimumSpecialCharacters,
            PasswordError::MinimumsExceedLength,
            PasswordError::AllClassesDisabled,
            PasswordError::EmptySpecialCharacters,
        ];
        let mut messages: Vec<String> = all.iter().map(|e| e.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }
}
