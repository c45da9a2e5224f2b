//! Password generation options.

use crate::pass::charset::CharClass;

/// Composition rules for a generated password.
///
/// Build with struct-update syntax over the defaults:
///
/// ```
/// use passgen::Options;
///
/// let options = Options {
///     minimum_digits: 2,
///     disable_special_chars: true,
///     ..Options::default()
/// };
/// assert_eq!(options.minimum_lower_letters, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub disable_lower_letters: bool,
    pub minimum_lower_letters: i64,
    pub disable_upper_letters: bool,
    pub minimum_upper_letters: i64,
    pub disable_digits: bool,
    pub minimum_digits: i64,
    pub disable_special_chars: bool,
    pub minimum_special_characters: i64,
    /// Replaces the default special alphabet when non-empty.
    pub special_characters: String,
    /// Characters removed from the special alphabet, one by one.
    pub exclude_characters: String,
}

impl Options {
    /// Whether `class` contributes characters to the password.
    pub fn is_enabled(&self, class: CharClass) -> bool {
        !match class {
            CharClass::Lower => self.disable_lower_letters,
            CharClass::Upper => self.disable_upper_letters,
            CharClass::Digit => self.disable_digits,
            CharClass::Special => self.disable_special_chars,
        }
    }

    /// Requested minimum for `class`, 0 when the class is disabled.
    pub fn minimum(&self, class: CharClass) -> i64 {
        if !self.is_enabled(class) {
            return 0;
        }
        match class {
            CharClass::Lower => self.minimum_lower_letters,
            CharClass::Upper => self.minimum_upper_letters,
            CharClass::Digit => self.minimum_digits,
            CharClass::Special => self.minimum_special_characters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let options = Options::default();
        for class in CharClass::ALL {
            assert!(options.is_enabled(class));
            assert_eq!(options.minimum(class), 0);
        }
        assert!(options.special_characters.is_empty());
        assert!(options.exclude_characters.is_empty());
    }

    #[test]
    fn disabled_class_ignores_minimum() {
        let options = Options {
            disable_digits: true,
            minimum_digits: -5,
            minimum_upper_letters: 3,
            ..Options::default()
        };
        assert!(!options.is_enabled(CharClass::Digit));
        assert_eq!(options.minimum(CharClass::Digit), 0);
        assert_eq!(options.minimum(CharClass::Upper), 3);
    }
}
