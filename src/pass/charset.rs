//! Character set building for password generation.

use std::collections::HashSet;

use crate::settings::Options;

pub const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four character categories a password is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharClass {
    /// Fill order used for minimums and for the combined alphabet.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Digit,
        CharClass::Special,
    ];
}

/// Alphabets resolved for a single generation call.
#[derive(Debug, Clone)]
pub struct Charsets {
    lower: Vec<char>,
    upper: Vec<char>,
    digits: Vec<char>,
    special: Vec<char>,
}

impl Charsets {
    pub fn new(options: &Options) -> Self {
        Self {
            lower: LOWER_LETTERS.chars().collect(),
            upper: UPPER_LETTERS.chars().collect(),
            digits: DIGITS.chars().collect(),
            special: special(options),
        }
    }

    pub fn get(&self, class: CharClass) -> &[char] {
        match class {
            CharClass::Lower => &self.lower,
            CharClass::Upper => &self.upper,
            CharClass::Digit => &self.digits,
            CharClass::Special => &self.special,
        }
    }

    /// Concatenate the alphabets of every enabled class.
    pub fn combined(&self, options: &Options) -> Vec<char> {
        let mut chars: Vec<char> = Vec::new();

        for class in CharClass::ALL {
            if options.is_enabled(class) {
                chars.extend(self.get(class));
            }
        }

        chars
    }
}

/// Build the special alphabet: the override if given, else the default,
/// minus every excluded character.
pub fn special(options: &Options) -> Vec<char> {
    let base = if options.special_characters.is_empty() {
        SPECIAL_CHARACTERS
    } else {
        options.special_characters.as_str()
    };

    let excluded: HashSet<char> = options.exclude_characters.chars().collect();
    base.chars().filter(|c| !excluded.contains(c)).collect()
}
