//! Password generation.

use log::{debug, trace};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::Zeroize;

use super::charset::{CharClass, Charsets};
use crate::error::{PasswordError, Result};
use crate::rng;
use crate::settings::Options;

/// Upper bound on the buffer reserved up front; longer passwords grow it.
const PREALLOCATE_LIMIT: usize = 4096;

/// Generate a password of `length` characters using the thread-local RNG.
///
/// ```
/// use passgen::Options;
///
/// let password = passgen::generate(24, &Options {
///     minimum_lower_letters: 4,
///     minimum_upper_letters: 4,
///     minimum_digits: 4,
///     minimum_special_characters: 2,
///     ..Options::default()
/// })?;
/// assert_eq!(password.chars().count(), 24);
/// # Ok::<(), passgen::PasswordError>(())
/// ```
pub fn generate(length: i64, options: &Options) -> Result<String> {
    generate_with(&mut rng::source(), length, options)
}

/// Like [`generate`], but panics on any error.
///
/// Meant for call sites with hard-coded options where failure is a bug.
pub fn must_generate(length: i64, options: &Options) -> String {
    match generate(length, options) {
        Ok(password) => password,
        Err(e) => panic!("password generation failed: {e}"),
    }
}

/// Generate a password drawing every random choice from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: i64,
    options: &Options,
) -> Result<String> {
    let (length, mandatory) =
        validate(length, options).inspect_err(|e| debug!("rejected: {e}"))?;

    let sets = Charsets::new(options);
    trace!("special alphabet has {} characters", sets.get(CharClass::Special).len());

    let mut buf: Vec<char> = Vec::with_capacity(length.min(PREALLOCATE_LIMIT));

    for class in CharClass::ALL {
        let count = options.minimum(class) as usize;
        if !draw_into(rng, sets.get(class), count, &mut buf) {
            debug!("rejected: no characters left for {class:?}");
            buf.zeroize();
            return Err(PasswordError::EmptySpecialCharacters);
        }
    }

    if buf.len() < length {
        let chars = sets.combined(options);
        if !draw_into(rng, &chars, length - buf.len(), &mut buf) {
            debug!("rejected: {}", PasswordError::AllClassesDisabled);
            buf.zeroize();
            return Err(PasswordError::AllClassesDisabled);
        }
    }

    buf.shuffle(rng);
    let password: String = buf.iter().collect();
    buf.zeroize();

    debug!("generated password: length {length}, {mandatory} mandatory characters");
    Ok(password)
}

/// Append `count` characters drawn uniformly with replacement from `chars`.
///
/// Returns false when characters are needed but `chars` is empty.
fn draw_into<R: Rng + ?Sized>(
    rng: &mut R,
    chars: &[char],
    count: usize,
    buf: &mut Vec<char>,
) -> bool {
    for _ in 0..count {
        match chars.choose(rng) {
            Some(&c) => buf.push(c),
            None => return false,
        }
    }
    true
}

/// Check length and minimums in fill order, returning the length and the
/// total number of mandatory characters.
fn validate(length: i64, options: &Options) -> Result<(usize, usize)> {
    if length <= 0 {
        return Err(PasswordError::InvalidLength);
    }

    let mut total: Option<i64> = Some(0);
    for class in CharClass::ALL {
        let minimum = options.minimum(class);
        if minimum < 0 {
            return Err(PasswordError::invalid_minimum(class));
        }
        total = total.and_then(|t| t.checked_add(minimum));
    }

    // An overflowing sum is larger than any representable length.
    let total = match total {
        Some(total) if total <= length => total,
        _ => return Err(PasswordError::MinimumsExceedLength),
    };

    let length = usize::try_from(length).map_err(|_| PasswordError::InvalidLength)?;
    Ok((length, total as usize))
}
