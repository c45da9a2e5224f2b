//! Random source.
//!
//! The default source is the thread-local generator from the `rand` crate.
//! Every thread owns its own state, so concurrent callers never contend on
//! a shared generator. Callers wanting reproducible output pass their own
//! [`rand::Rng`] to [`crate::generate_with`].

use rand::rngs::ThreadRng;

/// Handle to the calling thread's generator.
#[inline]
pub fn source() -> ThreadRng {
    rand::rng()
}
