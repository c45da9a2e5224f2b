//! Password generation.

pub mod charset;
mod generate;

pub use generate::generate;
pub use generate::generate_with;
pub use generate::must_generate;
