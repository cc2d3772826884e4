//! Password generation.

pub mod charset;
mod generate;

pub use charset::{CharClass, Selection};
pub use generate::{generate, generate_from};
