//! Interactive terminal password generator.
//!
//! Asks for a length, a count and which character classes to use, then prints passwords
//! holding at least one character of every chosen class.

pub mod cli;
pub mod exits;
pub mod pass;
pub mod session;
pub mod settings;
pub mod terminal;

pub use session::Session;
pub use settings::GenerationConfig;
