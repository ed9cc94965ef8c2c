/*!
# Rust Language Module

This Rust module classifies lines of BASIC and parses their expressions.

*/

#[macro_use]
mod error;
mod ident;
mod line;
mod parse;
mod word;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::ident;
pub use line::Line;
pub use parse::parse_expression;
pub use word::Word;

pub mod ast;

/// Program lines are numbered 1 through `LineNumber::max_value()`.
pub type LineNumber = u32;

#[cfg(test)]
mod tests;
