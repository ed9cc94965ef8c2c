/*!
## Rust Machine Module

This Rust module holds the program and variables of a session and
executes BASIC against them.

*/

mod eval;
mod listing;
mod operation;
mod runtime;
mod var;

pub use eval::eval;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::{HELP, PROMPT};
pub use var::Var;

#[cfg(test)]
mod tests;
