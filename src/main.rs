//! # BASIC
//!
//! A line-numbered integer BASIC.
//!

mod term;

fn main() {
    term::main()
}
