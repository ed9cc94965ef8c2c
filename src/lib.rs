//! # Line BASIC
//!
//! A small BASIC of numbered lines and whole numbers.
//!
//! Lines without a line number run immediately; lines with one are kept as
//! a program for `RUN`. Expressions have `+ - * /` with the usual
//! precedence and parentheses. Control flow is `GOTO` and `IF ... THEN`.
//!
//! ```text
//! 10 LET X = 0
//! 20 IF X = 0 THEN 40
//! 30 PRINT 999
//! 40 PRINT X
//! 50 END
//! RUN
//! 0
//! ```
//!
//! Run the `basic` executable for an interactive session, or give it a
//! file of lines to execute.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
