use super::{Operation, Var};
use crate::lang::{ast::Expression, Error};

/// Evaluates an expression against the variables. The left operand is
/// always evaluated before the right.
pub fn eval(expr: &Expression, var: &Var) -> Result<i32, Error> {
    use Expression::*;
    match expr {
        Literal(n) => Ok(*n),
        Variable(name) => var.fetch(name),
        Group(expr) => eval(expr, var),
        Binary(op, lhs, rhs) => {
            let lhs = eval(lhs, var)?;
            let rhs = eval(rhs, var)?;
            Operation::binary(*op, lhs, rhs)
        }
    }
}
