use crate::error;
use crate::lang::{ast::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic. Sums, differences, and products wrap at 32 bits;
/// division truncates toward zero.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Add => Ok(Operation::sum(lhs, rhs)),
            Subtract => Ok(Operation::subtract(lhs, rhs)),
            Multiply => Ok(Operation::multiply(lhs, rhs)),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivideByZero));
        }
        Ok(lhs.wrapping_div(rhs))
    }
}
