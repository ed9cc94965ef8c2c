use super::ast::*;
use super::*;


fn var(name: &str) -> Expression {
    Expression::Variable(name.into())
}

fn lit(n: i32) -> Expression {
    Expression::Literal(n)
}
