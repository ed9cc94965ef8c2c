use crate::lang::{parse_expression, ErrorCode};
use crate::mach::{eval, Var};

fn eval_str(s: &str, var: &Var) -> Result<i32, ErrorCode> {
    let expr = parse_expression(s).map_err(|e| e.code())?;
    eval(&expr, var).map_err(|e| e.code())
}

#[test]
fn test_literal() {
    let var = Var::new();
    for n in &[0, 1, 42, 65535, i32::MAX] {
        assert_eq!(eval_str(&n.to_string(), &var), Ok(*n));
    }
}

#[test]
fn test_precedence() {
    let var = Var::new();
    assert_eq!(eval_str("1+2*3", &var), Ok(7));
    assert_eq!(eval_str("(1+2)*3", &var), Ok(9));
    assert_eq!(eval_str("10-3-2", &var), Ok(5));
    assert_eq!(eval_str("100/10/5", &var), Ok(2));
    assert_eq!(eval_str("2*(3+(4-1))/4", &var), Ok(3));
}

#[test]
fn test_divide() {
    let var = Var::new();
    assert_eq!(eval_str("(7)/(2)", &var), Ok(3));
    assert_eq!(eval_str("(0-7)/(2)", &var), Ok(-3));
    assert_eq!(eval_str("(5)/(3-3)", &var), Err(ErrorCode::DivideByZero));
}

#[test]
fn test_variables() {
    let mut var = Var::new();
    var.store(&"X".into(), 6);
    assert_eq!(eval_str("X*X-X", &var), Ok(30));
    assert_eq!(eval_str("X+Y", &var), Err(ErrorCode::VariableNotDefined));
}

#[test]
fn test_left_operand_first() {
    let var = Var::new();
    assert_eq!(eval_str("A/0", &var), Err(ErrorCode::VariableNotDefined));
    assert_eq!(eval_str("1/0+A", &var), Err(ErrorCode::DivideByZero));
}
