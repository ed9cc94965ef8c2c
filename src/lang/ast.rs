use super::LineNumber;
use std::rc::Rc;

pub type Ident = Rc<str>;

/// What follows the optional line number on an entered line.
#[derive(Debug, PartialEq)]
pub enum Body {
    Empty,
    Statement(Statement),
    Command(Command),
}

#[derive(Debug, PartialEq)]
pub enum Statement {
    Rem,
    Let(Ident, Expression),
    Print(Expression),
    Input(Ident),
    End,
    Goto(LineNumber),
    If(Expression, Comparison, Expression, LineNumber),
}

impl Statement {
    /// Statements that may be executed without a line number.
    pub fn is_immediate(&self) -> bool {
        use Statement::*;
        match self {
            Let(..) | Print(_) | Input(_) => true,
            Rem | End | Goto(_) | If(..) => false,
        }
    }
}

/// Commands act on the whole session and are never stored.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Run,
    List,
    Clear,
    Quit,
    Help,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Comparison {
    Less,
    Greater,
    Equal,
}

impl Comparison {
    pub fn from_char(ch: char) -> Option<Comparison> {
        match ch {
            '<' => Some(Comparison::Less),
            '>' => Some(Comparison::Greater),
            '=' => Some(Comparison::Equal),
            _ => None,
        }
    }

    pub fn test(self, lhs: i32, rhs: i32) -> bool {
        match self {
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
            Comparison::Equal => lhs == rhs,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn additive(ch: char) -> Option<Operator> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn multiplicative(ch: char) -> Option<Operator> {
        match ch {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Literal(i32),
    Variable(Ident),
    Group(Box<Expression>),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        Expression::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn group(expr: Expression) -> Expression {
        Expression::Group(Box::new(expr))
    }
}
