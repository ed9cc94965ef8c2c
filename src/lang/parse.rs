use super::{ast::*, ident, Error, LineNumber, Word};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Splits a trimmed line into its optional line number and body.
pub fn parse_line(s: &str) -> Result<(Option<LineNumber>, Body)> {
    let (line_number, rest) = line_number(s)?;
    if rest.is_empty() {
        return Ok((line_number, Body::Empty));
    }
    let (word, operand) = match Word::starting(rest) {
        Some(found) => found,
        None => return Err(error!(SyntaxError)),
    };
    Ok((line_number, Body::for_word(word, operand)?))
}

/// Parses an integer expression of literals, variables, `+ - * /`,
/// and parenthetical groups.
pub fn parse_expression(s: &str) -> Result<Expression> {
    Expression::parse(Atom::group(s)?)
}

fn line_number(s: &str) -> Result<(Option<LineNumber>, &str)> {
    let len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or_else(|| s.len());
    if len == 0 {
        return Ok((None, s));
    }
    match s[..len].parse::<LineNumber>() {
        Ok(number) if number > 0 => Ok((Some(number), s[len..].trim_start())),
        _ => Err(error!(SyntaxError)),
    }
}

fn target(s: &str) -> Result<LineNumber> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(SyntaxError));
    }
    s.parse().map_err(|_| error!(SyntaxError))
}

impl Body {
    fn for_word(word: Word, operand: &str) -> Result<Body> {
        use Word::*;
        match word {
            Rem => Ok(Body::Statement(Statement::Rem)),
            Let => Ok(Body::Statement(Statement::r#let(operand)?)),
            Print => Ok(Body::Statement(Statement::Print(parse_expression(operand)?))),
            Input => Ok(Body::Statement(Statement::Input(ident(operand)?))),
            End => Self::bare(operand, Body::Statement(Statement::End)),
            Goto => Ok(Body::Statement(Statement::Goto(target(operand)?))),
            If => Ok(Body::Statement(Statement::r#if(operand)?)),
            Run => Self::bare(operand, Body::Command(Command::Run)),
            List => Self::bare(operand, Body::Command(Command::List)),
            Clear => Self::bare(operand, Body::Command(Command::Clear)),
            Quit => Self::bare(operand, Body::Command(Command::Quit)),
            Help => Self::bare(operand, Body::Command(Command::Help)),
            Then => Err(error!(SyntaxError)),
        }
    }

    fn bare(operand: &str, body: Body) -> Result<Body> {
        if operand.is_empty() {
            Ok(body)
        } else {
            Err(error!(SyntaxError))
        }
    }
}

impl Statement {
    fn r#let(operand: &str) -> Result<Statement> {
        let eq = match operand.find('=') {
            Some(eq) => eq,
            None => return Err(error!(SyntaxError)),
        };
        let name = ident(operand[..eq].trim())?;
        let expr = parse_expression(&operand[eq + 1..])?;
        Ok(Statement::Let(name, expr))
    }

    fn r#if(operand: &str) -> Result<Statement> {
        let then = match operand.rfind(Word::Then.as_str()) {
            Some(then) => then,
            None => return Err(error!(SyntaxError)),
        };
        let line = target(operand[then + Word::Then.as_str().len()..].trim())?;
        let condition = &operand[..then];
        let mut comparisons = condition
            .char_indices()
            .filter_map(|(i, ch)| Comparison::from_char(ch).map(|cmp| (i, cmp)));
        let (at, cmp) = match (comparisons.next(), comparisons.next()) {
            (Some(found), None) => found,
            _ => return Err(error!(SyntaxError)),
        };
        let lhs = parse_expression(&condition[..at])?;
        let rhs = parse_expression(&condition[at + 1..])?;
        Ok(Statement::If(lhs, cmp, rhs, line))
    }
}

/// One unit of expression text. Parenthetical groups are parsed first and
/// stand in as a single atom so the operator split never looks inside them.
enum Atom {
    Char(char),
    Group(Expression),
}

impl Atom {
    fn group(s: &str) -> Result<Vec<Atom>> {
        let mut atoms: Vec<Atom> = vec![];
        let mut depth = 0;
        let mut start = 0;
        for (i, ch) in s.char_indices() {
            match ch {
                '(' => {
                    if depth == 0 {
                        start = i + 1;
                    }
                    depth += 1;
                }
                ')' => {
                    if depth == 0 {
                        return Err(error!(SyntaxError));
                    }
                    depth -= 1;
                    if depth == 0 {
                        atoms.push(Atom::Group(parse_expression(&s[start..i])?));
                    }
                }
                _ if depth == 0 => atoms.push(Atom::Char(ch)),
                _ => {}
            }
        }
        if depth > 0 {
            return Err(error!(SyntaxError));
        }
        Ok(atoms)
    }

    fn is_whitespace(&self) -> bool {
        matches!(self, Atom::Char(ch) if ch.is_whitespace())
    }
}

impl Expression {
    fn parse(mut atoms: Vec<Atom>) -> Result<Expression> {
        while atoms.last().map_or(false, Atom::is_whitespace) {
            atoms.pop();
        }
        while atoms.first().map_or(false, Atom::is_whitespace) {
            atoms.remove(0);
        }

        if let Some(text) = Self::text(&atoms) {
            if text.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Self::for_text(&text);
            }
        }
        if atoms.len() == 1 {
            if let Some(Atom::Group(expr)) = atoms.pop() {
                return Ok(Expression::group(expr));
            }
        }
        if let Some(split) = Self::split(&atoms, Operator::additive) {
            return Self::for_split(atoms, split);
        }
        if let Some(split) = Self::split(&atoms, Operator::multiplicative) {
            return Self::for_split(atoms, split);
        }
        Err(error!(SyntaxError))
    }

    /// The atoms as plain text, when no group is among them.
    fn text(atoms: &[Atom]) -> Option<String> {
        atoms
            .iter()
            .map(|atom| match atom {
                Atom::Char(ch) => Some(*ch),
                Atom::Group(_) => None,
            })
            .collect()
    }

    fn for_text(text: &str) -> Result<Expression> {
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            return match text.parse() {
                Ok(n) => Ok(Expression::Literal(n)),
                Err(_) => Err(error!(SyntaxError)),
            };
        }
        Ok(Expression::Variable(ident(text)?))
    }

    // Splitting at the rightmost operator makes operators of equal
    // precedence associate to the left.
    fn split(atoms: &[Atom], class: fn(char) -> Option<Operator>) -> Option<(usize, Operator)> {
        atoms.iter().enumerate().rev().find_map(|(i, atom)| match atom {
            Atom::Char(ch) => class(*ch).map(|op| (i, op)),
            Atom::Group(_) => None,
        })
    }

    fn for_split(mut atoms: Vec<Atom>, (at, op): (usize, Operator)) -> Result<Expression> {
        let rhs = atoms.split_off(at + 1);
        atoms.pop();
        let lhs = Self::parse(atoms)?;
        let rhs = Self::parse(rhs)?;
        Ok(Expression::binary(op, lhs, rhs))
    }
}
