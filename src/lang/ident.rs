use super::{ast::Ident, Error, Word};
use crate::error;

/// Validates a variable name: ASCII letters and digits only, with no
/// reserved word embedded anywhere.
pub fn ident(s: &str) -> Result<Ident, Error> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(error!(SyntaxError));
    }
    if Word::collides(s) {
        return Err(error!(SyntaxError));
    }
    Ok(Ident::from(s))
}
