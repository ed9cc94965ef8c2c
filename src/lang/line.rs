use super::ast::*;
use super::parse::parse_line;
use super::{Error, LineNumber};

/// One entered line of source, classified.
#[derive(Debug, PartialEq)]
pub struct Line {
    number: Option<LineNumber>,
    source: String,
    body: Body,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let source = s.trim();
        let (number, body) = parse_line(source)?;
        Ok(Line {
            number,
            source: source.to_string(),
            body,
        })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.body == Body::Empty
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_parts(self) -> (Option<LineNumber>, String, Body) {
        (self.number, self.source, self.body)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
