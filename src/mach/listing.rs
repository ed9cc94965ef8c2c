use crate::error;
use crate::lang::{ast::Statement, Error, LineNumber};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

type Result<T> = std::result::Result<T, Error>;

/// The stored program, ordered by line number.
#[derive(Debug, Default)]
pub struct Listing {
    source: BTreeMap<LineNumber, Entry>,
}

#[derive(Debug)]
struct Entry {
    source: String,
    statement: Statement,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Files a statement under its line number, replacing any statement
    /// already there. Returns true if one was replaced.
    pub fn insert(&mut self, ln: LineNumber, source: String, statement: Statement) -> bool {
        log::trace!("store line {}", ln);
        self.source
            .insert(ln, Entry { source, statement })
            .is_some()
    }

    /// Returns true if the line existed.
    pub fn remove(&mut self, ln: LineNumber) -> bool {
        log::trace!("delete line {}", ln);
        self.source.remove(&ln).is_some()
    }

    pub fn contains(&self, ln: LineNumber) -> bool {
        self.source.contains_key(&ln)
    }

    pub fn statement(&self, ln: LineNumber) -> Result<&Statement> {
        match self.source.get(&ln) {
            Some(entry) => Ok(&entry.statement),
            None => Err(error!(LineNumberError)),
        }
    }

    /// The source text as it was entered.
    pub fn line(&self, ln: LineNumber) -> Option<&str> {
        self.source.get(&ln).map(|entry| entry.source.as_str())
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.source.keys().next().copied()
    }

    /// The next stored line after `ln`, which need not be stored itself.
    pub fn successor(&self, ln: LineNumber) -> Option<LineNumber> {
        self.source
            .range((Excluded(ln), Unbounded))
            .next()
            .map(|(&ln, _)| ln)
    }

    /// The first stored line at or after `ln`.
    pub fn list_line(&self, ln: LineNumber) -> Option<(LineNumber, &str)> {
        self.source
            .range(ln..)
            .next()
            .map(|(&ln, entry)| (ln, entry.source.as_str()))
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineNumber, &str)> {
        self.source
            .iter()
            .map(|(&ln, entry)| (ln, entry.source.as_str()))
    }
}
