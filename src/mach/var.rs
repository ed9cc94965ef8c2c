use crate::error;
use crate::lang::{ast::Ident, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Ident, i32>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Variables spring into existence on first store; fetching one
    /// that was never stored is an error rather than zero.
    pub fn fetch(&self, var_name: &str) -> Result<i32> {
        match self.vars.get(var_name) {
            Some(val) => Ok(*val),
            None => Err(error!(VariableNotDefined)),
        }
    }

    pub fn store(&mut self, var_name: &Ident, value: i32) {
        match self.vars.get_mut(var_name) {
            Some(val) => *val = value,
            None => {
                self.vars.insert(var_name.clone(), value);
            }
        }
    }
}
