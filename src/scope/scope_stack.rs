use std::collections::HashMap;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

/// Bindings of a single lexical block.
#[derive(Debug)]
pub struct Environment<V> {
    pub variable_lookup: HashMap<String, V>,
}

impl<V> Environment<V> {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&V> {
        self.variable_lookup.get(variable_name)
    }
}

impl<V> Default for Environment<V> {
    fn default() -> Self {
        Environment::new()
    }
}

/// Stack of environments, innermost last.
///
/// Each pass builds its own stack, nothing is shared between runs.
#[derive(Debug)]
pub struct ScopeStack<V> {
    environments: Vec<Environment<V>>,
}

impl<V> ScopeStack<V> {
    pub fn new() -> Self {
        ScopeStack {
            environments: vec![],
        }
    }

    pub fn enter_scope(&mut self) {
        self.environments.push(Environment::new());
        tracing::debug!(depth = self.environments.len(), "entered scope");
    }

    pub fn exit_scope(&mut self) -> Result<(), Error> {
        match self.environments.pop() {
            Some(_) => {
                tracing::debug!(depth = self.environments.len(), "exited scope");
                Ok(())
            }
            None => Err(Error::new(ErrorImpl::ScopeUnderflow, Position::null())),
        }
    }

    /// Binds `name` in the innermost environment, replacing an earlier binding there.
    pub fn define(&mut self, name: &str, value: V) -> Result<(), Error> {
        match self.environments.last_mut() {
            Some(environment) => {
                environment.variable_lookup.insert(String::from(name), value);
                Ok(())
            }
            None => Err(Error::new(ErrorImpl::ScopeUnderflow, Position::null())),
        }
    }

    /// Looks `name` up from the innermost environment outwards.
    pub fn resolve(&self, name: &str) -> Option<&V> {
        self.environments
            .iter()
            .rev()
            .find_map(|environment| environment.get_variable(name))
    }

    pub fn depth(&self) -> usize {
        self.environments.len()
    }
}

impl<V> Default for ScopeStack<V> {
    fn default() -> Self {
        ScopeStack::new()
    }
}
