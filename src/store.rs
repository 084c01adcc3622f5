//! Session variable store.
//!
//! One flat pool of variables lives for the whole session. Names are
//! case-sensitive and entries are never removed, only overwritten.

use std::collections::HashMap;

use num_bigint::BigInt;

use crate::error::{CalcDiagnostic, CalcError, CalcResult};

/// Identifier → value bindings for a session.
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: HashMap<String, BigInt>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Look up a variable. Unbound names are an error.
    pub fn get(&self, name: &str) -> CalcResult<&BigInt> {
        self.vars.get(name).ok_or_else(|| unknown(name))
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: BigInt) {
        self.vars.insert(name.to_string(), value);
    }

    /// Copy the current value of `source` into `name`.
    ///
    /// Leaves the store untouched if `source` is unbound.
    pub fn set_from_variable(&mut self, name: &str, source: &str) -> CalcResult<()> {
        let value = self.get(source)?.clone();
        self.set(name, value);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn unknown(name: &str) -> CalcDiagnostic {
    CalcDiagnostic::new(CalcError::UnknownVariable).with_detail(format!("'{name}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_unknown() {
        let store = VariableStore::new();
        let err = store.get("foo").unwrap_err();
        assert_eq!(err.error, CalcError::UnknownVariable);
    }

    #[test]
    fn set_and_get() {
        let mut store = VariableStore::new();
        store.set("a", BigInt::from(5));
        assert_eq!(store.get("a").unwrap(), &BigInt::from(5));
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        let mut store = VariableStore::new();
        store.set("n", BigInt::from(1));
        store.set("n", BigInt::from(2));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("n").unwrap(), &BigInt::from(2));
    }

    #[test]
    fn case_sensitive() {
        let mut store = VariableStore::new();
        store.set("Name", BigInt::from(7));
        assert!(store.contains("Name"));
        assert!(!store.contains("name"));
    }

    #[test]
    fn copy_from_variable() {
        let mut store = VariableStore::new();
        store.set("a", BigInt::from(42));
        store.set_from_variable("b", "a").unwrap();
        assert_eq!(store.get("b").unwrap(), &BigInt::from(42));

        // the copy is independent of later changes to the source
        store.set("a", BigInt::from(1));
        assert_eq!(store.get("b").unwrap(), &BigInt::from(42));
    }

    #[test]
    fn copy_from_unknown_leaves_store_unchanged() {
        let mut store = VariableStore::new();
        store.set("b", BigInt::from(3));
        let err = store.set_from_variable("b", "missing").unwrap_err();
        assert_eq!(err.error, CalcError::UnknownVariable);
        assert_eq!(store.get("b").unwrap(), &BigInt::from(3));
    }
}
