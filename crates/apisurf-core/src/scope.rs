//! Scope stack used to prefix every emitted feature.
//!
//! A feature line is the joined stack (`pkg io, type Reader interface`)
//! followed by the description. Entering a scope hands back a
//! [`ScopeToken`] that must be returned to [`ScopeStack::leave`] in strict
//! LIFO order; anything else is a bookkeeping defect.

use crate::errors::{ApiSurfError, Result};

/// Separator between scope labels and before the description.
pub const SCOPE_SEPARATOR: &str = ", ";

#[derive(Debug, Default, Clone)]
pub struct ScopeStack {
    labels: Vec<String>,
}

/// Proof of an `enter`, consumed by the matching `leave`.
#[must_use = "a scope that is entered must be left"]
#[derive(Debug)]
pub struct ScopeToken {
    label: String,
}

impl ScopeToken {
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `label` and return the token that pops it.
    pub fn enter(&mut self, label: impl Into<String>) -> ScopeToken {
        let label = label.into();
        self.labels.push(label.clone());
        ScopeToken { label }
    }

    /// Pop the scope opened by `token`.
    ///
    /// # Errors
    ///
    /// - `ScopeUnderflow` if the stack is empty
    /// - `ScopeMismatch` if the top of the stack is not the token's label
    pub fn leave(&mut self, token: ScopeToken) -> Result<()> {
        match self.labels.last() {
            None => Err(ApiSurfError::ScopeUnderflow { label: token.label }),
            Some(top) if *top != token.label => Err(ApiSurfError::ScopeMismatch {
                label: token.label,
                stack: self.labels.clone(),
            }),
            Some(_) => {
                self.labels.pop();
                Ok(())
            }
        }
    }

    /// The current scope path, labels joined by [`SCOPE_SEPARATOR`].
    pub fn path(&self) -> String {
        self.labels.join(SCOPE_SEPARATOR)
    }

    /// Prefix `description` with the current scope path.
    pub fn qualify(&self, description: &str) -> String {
        format!("{}{}{}", self.path(), SCOPE_SEPARATOR, description)
    }

    pub fn depth(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_scopes_join_in_order() {
        let mut stack = ScopeStack::new();
        let pkg = stack.enter("pkg io");
        let ty = stack.enter("type Reader interface");
        assert_eq!(stack.path(), "pkg io, type Reader interface");
        assert_eq!(
            stack.qualify("Read([]uint8) (int, error)"),
            "pkg io, type Reader interface, Read([]uint8) (int, error)"
        );
        stack.leave(ty).unwrap();
        stack.leave(pkg).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_leave_out_of_order_is_mismatch() {
        let mut stack = ScopeStack::new();
        let outer = stack.enter("pkg x");
        let _inner = stack.enter("type T struct");
        let err = stack.leave(outer).unwrap_err();
        assert_eq!(
            err,
            ApiSurfError::ScopeMismatch {
                label: "pkg x".to_string(),
                stack: vec!["pkg x".to_string(), "type T struct".to_string()],
            }
        );
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_leave_on_empty_stack_is_underflow() {
        let mut stack = ScopeStack::new();
        let token = stack.enter("pkg x");
        let mut other = ScopeStack::new();
        let err = other.leave(token).unwrap_err();
        assert_eq!(
            err,
            ApiSurfError::ScopeUnderflow {
                label: "pkg x".to_string()
            }
        );
    }
}
