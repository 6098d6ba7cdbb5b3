//! Mutable state threaded through one extraction run.

use super::feature_set::FeatureSet;
use crate::errors::{ApiSurfError, Result};
use crate::scope::ScopeStack;

#[derive(Debug, Default)]
pub struct ExtractionContext {
    scope: ScopeStack,
    features: FeatureSet,
    verbose: bool,
}

impl ExtractionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log every emitted feature at debug level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Record `description` under the current scope path.
    ///
    /// # Errors
    ///
    /// `FeatureContainsNewline` or `DuplicateFeature`.
    pub fn emit(&mut self, description: &str) -> Result<()> {
        let feature = self.scope.qualify(description);
        if feature.contains('\n') {
            return Err(ApiSurfError::FeatureContainsNewline { feature });
        }
        if self.verbose {
            tracing::debug!(feature = %feature, "emit");
        }
        self.features.insert(feature)
    }

    /// Run `body` inside the scope `label`. The scope is left on every exit
    /// path; an error from `body` takes precedence over an imbalance.
    pub fn in_scope<T>(
        &mut self,
        label: impl Into<String>,
        body: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let token = self.scope.enter(label);
        let result = body(self);
        let left = self.scope.leave(token);
        let value = result?;
        left?;
        Ok(value)
    }

    pub fn scope(&self) -> &ScopeStack {
        &self.scope
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn into_features(self) -> FeatureSet {
        self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_prefixes_scope() {
        let mut ctx = ExtractionContext::new();
        ctx.in_scope("pkg x", |ctx| ctx.emit("func F()")).unwrap();
        assert!(ctx.features().contains("pkg x, func F()"));
        assert!(ctx.scope().is_empty());
    }

    #[test]
    fn test_scope_is_left_on_error() {
        let mut ctx = ExtractionContext::new();
        let err = ctx
            .in_scope("pkg x", |ctx| {
                ctx.emit("func F()")?;
                ctx.emit("func F()")
            })
            .unwrap_err();
        assert!(matches!(err, ApiSurfError::DuplicateFeature { .. }));
        assert!(ctx.scope().is_empty());
    }

    #[test]
    fn test_newline_in_feature_is_rejected() {
        let mut ctx = ExtractionContext::new();
        let err = ctx
            .in_scope("pkg x", |ctx| ctx.emit("const S = a\nb"))
            .unwrap_err();
        assert_eq!(
            err,
            ApiSurfError::FeatureContainsNewline {
                feature: "pkg x, const S = a\nb".to_string()
            }
        );
        assert!(ctx.features().is_empty());
    }
}
