use thiserror::Error;

/// Result type alias using ApiSurfError
pub type Result<T> = std::result::Result<T, ApiSurfError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and the CLI's error output. Kinds are split into
/// defects (the extractor was handed a model it cannot classify, or its own
/// bookkeeping broke) and ordinary input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidModel,
    InvalidConfig,

    // Defects
    InvariantViolation,
    DuplicateFeature,
    ScopeImbalance,
    UnknownType,
    InvalidReceiver,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidModel => "ERR_INVALID_MODEL",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::DuplicateFeature => "ERR_DUPLICATE_FEATURE",
            ExErrorKind::ScopeImbalance => "ERR_SCOPE_IMBALANCE",
            ExErrorKind::UnknownType => "ERR_UNKNOWN_TYPE",
            ExErrorKind::InvalidReceiver => "ERR_INVALID_RECEIVER",
            ExErrorKind::Io => "ERR_IO",
        }
    }

    /// Whether this kind denotes a defect rather than bad input
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvariantViolation
                | ExErrorKind::DuplicateFeature
                | ExErrorKind::ScopeImbalance
                | ExErrorKind::UnknownType
                | ExErrorKind::InvalidReceiver
        )
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    feature: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            feature: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add feature context
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(feature) = &self.feature {
            write!(f, " (feature: {})", feature)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for surface extraction and comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiSurfError {
    // ===== Feature Set Invariants =====
    /// The same feature line was emitted twice in one run
    #[error("duplicate feature inserted: {feature}")]
    DuplicateFeature { feature: String },

    /// A rendered feature spans more than one line
    #[error("feature contains newlines: {feature:?}")]
    FeatureContainsNewline { feature: String },

    // ===== Scope Invariants =====
    #[error("attempt to leave scope {label:?} with empty scope list")]
    ScopeUnderflow { label: String },

    #[error("attempt to leave scope {label:?}, but scope is currently {stack:?}")]
    ScopeMismatch { label: String, stack: Vec<String> },

    // ===== Canonicalizer Invariants =====
    #[error("should never see untyped nil type")]
    UntypedNil,

    #[error("should never see a tuple type")]
    TupleType,

    /// The last parameter of a variadic signature must be a slice
    #[error("variadic parameter is not a slice: {found}")]
    VariadicNotSlice { found: String },

    // ===== Declaration Invariants =====
    #[error("method considered a regular function: {name}")]
    FunctionWithReceiver { name: String },

    #[error("exported method with unexported receiver base type: ({receiver}) {method}")]
    UnexportedReceiverBase { receiver: String, method: String },

    #[error("method {method} has a receiver whose base is not a named type")]
    ReceiverNotNamed { method: String },

    // ===== Input Errors =====
    #[error("Invalid semantic model {path}: {reason}")]
    InvalidModel { path: String, reason: String },

    #[error("Invalid configuration {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    /// `op` names the store operation that touched `path`
    #[error("I/O error in {op} on {path}: {message}")]
    Io {
        op: String,
        path: String,
        message: String,
    },
}

impl ApiSurfError {
    /// Whether this error is a defect that must abort the run
    pub fn is_defect(&self) -> bool {
        ExError::from(self.clone()).kind().is_defect()
    }
}

impl From<ApiSurfError> for ExError {
    fn from(err: ApiSurfError) -> Self {
        match err {
            ApiSurfError::DuplicateFeature { feature } => {
                ExError::new(ExErrorKind::DuplicateFeature)
                    .with_op("emit")
                    .with_feature(feature)
                    .with_message("duplicate feature inserted")
            }
            ApiSurfError::FeatureContainsNewline { feature } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_op("emit")
                    .with_feature(feature)
                    .with_message("feature contains newlines")
            }
            ApiSurfError::ScopeUnderflow { label } => ExError::new(ExErrorKind::ScopeImbalance)
                .with_op("leave_scope")
                .with_message(format!(
                    "attempt to leave scope {:?} with empty scope list",
                    label
                )),
            ApiSurfError::ScopeMismatch { label, stack } => {
                ExError::new(ExErrorKind::ScopeImbalance)
                    .with_op("leave_scope")
                    .with_message(format!(
                        "attempt to leave scope {:?}, but scope is currently {:?}",
                        label, stack
                    ))
            }
            ApiSurfError::UntypedNil => ExError::new(ExErrorKind::UnknownType)
                .with_op("write_type")
                .with_message("should never see untyped nil type"),
            ApiSurfError::TupleType => ExError::new(ExErrorKind::UnknownType)
                .with_op("write_type")
                .with_message("should never see a tuple type"),
            ApiSurfError::VariadicNotSlice { found } => ExError::new(ExErrorKind::UnknownType)
                .with_op("write_params")
                .with_message(format!("variadic parameter is not a slice: {}", found)),
            ApiSurfError::FunctionWithReceiver { name } => {
                ExError::new(ExErrorKind::InvalidReceiver)
                    .with_op("emit_func")
                    .with_message(format!("method considered a regular function: {}", name))
            }
            ApiSurfError::UnexportedReceiverBase { receiver, method } => {
                ExError::new(ExErrorKind::InvalidReceiver)
                    .with_op("emit_method")
                    .with_message(format!(
                        "exported method with unexported receiver base type: ({}) {}",
                        receiver, method
                    ))
            }
            ApiSurfError::ReceiverNotNamed { method } => ExError::new(ExErrorKind::InvalidReceiver)
                .with_op("emit_method")
                .with_message(format!(
                    "method {} has a receiver whose base is not a named type",
                    method
                )),
            ApiSurfError::InvalidModel { path, reason } => {
                ExError::new(ExErrorKind::InvalidModel)
                    .with_op("load_program")
                    .with_path(path)
                    .with_message(reason)
            }
            ApiSurfError::InvalidConfig { path, reason } => {
                ExError::new(ExErrorKind::InvalidConfig)
                    .with_op("load_config")
                    .with_path(path)
                    .with_message(reason)
            }
            ApiSurfError::Io { op, path, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_path(path)
                .with_message(message),
        }
    }
}
