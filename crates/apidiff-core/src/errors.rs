use thiserror::Error;

/// Result type alias using the canonical error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests, any
/// embedding report writer) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Snapshot bytes are not UTF-8 JSON, or the root is not an object
    InvalidSnapshot,
    /// A required snapshot field (the top-level `items` list) is absent
    MissingField,
    /// Report configuration could not be parsed
    InvalidConfig,
    /// Diff output could not be serialized
    Serialization,
    /// Reading or writing a file failed
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for humans: the operation that failed, the entity involved, and a
/// free-form message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a file path, a class name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
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

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised while loading snapshots and report configuration
///
/// Nothing inside the diff algorithms returns these: "added", "removed" and
/// "no change" are ordinary values there. Only the input boundary fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiDiffError {
    /// Snapshot bytes are not valid UTF-8
    #[error("snapshot is not valid UTF-8: {reason}")]
    SnapshotNotUtf8 { reason: String },

    /// Snapshot text is not valid JSON
    #[error("snapshot is not valid JSON: {reason}")]
    SnapshotNotJson { reason: String },

    /// Snapshot JSON root is not an object
    #[error("snapshot JSON root must be an object")]
    SnapshotNotObject,

    /// Snapshot document has no top-level `items` list
    #[error("required field `items` is absent")]
    MissingItems,

    /// Report configuration is not valid TOML or has unknown keys
    #[error("invalid report configuration: {reason}")]
    ConfigParse { reason: String },

    /// File system failure at the I/O boundary
    #[error("I/O failure on {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Conversion from ApiDiffError to ExError
impl From<ApiDiffError> for ExError {
    fn from(err: ApiDiffError) -> Self {
        let message = err.to_string();
        match err {
            ApiDiffError::SnapshotNotUtf8 { .. }
            | ApiDiffError::SnapshotNotJson { .. }
            | ApiDiffError::SnapshotNotObject => {
                ExError::new(ExErrorKind::InvalidSnapshot).with_message(message)
            }

            ApiDiffError::MissingItems => ExError::new(ExErrorKind::MissingField)
                .with_entity_id("items")
                .with_message(message),

            ApiDiffError::ConfigParse { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            ApiDiffError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_entity_id(path)
                .with_message(message),
        }
    }
}

/// Conversion from serde_json::Error, used when serializing a finished diff
impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Serialization).with_message(err.to_string())
    }
}
