use thiserror::Error;

/// The result type for the `rexgen` crate.
pub type Result<T> = std::result::Result<T, RexgenError>;

/// The error type for the `rexgen` crate.
#[derive(Error, Debug)]
pub struct RexgenError {
    /// The source of the error.
    pub source: Box<RexgenErrorKind>,
}

impl RexgenError {
    /// Create a new `RexgenError`.
    pub fn new(kind: RexgenErrorKind) -> Self {
        RexgenError {
            source: Box::new(kind),
        }
    }
}

impl std::fmt::Display for RexgenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum RexgenErrorKind {
    /// The removed two-part rule declaration form was used. It is rejected
    /// unconditionally and never migrated to the current form.
    #[error("Two-part rule declarations are not supported: {0}")]
    UnsupportedRuleForm(String),

    /// No scanner name was set on the model before compilation.
    #[error("The scanner model has no scanner name")]
    MissingScannerName,

    /// A rule references a state that was never declared on the model.
    #[error("Rule references undeclared state '{0}'")]
    UndeclaredState(String),

    /// An option name outside the recognized set was given.
    #[error("Unknown generator option '{0}'")]
    UnknownOption(String),

    /// A std::io error occurred.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// The emitted source text failed to parse as Rust.
    #[error("Generated code is not valid Rust: {0}")]
    InvalidGeneratedCode(syn::Error),
}

impl From<std::io::Error> for RexgenError {
    fn from(error: std::io::Error) -> Self {
        RexgenError::new(RexgenErrorKind::IoError(error))
    }
}

impl From<syn::Error> for RexgenError {
    fn from(error: syn::Error) -> Self {
        RexgenError::new(RexgenErrorKind::InvalidGeneratedCode(error))
    }
}
