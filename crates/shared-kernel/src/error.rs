// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NumWordsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NumWordsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

impl NumWordsError {
    /// Innermost error below any number of `Context` layers.
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::Context { source, .. } = current {
            current = source;
        }
        current
    }

    pub fn domain(&self) -> Option<&DomainError> {
        match self.root_cause() {
            Self::Domain(err) => Some(err),
            _ => None,
        }
    }

    pub fn presentation(&self) -> Option<&PresentationError> {
        match self.root_cause() {
            Self::Presentation(err) => Some(err),
            _ => None,
        }
    }

    pub fn infrastructure(&self) -> Option<&InfrastructureError> {
        match self.root_cause() {
            Self::Infrastructure(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumWordsError>;

/// Errors raised while spelling a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{key}: missing in numbers dictionary")]
    MissingDigitWord { key: u32 },

    #[error("period level {level}: missing in number period dictionary")]
    PeriodIndexOutOfRange { level: usize },

    #[error("period level {level}: plural form {form_index} missing in number period dictionary")]
    PeriodFormMissing { level: usize, form_index: usize },

    #[error("Triplet value {value} is out of range 0..=999")]
    InvalidTriplet { value: u64 },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors from loading dictionaries and writing output.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Invalid dictionary '{path}': {reason}")]
    InvalidDictionary { path: PathBuf, reason: String },

    #[error("Unsupported dictionary format: '{path}'")]
    UnsupportedFormat { path: PathBuf },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Errors in how the program was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("should have one int64 parameter <number>, got {got}")]
    InvalidArgumentCount { got: usize },

    #[error("number should be int64: '{argument}': {reason}")]
    NotAnInteger { argument: String, reason: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for NumWordsError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for NumWordsError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for NumWordsError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NumWordsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NumWordsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NumWordsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
