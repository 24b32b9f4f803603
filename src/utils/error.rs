use thiserror::Error;

#[derive(Error, Debug)]
pub enum NullableError {
    #[error("cannot scan {source_type} into {target_type}: {reason}")]
    TypeMismatch {
        source_type: &'static str,
        target_type: &'static str,
        reason: String,
    },

    #[error("failed to decode nullable value: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode nullable value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NullableError {
    pub(crate) fn mismatch<T>(source_type: &'static str, reason: impl Into<String>) -> Self {
        NullableError::TypeMismatch {
            source_type,
            target_type: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }

    /// True for failures raised by one of the container's boundary protocols.
    pub fn is_boundary_error(&self) -> bool {
        matches!(
            self,
            NullableError::TypeMismatch { .. } | NullableError::Decode(_) | NullableError::Encode(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NullableError>;
