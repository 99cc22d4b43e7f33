use thiserror::Error;

/// Errors raised by the diagram core.
///
/// Most inputs are sanitized instead of rejected, only arguments that would
/// make a computation ill-defined end up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    #[error("Invalid argument `{name}`: {message}")]
    InvalidArgument { name: &'static str, message: String },
}

impl VoronoiError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        VoronoiError::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

pub type VoronoiResult<T> = Result<T, VoronoiError>;
