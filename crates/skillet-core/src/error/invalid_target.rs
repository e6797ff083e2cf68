use super::Error;

/// Error when a batch target does not have the shape an operation requires.
///
/// This occurs when:
/// - A field accessor is asked for an index the model does not declare
/// - A field accessor is handed a value whose type does not match the field
#[derive(Debug)]
pub(super) struct InvalidTarget {
    message: Box<str>,
}

impl std::error::Error for InvalidTarget {}

impl core::fmt::Display for InvalidTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid batch target: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid target error.
    pub fn invalid_target(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidTarget(InvalidTarget {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid target error.
    pub fn is_invalid_target(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidTarget(_))
    }
}
