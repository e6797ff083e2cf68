use super::Error;

/// Error when a model yields no persistable columns.
///
/// This occurs when every field of the model driving a batch insert is
/// marked as ignored, leaving nothing to put in the column list.
#[derive(Debug)]
pub(super) struct EmptyColumns {
    model: Box<str>,
}

impl std::error::Error for EmptyColumns {}

impl core::fmt::Display for EmptyColumns {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` has no persistable columns", self.model)
    }
}

impl Error {
    /// Creates an empty columns error for the named model.
    pub fn empty_columns(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyColumns(EmptyColumns {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is an empty columns error.
    pub fn is_empty_columns(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyColumns(_))
    }
}
