use super::Error;

/// Error when a batch insert is requested for zero records.
///
/// The batch pipeline refuses to build a multi-row `INSERT` from an empty
/// collection; no SQL is generated and nothing is executed.
#[derive(Debug)]
pub(super) struct EmptyBatch;

impl std::error::Error for EmptyBatch {}

impl core::fmt::Display for EmptyBatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("cannot batch create an empty collection")
    }
}

impl Error {
    /// Creates an empty batch error.
    pub fn empty_batch() -> Error {
        Error::from(super::ErrorKind::EmptyBatch(EmptyBatch))
    }

    /// Returns `true` if this error is an empty batch error.
    pub fn is_empty_batch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyBatch(_))
    }
}
