use super::Error;

/// Error when a database driver operation fails.
///
/// This wraps errors from underlying database driver libraries when operations fail:
/// - Connection errors
/// - Statement execution errors
/// - Transaction operation errors (BEGIN, COMMIT, ROLLBACK)
/// - URL parsing errors for connection strings
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        write!(f, "driver operation failed: {}", self.inner)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver operation failure.
    ///
    /// This is the preferred way to convert driver-specific errors (rusqlite
    /// errors, URL parsing errors, etc.) into skillet errors.
    pub fn driver_operation_failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed { inner: err.into() },
        ))
    }

    /// Returns `true` if this error is a driver operation failure.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DriverOperationFailed(_))
    }
}
