use crate::{stmt, Result};

/// SQL dialect spoken by a connection.
///
/// Drives identifier quoting and placeholder syntax when statements are
/// serialized for the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
}

/// A synchronous database connection.
///
/// The batch pipeline blocks on every call; there are no suspension points
/// and no internal retries.
pub trait Connection {
    /// The dialect statements must be serialized in for this connection.
    fn dialect(&self) -> Dialect;

    /// Executes a parameterized statement, returning the affected-row count.
    ///
    /// Drivers are not required to expose generated identifiers for
    /// multi-row statements; callers must not rely on reading them back.
    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64>;

    /// Starts a transaction.
    fn begin(&mut self) -> Result<()>;

    /// Commits the current transaction.
    fn commit(&mut self) -> Result<()>;

    /// Rolls the current transaction back.
    fn rollback(&mut self) -> Result<()>;
}
