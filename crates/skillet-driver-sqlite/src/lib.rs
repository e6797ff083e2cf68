mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use skillet_core::{driver::Dialect, stmt, Error, Result};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::driver_operation_failed(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Opens a connection to the database.
    pub fn connect(&self) -> Result<Connection> {
        match self {
            Self::File(path) => Connection::open(path),
            Self::InMemory => Ok(Connection::in_memory()),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Self {
        let connection = RusqliteConnection::open_in_memory().unwrap();

        Self { connection }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    /// Executes raw SQL, e.g. schema bootstrap statements.
    pub fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.connection
            .execute_batch(sql)
            .map_err(Error::driver_operation_failed)
    }

    /// Runs a query, converting every row to dynamic values.
    pub fn query(&mut self, sql: &str, params: &[stmt::Value]) -> Result<Vec<Vec<stmt::Value>>> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;
        let width = stmt.column_count();

        let params: Vec<Value> = params.iter().map(|value| Value::from(value.clone())).collect();
        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = vec![];

        loop {
            match rows.next() {
                Ok(Some(row)) => {
                    let mut items = Vec::with_capacity(width);

                    for index in 0..width {
                        items.push(
                            Value::from_column(row, index).map_err(Error::driver_operation_failed)?,
                        );
                    }

                    ret.push(items);
                }
                Ok(None) => break,
                Err(err) => {
                    return Err(Error::driver_operation_failed(err));
                }
            }
        }

        Ok(ret)
    }
}

impl skillet_core::Connection for Connection {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn execute(&mut self, sql: &str, params: &[stmt::Value]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let params: Vec<Value> = params.iter().map(|value| Value::from(value.clone())).collect();

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    fn begin(&mut self) -> Result<()> {
        self.connection
            .execute("BEGIN", [])
            .map_err(Error::driver_operation_failed)?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.connection
            .execute("COMMIT", [])
            .map_err(Error::driver_operation_failed)?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.connection
            .execute("ROLLBACK", [])
            .map_err(Error::driver_operation_failed)?;
        Ok(())
    }
}
