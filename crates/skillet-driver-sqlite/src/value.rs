use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use skillet_core::stmt::{self, Value as CoreValue};

#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a SQLite value within a row to a skillet value.
    ///
    /// The mapping follows SQLite's storage classes; timestamps come back
    /// as the RFC 3339 text they were stored as.
    pub(crate) fn from_column(row: &Row, index: usize) -> rusqlite::Result<CoreValue> {
        Ok(match row.get_ref(index)? {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(_) => {
                return Err(rusqlite::Error::InvalidColumnType(
                    index,
                    "REAL".to_string(),
                    rusqlite::types::Type::Real,
                ))
            }
            ValueRef::Text(value) => CoreValue::String(String::from_utf8_lossy(value).into_owned()),
            ValueRef::Blob(value) => CoreValue::Bytes(value.to_vec()),
        })
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I32(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v as i64))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Bytes(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&v[..]))),
            Value::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(v.to_rfc3339()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
