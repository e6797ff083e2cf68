use skillet_core::stmt::Value;

/// A parameterized multi-row `INSERT` statement.
///
/// The column list is fixed when the statement is created; every row pushed
/// afterwards binds exactly one value per column, in column order.
#[derive(Debug)]
pub struct Insert {
    /// Target table name, unquoted
    pub table: String,

    /// Column names, unquoted, in statement order
    pub columns: Vec<String>,

    /// One parameter tuple per row
    pub rows: Vec<Vec<Value>>,

    /// Dialect-specific clause appended verbatim after the VALUES clause
    pub option: Option<String>,
}

impl Insert {
    pub fn new(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            table: table.into(),
            columns,
            rows: vec![],
            option: None,
        }
    }

    /// Appends one row of parameters. The tuple arity must match the column
    /// list.
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }
}
