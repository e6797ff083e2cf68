use crate::stmt;

/// One declared field of a model, as it maps to a table column.
#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the field does not participate in persistence
    pub ignored: bool,

    /// Constant assigned in place of a blank value on insert
    pub default: Option<stmt::Value>,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: FieldName {
                app_name: name.into(),
                storage_name: None,
            },
            primary_key: false,
            ignored: false,
            default: None,
        }
    }

    /// Maps the field to a database column with a different name.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.name.storage_name = Some(name.into());
        self
    }

    /// Marks the field as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Excludes the field from persistence.
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Sets the constant bound in place of a blank value on insert.
    ///
    /// The same constant is written back onto the in-memory record, so the
    /// record reflects what was persisted.
    pub fn default_value(mut self, value: impl Into<stmt::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}
