use super::Field;

/// Static metadata describing a model and the table it maps to.
///
/// Built once per record type at registration time; the batch pipeline reads
/// it for every element of a batch but never mutates it.
#[derive(Debug)]
pub struct Model {
    /// The model name
    pub name: String,

    /// Name of the mapped database table
    pub table: String,

    /// The model's fields, in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn builder(name: impl Into<String>, table: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table: table.into(),
            fields: vec![],
        }
    }

    /// Looks a field up by its logical name.
    pub fn field_by_name(&self, name: &str) -> Option<(usize, &Field)> {
        self.fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.name.app_name == name)
    }
}

#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    table: String,
    fields: Vec<Field>,
}

impl ModelBuilder {
    pub fn field(mut self, field: Field) -> Self {
        assert!(
            self.fields
                .iter()
                .all(|existing| existing.name.app_name != field.name.app_name),
            "duplicate field `{}` on model `{}`",
            field.name.app_name,
            self.name,
        );
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Model {
        Model {
            name: self.name,
            table: self.table,
            fields: self.fields,
        }
    }
}
