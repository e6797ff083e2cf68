mod field;
pub use field::{Field, FieldName};

mod model;
pub use model::{Model, ModelBuilder};
