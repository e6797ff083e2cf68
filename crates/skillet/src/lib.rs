mod batch;
pub use batch::CreateMany;

mod model;
pub use model::Model;

pub use skillet_core::{bail, driver, err, schema, stmt, Connection, Dialect, Error, Result};
