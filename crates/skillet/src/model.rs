use skillet_core::{schema, stmt, Result};

/// A record type the batch pipeline can persist.
///
/// Implementations register their [`schema::Model`] metadata once (typically
/// in a `LazyLock`) and expose a field-accessor table addressed by the
/// field's index in the metadata's declaration order. The accessors are the
/// only way the pipeline reads or writes a record, so everything the
/// pipeline does to a record (timestamp stamping, default write-back) is
/// visible to the caller through the record itself.
pub trait Model: Sized {
    /// Static schema metadata for this model.
    fn schema() -> &'static schema::Model;

    /// Reads the field at `index`.
    ///
    /// `index` is a position in `Self::schema().fields`.
    fn get(&self, index: usize) -> stmt::Value;

    /// Writes the field at `index`.
    ///
    /// Fails with an invalid target error when `index` is out of bounds or
    /// the value's type does not match the field.
    fn set(&mut self, index: usize, value: stmt::Value) -> Result<()>;

    /// Extension point invoked once per batch, before anything is stamped
    /// or persisted, with the whole batch.
    fn before_batch_create(_records: &mut [Self]) -> Result<()> {
        Ok(())
    }
}
