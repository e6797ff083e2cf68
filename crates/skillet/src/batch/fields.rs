use crate::Model;
use skillet_core::{schema, stmt};

/// One schema field as instantiated for one record.
///
/// Bindings are recomputed for every record in a batch: the schema is
/// shared, but blankness is per-instance state.
pub(super) struct FieldBinding {
    /// Index of the field in the model's field list
    pub(super) index: usize,

    /// The field's static descriptor
    pub(super) field: &'static schema::Field,

    /// The record's current value for the field
    pub(super) value: stmt::Value,

    /// True if the current value is the type's zero value
    pub(super) blank: bool,
}

/// Extracts one binding per declared field from `record`, in the schema's
/// declaration order.
pub(super) fn bindings<M: Model>(record: &M) -> Vec<FieldBinding> {
    M::schema()
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let value = record.get(index);
            let blank = value.is_zero();

            FieldBinding {
                index,
                field,
                value,
                blank,
            }
        })
        .collect()
}
