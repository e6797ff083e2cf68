use super::{context::BatchContext, fields};
use crate::Model;
use chrono::Utc;
use skillet_core::{stmt::Value, Result};

/// Field names stamped with the batch creation time.
const CREATED_AT: &str = "created_at";
const UPDATED_AT: &str = "updated_at";

/// Stamps blank `created_at` / `updated_at` fields on every record.
///
/// One timestamp is captured for the whole batch, so every stamped record
/// in a batch carries the same creation time. Fields that already hold a
/// value are left alone.
pub(super) fn update_timestamps<M: Model>(cx: &mut BatchContext<'_, M>) -> Result<()> {
    let now = Utc::now();

    for record in cx.records.iter_mut() {
        for binding in fields::bindings(record) {
            if !binding.blank {
                continue;
            }

            let name = binding.field.name.app_name.as_str();
            if name == CREATED_AT || name == UPDATED_AT {
                record.set(binding.index, Value::Timestamp(now))?;
            }
        }
    }

    Ok(())
}
