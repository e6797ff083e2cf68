use super::{context::BatchContext, fields, resolve};
use crate::Model;
use skillet_core::{Connection, Error, Result};
use skillet_sql as sql;

use std::time::Instant;

/// Builds and executes the multi-row `INSERT` statement.
///
/// The column set is derived once, from the first element's descriptors,
/// and every row binds exactly one parameter per column in that order.
pub(super) fn batch_create<M: Model>(
    cx: &mut BatchContext<'_, M>,
    conn: &mut dyn Connection,
) -> Result<()> {
    if cx.records.is_empty() {
        return Err(Error::empty_batch());
    }

    let model = M::schema();

    let columns: Vec<usize> = model
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.ignored)
        .map(|(index, _)| index)
        .collect();

    if columns.is_empty() {
        return Err(Error::empty_columns(&model.name));
    }

    let column_names = columns
        .iter()
        .map(|&index| model.fields[index].name.storage_name().to_string())
        .collect();

    let mut insert = sql::Insert::new(model.table.clone(), column_names);
    if let Some(option) = &cx.insert_option {
        insert = insert.option(option.clone());
    }

    for record in cx.records.iter_mut() {
        let bindings = fields::bindings(record);

        let mut row = Vec::with_capacity(columns.len());
        for &index in &columns {
            let resolved = resolve::resolve(&bindings[index]);
            if let Some(write_back) = resolved.write_back {
                record.set(index, write_back)?;
            }
            row.push(resolved.param);
        }
        insert.push_row(row);
    }

    // Accumulate the finished statement on the context, then execute it
    // from there.
    let mut params = Vec::new();
    cx.sql = sql::Serializer::for_dialect(conn.dialect()).serialize(&insert, &mut params);
    cx.params = params;

    tracing::trace!(
        rows = insert.rows.len(),
        params = cx.params.len(),
        "batch insert prepared"
    );

    let started = Instant::now();
    let rows_affected = conn.execute(&cx.sql, &cx.params)?;

    tracing::debug!(
        sql = %cx.sql,
        rows_affected,
        elapsed = ?started.elapsed(),
        "executed batch insert"
    );

    cx.rows_affected = Some(rows_affected);

    // Drivers do not expose per-row generated identifiers for multi-row
    // inserts, so blank primary keys are not written back.
    Ok(())
}
