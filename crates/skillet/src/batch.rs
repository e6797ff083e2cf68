mod context;
use context::BatchContext;

mod create;
mod fields;
mod resolve;
mod timestamps;

use crate::Model;
use skillet_core::{Connection, Result};

/// Batch-creates a homogeneous collection of records with a single
/// multi-row `INSERT` statement.
///
/// The records are mutated in place: blank `created_at` / `updated_at`
/// fields are stamped and applied defaults are written back, so after a
/// successful call the in-memory records reflect what was persisted. The
/// one exception is database-generated identifiers: drivers do not expose
/// them for multi-row statements, so blank primary keys stay blank in
/// memory even though the database assigned values.
///
/// ```no_run
/// # use skillet::{CreateMany, Connection, Model, Result};
/// # fn demo<M: Model>(todos: &mut [M], conn: &mut dyn Connection) -> Result<()> {
/// let rows = CreateMany::new(todos).exec(conn)?;
/// # Ok(())
/// # }
/// ```
pub struct CreateMany<'a, M: Model> {
    records: &'a mut [M],
    insert_option: Option<String>,
}

impl<'a, M: Model> CreateMany<'a, M> {
    pub fn new(records: &'a mut [M]) -> Self {
        Self {
            records,
            insert_option: None,
        }
    }

    /// Appends a dialect-specific clause verbatim after the VALUES clause,
    /// e.g. `ON CONFLICT DO NOTHING`.
    pub fn insert_option(mut self, option: impl Into<String>) -> Self {
        self.insert_option = Some(option.into());
        self
    }

    /// Runs the batch pipeline inside a transaction, returning the number
    /// of rows the insert affected.
    pub fn exec(self, conn: &mut dyn Connection) -> Result<u64> {
        let mut cx = BatchContext::new(self.records, self.insert_option);

        conn.begin()?;

        match run_stages(&mut cx, conn) {
            Ok(()) => {
                conn.commit()?;
                Ok(cx.rows_affected.unwrap_or(0))
            }
            Err(err) => {
                // The stage error is what the caller sees, even when the
                // rollback itself fails.
                let _ = conn.rollback();
                Err(err)
            }
        }
    }
}

/// The ordered pipeline stages. `?` realizes first-error-wins: once a stage
/// fails, no later stage runs.
fn run_stages<M: Model>(cx: &mut BatchContext<'_, M>, conn: &mut dyn Connection) -> Result<()> {
    before_batch_create(cx)?;
    timestamps::update_timestamps(cx)?;
    create::batch_create(cx, conn)?;
    Ok(())
}

/// Invokes the model's before-batch extension point, once, with the whole
/// batch. An empty batch skips the hook.
fn before_batch_create<M: Model>(cx: &mut BatchContext<'_, M>) -> Result<()> {
    if cx.records.is_empty() {
        return Ok(());
    }

    M::before_batch_create(cx.records)
}
