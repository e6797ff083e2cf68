use skillet_core::stmt;

/// Mutable state threaded through the batch pipeline stages.
///
/// The records are borrowed from the caller, not owned: every in-place
/// mutation the stages perform (timestamp stamping, default write-back) is
/// observable on the caller's collection and is part of the contract.
/// A context lives for exactly one `CreateMany::exec` call.
pub(super) struct BatchContext<'a, M> {
    /// The batch target, shared with the caller
    pub(super) records: &'a mut [M],

    /// SQL text accumulated by the statement builder; empty until it runs
    pub(super) sql: String,

    /// Bound parameters, in placeholder order
    pub(super) params: Vec<stmt::Value>,

    /// Affected-row count reported by the driver; unset until the insert
    /// executes successfully
    pub(super) rows_affected: Option<u64>,

    /// Dialect-specific clause appended after the VALUES clause
    pub(super) insert_option: Option<String>,
}

impl<'a, M> BatchContext<'a, M> {
    pub(super) fn new(records: &'a mut [M], insert_option: Option<String>) -> Self {
        Self {
            records,
            sql: String::new(),
            params: vec![],
            rows_affected: None,
            insert_option,
        }
    }
}
