//! Append-only audit log of state-mutating operations.

use {model::AuditRecord, std::sync::Mutex};

/// In-memory append-only audit log.
///
/// Every successful state-mutating operation appends exactly one record.
/// Appends also emit a tracing event so an external indexer can follow the
/// stream without polling.
#[derive(Default)]
pub struct AuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl AuditLog {
    pub(crate) fn record(&self, record: AuditRecord) {
        tracing::debug!(?record, "audit record");
        self.records.lock().unwrap().push(record);
    }

    /// Snapshot of all records in append order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}
