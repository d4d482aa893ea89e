use crate::{
    input::Error,
    ledger::{operation::Operation, process::LedgerError},
};

// Here, we simply log the errors and keep processing the other rows of the
// script: a typo on one line shouldn't throw away everything that follows.
//
// Rows that couldn't even be read are skipped. Operations that were read but
// refused still get a line in the results, so these logs are only there to
// explain why.

/// A row of the script couldn't be turned into an operation.
pub fn report_input(row: usize, err: &Error) {
    tracing::warn!(row, error = %err, "skipping unreadable script row");
}

/// An operation was refused by the ledger.
pub fn report_operation(row: usize, op: &Operation, err: &LedgerError) {
    tracing::warn!(
        row,
        user = op.username(),
        kind = %op.kind(),
        op = op.op_type().name(),
        error = %err,
        "operation refused"
    );
}
