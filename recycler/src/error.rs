use crate::RowKind;

/// Errors raised by the adapter and the sampler.
///
/// Apart from [`Error::EmptySource`], these are caller contract violations: the host asked
/// for a row that does not exist, or handed a cell to the wrong kind of row.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot sample {count} element(s) from an empty source")]
    EmptySource { count: usize },

    #[error("row {row} is out of range (row count {row_count})")]
    RowOutOfRange { row: usize, row_count: usize },

    #[error("row {row} is the {kind} row and carries no item")]
    NotAnItem { row: usize, kind: RowKind },

    #[error("cannot bind a {cell} cell to row {row}, which is a {expected} row")]
    KindMismatch {
        row: usize,
        cell: RowKind,
        expected: RowKind,
    },
}

impl Error {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptySource { .. })
    }

    pub fn is_contract_violation(&self) -> bool {
        !self.is_invalid_argument()
    }
}
