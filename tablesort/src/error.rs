//! Sort error types

use tabledom::Tag;

/// Errors that can occur while sorting or wiring up a table.
///
/// Every lookup is checked before the table is touched, so a returned
/// error means the rows and indicators are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError {
    /// No element with this id exists.
    #[error("Table {0:?} not found")]
    TableNotFound(String),

    /// The element is not a `table`.
    #[error("Element {id:?} is a <{tag}>, not a <table>")]
    NotATable {
        /// Element id.
        id: String,
        /// Actual tag.
        tag: Tag,
    },

    /// The table lacks the sortable class.
    #[error("Table {0:?} is not marked sortable")]
    NotSortable(String),

    /// The table has no `tbody`.
    #[error("Table {0:?} has no body section")]
    MissingBody(String),

    /// A body row has no data cell at the requested column.
    #[error("Row {row} of table {table:?} has no cell at column {column}")]
    InvalidColumn {
        /// Table id.
        table: String,
        /// Zero-based body row position.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A clicked header cell is no longer part of its table.
    #[error("Header {header:?} is not in table {table:?}")]
    HeaderNotFound {
        /// Table id.
        table: String,
        /// Header cell id.
        header: String,
    },

    /// No header row has a header cell at the requested column.
    #[error("Table {table:?} has no header cell at column {column}")]
    MissingHeader {
        /// Table id.
        table: String,
        /// Requested column.
        column: usize,
    },
}
