//! Click-to-sort for tables rendered as a [`tabledom`] element tree.
//!
//! [`TableSorter::sort_by_column`] reorders the rows of a table's first body
//! section by the text of one column and marks the header cell with an
//! ascending or descending indicator class.
//! [`TableSorter::attach_column_click_handlers`] wires header clicks in a
//! [`tabledom::Document`] to that operation and returns a [`SortHandle`]
//! that detaches them again.

mod compare;
mod config;
mod direction;
mod error;
mod handlers;
mod sorter;

pub use compare::{cell_key, compare_keys};
pub use config::SortConfig;
pub use direction::SortDirection;
pub use error::SortError;
pub use handlers::SortHandle;
pub use sorter::TableSorter;
