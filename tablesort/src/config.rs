//! Sorter configuration.

use crate::SortDirection;

/// Class names the sorter reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// Set on the header cell of a column sorted ascending.
    pub ascending_class: String,

    /// Set on the header cell of a column sorted descending.
    pub descending_class: String,

    /// Marks a table whose headers get click handlers.
    pub sortable_class: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            ascending_class: "th-sort-asc".into(),
            descending_class: "th-sort-desc".into(),
            sortable_class: "table-sortable".into(),
        }
    }
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ascending indicator class.
    pub fn ascending_class(mut self, class: impl Into<String>) -> Self {
        self.ascending_class = class.into();
        self
    }

    /// Set the descending indicator class.
    pub fn descending_class(mut self, class: impl Into<String>) -> Self {
        self.descending_class = class.into();
        self
    }

    /// Set the class that marks a table as sortable.
    pub fn sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    /// Indicator class for a direction.
    pub fn indicator_class(&self, direction: SortDirection) -> &str {
        match direction {
            SortDirection::Ascending => &self.ascending_class,
            SortDirection::Descending => &self.descending_class,
        }
    }
}
