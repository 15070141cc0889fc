//! Header click wiring.

use tabledom::{
    find_element, find_element_mut, query_all, Document, Element, EventKind, ListenerId, Tag,
};

use crate::sorter::{ensure_table, header_column};
use crate::{SortDirection, SortError, TableSorter};

/// Listeners attached to one table's header cells.
///
/// Dropping the handle leaves the listeners in place; call
/// [`SortHandle::detach`] to remove them.
#[derive(Debug)]
#[must_use = "dropping a SortHandle keeps its listeners attached with no way to remove them"]
pub struct SortHandle {
    table_id: String,
    listeners: Vec<ListenerId>,
}

impl SortHandle {
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Number of header cells wired up.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Remove every listener this handle registered. Returns how many were
    /// still attached.
    pub fn detach(self, document: &mut Document) -> usize {
        let removed = self
            .listeners
            .into_iter()
            .filter(|id| document.remove_listener(*id))
            .count();
        log::debug!("detached {removed} header listeners from {}", self.table_id);
        removed
    }
}

impl TableSorter {
    /// Register a click listener on every header cell of the table with id
    /// `table_id`.
    ///
    /// A click sorts by the clicked cell's column: descending if the cell
    /// currently shows the ascending indicator, ascending otherwise.
    pub fn attach_column_click_handlers(
        &self,
        document: &mut Document,
        table_id: &str,
    ) -> Result<SortHandle, SortError> {
        let Some(table) = find_element(document.root(), table_id) else {
            return Err(SortError::TableNotFound(table_id.to_string()));
        };
        ensure_table(table)?;
        if !table.has_class(&self.config().sortable_class) {
            return Err(SortError::NotSortable(table_id.to_string()));
        }

        let header_ids: Vec<String> = query_all(table, Tag::Tr)
            .into_iter()
            .flat_map(|tr| tr.child_elements())
            .filter(|cell| cell.tag == Tag::Th)
            .map(|th| th.id.clone())
            .collect();

        let listeners = header_ids
            .into_iter()
            .map(|header_id| {
                let sorter = self.clone();
                let table_id = table_id.to_string();
                let target = header_id.clone();
                document.add_listener(target, EventKind::Click, move |root, _event| {
                    sorter
                        .on_header_click(root, &table_id, &header_id)
                        .map_err(Into::into)
                })
            })
            .collect::<Vec<_>>();

        log::debug!("attached {} header listeners to {table_id}", listeners.len());
        Ok(SortHandle {
            table_id: table_id.to_string(),
            listeners,
        })
    }

    /// Attach to every table in the document carrying the sortable class.
    pub fn attach_all(&self, document: &mut Document) -> Result<Vec<SortHandle>, SortError> {
        let root = document.root();
        let table_ids: Vec<String> = std::iter::once(root)
            .filter(|el| el.tag == Tag::Table)
            .chain(query_all(root, Tag::Table))
            .filter(|table| table.has_class(&self.config().sortable_class))
            .map(|table| table.id.clone())
            .collect();

        table_ids
            .iter()
            .map(|id| self.attach_column_click_handlers(document, id))
            .collect()
    }

    fn on_header_click(
        &self,
        root: &mut Element,
        table_id: &str,
        header_id: &str,
    ) -> Result<(), SortError> {
        let Some(table) = find_element_mut(root, table_id) else {
            return Err(SortError::TableNotFound(table_id.to_string()));
        };
        let Some(column) = header_column(table, header_id) else {
            return Err(SortError::HeaderNotFound {
                table: table_id.to_string(),
                header: header_id.to_string(),
            });
        };

        let currently_ascending = find_element(table, header_id)
            .is_some_and(|th| th.has_class(&self.config().ascending_class));
        let direction = SortDirection::from_ascending(!currently_ascending);

        self.sort_by_column(table, column, direction)
    }
}
