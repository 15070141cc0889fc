//! Column sorting for a single table element.

use tabledom::{find_element_mut, query_all, walk_mut, Element, Tag};

use crate::compare::{cell_key, compare_keys, merge_sort_by};
use crate::{SortConfig, SortDirection, SortError};

/// Sorts table bodies by column and keeps the header indicator in sync.
///
/// A table is a `table` element with a `thead` header row of `th` cells and
/// a `tbody` of `tr` rows holding `td` cells. Only the first `tbody` is
/// sorted. The sorter never creates or drops rows; it changes their order
/// and the indicator classes on header cells.
#[derive(Debug, Clone, Default)]
pub struct TableSorter {
    config: SortConfig,
}

impl TableSorter {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sort ascending by `column`.
    pub fn sort(&self, table: &mut Element, column: usize) -> Result<(), SortError> {
        self.sort_by_column(table, column, SortDirection::Ascending)
    }

    /// Sort the body rows of `table` by the trimmed text of `column`.
    ///
    /// Rows are the `tr` children of the body. Every row must have a `td` at
    /// `column` and some header row must have a `th` there. Both are checked
    /// before anything is changed.
    pub fn sort_by_column(
        &self,
        table: &mut Element,
        column: usize,
        direction: SortDirection,
    ) -> Result<(), SortError> {
        ensure_table(table)?;
        let table_id = table.id.clone();

        let Some(header_id) = header_cell(table, column).map(|th| th.id.clone()) else {
            return Err(SortError::MissingHeader {
                table: table_id,
                column,
            });
        };

        let Some(body) = first_body_mut(table) else {
            return Err(SortError::MissingBody(table_id));
        };

        let keys = body
            .child_elements()
            .iter()
            .filter(|child| child.tag == Tag::Tr)
            .enumerate()
            .map(|(row, tr)| {
                cell_text(tr, column).ok_or_else(|| SortError::InvalidColumn {
                    table: table_id.clone(),
                    row,
                    column,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let row_count = keys.len();

        // Sorted rows go back into the positions rows held; other children stay put.
        let mut children = body.replace_children(Vec::new());
        let slots: Vec<usize> = children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.tag == Tag::Tr)
            .map(|(i, _)| i)
            .collect();
        let rows: Vec<(String, Element)> = keys
            .into_iter()
            .zip(slots.iter().map(|&i| std::mem::take(&mut children[i])))
            .collect();

        let sorted = merge_sort_by(rows, |(a, _), (b, _)| compare_keys(a, b, direction));
        for (slot, (_, row)) in slots.into_iter().zip(sorted) {
            children[slot] = row;
        }
        body.replace_children(children);

        self.clear_indicators(table);
        if let Some(th) = find_element_mut(table, &header_id) {
            th.add_class(self.config.indicator_class(direction));
        }

        log::debug!("sorted {row_count} rows of {table_id} by column {column} ({direction:?})");
        Ok(())
    }

    /// Active column and direction, read back from the header indicator.
    pub fn current_sort(&self, table: &Element) -> Option<(usize, SortDirection)> {
        query_all(table, Tag::Tr).into_iter().find_map(|tr| {
            tr.child_elements()
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.tag == Tag::Th)
                .find_map(|(column, th)| self.indicated(th).map(|dir| (column, dir)))
        })
    }

    /// Direction shown by a header cell's indicator, if any.
    pub fn indicated(&self, th: &Element) -> Option<SortDirection> {
        if th.has_class(&self.config.ascending_class) {
            Some(SortDirection::Ascending)
        } else if th.has_class(&self.config.descending_class) {
            Some(SortDirection::Descending)
        } else {
            None
        }
    }

    fn clear_indicators(&self, table: &mut Element) {
        walk_mut(table, &mut |el| {
            if el.tag == Tag::Th {
                el.remove_class(&self.config.ascending_class);
                el.remove_class(&self.config.descending_class);
            }
        });
    }
}

pub(crate) fn ensure_table(element: &Element) -> Result<(), SortError> {
    if element.tag == Tag::Table {
        Ok(())
    } else {
        Err(SortError::NotATable {
            id: element.id.clone(),
            tag: element.tag,
        })
    }
}

/// First `th` in document order that sits at `column` within its row.
fn header_cell(table: &Element, column: usize) -> Option<&Element> {
    query_all(table, Tag::Tr)
        .into_iter()
        .find_map(|tr| tr.child_elements().get(column).filter(|c| c.tag == Tag::Th))
}

/// Position of header cell `header_id` within its row.
pub(crate) fn header_column(table: &Element, header_id: &str) -> Option<usize> {
    query_all(table, Tag::Tr)
        .into_iter()
        .find_map(|tr| tr.child_index(header_id))
}

fn first_body_mut(table: &mut Element) -> Option<&mut Element> {
    table
        .child_elements_mut()
        .iter_mut()
        .find(|c| c.tag == Tag::TBody)
}

fn cell_text(row: &Element, column: usize) -> Option<String> {
    row.child_elements()
        .get(column)
        .filter(|c| c.tag == Tag::Td)
        .map(|td| cell_key(&td.text_content()).to_string())
}
