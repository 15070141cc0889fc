use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Tag;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    /// Class list. Ordered, no duplicates.
    pub classes: Vec<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Box,
            content: Content::None,
            classes: Vec::new(),
        }
    }
}

impl Element {
    fn tagged(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.as_str()),
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::tagged(Tag::Box)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Text)
        }
    }

    pub fn table() -> Self {
        Self::tagged(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::tagged(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::tagged(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::tagged(Tag::Tr)
    }

    pub fn th(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Th)
        }
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::tagged(Tag::Td)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_class(&name) {
            return false;
        }
        self.classes.push(name);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, name: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != name);
        self.classes.len() != before
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct children, empty for text and empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Position of the direct child with the given id.
    pub fn child_index(&self, id: &str) -> Option<usize> {
        self.child_elements().iter().position(|c| c.id == id)
    }

    /// Swap in a new child list in one step, returning the previous children.
    ///
    /// Text content is discarded and returns as an empty list.
    pub fn replace_children(&mut self, children: Vec<Element>) -> Vec<Element> {
        match std::mem::replace(&mut self.content, Content::Children(children)) {
            Content::Children(previous) => previous,
            Content::None | Content::Text(_) => Vec::new(),
        }
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(s) => out.push_str(s),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}
