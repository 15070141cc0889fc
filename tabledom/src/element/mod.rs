mod content;
mod node;

pub use content::Content;
pub use node::Element;

use crate::types::Tag;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// All descendants of `root` with the given tag, in document order.
/// The root itself is not included.
pub fn query_all<'a>(root: &'a Element, tag: Tag) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: Tag, found: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.tag == tag {
            found.push(child);
        }
        collect_by_tag(child, tag, found);
    }
}

/// First descendant of `root` with the given tag, in document order.
pub fn query_first(root: &Element, tag: Tag) -> Option<&Element> {
    for child in root.child_elements() {
        if child.tag == tag {
            return Some(child);
        }
        if let Some(found) = query_first(child, tag) {
            return Some(found);
        }
    }
    None
}

/// IDs from the root down to the element with `id`, inclusive.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

/// Visit every element in the tree (root first, then document order).
pub fn walk_mut(root: &mut Element, visit: &mut impl FnMut(&mut Element)) {
    visit(root);
    if let Content::Children(children) = &mut root.content {
        for child in children.iter_mut() {
            walk_mut(child, visit);
        }
    }
}
