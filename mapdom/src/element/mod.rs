mod content;
mod node;
mod path;

pub use content::Content;
pub use node::{Direction, Element};
pub use path::{collect_paths, ElementPath};

/// Find an element by ID in the tree.
///
/// Ids are not required to be unique; the first match in document order wins.
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

/// Ancestor chain of the element with the given ID, target first and root last.
///
/// Returns an empty vec if the element is not in the tree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path.reverse();
    }
    path
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if collect_path(child, id, path) {
                return true;
            }
        }
    }

    path.pop();
    false
}

/// Whether the element is in the tree and neither it nor any ancestor is hidden.
pub fn is_rendered(root: &Element, id: &str) -> bool {
    fn walk(element: &Element, id: &str) -> Option<bool> {
        if element.id == id {
            return Some(!element.hidden);
        }
        if let Content::Children(children) = &element.content {
            for child in children {
                if let Some(visible) = walk(child, id) {
                    return Some(visible && !element.hidden);
                }
            }
        }
        None
    }

    walk(root, id).unwrap_or(false)
}
