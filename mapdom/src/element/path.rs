use super::Element;

/// The ids from one element up to the document root, target first.
///
/// Ids need not be unique in a document: a bare id names the first match in
/// document order, a path names one concrete element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementPath(Vec<String>);

impl ElementPath {
    /// Build a path from ids ordered target first, root last.
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    /// Path of the first element with `id` in document order.
    pub fn find(root: &Element, id: &str) -> Option<Self> {
        let ids = super::path_to(root, id);
        (!ids.is_empty()).then_some(Self(ids))
    }

    /// Id of the element the path leads to.
    pub fn target(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Path of a child of this path's target.
    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut ids = Vec::with_capacity(self.0.len() + 1);
        ids.push(id.into());
        ids.extend(self.0.iter().cloned());
        Self(ids)
    }

    /// The path itself, then the path of each ancestor up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = ElementPath> + '_ {
        (0..self.0.len()).map(|i| Self(self.0[i..].to_vec()))
    }

    /// Follow the path down from `root`.
    ///
    /// Among siblings sharing an id the first one is taken.
    pub fn resolve<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.walk(root).map(|(element, _)| element)
    }

    /// Whether the path leads to an element with nothing hidden on the way.
    pub fn is_rendered(&self, root: &Element) -> bool {
        self.walk(root).is_some_and(|(_, visible)| visible)
    }

    fn walk<'a>(&self, root: &'a Element) -> Option<(&'a Element, bool)> {
        let mut ids = self.0.iter().rev();
        if *ids.next()? != root.id {
            return None;
        }

        let mut current = root;
        let mut visible = !root.hidden;
        for id in ids {
            current = current.child_elements().iter().find(|c| c.id == *id)?;
            visible &= !current.hidden;
        }
        Some((current, visible))
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" < "))
    }
}

/// Paths of every rendered element matching `pred`, in document order.
///
/// Hidden subtrees are skipped.
pub fn collect_paths(root: &Element, pred: impl Fn(&Element) -> bool) -> Vec<ElementPath> {
    let mut out = Vec::new();
    let mut chain = Vec::new();
    collect_recursive(root, &pred, &mut chain, &mut out);
    out
}

fn collect_recursive(
    element: &Element,
    pred: &dyn Fn(&Element) -> bool,
    chain: &mut Vec<String>,
    out: &mut Vec<ElementPath>,
) {
    if element.hidden {
        return;
    }
    chain.push(element.id.clone());
    if pred(element) {
        out.push(ElementPath(chain.iter().rev().cloned().collect()));
    }
    for child in element.child_elements() {
        collect_recursive(child, pred, chain, out);
    }
    chain.pop();
}
