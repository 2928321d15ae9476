//! Character-grid rendering with a hit map.

use crate::element::{Content, Direction, Element, ElementPath};
use crate::text::{char_width, display_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Size an element occupies when drawn, as (width, height).
///
/// Hidden elements take no space.
pub fn measure(element: &Element) -> (u16, u16) {
    if element.hidden {
        return (0, 0);
    }

    match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (display_width(text) as u16, 1),
        Content::Image { alt, .. } => (display_width(alt) as u16, 1),
        Content::Children(children) => {
            let sizes = children
                .iter()
                .filter(|c| !c.hidden)
                .map(|c| (c.margin_left, measure(c)));
            match element.direction {
                Direction::Column => sizes.fold((0, 0), |(w, h), (margin, (cw, ch))| {
                    (w.max(margin + cw), h + ch)
                }),
                Direction::Row => sizes.fold((0, 0), |(w, h), (margin, (cw, ch))| {
                    (w + margin + cw, h.max(ch))
                }),
            }
        }
    }
}

/// A rendered character grid plus the rectangles elements were drawn into.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Vec<char>>,
    // Draw order: parents before children.
    hits: Vec<(Rect, ElementPath)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width as usize]; height as usize],
            hits: Vec::new(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Rendered rows with trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|c| **c != '\0')
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Rectangle the first element with this id was drawn into.
    pub fn rect_of(&self, id: &str) -> Option<Rect> {
        self.hits
            .iter()
            .find(|(_, path)| path.target() == Some(id))
            .map(|(r, _)| *r)
    }

    /// Rectangle one concrete element was drawn into.
    pub fn rect_of_path(&self, path: &ElementPath) -> Option<Rect> {
        self.hits.iter().find(|(_, p)| p == path).map(|(r, _)| *r)
    }

    /// Id of the deepest element drawn at the given cell.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&str> {
        self.hit_path(x, y).and_then(|path| path.target())
    }

    /// Path of the deepest element drawn at the given cell.
    pub fn hit_path(&self, x: u16, y: u16) -> Option<&ElementPath> {
        self.hits
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, path)| path)
    }

    /// Draw an element with its top-left corner at (x, y).
    pub fn draw(&mut self, element: &Element, x: u16, y: u16) {
        self.draw_within(element, x, y, &ElementPath::default());
    }

    /// Draw an element below `parent`, so recorded hits carry the full chain
    /// of ancestors.
    pub fn draw_within(&mut self, element: &Element, x: u16, y: u16, parent: &ElementPath) {
        if element.hidden {
            return;
        }

        let path = parent.child(&element.id);
        let (width, height) = measure(element);
        if width > 0 && height > 0 {
            self.hits.push((Rect::new(x, y, width, height), path.clone()));
        }

        match &element.content {
            Content::None => {}
            Content::Text(text) => self.put_str(x, y, text),
            Content::Image { alt, .. } => self.put_str(x, y, alt),
            Content::Children(children) => {
                let (mut cx, mut cy) = (x, y);
                for child in children.iter().filter(|c| !c.hidden) {
                    let (cw, ch) = measure(child);
                    match element.direction {
                        Direction::Column => {
                            self.draw_within(child, x + child.margin_left, cy, &path);
                            cy += ch;
                        }
                        Direction::Row => {
                            cx += child.margin_left;
                            self.draw_within(child, cx, y, &path);
                            cx += cw;
                        }
                    }
                }
            }
        }
    }

    fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let Some(row) = self.cells.get_mut(y as usize) else {
            return;
        };
        let mut col = x as usize;
        for ch in s.chars() {
            let w = char_width(ch);
            if col + w > row.len() {
                break;
            }
            row[col] = ch;
            // Wide chars occupy their continuation cell.
            for cont in 1..w {
                row[col + cont] = '\0';
            }
            col += w;
        }
    }
}
