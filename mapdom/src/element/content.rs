#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// An icon. Renders as its `alt` text on a character grid.
    Image {
        src: String,
        alt: String,
    },
    Children(Vec<super::Element>),
}
