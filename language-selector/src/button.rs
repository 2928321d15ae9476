//! Language buttons.

use mapdom::Element;

use crate::config::LanguageDescriptor;

/// Prefix of every language button's element id.
pub const BUTTON_ID_PREFIX: &str = "languageselector_";

const LANG_CLASS: &str = "leaflet-languageselector-langdiv";
const FLOAT_LEFT_CLASS: &str = "leaflet-languageselector-float-left";
const MARGIN_LEFT_CLASS: &str = "leaflet-languageselector-mleft";
const SELECTED_CLASS: &str = "leaflet-languageselector-selected";

/// Element id of the button for a language.
pub fn button_element_id(lang_id: &str) -> String {
    format!("{BUTTON_ID_PREFIX}{lang_id}")
}

/// One selectable language button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageButton {
    element_id: String,
    lang_id: String,
    label: String,
    image: Option<String>,
    index: usize,
    selected: bool,
}

impl LanguageButton {
    pub(crate) fn new(index: usize, descriptor: &LanguageDescriptor) -> Self {
        Self {
            element_id: button_element_id(&descriptor.id),
            lang_id: descriptor.id.clone(),
            label: descriptor.label().to_string(),
            image: descriptor.image.clone(),
            index,
            selected: false,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    pub fn lang_id(&self) -> &str {
        &self.lang_id
    }

    /// Accessible name.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Position in the configured language list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Language buttons are always toggle buttons.
    pub fn is_toggle(&self) -> bool {
        true
    }

    pub fn is_pressed(&self) -> bool {
        self.selected
    }

    /// The selected button cannot be activated again.
    pub fn is_disabled(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the button element.
    ///
    /// In a horizontal layout every button after the first is separated from
    /// its predecessor by one cell.
    pub(crate) fn element(&self, vertical: bool, hide_selected: bool) -> Element {
        let base = match &self.image {
            Some(src) => Element::div().child(
                Element::image(src, &self.label)
                    .id(format!("{}-img", self.element_id))
                    .attr("title", &self.label)
                    .attr("alt", &self.label),
            ),
            None => Element::text(&self.label),
        };

        let mut el = base
            .id(&self.element_id)
            .class(LANG_CLASS)
            .attr("role", "button")
            .attr("tabindex", "0")
            .attr("aria-label", &self.label)
            .attr("aria-pressed", self.is_pressed().to_string())
            .attr("aria-disabled", self.is_disabled().to_string())
            .focusable(true)
            .hidden(hide_selected && self.selected);

        if !vertical {
            el.add_class(FLOAT_LEFT_CLASS);
        }
        if self.index > 0 {
            el.add_class(MARGIN_LEFT_CLASS);
            if !vertical {
                el = el.margin_left(1);
            }
        }
        el.toggle_class(SELECTED_CLASS, self.selected);
        el
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_carries_aria_state() {
        let mut button = LanguageButton::new(0, &LanguageDescriptor::new("de", "Deutsch"));
        assert!(button.is_toggle());
        let el = button.element(true, false);
        assert_eq!(el.id, "languageselector_de");
        assert_eq!(el.text_content(), Some("Deutsch"));
        assert_eq!(el.get_attr("role"), Some("button"));
        assert_eq!(el.get_attr("aria-label"), Some("Deutsch"));
        assert_eq!(el.get_attr("aria-pressed"), Some("false"));
        assert_eq!(el.get_attr("aria-disabled"), Some("false"));
        assert!(el.focusable);

        button.set_selected(true);
        let el = button.element(true, false);
        assert_eq!(el.get_attr("aria-pressed"), Some("true"));
        assert_eq!(el.get_attr("aria-disabled"), Some("true"));
        assert!(el.has_class(SELECTED_CLASS));
    }

    #[test]
    fn image_button_labels_the_icon() {
        let descriptor = LanguageDescriptor::new("fi", "Suomi").with_image("flags/fi.svg");
        let el = LanguageButton::new(0, &descriptor).element(true, false);
        let img = &el.child_elements()[0];
        assert_eq!(img.get_attr("alt"), Some("Suomi"));
        assert_eq!(img.get_attr("title"), Some("Suomi"));
        assert_eq!(el.get_attr("aria-label"), Some("Suomi"));
    }

    #[test]
    fn horizontal_gap_only_after_first() {
        let first = LanguageButton::new(0, &LanguageDescriptor::id_only("en")).element(false, false);
        let second = LanguageButton::new(1, &LanguageDescriptor::id_only("de")).element(false, false);
        assert_eq!(first.margin_left, 0);
        assert!(!first.has_class(MARGIN_LEFT_CLASS));
        assert_eq!(second.margin_left, 1);
        assert!(second.has_class(MARGIN_LEFT_CLASS));
        assert!(second.has_class(FLOAT_LEFT_CLASS));
    }

    #[test]
    fn hide_selected_hides_only_the_selected_button() {
        let mut button = LanguageButton::new(0, &LanguageDescriptor::id_only("en"));
        assert!(!button.element(true, true).hidden);
        button.set_selected(true);
        assert!(button.element(true, true).hidden);
        assert!(!button.element(true, false).hidden);
    }
}
