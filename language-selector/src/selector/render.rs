//! Element tree for the language selector.

use mapdom::{Direction, Element};

use super::LanguageSelector;

const CONTAINER_CLASS: &str = "leaflet-control-layers leaflet-languageselector-control";
const TITLE_CLASS: &str = "leaflet-languageselector-title";
const LANGUAGES_CLASS: &str = "leaflet-languageselector-languagesdiv";
const TRIGGER_CLASS: &str = "leaflet-languageselector-trigger";

/// Container class while collapsed.
pub const BUTTON_CLASS: &str = "leaflet-control-languageselector-button";
/// Container class while expanded.
pub const BUTTON_DISABLED_CLASS: &str = "leaflet-control-languageselector-button-disabled";

impl LanguageSelector {
    pub fn title_id(&self) -> String {
        format!("{}-title", self.container_id)
    }

    pub fn languages_id(&self) -> String {
        format!("{}-languages", self.container_id)
    }

    /// Id of the compact affordance shown while collapsed.
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.container_id)
    }

    pub(super) fn render(&self) -> Element {
        let (buttons, selected_label, open, mounted) = match self.inner.read() {
            Ok(guard) => (
                guard.buttons.clone(),
                guard.selected.map(|i| guard.buttons[i].label().to_string()),
                guard.open,
                guard.mount.is_some(),
            ),
            Err(_) => return Element::div().id(&self.container_id).hidden(true),
        };
        let settings = &self.settings;
        let collapsed = settings.collapsible && !open;

        let mut container = Element::div()
            .id(&self.container_id)
            .class(CONTAINER_CLASS)
            .focusable(settings.collapsible)
            .hidden(!mounted);

        if settings.collapsible {
            container.add_class(if collapsed {
                BUTTON_CLASS
            } else {
                BUTTON_DISABLED_CLASS
            });
            container.set_attr("role", "button");
            container.set_attr("aria-expanded", (!collapsed).to_string());
            container.set_attr(
                "aria-label",
                settings.title.as_deref().unwrap_or("Select language"),
            );
        }

        if let Some(title) = &settings.title {
            container = container.child(Element::text(title).id(self.title_id()).class(TITLE_CLASS));
        }

        if settings.collapsible {
            let current = selected_label.as_deref().unwrap_or("Language");
            container = container.child(
                Element::text(format!("{current} ▾"))
                    .id(self.trigger_id())
                    .class(TRIGGER_CLASS)
                    .hidden(!collapsed),
            );
        }

        let direction = if settings.vertical {
            Direction::Column
        } else {
            Direction::Row
        };
        let languages = Element::div()
            .id(self.languages_id())
            .class(LANGUAGES_CLASS)
            .direction(direction)
            .hidden(collapsed)
            .children(
                buttons
                    .iter()
                    .map(|b| b.element(settings.vertical, settings.hide_selected)),
            );

        container.child(languages)
    }
}
