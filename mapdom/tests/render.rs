use std::sync::Arc;

use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mapdom::{collect_focusable, Corner, Element, FocusState, Listeners, Map, MapControl};

struct Label {
    corner: Corner,
    id: &'static str,
    text: &'static str,
}

impl MapControl for Label {
    fn position(&self) -> Corner {
        self.corner
    }

    fn on_add(&self, _listeners: &Listeners) -> Element {
        self.element()
    }

    fn on_remove(&self, _listeners: &Listeners) {}

    fn element(&self) -> Element {
        Element::text(self.text).id(self.id).focusable(true)
    }
}

fn label(corner: Corner, id: &'static str, text: &'static str) -> Arc<Label> {
    Arc::new(Label { corner, id, text })
}

#[test]
fn test_corners_are_placed_on_the_grid() {
    let mut map = Map::new("map");
    map.add_control(label(Corner::TopLeft, "tl", "north-west"));
    map.add_control(label(Corner::TopRight, "tr", "ne"));
    map.add_control(label(Corner::BottomRight, "br", "se"));
    map.add_control(label(Corner::BottomRight, "br2", "south"));

    let frame = map.render(20, 4);
    let lines = frame.lines();

    assert_eq!(lines[0], "north-west        ne");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "                  se");
    assert_eq!(lines[3], "               south");
}

#[test]
fn test_hit_test_resolves_control_cells() {
    let mut map = Map::new("map");
    map.add_control(label(Corner::TopRight, "tr", "ne"));

    let frame = map.render(10, 3);

    assert_eq!(frame.hit_test(8, 0), Some("tr"));
    assert_eq!(frame.hit_test(0, 0), None);
    assert_eq!(frame.hit_test(9, 2), None);
    assert_eq!(frame.rect_of("tr").map(|r| (r.x, r.width)), Some((8, 2)));
}

#[test]
fn test_focus_traversal_wraps_and_skips_hidden() {
    let root = Element::div()
        .child(Element::text("a").id("a").focusable(true))
        .child(
            Element::div()
                .hidden(true)
                .child(Element::text("b").id("b").focusable(true)),
        )
        .child(Element::text("c").id("c").focusable(true));

    assert_eq!(collect_focusable(&root), vec!["a", "c"]);

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("c".to_string()));
}

#[test]
fn test_map_focus_rejects_unfocusable_ids() {
    let mut map = Map::new("map");
    map.add_control(label(Corner::TopLeft, "tl", "x"));

    assert!(!map.focus("map"));
    assert!(map.focus("tl"));
    assert_eq!(map.focused(), Some("tl"));
}

fn press(column: u16, row: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_mouse_press_moves_and_clears_focus() {
    let mut map = Map::new("map");
    map.add_control(label(Corner::TopLeft, "tl", "west"));
    let frame = map.render(20, 2);

    map.process_event(&press(1, 0), &frame);
    assert_eq!(map.focused(), Some("tl"));

    map.process_event(&press(10, 1), &frame);
    assert_eq!(map.focused(), None);
}

#[test]
fn test_corner_parsing() {
    assert_eq!("topleft".parse::<Corner>(), Ok(Corner::TopLeft));
    assert_eq!("bottom-right".parse::<Corner>(), Ok(Corner::BottomRight));
    assert_eq!("Top_Right".parse::<Corner>(), Ok(Corner::TopRight));
    assert!("middle".parse::<Corner>().is_err());
    assert_eq!(Corner::default(), Corner::TopRight);
}
