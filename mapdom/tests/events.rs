use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crossterm::event::{
    Event as CrosstermEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use mapdom::{
    path_to, Corner, Element, Event, EventContext, EventKind, EventResult, Key, ListenerId,
    ListenerTarget, Listeners, Map, MapControl, Modifiers,
};

/// Control with a fixed tree that records which listeners saw which targets.
struct Recorder {
    corner: Corner,
    hidden_child: bool,
    consume_at: Option<&'static str>,
    seen: Arc<Mutex<Vec<String>>>,
    ids: Mutex<Vec<ListenerId>>,
}

impl Recorder {
    fn new(consume_at: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            corner: Corner::TopRight,
            hidden_child: false,
            consume_at,
            seen: Arc::new(Mutex::new(Vec::new())),
            ids: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl MapControl for Recorder {
    fn position(&self) -> Corner {
        self.corner
    }

    fn on_add(&self, listeners: &Listeners) -> Element {
        for id in ["recorder", "recorder-inner"] {
            let seen = Arc::clone(&self.seen);
            let consume = self.consume_at == Some(id);
            let lid = listeners.add(
                ListenerTarget::element(id),
                EventKind::Click,
                Arc::new(move |cx: &EventContext<'_>| {
                    seen.lock()
                        .unwrap()
                        .push(format!("{id}:{}", cx.target().unwrap_or("-")));
                    if consume {
                        EventResult::Consumed
                    } else {
                        EventResult::Ignored
                    }
                }),
            );
            self.ids.lock().unwrap().push(lid);
        }
        self.element()
    }

    fn on_remove(&self, listeners: &Listeners) {
        for id in self.ids.lock().unwrap().drain(..) {
            listeners.remove(id);
        }
    }

    fn element(&self) -> Element {
        Element::div().id("recorder").child(
            Element::div()
                .id("recorder-inner")
                .hidden(self.hidden_child)
                .child(Element::text("leaf").id("recorder-leaf").focusable(true)),
        )
    }
}

fn map_click_counter(map: &Map) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    map.listeners().add(
        ListenerTarget::Map,
        EventKind::Click,
        Arc::new(move |_: &EventContext<'_>| {
            c.fetch_add(1, Ordering::SeqCst);
            EventResult::Ignored
        }),
    );
    count
}

#[test]
fn test_path_to_lists_ancestors_target_first() {
    let map = {
        let mut map = Map::new("map");
        map.add_control(Recorder::new(None));
        map
    };
    let root = map.element();
    assert_eq!(
        path_to(&root, "recorder-leaf"),
        vec!["recorder-leaf", "recorder-inner", "recorder", "map-top-right", "map"]
    );
    assert!(path_to(&root, "missing").is_empty());
}

#[test]
fn test_click_bubbles_to_map_when_not_consumed() {
    let mut map = Map::new("map");
    let recorder = Recorder::new(None);
    map.add_control(recorder.clone());
    let map_clicks = map_click_counter(&map);

    let result = map.dispatch(Event::click("recorder-leaf"));

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(recorder.seen(), vec!["recorder-inner:recorder-leaf", "recorder:recorder-leaf"]);
    assert_eq!(map_clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_consumed_click_stops_bubbling() {
    let mut map = Map::new("map");
    let recorder = Recorder::new(Some("recorder-inner"));
    map.add_control(recorder.clone());
    let map_clicks = map_click_counter(&map);

    let result = map.dispatch(Event::click("recorder-leaf"));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(recorder.seen(), vec!["recorder-inner:recorder-leaf"]);
    assert_eq!(map_clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_background_click_only_reaches_map() {
    let mut map = Map::new("map");
    let recorder = Recorder::new(None);
    map.add_control(recorder.clone());
    let map_clicks = map_click_counter(&map);

    map.dispatch(Event::click_map());

    assert!(recorder.seen().is_empty());
    assert_eq!(map_clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn test_events_for_hidden_elements_are_dropped() {
    let mut map = Map::new("map");
    let recorder = Arc::new(Recorder {
        corner: Corner::TopLeft,
        hidden_child: true,
        consume_at: None,
        seen: Arc::new(Mutex::new(Vec::new())),
        ids: Mutex::new(Vec::new()),
    });
    map.add_control(recorder.clone());
    let map_clicks = map_click_counter(&map);

    assert_eq!(map.dispatch(Event::click("recorder-leaf")), EventResult::Ignored);
    assert!(recorder.seen().is_empty());
    assert_eq!(map_clicks.load(Ordering::SeqCst), 0);
}

#[test]
fn test_add_control_twice_does_not_register_twice() {
    let mut map = Map::new("map");
    let recorder: Arc<dyn MapControl> = Recorder::new(None);

    assert!(map.add_control(Arc::clone(&recorder)));
    assert!(!map.add_control(Arc::clone(&recorder)));
    assert_eq!(map.listeners().len(), 2);
    assert_eq!(map.controls_at(Corner::TopRight).len(), 1);
}

#[test]
fn test_remove_control_releases_listeners() {
    let mut map = Map::new("map");
    let recorder: Arc<dyn MapControl> = Recorder::new(None);
    map.add_control(Arc::clone(&recorder));

    assert!(map.remove_control(&recorder));
    assert!(map.listeners().is_empty());
    assert!(!map.has_control(&recorder));
    assert!(!map.remove_control(&recorder));
}

#[test]
fn test_listener_removal_by_id() {
    let listeners = Listeners::new();
    let id = listeners.add(
        ListenerTarget::Map,
        EventKind::Key,
        Arc::new(|_: &EventContext<'_>| EventResult::Ignored),
    );
    assert!(listeners.contains(id));
    assert!(listeners.remove(id));
    assert!(!listeners.remove(id));
    assert!(listeners.for_target(&ListenerTarget::Map, EventKind::Key).is_empty());
}

#[test]
fn test_tab_focuses_then_keys_target_focused_element() {
    let mut map = Map::new("map");
    map.add_control(Recorder::new(None));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    map.listeners().add(
        ListenerTarget::element("recorder"),
        EventKind::Key,
        Arc::new(move |cx: &EventContext<'_>| {
            if let Event::Key { key, .. } = cx.event {
                s.lock().unwrap().push((cx.target().map(str::to_string), *key));
            }
            EventResult::Consumed
        }),
    );

    assert_eq!(map.key(Key::Tab, Modifiers::new()), EventResult::Consumed);
    assert_eq!(map.focused(), Some("recorder-leaf"));

    map.key(Key::Enter, Modifiers::new());
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Some("recorder-leaf".to_string()), Key::Enter)]
    );
}

/// Control whose only child reuses an id that other twins also use.
struct Twin {
    root: &'static str,
    corner: Corner,
    child_hidden: bool,
    seen: Arc<Mutex<Vec<String>>>,
}

impl Twin {
    fn new(
        root: &'static str,
        corner: Corner,
        child_hidden: bool,
        seen: &Arc<Mutex<Vec<String>>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            root,
            corner,
            child_hidden,
            seen: Arc::clone(seen),
        })
    }
}

impl MapControl for Twin {
    fn position(&self) -> Corner {
        self.corner
    }

    fn on_add(&self, listeners: &Listeners) -> Element {
        for kind in [EventKind::Click, EventKind::Key] {
            let seen = Arc::clone(&self.seen);
            let root = self.root;
            listeners.add(
                ListenerTarget::element(root),
                kind,
                Arc::new(move |_: &EventContext<'_>| {
                    seen.lock().unwrap().push(format!("{root}:{kind:?}"));
                    EventResult::Consumed
                }),
            );
        }
        self.element()
    }

    fn on_remove(&self, _listeners: &Listeners) {}

    fn element(&self) -> Element {
        Element::div().id(self.root).child(
            Element::text(self.root)
                .id("shared")
                .focusable(true)
                .hidden(self.child_hidden),
        )
    }
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
fn test_pointer_and_keys_reach_the_twin_that_was_hit() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut map = Map::new("map");
    map.add_control(Twin::new("first", Corner::TopLeft, true, &seen));
    map.add_control(Twin::new("second", Corner::TopRight, false, &seen));

    // A bare id names the first twin, whose child is hidden.
    assert_eq!(map.dispatch(Event::click("shared")), EventResult::Ignored);

    let frame = map.render(20, 2);
    let rect = frame.rect_of("shared").unwrap();
    assert_eq!(
        frame.hit_path(rect.x, rect.y).map(|p| p.to_string()).as_deref(),
        Some("shared < second < map-top-right < map")
    );

    assert_eq!(map.process_event(&press(rect.x, rect.y), &frame), EventResult::Consumed);
    assert_eq!(map.focused(), Some("shared"));
    assert_eq!(
        map.focused_path().and_then(|p| p.ids().get(1)).map(String::as_str),
        Some("second")
    );

    map.key(Key::Enter, Modifiers::new());
    assert_eq!(*seen.lock().unwrap(), vec!["second:Click", "second:Key"]);
}

#[test]
fn test_tab_cycles_through_twins_sharing_an_id() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut map = Map::new("map");
    map.add_control(Twin::new("first", Corner::TopLeft, false, &seen));
    map.add_control(Twin::new("second", Corner::TopRight, false, &seen));
    let owner = |map: &Map| map.focused_path().map(|p| p.ids()[1].clone());

    map.key(Key::Tab, Modifiers::new());
    assert_eq!(owner(&map).as_deref(), Some("first"));
    map.key(Key::Tab, Modifiers::new());
    assert_eq!(owner(&map).as_deref(), Some("second"));

    map.key(Key::Char(' '), Modifiers::new());
    map.key(Key::Tab, Modifiers::shift());
    assert_eq!(owner(&map).as_deref(), Some("first"));
    map.key(Key::Char(' '), Modifiers::new());

    assert_eq!(*seen.lock().unwrap(), vec!["second:Key", "first:Key"]);
}
