mod languages;
mod terminal;

use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};
use mapdom::{collect_paths, Corner, Element, Frame, Listeners, Map, MapControl};
use simplelog::{Config, LevelFilter, WriteLogger};

use terminal::Terminal;

/// Terminal demo of the language selector control.
#[derive(Parser, Debug)]
#[command(name = "language-selector-demo")]
#[command(about = "Pick a language with the mouse or keyboard")]
#[command(long_about = None)]
struct Args {
    /// Language to select on startup
    #[arg(short, long, value_name = "ID")]
    lang: Option<String>,

    /// JSON array of selector options to use instead of the built-in ones
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file
    #[arg(long, value_name = "FILE", default_value = "language-selector-demo.log")]
    log: PathBuf,
}

/// Bottom-left panel showing the last selection and the key bindings.
struct StatusBar {
    status: Arc<Mutex<String>>,
}

impl MapControl for StatusBar {
    fn position(&self) -> Corner {
        Corner::BottomLeft
    }

    fn on_add(&self, _listeners: &Listeners) -> Element {
        self.element()
    }

    fn on_remove(&self, _listeners: &Listeners) {}

    fn element(&self) -> Element {
        let status = self
            .status
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default();
        Element::div()
            .id("status-bar")
            .child(Element::text(status))
            .child(Element::text(
                "Tab/Shift+Tab focus · Enter/Space select · Esc close · q quit",
            ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&args.log)?)?;

    let configs = match &args.config {
        Some(path) => languages::load_options(path)?,
        None => languages::default_options(),
    };

    let status = Arc::new(Mutex::new(String::from("No language selected")));
    let selectors = languages::build_selectors(configs, args.lang.as_deref(), &status)?;

    let mut map = Map::new("map");
    for selector in &selectors {
        map.add_control(selector.clone());
    }
    map.add_control(Arc::new(StatusBar {
        status: Arc::clone(&status),
    }));
    log::info!("demo started with {} selector(s)", selectors.len());

    let mut term = Terminal::new()?;
    run(&mut term, &mut map)?;

    log::info!("demo finished");
    Ok(())
}

fn run(term: &mut Terminal, map: &mut Map) -> std::io::Result<()> {
    let (width, height) = term.size()?;
    let mut frame = map.render(width, height);
    draw(term, map, &frame)?;

    loop {
        let events = term.poll(Duration::from_millis(100))?;
        if events.is_empty() {
            continue;
        }

        for event in &events {
            if is_quit(event) {
                return Ok(());
            }
            map.process_event(event, &frame);
        }

        let (width, height) = term.size()?;
        frame = map.render(width, height);
        draw(term, map, &frame)?;
    }
}

fn is_quit(event: &CrosstermEvent) -> bool {
    let CrosstermEvent::Key(key) = event else {
        return false;
    };
    key.kind == KeyEventKind::Press
        && match key.code {
            KeyCode::Char('q') => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
}

/// Draw the frame with pressed buttons and the focused element in reverse video.
fn draw(term: &mut Terminal, map: &Map, frame: &Frame) -> std::io::Result<()> {
    let mut highlighted = collect_paths(&map.element(), |el| {
        el.get_attr("aria-pressed") == Some("true")
    });
    highlighted.extend(map.focused_path().cloned());

    let mut reverse = Vec::new();
    for path in &highlighted {
        if let Some(rect) = frame.rect_of_path(path) {
            for row in rect.y..rect.bottom() {
                reverse.push((rect.x, row, rect.width));
            }
        }
    }

    term.draw(&frame.lines(), &reverse)
}
