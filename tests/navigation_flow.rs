use std::time::{Duration, Instant};

use folio::app::App;
use folio::config::Config;
use folio::content::SectionList;
use folio::input::{normalize_wheel, Action};
use folio::navigation::{ArrowKey, Surface, SwipeKind, TransitionTag};

fn app() -> App {
    App::with_sections(Config::default(), SectionList::default())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn assert_surfaces_agree(app: &App) {
    for surface in Surface::ALL {
        let markers = app.navigator.active_markers(surface);
        let active: Vec<usize> = markers
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![app.current()], "{:?}", surface);
    }
}

#[test]
fn wheel_key_click_swipe_scenario() {
    let t0 = Instant::now();
    let mut app = app();
    assert_eq!(app.sections.len(), 5);

    app.wheel(normalize_wheel(None, 3), t0);
    assert_eq!(app.current(), 1);
    assert!(app.cta_visible());
    assert_eq!(app.navigator.tag_for(0), Some(TransitionTag::Next));
    assert_surfaces_agree(&app);

    app.handle_action(Action::Arrow(ArrowKey::Up), t0 + ms(10));
    assert_eq!(app.current(), 0);
    assert!(!app.cta_visible());
    assert_eq!(app.navigator.tag_for(1), Some(TransitionTag::Prev));
    assert_surfaces_agree(&app);

    app.click_nav_item(Surface::SideNav, 4, t0 + ms(20));
    assert_eq!(app.current(), 4);
    assert!(!app.cta_visible());
    assert_surfaces_agree(&app);

    app.tick(t0 + ms(1000));
    app.swipe(SwipeKind::SwipeUp, t0 + ms(1000));
    assert_eq!(app.current(), 0);
    assert_eq!(app.navigator.outgoing(), None);
    assert_surfaces_agree(&app);
}

#[test]
fn scroll_burst_moves_once_per_window() {
    let t0 = Instant::now();
    let mut app = app();

    for at in [0, 100, 200] {
        app.tick(t0 + ms(at));
        app.wheel(60, t0 + ms(at));
    }
    assert_eq!(app.current(), 1);

    app.tick(t0 + ms(900));
    app.wheel(60, t0 + ms(900));
    assert_eq!(app.current(), 2);
}

#[test]
fn overlay_guards_wheel_and_keys() {
    let now = Instant::now();
    let mut app = app();
    app.handle_action(Action::ToggleOverlay, now);

    app.wheel(120, now);
    app.handle_action(Action::Arrow(ArrowKey::Down), now);
    assert_eq!(app.current(), 0);

    app.handle_action(Action::CloseOverlay, now);
    app.handle_action(Action::Arrow(ArrowKey::Down), now);
    assert_eq!(app.current(), 1);
}

#[test]
fn contact_action_lands_on_last_section() {
    let now = Instant::now();
    let mut app = app();
    app.handle_action(Action::Arrow(ArrowKey::Down), now);
    app.handle_action(Action::Contact, now);

    assert_eq!(app.current(), 4);
    assert!(!app.cta_visible());
    assert_eq!(app.navigator.tag_for(1), Some(TransitionTag::Next));
}
