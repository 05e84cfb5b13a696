//! Integration tests for screen routing and keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nidhi::app::state::{NavigationAction, Router, Screen, Theme};
use nidhi::clock::FixedClock;
use nidhi::store::Store;

#[test]
fn every_screen_is_reachable_from_every_other() {
    let mut router = Router::new(Theme::Light);
    for &from in Screen::ALL.iter() {
        for &to in Screen::ALL.iter() {
            router.select(from);
            router.select(to);
            assert_eq!(router.active_screen(), to);
        }
    }
}

#[test]
fn navigation_does_not_disturb_the_store() {
    let mut router = Router::new(Theme::Light);
    let mut store = Store::new(Box::new(FixedClock("now".into())), 12500);
    store.add_money(500).unwrap();

    for &screen in Screen::ALL.iter() {
        router.select(screen);
    }
    router.toggle_theme();

    // The store is untouched by routing and theming
    assert_eq!(store.balance(), 13000);
    assert_eq!(store.activities().len(), 4);
    assert_eq!(store.learning().completed_lessons(), 4);
}

#[test]
fn digit_keys_map_to_screens() {
    let cases = [
        ('1', Screen::Home),
        ('2', Screen::Learn),
        ('3', Screen::Money),
        ('4', Screen::Group),
        ('5', Screen::Progress),
    ];
    for (digit, screen) in cases {
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE)),
            NavigationAction::Goto(screen)
        );
    }
}

#[test]
fn tab_cycles_through_all_screens_and_wraps() {
    let mut router = Router::new(Theme::Light);
    let mut seen = Vec::new();
    for _ in 0..Screen::ALL.len() {
        seen.push(router.active_screen());
        router.next_screen();
    }
    assert_eq!(seen, Screen::ALL.to_vec());
    assert_eq!(router.active_screen(), Screen::Home);
}

#[test]
fn unknown_screen_names_are_ignored() {
    let mut router = Router::new(Theme::Light);
    router.select(Screen::Group);

    router.select_named("settings");
    router.select_named("");
    router.select_named("h0me");
    assert_eq!(router.active_screen(), Screen::Group);

    router.select_named("Progress");
    assert_eq!(router.active_screen(), Screen::Progress);
}

#[test]
fn theme_starts_from_config_preference() {
    let router = Router::new(Theme::Dark);
    assert_eq!(router.theme(), Theme::Dark);
    assert_eq!(router.active_screen(), Screen::Home);
}

#[test]
fn quit_keys() {
    for key in [
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        assert_eq!(Router::key_to_navigation(key), NavigationAction::Quit);
    }
}
