use std::sync::{Arc, Mutex};

use jobwatch_core::{QueryKey, Route, Theme, ThemeStore};

#[test]
fn routes_resolve_from_paths() {
    assert_eq!(Route::from_path("/"), Some(Route::Home));
    assert_eq!(Route::from_path(""), Some(Route::Home));
    assert_eq!(Route::from_path("/jobs"), Some(Route::Jobs));
    assert_eq!(Route::from_path("/logs/"), Some(Route::Logs));
    assert_eq!(Route::from_path("/settings"), None);
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn routes_declare_their_queries() {
    assert_eq!(Route::Jobs.queries(500), vec![QueryKey::Jobs]);
    assert_eq!(Route::Logs.queries(10), vec![QueryKey::Logs { lines: 10 }]);
    assert!(Route::Home.queries(500).contains(&QueryKey::Stats));
}

#[test]
fn theme_store_notifies_on_change_only() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut store = ThemeStore::new(Theme::Light);
    let sink = seen.clone();
    store.subscribe(move |theme| sink.lock().unwrap().push(theme));

    store.set_theme(Theme::Light);
    store.set_theme(Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);

    assert_eq!(*seen.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
    assert_eq!(store.get_theme(), Theme::Light);
}

#[test]
fn theme_store_unsubscribe_stops_notifications() {
    let count = Arc::new(Mutex::new(0));
    let mut store = ThemeStore::default();
    let sink = count.clone();
    let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

    store.toggle();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle();
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn theme_flag_round_trip() {
    assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
    assert!(!Theme::from_dark_flag(false).is_dark());
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}
