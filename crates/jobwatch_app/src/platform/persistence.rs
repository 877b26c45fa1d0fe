use jobwatch_core::{Theme, ThemeStore};
use jobwatch_engine::LocalStorage;
use jobwatch_logging::{jw_error, jw_warn};

/// Storage key holding the dark-mode flag as a JSON boolean.
pub(crate) const THEME_KEY: &str = "darkMode";

pub(crate) fn load_theme(storage: &LocalStorage) -> Theme {
    match storage.get_json::<bool>(THEME_KEY) {
        Ok(Some(dark)) => Theme::from_dark_flag(dark),
        Ok(None) => Theme::default(),
        Err(err) => {
            jw_warn!("Ignoring stored theme: {}", err);
            Theme::default()
        }
    }
}

/// Theme store seeded from `storage` that writes every change back to it.
pub(crate) fn persistent_theme_store(mut storage: LocalStorage) -> ThemeStore {
    let mut store = ThemeStore::new(load_theme(&storage));
    store.subscribe(move |theme| {
        if let Err(err) = storage.set_json(THEME_KEY, &theme.is_dark()) {
            jw_error!("Failed to save theme to {:?}: {}", storage.dir(), err);
        }
    });
    store
}
