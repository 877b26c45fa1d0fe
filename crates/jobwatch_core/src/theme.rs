//! Application-level theme container.
//!
//! The store is the single owner of the current theme. Persistence and
//! widget styling hook in as listeners: they are told about every change
//! and never mutate the theme themselves.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Theme) + Send>;

#[derive(Default)]
pub struct ThemeStore {
    theme: Theme,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: initial,
            ..Self::default()
        }
    }

    pub fn get_theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme and notifies listeners if it changed.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        for (_, listener) in &mut self.listeners {
            listener(theme);
        }
    }

    pub fn toggle(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + Send + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }
}
