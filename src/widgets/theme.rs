use web_sys::window;

use crate::error::SiteError;
use crate::timer::Scheduler;
use crate::widgets::Controller;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Anything other than exactly `"dark"` or `"light"` counts as absent.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Result<Option<String>, SiteError>;
    fn save(&mut self, value: &str) -> Result<(), SiteError>;
}

/// `window.localStorage`, under a single key.
pub struct LocalThemeStore {
    key: &'static str,
}

impl LocalThemeStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Result<web_sys::Storage, SiteError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(SiteError::StorageUnavailable)
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Result<Option<String>, SiteError> {
        Self::storage()?
            .get_item(self.key)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        Self::storage()?
            .set_item(self.key, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ThemeMsg {
    Toggle,
}

pub struct ThemeSwitcher<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSwitcher<S> {
    /// Reads the stored preference once.
    pub fn init(store: S) -> Self {
        let current = match store.load() {
            Ok(stored) => Theme::from_stored(stored.as_deref()),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.save(self.current.as_str()) {
            log::warn!("Could not persist theme preference: {}", e);
        }
        log::debug!("Theme switched to {}", self.current.as_str());
        self.current
    }
}

impl<S: ThemeStore + 'static> Controller for ThemeSwitcher<S> {
    type Msg = ThemeMsg;

    fn update(&mut self, msg: ThemeMsg, _timers: &mut dyn Scheduler<ThemeMsg>) -> bool {
        match msg {
            ThemeMsg::Toggle => self.toggle(),
        };
        true
    }
}
