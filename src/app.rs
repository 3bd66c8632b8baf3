//! App Core for SmartWeb.
//!
//! Central struct holding the record store, settings, theme and screen state, and managing
//! the application lifecycle. Screens borrow the store per call; nothing else owns it.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::managers::navigator::{Navigator, NavigatorTrait};
use crate::managers::record_store::{RecordStore, RecordStoreTrait, StoreLocation};
use crate::platform;
use crate::screens::home::HomeScreen;
use crate::screens::web_app::WebAppScreen;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::bookmark::Bookmark;
use crate::types::errors::{AppError, NavigationError, SettingsError, StoreError};
use crate::types::navigation::Screen;
use crate::types::settings::ThemeMode;

/// Central application struct.
pub struct App {
    pub store: RecordStore,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub navigator: Navigator,
    pub home: HomeScreen,
    /// The open detail screen, present while the navigator is past Home.
    pub web_app: Option<WebAppScreen>,
}

impl App {
    /// Creates a new App. Settings are loaded here; the store stays closed until `startup`.
    ///
    /// The store location is `location` when given, else `storage.database_path` from
    /// settings, else `<data_dir>/smartweb.db`.
    pub fn new(location: Option<StoreLocation>, settings_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(settings_path);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, path = settings_engine.get_config_path(), "settings not loaded, using defaults");
        }
        let settings = settings_engine.get_settings().clone();

        let location = location.unwrap_or_else(|| match settings.storage.database_path {
            Some(path) => StoreLocation::File(PathBuf::from(path)),
            None => StoreLocation::File(platform::default_database_path()),
        });

        Self {
            store: RecordStore::new(location),
            settings_engine,
            theme_engine: ThemeEngine::new(settings.appearance.theme),
            navigator: Navigator::new(),
            home: HomeScreen::new(),
            web_app: None,
        }
    }

    /// Startup sequence: open the store and load the home list.
    pub fn startup(&mut self) -> Result<(), AppError> {
        self.store.initialize()?;
        self.home.on_mount(&self.store)?;
        info!(count = self.home.items().len(), "smartweb started");
        Ok(())
    }

    /// Shutdown sequence: close the store.
    pub fn shutdown(&mut self) {
        self.store.shutdown();
        info!("smartweb stopped");
    }

    pub fn title(&self) -> &str {
        self.navigator.title()
    }

    pub fn search(&self, query: &str) -> Result<Vec<Bookmark>, StoreError> {
        self.store.search(query)
    }

    pub fn submit_form(&mut self) -> Result<Bookmark, AppError> {
        self.home.submit(&mut self.store)
    }

    pub fn delete_from_form(&mut self) -> Result<Option<String>, AppError> {
        self.home.delete(&mut self.store)
    }

    /// Saves a new web app through the form, as the add dialog does.
    pub fn add_web_app(&mut self, name: &str, url: &str) -> Result<Bookmark, AppError> {
        self.home.open_create();
        self.home.form_mut().set_name(name);
        self.home.form_mut().set_url(url);
        self.submit_form()
    }

    /// Edits a listed web app. Fields left as `None` keep their prefilled values, so the
    /// URL is re-saved in its normalized form.
    pub fn edit_web_app(
        &mut self,
        id: &str,
        name: Option<&str>,
        url: Option<&str>,
    ) -> Result<Bookmark, AppError> {
        self.home.open_edit_by_id(id)?;
        if let Some(name) = name {
            self.home.form_mut().set_name(name);
        }
        if let Some(url) = url {
            self.home.form_mut().set_url(url);
        }
        self.submit_form()
    }

    /// Deletes a listed web app. An unknown id is a no-op and returns `Ok(None)`, matching
    /// the store's delete.
    pub fn delete_web_app(&mut self, id: &str) -> Result<Option<String>, AppError> {
        if self.home.index_of(id).is_none() {
            debug!(%id, "nothing to delete");
            return Ok(None);
        }
        self.home.open_edit_by_id(id)?;
        self.delete_from_form()
    }

    /// Opens the list item at `index` in the detail screen.
    pub fn open_web_app(&mut self, index: usize) -> Result<&WebAppScreen, AppError> {
        let record = self.home.select(index)?.clone();
        self.open_record(&record)
    }

    pub fn open_web_app_by_id(&mut self, id: &str) -> Result<&WebAppScreen, AppError> {
        let index = self
            .home
            .index_of(id)
            .ok_or_else(|| NavigationError::NotFound(id.to_string()))?;
        self.open_web_app(index)
    }

    fn open_record(&mut self, record: &Bookmark) -> Result<&WebAppScreen, AppError> {
        let screen = WebAppScreen::new(&record.url, &record.name)?;
        // Only one detail screen at a time.
        while self.navigator.back() {}
        self.navigator.navigate(screen.screen());
        info!(id = %record.id, url = %screen.url(), "opening web app");
        let opened: &WebAppScreen = self.web_app.insert(screen);
        Ok(opened)
    }

    /// Pops one screen. Returns false when already at Home.
    pub fn go_back(&mut self) -> bool {
        let popped = self.navigator.back();
        if *self.navigator.current() == Screen::Home {
            self.web_app = None;
        }
        popped
    }

    /// Applies a theme preference and persists it under `appearance.theme`.
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), SettingsError> {
        let value = serde_json::to_value(mode)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        self.settings_engine.set_value("appearance.theme", value)?;
        self.theme_engine.set_theme(mode);
        Ok(())
    }
}
