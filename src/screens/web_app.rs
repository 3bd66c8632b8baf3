//! Detail screen that shows one web app in the embedded browser surface.
//!
//! The surface itself lives in `ui`. This struct tracks what it reports: coarse load
//! progress while loading, then a terminal loaded or failed state.

use serde::Serialize;
use tracing::{debug, warn};

use crate::services::url_normalizer::to_loadable_url;
use crate::types::errors::BrowserError;
use crate::types::navigation::{LoadState, Screen};

#[derive(Debug, Clone, Serialize)]
pub struct WebAppScreen {
    url: String,
    name: String,
    progress: f64,
    state: LoadState,
}

impl WebAppScreen {
    /// Prepares a screen for `url`. The URL is normalized and must parse.
    pub fn new(url: &str, name: &str) -> Result<Self, BrowserError> {
        let url = to_loadable_url(url)?;
        Ok(Self {
            url: url.to_string(),
            name: name.to_string(),
            progress: 0.0,
            state: LoadState::Loading,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> String {
        self.screen().title().to_string()
    }

    pub fn screen(&self) -> Screen {
        Screen::WebApp {
            url: self.url.clone(),
            name: self.name.clone(),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn show_progress_bar(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Records load progress, clamped to [0, 1]. Ignored once loading has ended.
    pub fn on_load_progress(&mut self, progress: f64) {
        if self.state != LoadState::Loading || progress.is_nan() {
            return;
        }
        self.progress = progress.clamp(0.0, 1.0);
        debug!(url = %self.url, progress = self.progress, "load progress");
    }

    pub fn on_load_finished(&mut self) {
        if self.state == LoadState::Loading {
            self.progress = 1.0;
            self.state = LoadState::Loaded;
        }
    }

    /// Marks the load as failed and returns the notice to show the user.
    pub fn on_load_error(&mut self, failing_url: &str) -> BrowserError {
        let failing_url = if failing_url.is_empty() {
            self.url.clone()
        } else {
            failing_url.to_string()
        };
        warn!(url = %failing_url, "page failed to load");
        self.state = LoadState::Failed {
            url: failing_url.clone(),
        };
        BrowserError::LoadFailed(failing_url)
    }

    /// The blocking notice for a failed load, if any.
    pub fn notice(&self) -> Option<String> {
        match &self.state {
            LoadState::Failed { url } => Some(BrowserError::LoadFailed(url.clone()).to_string()),
            _ => None,
        }
    }
}
