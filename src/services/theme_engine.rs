//! Theme Engine: light/dark/system color schemes as an owned observable value.
//!
//! Views call [`ThemeEngine::subscribe`] and hold the receiver for as long as they are
//! alive. Dropping the receiver is the whole teardown.

use tokio::sync::watch;
use tracing::debug;

use crate::types::navigation::Palette;
use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> ThemeMode;
    fn effective_theme(&self) -> ThemeMode;
    fn palette(&self) -> Palette;
    fn detect_system_theme(&self) -> ThemeMode;
    fn on_system_theme_changed(&mut self, scheme: ThemeMode);
    fn subscribe(&self) -> watch::Receiver<ThemeMode>;
}

pub const LIGHT_PALETTE: Palette = Palette {
    bg_color: "#E8EAED",
    cmp_color: "#F9F5FF",
    txt_color: "black",
};

pub const DARK_PALETTE: Palette = Palette {
    bg_color: "#303030",
    cmp_color: "#121212",
    txt_color: "white",
};

/// Returns the palette for a concrete mode. `System` falls back to light.
pub fn palette_for(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => DARK_PALETTE,
        ThemeMode::Light | ThemeMode::System => LIGHT_PALETTE,
    }
}

/// The theme engine implementation.
pub struct ThemeEngine {
    mode: ThemeMode,
    system_scheme: ThemeMode,
    effective_tx: watch::Sender<ThemeMode>,
}

impl ThemeEngine {
    /// Creates a ThemeEngine with the given preference, reading the system scheme once.
    pub fn new(mode: ThemeMode) -> Self {
        let system_scheme = Self::scheme_from_env();
        let effective = Self::resolve(mode, system_scheme);
        let (effective_tx, _) = watch::channel(effective);
        Self {
            mode,
            system_scheme,
            effective_tx,
        }
    }

    fn resolve(mode: ThemeMode, system_scheme: ThemeMode) -> ThemeMode {
        match mode {
            ThemeMode::System => system_scheme,
            other => other,
        }
    }

    fn scheme_from_env() -> ThemeMode {
        // Without a toolkit to ask, GTK_THEME is the only signal available.
        match std::env::var("GTK_THEME") {
            Ok(theme) if theme.to_lowercase().contains("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    fn publish(&self) {
        let effective = self.effective_theme();
        self.effective_tx.send_if_modified(|current| {
            if *current == effective {
                return false;
            }
            *current = effective;
            true
        });
        debug!(?effective, "theme published");
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.publish();
    }

    fn get_theme(&self) -> ThemeMode {
        self.mode
    }

    /// The concrete mode in use: `System` resolved to the last known system scheme.
    fn effective_theme(&self) -> ThemeMode {
        Self::resolve(self.mode, self.system_scheme)
    }

    fn palette(&self) -> Palette {
        palette_for(self.effective_theme())
    }

    fn detect_system_theme(&self) -> ThemeMode {
        self.system_scheme
    }

    /// Records a system appearance change. Subscribers only see it when the mode is `System`.
    fn on_system_theme_changed(&mut self, scheme: ThemeMode) {
        if scheme == ThemeMode::System {
            return;
        }
        self.system_scheme = scheme;
        self.publish();
    }

    fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.effective_tx.subscribe()
    }
}
