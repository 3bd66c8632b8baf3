use serde::{Deserialize, Serialize};

/// Title of the home screen.
pub const HOME_TITLE: &str = "SmartWeb";

/// Fallback title for a web app screen whose name is empty.
pub const WEB_APP_FALLBACK_TITLE: &str = "WebApp";

/// A screen on the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Home,
    WebApp { url: String, name: String },
}

impl Screen {
    /// Header title for this screen.
    pub fn title(&self) -> &str {
        match self {
            Screen::Home => HOME_TITLE,
            Screen::WebApp { name, .. } if name.is_empty() => WEB_APP_FALLBACK_TITLE,
            Screen::WebApp { name, .. } => name,
        }
    }
}

/// Load state reported by the embedded browser surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed { url: String },
}

/// RGB palette applied to the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg_color: &'static str,
    pub cmp_color: &'static str,
    pub txt_color: &'static str,
}
