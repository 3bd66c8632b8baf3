//! IPC method handler for the SmartWeb webview shell.
//!
//! The page posts `{"method": ..., "params": ...}` through the webview IPC channel and
//! `ui::webview_app` forwards it here. Kept apart from the UI so it can be unit-tested
//! without a window.

use std::sync::Mutex;

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::screens::web_app::WebAppScreen;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::settings::ThemeMode;

fn str_param<'a>(params: &'a Value, key: &str) -> Result<&'a str, String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", key))
}

fn index_param(params: &Value) -> Option<usize> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .and_then(|i| usize::try_from(i).ok())
}

fn web_app_json(screen: &WebAppScreen) -> Value {
    json!({
        "url": screen.url(),
        "title": screen.title(),
        "progress": screen.progress(),
        "show_progress_bar": screen.show_progress_bar(),
        "notice": screen.notice(),
    })
}

fn theme_json(app: &App) -> Value {
    json!({
        "mode": app.theme_engine.get_theme(),
        "effective": app.theme_engine.effective_theme(),
        "palette": app.theme_engine.palette(),
    })
}

/// Dispatch an IPC method call to the App.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    debug!(method, "ipc call");
    let mut guard = app.lock().map_err(|e| e.to_string())?;
    let a = &mut *guard;

    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Home list ───
        "webapp.list" => {
            a.home.refresh(&a.store).map_err(|e| e.to_string())?;
            Ok(json!(a.home.items()))
        }
        "webapp.search" => {
            let query = str_param(params, "query")?;
            let found = a.search(query).map_err(|e| e.to_string())?;
            Ok(json!(found))
        }

        // ─── Form ───
        "webapp.form.create" => {
            a.home.open_create();
            Ok(json!(a.home.form()))
        }
        "webapp.form.edit" => {
            let opened = match (index_param(params), params.get("id").and_then(|v| v.as_str())) {
                (Some(index), _) => a.home.open_edit(index),
                (None, Some(id)) => a.home.open_edit_by_id(id),
                (None, None) => return Err("missing index or id".to_string()),
            };
            opened.map_err(|e| e.to_string())?;
            Ok(json!(a.home.form()))
        }
        "webapp.form.submit" => {
            if let Some(name) = params.get("name").and_then(|v| v.as_str()) {
                a.home.form_mut().set_name(name);
            }
            if let Some(url) = params.get("url").and_then(|v| v.as_str()) {
                a.home.form_mut().set_url(url);
            }
            let saved = a.submit_form().map_err(|e| e.to_string())?;
            Ok(json!(saved))
        }
        "webapp.form.delete" => {
            let deleted = a.delete_from_form().map_err(|e| e.to_string())?;
            Ok(json!({"deleted": deleted}))
        }
        "webapp.form.close" => {
            a.home.close_form();
            Ok(json!({"ok": true}))
        }

        // ─── Navigation ───
        "webapp.open" => {
            let screen = match (index_param(params), params.get("id").and_then(|v| v.as_str())) {
                (Some(index), _) => a.open_web_app(index),
                (None, Some(id)) => a.open_web_app_by_id(id),
                (None, None) => return Err("missing index or id".to_string()),
            }
            .map_err(|e| e.to_string())?;
            Ok(web_app_json(screen))
        }
        "webapp.back" => {
            let popped = a.go_back();
            Ok(json!({"popped": popped, "title": a.title()}))
        }

        // ─── Browser surface ───
        "browser.progress" => {
            let progress = params
                .get("progress")
                .and_then(|v| v.as_f64())
                .ok_or("missing progress")?;
            let screen = a.web_app.as_mut().ok_or("no web app open")?;
            screen.on_load_progress(progress);
            Ok(web_app_json(screen))
        }
        "browser.loaded" => {
            let screen = a.web_app.as_mut().ok_or("no web app open")?;
            screen.on_load_finished();
            Ok(web_app_json(screen))
        }
        "browser.error" => {
            let url = params.get("url").and_then(|v| v.as_str()).unwrap_or("");
            let screen = a.web_app.as_mut().ok_or("no web app open")?;
            let notice = screen.on_load_error(url);
            Ok(json!({"notice": notice.to_string()}))
        }

        // ─── Theme ───
        "theme.get" => Ok(theme_json(a)),
        "theme.set" => {
            let mode = params.get("mode").cloned().ok_or("missing mode")?;
            let mode: ThemeMode = serde_json::from_value(mode).map_err(|e| e.to_string())?;
            a.set_theme(mode).map_err(|e| e.to_string())?;
            Ok(theme_json(a))
        }

        // ─── Settings ───
        "settings.get" => {
            let settings = a.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key == "appearance.theme" {
                let mode = a.settings_engine.get_settings().appearance.theme;
                a.theme_engine.set_theme(mode);
            }
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
