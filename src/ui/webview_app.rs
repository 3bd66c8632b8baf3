//! WebView shell using `wry` + `tao`.
//!
//! Architecture:
//! - The home list is served from the `smartweb://` custom protocol and rendered from the
//!   App state on every request, so a reload always shows the store's current contents.
//! - Opening a web app points the same WebView at the saved URL with `load_url()`.
//! - `with_initialization_script(OVERLAY_JS)` adds a progress bar and a back button to
//!   every external page.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, dispatched by `ipc_handler`.
//! - Page-load start and finish drive `browser.progress` and `browser.loaded`. Nothing here
//!   sends `browser.error`, because wry has no load-failure event (see the `ui` module docs).

use std::borrow::Cow;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use serde::Deserialize;
use serde_json::{json, Value};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Theme, WindowBuilder};
use tracing::{debug, error, info, warn};
use wry::http::header::CONTENT_TYPE;
use wry::http::Response;
use wry::{PageLoadEvent, WebViewBuilder};

use crate::app::App;
use crate::ipc_handler::handle_method;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::errors::FormError;
use crate::types::navigation::HOME_TITLE;
use crate::types::settings::ThemeMode;

#[cfg(not(target_os = "windows"))]
const HOME_URL: &str = "smartweb://localhost/home";

#[cfg(target_os = "windows")]
const HOME_URL: &str = "http://smartweb.localhost/home";

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
    SetTitle(String),
}

#[derive(Debug, Deserialize)]
struct IpcMessage {
    method: String,
    #[serde(default)]
    params: Value,
}

/// Injected into every page. Does nothing on the home page.
const OVERLAY_JS: &str = r#"(function(){
  if (location.protocol === 'smartweb:' || location.host === 'smartweb.localhost') return;
  function post(m, p) { window.ipc.postMessage(JSON.stringify({method: m, params: p || {}})); }
  window.__swProgress = function(s) {
    var bar = document.getElementById('__sw_bar');
    if (!bar) return;
    bar.style.width = Math.round(s.progress * 100) + '%';
    bar.style.display = s.show_progress_bar ? 'block' : 'none';
  };
  document.addEventListener('DOMContentLoaded', function() {
    var bar = document.createElement('div');
    bar.id = '__sw_bar';
    bar.style.cssText = 'position:fixed;top:0;left:0;height:3px;width:10%;background:#1a73e8;z-index:2147483647;transition:width .2s';
    var back = document.createElement('button');
    back.textContent = '‹ SmartWeb';
    back.style.cssText = 'position:fixed;bottom:16px;left:16px;z-index:2147483647;padding:8px 14px;border:0;border-radius:18px;background:#303030;color:#fff;font:14px sans-serif;opacity:.85';
    back.onclick = function() { post('webapp.back'); };
    document.body.appendChild(bar);
    document.body.appendChild(back);
    post('browser.progress', {progress: 0.6});
  });
})();"#;

const HOME_JS: &str = r#"
function sw(m, p) { window.ipc.postMessage(JSON.stringify({method: m, params: p || {}})); }
function submitForm() {
  sw('webapp.form.submit', {
    name: document.getElementById('f-name').value,
    url: document.getElementById('f-url').value
  });
}
var q = document.getElementById('search');
q.addEventListener('keydown', function(e) {
  if (e.key === 'Enter') location.href = 'home?q=' + encodeURIComponent(q.value);
});
"#;

/// Escapes text for HTML element content and double-quoted attributes.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON string literal, safe to splice into an inline handler attribute.
fn js_arg(s: &str) -> String {
    escape_html(&Value::String(s.to_string()).to_string())
}

fn render_home(app: &App, query: Option<&str>) -> String {
    let palette = app.theme_engine.palette();
    let items = match query.filter(|q| !q.is_empty()) {
        Some(q) => app.search(q).unwrap_or_else(|e| {
            warn!(error = %e, "search failed, showing full list");
            app.home.items().to_vec()
        }),
        None => app.home.items().to_vec(),
    };

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(&format!(
        "body{{margin:0;font-family:sans-serif;background:{bg};color:{txt}}}\
         header{{padding:16px;font-size:20px;font-weight:bold}}\
         #search{{margin:0 16px 8px;width:calc(100% - 52px);padding:8px;border-radius:8px;border:1px solid #888;background:{cmp};color:{txt}}}\
         .item{{display:flex;align-items:center;margin:8px 16px;padding:12px;border-radius:10px;background:{cmp};cursor:pointer}}\
         .item .text{{flex:1;overflow:hidden}}\
         .item .url{{font-size:12px;opacity:.7;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}}\
         .fab{{position:fixed;right:24px;bottom:24px;width:56px;height:56px;border-radius:28px;border:0;font-size:28px;background:{cmp};color:{txt}}}\
         .overlay{{position:fixed;inset:0;background:rgba(0,0,0,.4);display:flex;align-items:center;justify-content:center}}\
         .form{{background:{cmp};padding:20px;border-radius:12px;min-width:280px}}\
         .form input{{display:block;width:100%;margin:8px 0;padding:8px;box-sizing:border-box}}\
         .error{{color:#d93025;font-size:13px}}",
        bg = palette.bg_color,
        cmp = palette.cmp_color,
        txt = palette.txt_color,
    ));
    html.push_str("</style></head><body>");
    html.push_str(&format!("<header>{}</header>", escape_html(HOME_TITLE)));
    html.push_str(&format!(
        "<input id=\"search\" type=\"search\" placeholder=\"Search\" value=\"{}\">",
        escape_html(query.unwrap_or(""))
    ));

    for item in &items {
        let id = js_arg(&item.id);
        html.push_str(&format!(
            "<div class=\"item\" onclick=\"sw('webapp.open',{{id:{id}}})\">\
             <div class=\"text\"><div>{name}</div><div class=\"url\">{url}</div></div>\
             <button onclick=\"event.stopPropagation();sw('webapp.form.edit',{{id:{id}}})\">Edit</button></div>",
            id = id,
            name = escape_html(&item.name),
            url = escape_html(&item.url),
        ));
    }
    html.push_str("<button class=\"fab\" onclick=\"sw('webapp.form.create')\">+</button>");

    let form = app.home.form();
    if form.is_visible() {
        html.push_str("<div class=\"overlay\"><div class=\"form\">");
        html.push_str(&format!(
            "<input id=\"f-name\" placeholder=\"Name\" value=\"{}\">\
             <input id=\"f-url\" placeholder=\"URL\" value=\"{}\">",
            escape_html(form.name()),
            escape_html(form.url()),
        ));
        if form.show_error() {
            html.push_str(&format!(
                "<div class=\"error\">{}</div>",
                escape_html(&FormError::EmptyFields.to_string())
            ));
        }
        html.push_str("<button onclick=\"submitForm()\">Save</button>");
        if form.is_editing() {
            html.push_str("<button onclick=\"sw('webapp.form.delete')\">Delete</button>");
        }
        html.push_str("<button onclick=\"sw('webapp.form.close')\">Cancel</button></div></div>");
    }

    html.push_str("<script>");
    html.push_str(HOME_JS);
    html.push_str("</script></body></html>");
    html
}

fn html_response(html: String) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Cow::Owned(html.into_bytes()))
        .unwrap_or_else(|e| {
            error!(error = %e, "building protocol response failed");
            Response::new(Cow::Borrowed(&[][..]))
        })
}

fn search_query(query: Option<&str>) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}

fn alert(message: &str) -> UserEvent {
    UserEvent::EvalScript(format!("alert({})", Value::String(message.to_string())))
}

fn title_event(value: &Value) -> Option<UserEvent> {
    value
        .get("title")
        .and_then(|t| t.as_str())
        .map(|t| UserEvent::SetTitle(t.to_string()))
}

/// Runs an IPC message and turns the outcome into follow-up UI events.
fn handle_ipc(app: &Mutex<App>, body: &str) -> Vec<UserEvent> {
    let msg: IpcMessage = match serde_json::from_str(body) {
        Ok(msg) => msg,
        Err(e) => {
            warn!(error = %e, "malformed ipc message");
            return Vec::new();
        }
    };
    let method = msg.method.as_str();

    match handle_method(app, method, &msg.params) {
        Ok(value) => match method {
            "webapp.open" => {
                let mut events = Vec::new();
                if let Some(url) = value.get("url").and_then(|u| u.as_str()) {
                    events.push(UserEvent::LoadUrl(url.to_string()));
                }
                events.extend(title_event(&value));
                events
            }
            "webapp.back" => {
                let mut events = vec![UserEvent::LoadUrl(HOME_URL.to_string())];
                events.extend(title_event(&value));
                events
            }
            "browser.progress" | "browser.loaded" => vec![UserEvent::EvalScript(format!(
                "window.__swProgress && window.__swProgress({})",
                value
            ))],
            "browser.error" => {
                let notice = value.get("notice").and_then(|n| n.as_str()).unwrap_or("");
                vec![alert(notice)]
            }
            m if m.starts_with("webapp.form.") || m == "theme.set" || m == "settings.set" => {
                vec![UserEvent::LoadUrl(HOME_URL.to_string())]
            }
            _ => Vec::new(),
        },
        Err(e) => {
            warn!(method, error = %e, "ipc call failed");
            if e == FormError::EmptyFields.to_string() {
                // The re-rendered form carries the error flag.
                vec![UserEvent::LoadUrl(HOME_URL.to_string())]
            } else {
                vec![alert(&e)]
            }
        }
    }
}

fn on_page_load(app: &Mutex<App>, event: PageLoadEvent, url: &str) -> Option<UserEvent> {
    if url.starts_with("smartweb:") || url.contains("smartweb.localhost") {
        return None;
    }
    let result = match event {
        PageLoadEvent::Started => handle_method(app, "browser.progress", &json!({"progress": 0.1})),
        PageLoadEvent::Finished => handle_method(app, "browser.loaded", &Value::Null),
    };
    match result {
        Ok(value) => Some(UserEvent::EvalScript(format!(
            "window.__swProgress && window.__swProgress({})",
            value
        ))),
        Err(e) => {
            debug!(%url, error = %e, "page load event ignored");
            None
        }
    }
}

// ─── Main entry point ───

/// Opens the window and runs the event loop until it is closed. `app` must be started.
pub fn run(app: App) -> anyhow::Result<()> {
    let mut theme_rx = app.theme_engine.subscribe();
    let state = Arc::new(Mutex::new(app));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(HOME_TITLE)
        .with_inner_size(tao::dpi::LogicalSize::new(480.0, 800.0))
        .build(&event_loop)?;

    let protocol_state = state.clone();
    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let load_state = state.clone();
    let load_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("smartweb".into(), move |_wv_id, request| {
            let query = search_query(request.uri().query());
            let html = match protocol_state.lock() {
                Ok(app) => render_home(&app, query.as_deref()),
                Err(e) => {
                    error!(error = %e, "app state poisoned");
                    String::from("<!DOCTYPE html><html><body>SmartWeb is unavailable.</body></html>")
                }
            };
            html_response(html)
        })
        .with_initialization_script(OVERLAY_JS)
        .with_url(HOME_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            debug!(len = body.len(), "ipc message");
            for event in handle_ipc(&ipc_state, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_on_page_load_handler(move |event, url| {
            if let Some(event) = on_page_load(&load_state, event, &url) {
                let _ = load_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| anyhow!("window has no GTK container"))?;
        builder.build_gtk(vbox)?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window)?;

    info!("window opened");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                match state.lock() {
                    Ok(mut app) => app.shutdown(),
                    Err(e) => error!(error = %e, "app state poisoned on close"),
                }
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::ThemeChanged(theme),
                ..
            } => {
                let scheme = if theme == Theme::Dark {
                    ThemeMode::Dark
                } else {
                    ThemeMode::Light
                };
                if let Ok(mut app) = state.lock() {
                    app.theme_engine.on_system_theme_changed(scheme);
                }
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    debug!(%url, "loading");
                    if let Err(e) = webview.load_url(&url) {
                        error!(%url, error = %e, "load_url failed");
                    }
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
                UserEvent::SetTitle(title) => window.set_title(&title),
            },

            _ => {}
        }

        // Re-render the home list when the effective theme changes.
        if theme_rx.has_changed().unwrap_or(false) {
            let _ = theme_rx.borrow_and_update();
            let at_home = state
                .lock()
                .map(|app| app.web_app.is_none())
                .unwrap_or(false);
            if at_home {
                let _ = webview.load_url(HOME_URL);
            }
        }
    });
}
