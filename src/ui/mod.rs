//! SmartWeb UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The home list is rendered as HTML inside the WebView. Opening a web app navigates the
//! same WebView to the saved URL. The page talks to the Rust side through wry IPC.
//!
//! # Limitations
//!
//! wry reports only page-load start and finish. A load that fails (no network, unknown host)
//! still finishes and is marked loaded, so the window never shows the
//! `Unable to connect to <url>` notice on its own. The notice is produced only when something
//! calls the `browser.error` IPC method, which `ipc_handler` handles.

pub mod webview_app;
