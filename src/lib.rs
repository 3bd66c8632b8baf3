//! SmartWeb — a bookmark manager that opens saved web apps in an embedded browser view.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod ipc_handler;
pub mod managers;
pub mod platform;
pub mod screens;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
