//! Toolkit-independent screen state.
//!
//! The GUI shell in `ui` and the CLI both drive these; neither holds screen logic itself.

pub mod home;
pub mod input_form;
pub mod web_app;
