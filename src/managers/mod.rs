// SmartWeb state managers
// Managers own persistent and session state: the web app record store and the screen navigator.

pub mod navigator;
pub mod record_store;
