// SmartWeb platform paths for macOS
// Config and data share ~/Library/Application Support/SmartWeb

use std::path::PathBuf;

fn app_support(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let home = lookup("HOME").unwrap_or_else(|| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("SmartWeb")
}

pub fn config_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    app_support(lookup)
}

pub fn data_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    app_support(lookup)
}
