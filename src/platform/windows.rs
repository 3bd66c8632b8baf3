// SmartWeb platform paths for Windows
// Config and data share %APPDATA%/SmartWeb

use std::path::PathBuf;

fn roaming(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    let appdata = lookup("APPDATA").unwrap_or_else(|| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("SmartWeb")
}

pub fn config_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    roaming(lookup)
}

pub fn data_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    roaming(lookup)
}
