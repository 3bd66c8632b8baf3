// SmartWeb platform paths for Linux
// Config: $XDG_CONFIG_HOME/smartweb or ~/.config/smartweb
// Data:   $XDG_DATA_HOME/smartweb   or ~/.local/share/smartweb

use std::path::PathBuf;

const APP_DIR: &str = "smartweb";

fn xdg_dir(
    lookup: impl Fn(&str) -> Option<String>,
    xdg_var: &str,
    home_relative: &[&str],
) -> PathBuf {
    if let Some(xdg) = lookup(xdg_var) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    let home = lookup("HOME").unwrap_or_else(|| String::from("/tmp"));
    home_relative
        .iter()
        .fold(PathBuf::from(home), |path, part| path.join(part))
        .join(APP_DIR)
}

pub fn config_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    xdg_dir(lookup, "XDG_CONFIG_HOME", &[".config"])
}

pub fn data_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    xdg_dir(lookup, "XDG_DATA_HOME", &[".local", "share"])
}
