//! Environment configuration for the app manager.
//!
//! Every installed app lives in one subdirectory (per app name) of a
//! configured base directory. Both the base directory and the registry
//! source come from the environment, with platform defaults.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the apps base directory.
pub const APPS_ENV: &str = "LAB_APPS";

/// Environment variable naming the registry document source (URL or file
/// path).
pub const REGISTRY_ENV: &str = "LAB_REGISTRY";

const DEFAULT_APPS_DIR: &str = "/project/apps";
const DEFAULT_REGISTRY_URL: &str = "https://apps.lab.example.org/apps_meta.json";

/// Base directory under which every app's working directory lives.
pub fn apps_dir() -> PathBuf {
    env::var_os(APPS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_APPS_DIR))
}

/// Registry document source: an `http(s)` URL or a local file path.
pub fn registry_url() -> String {
    env::var(REGISTRY_ENV).unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string())
}
