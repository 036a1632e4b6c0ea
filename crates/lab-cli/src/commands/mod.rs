//! Command implementations for lab-cli

pub mod dependencies;
pub mod install;
pub mod list;
pub mod search;
pub mod uninstall;

pub use dependencies::run_show_dependencies;
pub use install::run_install;
pub use list::run_list;
pub use search::run_search;
pub use uninstall::run_uninstall;

use lab_core::App;
use lab_registry::AppSpecifier;

use crate::error::CliError;

/// Resolve a specifier against an app's release set: the labels matching
/// the requested range (all of them, for a bare name), newest first.
fn matching_releases(app: &App, spec: &AppSpecifier) -> Vec<String> {
    match spec.constraint() {
        Some(range) => app.find_matching_releases(range),
        None => app.sorted_releases(),
    }
}

/// The user-facing error for a range no release satisfies.
fn no_matching_release(app: &App, spec: &AppSpecifier) -> CliError {
    let mut available = app.sorted_releases();
    available.reverse();
    CliError::user(format!(
        "No matching release for '{}'. Available releases: {}",
        spec.constraint().map(|range| range.as_str()).unwrap_or("*"),
        available.join(","),
    ))
}
