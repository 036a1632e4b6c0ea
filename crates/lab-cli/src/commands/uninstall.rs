//! `lab uninstall` implementation.

use std::path::Path;

use lab_core::{App, InstalledVersion};
use lab_registry::Registry;

use crate::error::{CliError, Result};

/// Remove an installed app.
///
/// A modified working tree or one at an unrecognized version is refused
/// without `force`; the default is never to silently lose work.
pub fn run_uninstall(registry: &Registry, apps_root: &Path, name: &str, force: bool) -> Result<()> {
    let app = App::from_registry(registry, name, apps_root)?;

    if !app.installed() {
        println!("App '{name}' is not installed.");
        return Ok(());
    }

    let dirty = app.dirty();
    let unknown = app.installed_version() == InstalledVersion::Unknown;
    if !force && (dirty || unknown) {
        return Err(CliError::user(format!(
            "Failed to uninstall '{name}', the app {}. \
             Use the -f/--force option to ignore and uninstall anyways. \
             WARNING: This may lead to data loss!",
            if dirty {
                "was modified"
            } else {
                "is installed with an unknown version"
            },
        )));
    }

    app.uninstall()?;
    println!("Uninstalled '{name}'.");
    Ok(())
}
