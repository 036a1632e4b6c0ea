//! `lab list` implementation.

use std::path::Path;

use lab_core::{App, InstalledVersion};
use lab_registry::Registry;

use crate::error::Result;

/// Print every app with its installed version, one per line, dirty trees
/// marked with `*`. Without `all`, apps that are not installed are
/// skipped.
pub fn run_list(registry: &Registry, apps_root: &Path, all: bool) -> Result<()> {
    for name in registry.names() {
        let app = App::from_registry(registry, name, apps_root)?;
        let version = app.installed_version();
        if all || version != InstalledVersion::NotInstalled {
            println!(
                "{:<29} {}{}",
                app.name(),
                version,
                if app.dirty() { "*" } else { "" }
            );
        }
    }
    Ok(())
}
