//! `lab search` implementation.

use std::path::Path;

use colored::Colorize;
use lab_core::{App, InstalledVersion};
use lab_registry::{AppSpecifier, Registry};

use crate::error::Result;
use crate::host;

use super::{matching_releases, no_matching_release};

/// Print the releases of one app that match the requested range, newest
/// first. `only_compatible` additionally filters them through the host
/// package inventory.
pub fn run_search(
    registry: &Registry,
    apps_root: &Path,
    specifier: &str,
    only_compatible: bool,
) -> Result<()> {
    let spec = AppSpecifier::parse(specifier)?;
    let app = App::from_registry(registry, spec.name(), apps_root)?;

    let versions = matching_releases(&app, &spec);
    if versions.is_empty() {
        return Err(no_matching_release(&app, &spec));
    }

    let installed = app.installed_version();
    let inventory = only_compatible.then(host::host_packages);

    for version in versions {
        if let Some(inventory) = &inventory
            && !app.is_compatible(&version, inventory)?
        {
            continue;
        }
        let marker = if installed == InstalledVersion::Version(version.clone()) {
            format!(" {}", "(installed)".green())
        } else {
            String::new()
        };
        println!("{}=={}{}", app.name(), version, marker);
    }
    Ok(())
}
