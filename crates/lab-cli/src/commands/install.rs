//! `lab install` implementation.

use std::path::Path;

use colored::Colorize;
use lab_core::{App, InstalledVersion};
use lab_registry::{AppSpecifier, Registry};

use crate::error::{CliError, Result};
use crate::host;

use super::{matching_releases, no_matching_release};

/// Resolve the highest release matching the specifier and install it.
///
/// Reinstalling the already-installed version requires `force`; the host
/// compatibility check runs unless `ignore_dependencies`; `dry_run` stops
/// after reporting the plan.
pub fn run_install(
    registry: &Registry,
    apps_root: &Path,
    specifier: &str,
    force: bool,
    ignore_dependencies: bool,
    dry_run: bool,
) -> Result<()> {
    let spec = AppSpecifier::parse(specifier)?;
    let app = App::from_registry(registry, spec.name(), apps_root)?;

    let matching = matching_releases(&app, &spec);
    let Some(version) = matching.first() else {
        return Err(no_matching_release(&app, &spec));
    };

    if !force && app.installed_version() == InstalledVersion::Version(version.clone()) {
        println!(
            "App already installed in version '{version}'. \
             Use the -f/--force option to ignore and re-install."
        );
        return Ok(());
    }

    if !ignore_dependencies {
        let inventory = host::host_packages();
        let unmet = app.find_incompatibilities(version, &inventory)?;
        if !unmet.is_empty() {
            let listing: Vec<String> = unmet.iter().map(|req| format!("  {req}")).collect();
            return Err(CliError::user(format!(
                "Cannot install '{}=={}', unmet requirements:\n{}\n\
                 Use the --ignore-dependencies option to install anyway.",
                app.name(),
                version,
                listing.join("\n"),
            )));
        }
    }

    if dry_run {
        println!(
            "Would install {}=={} at {}.",
            app.name(),
            version,
            app.local_path().display()
        );
        return Ok(());
    }

    let installed = app.install(Some(version.as_str()))?;
    println!(
        "{} {}=={} at {}.",
        "Installed".green(),
        app.name(),
        installed,
        app.local_path().display()
    );
    Ok(())
}
