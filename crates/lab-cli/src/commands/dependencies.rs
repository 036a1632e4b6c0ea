//! `lab show-dependencies` implementation.

use std::path::Path;

use colored::Colorize;
use lab_core::{App, Ecosystem};
use lab_registry::{AppSpecifier, Registry};

use crate::error::{CliError, Result};

use super::{matching_releases, no_matching_release};

/// Print the dependency declarations of the selected release, grouped by
/// ecosystem, optionally restricted to the requested ecosystems.
///
/// Every declared ecosystem key is validated whether or not it is
/// requested; an unrecognized key in registry data propagates as a fatal
/// error rather than being skipped.
pub fn run_show_dependencies(
    registry: &Registry,
    apps_root: &Path,
    specifier: &str,
    ecosystems: &[String],
) -> Result<()> {
    for key in ecosystems {
        Ecosystem::from_key(key)
            .map_err(|_| CliError::user(format!("unrecognized ecosystem '{key}'")))?;
    }

    let spec = AppSpecifier::parse(specifier)?;
    let app = App::from_registry(registry, spec.name(), apps_root)?;

    let matching = matching_releases(&app, &spec);
    let Some(version) = matching.first() else {
        return Err(no_matching_release(&app, &spec));
    };

    let release = app.release(version)?;
    let mut printed = false;
    for (key, declarations) in &release.dependencies {
        Ecosystem::from_key(key)?;
        if !ecosystems.is_empty() && !ecosystems.iter().any(|requested| requested == key) {
            continue;
        }
        println!("{}:", key.bold());
        for declaration in declarations {
            println!("  {declaration}");
        }
        printed = true;
    }
    if !printed {
        println!("{}=={} declares no dependencies.", app.name(), version);
    }
    Ok(())
}
