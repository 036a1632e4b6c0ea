//! Host package inventory.
//!
//! The compatibility checker needs the packages available to the running
//! environment; on this platform that is the interpreter's package set,
//! read from `pip list --format=json`. Discovery failures degrade to an
//! empty inventory; compatibility then reports every requirement unmet,
//! which is the honest answer when the environment cannot be inspected.

use std::process::Command;

use lab_core::HostPackage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PipPackage {
    name: String,
    version: String,
}

fn parse_inventory(bytes: &[u8]) -> Result<Vec<HostPackage>, serde_json::Error> {
    let packages: Vec<PipPackage> = serde_json::from_slice(bytes)?;
    Ok(packages
        .into_iter()
        .map(|package| HostPackage::new(package.name, package.version))
        .collect())
}

/// Packages available to the host environment.
pub fn host_packages() -> Vec<HostPackage> {
    for python in ["python3", "python"] {
        let output = match Command::new(python)
            .args(["-m", "pip", "list", "--format=json", "--disable-pip-version-check"])
            .output()
        {
            Ok(output) => output,
            Err(_) => continue,
        };
        if !output.status.success() {
            continue;
        }
        match parse_inventory(&output.stdout) {
            Ok(packages) => {
                tracing::debug!(count = packages.len(), python, "read host package inventory");
                return packages;
            }
            Err(e) => {
                tracing::warn!(error = %e, python, "could not parse package inventory");
                return Vec::new();
            }
        }
    }
    tracing::warn!("no usable interpreter found; assuming empty host package inventory");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pip_json_inventory() {
        let inventory = parse_inventory(
            br#"[{"name": "numpy", "version": "1.23.0"}, {"name": "scipy", "version": "1.9.1"}]"#,
        )
        .unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0], HostPackage::new("numpy", "1.23.0"));
    }

    #[test]
    fn rejects_malformed_inventory() {
        assert!(parse_inventory(b"not json").is_err());
    }

    #[test]
    fn parses_empty_inventory() {
        assert!(parse_inventory(b"[]").unwrap().is_empty());
    }
}
