//! Host compatibility checking for release dependency declarations.
//!
//! A release declares requirements per *ecosystem*, a dependency
//! namespace. Only interpreter-package requirements exist today; the enum
//! stays closed so an unrecognized key in registry data fails loudly
//! instead of being skipped.

use lab_registry::Requirement;

use crate::error::{Error, Result};

/// A package available to the running host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPackage {
    pub name: String,
    pub version: String,
}

impl HostPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// A dependency-declaration namespace within a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// Interpreter packages of the host environment.
    PythonRequirements,
}

impl Ecosystem {
    /// Resolve a registry dependency key.
    ///
    /// Anything other than the known keys is a fatal
    /// [`Error::UnsupportedEcosystem`]; callers are expected to let it
    /// propagate rather than recover.
    pub fn from_key(key: &str) -> Result<Self> {
        match key {
            "python-requirements" => Ok(Self::PythonRequirements),
            _ => Err(Error::UnsupportedEcosystem {
                key: key.to_string(),
            }),
        }
    }

    /// The registry key for this ecosystem.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PythonRequirements => "python-requirements",
        }
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Requirements with no fulfilling host package, lazily, in input order,
/// not deduplicated.
pub fn find_incompatibilities<'a>(
    requirements: &'a [Requirement],
    host: &'a [HostPackage],
) -> impl Iterator<Item = &'a Requirement> {
    requirements.iter().filter(|requirement| {
        !host
            .iter()
            .any(|package| requirement.fulfilled_by(&package.name, &package.version))
    })
}

/// Whether every requirement is satisfiable by the host inventory.
pub fn is_compatible(requirements: &[Requirement], host: &[HostPackage]) -> bool {
    find_incompatibilities(requirements, host).next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reqs(inputs: &[&str]) -> Vec<Requirement> {
        inputs.iter().map(|r| Requirement::parse(r).unwrap()).collect()
    }

    #[test]
    fn ecosystem_key_round_trips() {
        let eco = Ecosystem::from_key("python-requirements").unwrap();
        assert_eq!(eco, Ecosystem::PythonRequirements);
        assert_eq!(eco.key(), "python-requirements");
        assert_eq!(eco.to_string(), "python-requirements");
    }

    #[test]
    fn unknown_ecosystem_key_is_fatal() {
        let err = Ecosystem::from_key("rust-crates").unwrap_err();
        assert!(matches!(err, Error::UnsupportedEcosystem { ref key } if key == "rust-crates"));
    }

    #[test]
    fn missing_package_is_incompatible() {
        let requirements = reqs(&["numpy>=1.20"]);
        let host = vec![HostPackage::new("scipy", "1.9.0")];

        let unmet: Vec<&str> = find_incompatibilities(&requirements, &host)
            .map(|r| r.as_str())
            .collect();
        assert_eq!(unmet, vec!["numpy>=1.20"]);
        assert!(!is_compatible(&requirements, &host));
    }

    #[test]
    fn version_outside_range_is_incompatible() {
        let requirements = reqs(&["numpy>=1.20"]);
        let host = vec![HostPackage::new("numpy", "1.19.5")];

        assert!(!is_compatible(&requirements, &host));
    }

    #[test]
    fn satisfied_inventory_is_compatible() {
        let requirements = reqs(&["numpy>=1.20", "scipy"]);
        let host = vec![
            HostPackage::new("numpy", "1.23.0"),
            HostPackage::new("scipy", "1.9.0"),
        ];

        assert!(is_compatible(&requirements, &host));
        assert_eq!(find_incompatibilities(&requirements, &host).count(), 0);
    }

    #[test]
    fn unmet_keeps_input_order_without_dedup() {
        let requirements = reqs(&["b-pkg", "a-pkg>=1.0", "a-pkg>=1.0"]);
        let host = vec![];

        let unmet: Vec<&str> = find_incompatibilities(&requirements, &host)
            .map(|r| r.as_str())
            .collect();
        assert_eq!(unmet, vec!["b-pkg", "a-pkg>=1.0", "a-pkg>=1.0"]);
    }

    #[test]
    fn empty_requirements_are_compatible() {
        assert!(is_compatible(&[], &[]));
    }
}
