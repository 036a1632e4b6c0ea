//! Package requirements and app name specifiers.
//!
//! A [`Requirement`] is a registry dependency declaration like
//! `numpy>=1.20`: a package name plus an optional version range. An
//! [`AppSpecifier`] is the same grammar as accepted by the CLI for apps,
//! e.g. `quantum-viewer>=1.0,<2.0`.

use crate::error::{Error, Result};
use crate::version::{VersionConstraint, parse_label};

/// Characters that terminate a name and start a version constraint.
const CONSTRAINT_CHARS: &[char] = &['<', '>', '=', '!'];

/// Normalize a package name for comparison: lowercase, with `_` and `.`
/// folded to `-`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | '.' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

fn split_specifier(input: &str) -> (&str, &str) {
    match input.find(CONSTRAINT_CHARS) {
        Some(at) => input.split_at(at),
        None => (input, ""),
    }
}

fn validate_name(input: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::RequirementParse {
            input: input.to_string(),
            reason: "missing name".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(Error::RequirementParse {
            input: input.to_string(),
            reason: format!("invalid name '{name}'"),
        });
    }
    Ok(())
}

/// One dependency declaration: a package name and an optional version
/// range it must satisfy.
#[derive(Debug, Clone)]
pub struct Requirement {
    name: String,
    constraint: Option<VersionConstraint>,
    raw: String,
}

impl Requirement {
    /// Parse a requirement string like `numpy>=1.20` or `scipy`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (name, spec) = split_specifier(trimmed);
        let name = name.trim();
        validate_name(input, name)?;

        let constraint = if spec.is_empty() {
            None
        } else {
            Some(
                VersionConstraint::parse(spec).map_err(|e| Error::RequirementParse {
                    input: input.to_string(),
                    reason: e.to_string(),
                })?,
            )
        };

        Ok(Self {
            name: normalize_name(name),
            constraint,
            raw: trimmed.to_string(),
        })
    }

    /// Normalized package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version range, when one was declared.
    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }

    /// Whether an installed package with this name and version fulfills the
    /// requirement. Names compare normalized; with no declared range any
    /// version fulfills it; an unparseable installed version never does.
    pub fn fulfilled_by(&self, name: &str, version: &str) -> bool {
        if normalize_name(name) != self.name {
            return false;
        }
        match &self.constraint {
            None => true,
            Some(constraint) => match parse_label(version) {
                Ok(parsed) => constraint.matches(&parsed),
                Err(_) => false,
            },
        }
    }

    /// The requirement as written in the registry.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// An app name with an optional version range, as the CLI accepts it
/// (`quantum-viewer`, `quantum-viewer>=1.0,<2.0`).
#[derive(Debug, Clone)]
pub struct AppSpecifier {
    name: String,
    constraint: Option<VersionConstraint>,
}

impl AppSpecifier {
    /// Parse an app specifier. The app name is kept verbatim; registry
    /// keys are exact, unlike normalized package names.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let (name, spec) = split_specifier(trimmed);
        let name = name.trim();
        validate_name(input, name)?;

        let constraint = if spec.is_empty() {
            None
        } else {
            Some(VersionConstraint::parse(spec)?)
        };

        Ok(Self {
            name: name.to_string(),
            constraint,
        })
    }

    /// The app name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requested version range, if any.
    pub fn constraint(&self) -> Option<&VersionConstraint> {
        self.constraint.as_ref()
    }
}
