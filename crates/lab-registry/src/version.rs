//! Version labels and range constraints for app releases.
//!
//! Release labels in the registry are semantic-version-ish strings
//! (`1.0.0`, `22.11`, `v1.2`). Constraints are comma-separated specifier
//! lists in the requirement style used by the registry and the CLI
//! (`>=1.0,<2.0`, `==1.0.5`, `!=0.9`), where every specifier must hold.
//!
//! # Examples
//!
//! ```
//! use lab_registry::version::VersionConstraint;
//!
//! let range = VersionConstraint::parse(">=1.0,<2.0").unwrap();
//! assert!(range.matches_label("1.4.0"));
//! assert!(!range.matches_label("2.0.0"));
//! assert!(!range.matches_label("not-a-version"));
//! ```

use semver::Version;

use crate::error::{Error, Result};

/// A single comparison operator in a specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompareOp {
    /// `>=`
    Gte,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `<`
    Lt,
    /// `==`
    Eq,
    /// `!=`
    Ne,
}

/// One operator/version pair, e.g. `>=1.0`.
#[derive(Debug, Clone)]
struct Specifier {
    op: CompareOp,
    version: Version,
}

impl Specifier {
    fn matches(&self, candidate: &Version) -> bool {
        match self.op {
            CompareOp::Gte => candidate >= &self.version,
            CompareOp::Gt => candidate > &self.version,
            CompareOp::Lte => candidate <= &self.version,
            CompareOp::Lt => candidate < &self.version,
            CompareOp::Eq => candidate == &self.version,
            CompareOp::Ne => candidate != &self.version,
        }
    }
}

/// A parsed version range that release labels can be checked against.
///
/// Comma-separated specifiers are conjunctive: a candidate matches the
/// constraint only if it matches every specifier.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    specifiers: Vec<Specifier>,
    /// Original text, kept for display.
    raw: String,
}

impl VersionConstraint {
    /// Parse a constraint like `>=1.0,<2.0`, `==1.0.5`, or `1.2` (bare
    /// versions mean `==`).
    pub fn parse(constraint: &str) -> Result<Self> {
        let raw = constraint.to_string();
        let mut specifiers = Vec::new();

        for part in constraint.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            specifiers.push(parse_specifier(part)?);
        }

        if specifiers.is_empty() {
            return Err(Error::ConstraintParse {
                constraint: raw,
                reason: "empty constraint".to_string(),
            });
        }

        Ok(Self { specifiers, raw })
    }

    /// Check a parsed version against the constraint.
    pub fn matches(&self, candidate: &Version) -> bool {
        self.specifiers.iter().all(|spec| spec.matches(candidate))
    }

    /// Check a release label against the constraint.
    ///
    /// Labels that cannot be parsed as versions never match.
    pub fn matches_label(&self, label: &str) -> bool {
        match parse_label(label) {
            Ok(version) => self.matches(&version),
            Err(_) => false,
        }
    }

    /// The original constraint text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_specifier(s: &str) -> Result<Specifier> {
    let (op, rest) = if let Some(rest) = s.strip_prefix(">=") {
        (CompareOp::Gte, rest)
    } else if let Some(rest) = s.strip_prefix("<=") {
        (CompareOp::Lte, rest)
    } else if let Some(rest) = s.strip_prefix("!=") {
        (CompareOp::Ne, rest)
    } else if let Some(rest) = s.strip_prefix("==") {
        (CompareOp::Eq, rest)
    } else if let Some(rest) = s.strip_prefix('>') {
        (CompareOp::Gt, rest)
    } else if let Some(rest) = s.strip_prefix('<') {
        (CompareOp::Lt, rest)
    } else {
        // Bare version implies ==
        (CompareOp::Eq, s)
    };

    let rest = rest.trim();
    let version = parse_label(rest).map_err(|_| Error::ConstraintParse {
        constraint: s.to_string(),
        reason: format!("invalid version: {rest}"),
    })?;

    Ok(Specifier { op, version })
}

/// Parse a release label leniently into a [`semver::Version`].
///
/// Accepts an optional leading `v` and pads missing components with zeros:
/// `"v1.2"` -> `1.2.0`, `"22"` -> `22.0.0`. Anything that still fails to
/// parse is [`Error::InvalidVersionLabel`].
pub fn parse_label(label: &str) -> Result<Version> {
    let trimmed = label.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

    if let Ok(version) = Version::parse(bare) {
        return Ok(version);
    }
    for padded in [format!("{bare}.0"), format!("{bare}.0.0")] {
        if let Ok(version) = Version::parse(&padded) {
            return Ok(version);
        }
    }

    Err(Error::InvalidVersionLabel {
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_single_specifier() {
        let c = VersionConstraint::parse(">=1.0").unwrap();
        assert_eq!(c.specifiers.len(), 1);
        assert_eq!(c.as_str(), ">=1.0");
    }

    #[test]
    fn parse_compound_specifier() {
        let c = VersionConstraint::parse(">=1.0,<2.0").unwrap();
        assert_eq!(c.specifiers.len(), 2);
    }

    #[test]
    fn parse_empty_rejected() {
        assert!(VersionConstraint::parse("").is_err());
        assert!(VersionConstraint::parse(" , ").is_err());
    }

    #[test]
    fn parse_garbage_rejected() {
        assert!(VersionConstraint::parse(">=apples").is_err());
    }

    #[rstest]
    #[case(">=1.0", "1.0.0", true)]
    #[case(">=1.0", "0.9.9", false)]
    #[case(">=1.0,<2.0", "1.5.3", true)]
    #[case(">=1.0,<2.0", "2.0.0", false)]
    #[case("<1.1", "1.0.0", true)]
    #[case("<1.1", "1.1.0", false)]
    #[case("==1.0.5", "1.0.5", true)]
    #[case("==1.0.5", "1.0.6", false)]
    #[case("!=1.0.0", "1.0.1", true)]
    #[case("!=1.0.0", "1.0.0", false)]
    #[case("1.2", "1.2.0", true)]
    #[case("1.2", "1.2.1", false)]
    fn label_matching(#[case] constraint: &str, #[case] label: &str, #[case] expected: bool) {
        let c = VersionConstraint::parse(constraint).unwrap();
        assert_eq!(c.matches_label(label), expected, "{constraint} vs {label}");
    }

    #[test]
    fn unparseable_label_never_matches() {
        let c = VersionConstraint::parse(">=0.0.1").unwrap();
        assert!(!c.matches_label("main"));
        assert!(!c.matches_label(""));
    }

    #[test]
    fn label_parsing_pads_components() {
        assert_eq!(parse_label("1.0.0").unwrap(), Version::new(1, 0, 0));
        assert_eq!(parse_label("1.1").unwrap(), Version::new(1, 1, 0));
        assert_eq!(parse_label("22").unwrap(), Version::new(22, 0, 0));
        assert_eq!(parse_label("v2.3").unwrap(), Version::new(2, 3, 0));
        assert_eq!(parse_label(" 1.0.0 ").unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn label_parsing_rejects_garbage() {
        assert!(parse_label("latest").is_err());
        assert!(parse_label("").is_err());
    }

    #[test]
    fn display_round_trips_raw_text() {
        let c = VersionConstraint::parse(">=1.0, <2.0").unwrap();
        assert_eq!(format!("{c}"), ">=1.0, <2.0");
    }
}
