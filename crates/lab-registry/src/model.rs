//! Parsed registry document model.
//!
//! Mirrors the published document shape:
//!
//! ```json
//! {
//!   "apps": {
//!     "quantum-viewer": {
//!       "git_url": "https://example.org/quantum-viewer.git",
//!       "categories": ["visualization"],
//!       "metadata": {"title": "Quantum viewer"},
//!       "releases": {
//!         "1.0.0": {"commit": "…", "dependencies": {"python-requirements": ["numpy>=1.20"]}}
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Everything here is read-only after parsing; updating an entry means
//! re-fetching the whole document.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::{MapAccess, Visitor};

/// One declared release of an app: a version label paired with the
/// repository revision that carries it, plus per-ecosystem dependency
/// declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Version label, also the git ref (branch or tag) to check out.
    pub version: String,
    /// Commit id the label points at.
    pub commit: String,
    /// Requirement strings keyed by ecosystem (e.g. `python-requirements`).
    pub dependencies: BTreeMap<String, Vec<String>>,
}

/// Release body as it appears in the document, keyed by version label.
#[derive(Debug, Deserialize)]
struct ReleaseBody {
    #[serde(alias = "sha")]
    commit: String,
    #[serde(default)]
    dependencies: BTreeMap<String, Vec<String>>,
}

/// The releases of one app, in registry document order.
///
/// Document order is observable behavior: version-sort ties are broken by
/// it, and when two releases share a commit the later entry wins the
/// reverse lookup. A plain map would lose it, so releases deserialize into
/// an order-preserving list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Releases(Vec<Release>);

impl Releases {
    /// Number of declared releases.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the app declares no releases at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Releases in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Release> {
        self.0.iter()
    }

    /// Look up a release by its exact version label.
    pub fn get(&self, version: &str) -> Option<&Release> {
        self.0.iter().find(|release| release.version == version)
    }

    /// Whether a release with this exact version label exists.
    pub fn contains(&self, version: &str) -> bool {
        self.get(version).is_some()
    }
}

impl<'a> IntoIterator for &'a Releases {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Releases {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ReleasesVisitor;

        impl<'de> Visitor<'de> for ReleasesVisitor {
            type Value = Releases;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of version labels to release objects")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut releases = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((version, body)) = map.next_entry::<String, ReleaseBody>()? {
                    releases.push(Release {
                        version,
                        commit: body.commit,
                        dependencies: body.dependencies,
                    });
                }
                Ok(Releases(releases))
            }
        }

        deserializer.deserialize_map(ReleasesVisitor)
    }
}

/// One app's registry entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppRecord {
    /// App name; filled from the registry key when the entry omits it.
    #[serde(default)]
    pub name: String,
    /// Repository URL; may carry a `#fragment` that install strips.
    #[serde(default)]
    pub git_url: String,
    /// Free-form presentation metadata (title, description, authors, …).
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub releases: Releases,
}

impl AppRecord {
    /// A string field out of the metadata block, if present.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse_releases(json: &str) -> Releases {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn releases_preserve_document_order() {
        let releases = parse_releases(
            r#"{
                "1.1.0": {"commit": "bbb"},
                "1.0.0": {"commit": "aaa"},
                "0.9.0": {"commit": "ccc"}
            }"#,
        );
        let order: Vec<&str> = releases.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(order, vec!["1.1.0", "1.0.0", "0.9.0"]);
    }

    #[test]
    fn release_accepts_sha_alias() {
        let releases = parse_releases(r#"{"1.0.0": {"sha": "abc123"}}"#);
        assert_eq!(releases.get("1.0.0").unwrap().commit, "abc123");
    }

    #[test]
    fn release_dependencies_default_empty() {
        let releases = parse_releases(r#"{"1.0.0": {"commit": "abc123"}}"#);
        assert!(releases.get("1.0.0").unwrap().dependencies.is_empty());
    }

    #[test]
    fn release_dependencies_parse() {
        let releases = parse_releases(
            r#"{"1.0.0": {
                "commit": "abc123",
                "dependencies": {"python-requirements": ["numpy>=1.20", "scipy"]}
            }}"#,
        );
        let release = releases.get("1.0.0").unwrap();
        assert_eq!(
            release.dependencies["python-requirements"],
            vec!["numpy>=1.20", "scipy"]
        );
    }

    #[test]
    fn get_misses_unknown_label() {
        let releases = parse_releases(r#"{"1.0.0": {"commit": "abc123"}}"#);
        assert!(releases.get("2.0.0").is_none());
        assert!(!releases.contains("2.0.0"));
        assert!(releases.contains("1.0.0"));
    }

    #[test]
    fn app_record_defaults() {
        let record: AppRecord = serde_json::from_str(r#"{"git_url": "https://x/y.git"}"#).unwrap();
        assert_eq!(record.git_url, "https://x/y.git");
        assert!(record.name.is_empty());
        assert!(record.categories.is_empty());
        assert!(record.releases.is_empty());
    }

    #[test]
    fn metadata_str_reads_string_fields() {
        let record: AppRecord = serde_json::from_str(
            r#"{"metadata": {"title": "Quantum viewer", "weight": 3}}"#,
        )
        .unwrap();
        assert_eq!(record.metadata_str("title"), Some("Quantum viewer"));
        assert_eq!(record.metadata_str("weight"), None);
        assert_eq!(record.metadata_str("missing"), None);
    }
}
