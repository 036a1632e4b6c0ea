//! The app entity: installed-state queries, version resolution, and the
//! install/uninstall protocol.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use lab_git::workdir;
use lab_registry::{AppRecord, Registry, Release, Requirement, VersionConstraint, parse_label};
use semver::Version;

use crate::compat::{self, Ecosystem, HostPackage};
use crate::error::{Error, Result};

/// What the working directory currently holds, derived on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledVersion {
    /// The working revision maps to this known release label.
    Version(String),
    /// Installed, but dirty or at a revision no known release declares.
    Unknown,
    /// No working directory exists.
    NotInstalled,
}

impl std::fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Version(label) => f.write_str(label),
            Self::Unknown => f.write_str("unknown"),
            Self::NotInstalled => f.write_str("not installed"),
        }
    }
}

/// A registry record bound to a local working-directory path.
///
/// Constructed transiently per operation; every query re-reads the
/// registry snapshot it was built from and the live directory state, so
/// two entities for the same app never disagree about the filesystem.
#[derive(Debug, Clone)]
pub struct App {
    name: String,
    local_path: PathBuf,
    record: AppRecord,
}

impl App {
    /// Bind a registry record to `apps_root/<name>`.
    ///
    /// Fails with the registry's not-found error when no entry exists.
    pub fn from_registry(registry: &Registry, name: &str, apps_root: &Path) -> Result<Self> {
        let record = registry.lookup(name)?.clone();
        Ok(Self::new(name, apps_root.join(name), record))
    }

    /// Bind an already-obtained record to an explicit path.
    pub fn new(name: impl Into<String>, local_path: impl Into<PathBuf>, record: AppRecord) -> Self {
        Self {
            name: name.into(),
            local_path: local_path.into(),
            record,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn record(&self) -> &AppRecord {
        &self.record
    }

    /// The app is installed iff its working directory exists.
    pub fn installed(&self) -> bool {
        self.local_path.is_dir()
    }

    /// Current revision of the working tree, when installed and readable.
    pub fn working_revision(&self) -> Option<String> {
        if !self.installed() {
            return None;
        }
        workdir::head(&self.local_path).ok()
    }

    /// Whether the working tree has uncommitted modifications. Lenient:
    /// a missing or unreadable tree reads as clean.
    pub fn dirty(&self) -> bool {
        self.installed() && workdir::dirty(&self.local_path).unwrap_or(false)
    }

    /// Reverse-map the working revision through the release set.
    ///
    /// A dirty tree is always [`InstalledVersion::Unknown`]: it cannot be
    /// trusted to represent any known release, whatever its revision. So
    /// is an existing directory whose repository state cannot be read.
    /// When two releases declare the same revision the last registry entry
    /// wins (known ambiguity; registries are assumed revision-unique).
    pub fn installed_version(&self) -> InstalledVersion {
        if !self.installed() {
            return InstalledVersion::NotInstalled;
        }
        if self.dirty() {
            return InstalledVersion::Unknown;
        }
        let Some(revision) = self.working_revision() else {
            return InstalledVersion::Unknown;
        };

        let mut version = None;
        for release in &self.record.releases {
            if release.commit == revision {
                version = Some(release.version.clone());
            }
        }
        version.map(InstalledVersion::Version).unwrap_or(InstalledVersion::Unknown)
    }

    /// Release labels satisfying `specifier`, newest first, version-sort
    /// ties broken by registry order. An empty result is not an error;
    /// the caller decides whether that matters.
    pub fn find_matching_releases(&self, specifier: &VersionConstraint) -> Vec<String> {
        let mut matching: Vec<(Version, String)> = self
            .record
            .releases
            .iter()
            .filter_map(|release| {
                parse_label(&release.version)
                    .ok()
                    .filter(|version| specifier.matches(version))
                    .map(|version| (version, release.version.clone()))
            })
            .collect();
        // Stable sort: equal versions keep registry order
        matching.sort_by(|a, b| b.0.cmp(&a.0));
        matching.into_iter().map(|(_, label)| label).collect()
    }

    /// Every release label, newest first. Labels that do not parse as
    /// versions sort after all that do, keeping registry order among
    /// themselves.
    pub fn sorted_releases(&self) -> Vec<String> {
        let mut labels: Vec<(Option<Version>, String)> = self
            .record
            .releases
            .iter()
            .map(|release| (parse_label(&release.version).ok(), release.version.clone()))
            .collect();
        labels.sort_by(|a, b| match (&a.0, &b.0) {
            (Some(left), Some(right)) => right.cmp(left),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        labels.into_iter().map(|(_, label)| label).collect()
    }

    /// The numerically highest release, for "install latest".
    pub fn latest_release(&self) -> Result<String> {
        self.sorted_releases()
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoReleases {
                name: self.name.clone(),
            })
    }

    /// The release declaring `version` exactly.
    pub fn release(&self, version: &str) -> Result<&Release> {
        self.record
            .releases
            .get(version)
            .ok_or_else(|| {
                Error::Registry(lab_registry::Error::UnknownRelease {
                    app: self.name.clone(),
                    version: version.to_string(),
                })
            })
    }

    /// Requirements of `version` with no fulfilling host package, across
    /// every declared ecosystem, in declaration order.
    ///
    /// An unrecognized ecosystem key fails before any matching happens:
    /// that is a defect in the registry data, checked even for ecosystems
    /// a caller might not care about.
    pub fn find_incompatibilities(
        &self,
        version: &str,
        host: &[HostPackage],
    ) -> Result<Vec<Requirement>> {
        let release = self.release(version)?;
        let mut unmet = Vec::new();
        for (key, declarations) in &release.dependencies {
            Ecosystem::from_key(key)?;
            let requirements = declarations
                .iter()
                .map(|input| Requirement::parse(input))
                .collect::<lab_registry::Result<Vec<_>>>()?;
            unmet.extend(compat::find_incompatibilities(&requirements, host).cloned());
        }
        Ok(unmet)
    }

    /// Whether every declared requirement of `version` is satisfiable by
    /// the host inventory.
    pub fn is_compatible(&self, version: &str, host: &[HostPackage]) -> Result<bool> {
        Ok(self.find_incompatibilities(version, host)?.is_empty())
    }

    /// Install `version`, or the numerically highest release when `None`.
    ///
    /// Any existing working directory is removed first; there is no
    /// in-place update and no restore on failure; a failed clone leaves
    /// the app uninstalled. The clone ref is the version label itself,
    /// taken from the record's git URL with any `#fragment` stripped.
    /// Returns the installed version label.
    pub fn install(&self, version: Option<&str>) -> Result<String> {
        if self.record.releases.is_empty() {
            return Err(Error::NoReleases {
                name: self.name.clone(),
            });
        }
        let version = match version {
            Some(label) => {
                self.release(label)?;
                label.to_string()
            }
            None => self.latest_release()?,
        };

        self.uninstall()?;

        let url = strip_fragment(&self.record.git_url);
        workdir::clone_at(url, &version, &self.local_path).map_err(|source| Error::Install {
            name: self.name.clone(),
            path: self.local_path.clone(),
            source,
        })?;

        tracing::info!(app = %self.name, version = %version, "installed app");
        Ok(version)
    }

    /// Remove the working directory if present. Idempotent; never
    /// consults dirty or unknown-version state; refusing destructive
    /// removals is the management surface's policy, not the entity's.
    pub fn uninstall(&self) -> Result<()> {
        if self.installed() {
            tracing::info!(app = %self.name, "uninstalling app");
        }
        workdir::remove(&self.local_path)?;
        Ok(())
    }
}

/// Only the base repository URL is ever cloned; a `#subpath` fragment in
/// the registry's URL is discarded.
fn strip_fragment(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}
