//! End-to-end lifecycle tests over the full stack: registry document ->
//! app entity -> git working directory, with real temp repositories.

use std::fs;

use lab_core::{App, HostPackage, InstalledVersion};
use lab_registry::{Registry, VersionConstraint};
use lab_test_utils::{app_entry, app_remote, registry_document};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Two apps in one registry, each with its own remote.
fn two_app_registry() -> (Vec<TempDir>, TempDir, Registry) {
    let viewer_remote = TempDir::new().unwrap();
    let viewer_releases = app_remote(viewer_remote.path(), &["1.0.0", "1.1.0"]);

    let explorer_remote = TempDir::new().unwrap();
    let explorer_releases = app_remote(explorer_remote.path(), &["0.2.0"]);

    let document = registry_document(&[
        (
            "quantum-viewer",
            app_entry(viewer_remote.path().to_str().unwrap(), &viewer_releases),
        ),
        (
            "band-explorer",
            app_entry(explorer_remote.path().to_str().unwrap(), &explorer_releases),
        ),
    ]);
    let registry = Registry::from_value(document).unwrap();

    let apps_root = TempDir::new().unwrap();
    (vec![viewer_remote, explorer_remote], apps_root, registry)
}

#[test]
fn resolve_install_and_report_lifecycle() {
    let (_remotes, apps_root, registry) = two_app_registry();
    let app = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();

    // Not installed yet
    assert_eq!(app.installed_version(), InstalledVersion::NotInstalled);

    // Resolve a range, install the highest match, and read it back
    let range = VersionConstraint::parse(">=1.0,<1.1").unwrap();
    let matching = app.find_matching_releases(&range);
    assert_eq!(matching, vec!["1.0.0"]);

    app.install(Some(matching[0].as_str())).unwrap();
    assert_eq!(
        app.installed_version(),
        InstalledVersion::Version("1.0.0".to_string())
    );

    // Bare install upgrades to the numerically highest release
    app.install(None).unwrap();
    assert_eq!(
        app.installed_version(),
        InstalledVersion::Version("1.1.0".to_string())
    );
}

#[test]
fn apps_are_independent() {
    let (_remotes, apps_root, registry) = two_app_registry();
    let viewer = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();
    let explorer = App::from_registry(&registry, "band-explorer", apps_root.path()).unwrap();

    viewer.install(None).unwrap();
    assert_eq!(
        explorer.installed_version(),
        InstalledVersion::NotInstalled
    );

    explorer.install(None).unwrap();
    viewer.uninstall().unwrap();
    assert_eq!(viewer.installed_version(), InstalledVersion::NotInstalled);
    assert_eq!(
        explorer.installed_version(),
        InstalledVersion::Version("0.2.0".to_string())
    );
}

#[test]
fn dirty_tree_degrades_to_unknown_until_reinstalled() {
    let (_remotes, apps_root, registry) = two_app_registry();
    let app = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();

    app.install(None).unwrap();
    fs::write(app.local_path().join("start.md"), "local edit\n").unwrap();
    assert!(app.dirty());
    assert_eq!(app.installed_version(), InstalledVersion::Unknown);

    // Reinstall replaces the tree wholesale and clears the dirty state
    app.install(None).unwrap();
    assert!(!app.dirty());
    assert_eq!(
        app.installed_version(),
        InstalledVersion::Version("1.1.0".to_string())
    );
}

#[test]
fn fresh_entities_agree_with_disk_state() {
    // Stateless re-derivation: a second entity for the same app sees
    // whatever the first one did to the filesystem.
    let (_remotes, apps_root, registry) = two_app_registry();
    let first = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();
    first.install(None).unwrap();

    let second = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();
    assert_eq!(
        second.installed_version(),
        InstalledVersion::Version("1.1.0".to_string())
    );

    second.uninstall().unwrap();
    assert_eq!(first.installed_version(), InstalledVersion::NotInstalled);
}

#[test]
fn compatibility_is_checked_per_release() {
    let remote = TempDir::new().unwrap();
    let releases = app_remote(remote.path(), &["1.0.0"]);
    let apps_root = TempDir::new().unwrap();

    // Hand-build a document so the release declares a requirement
    let document = format!(
        r#"{{"apps": {{"quantum-viewer": {{
            "git_url": "{url}",
            "releases": {{
                "1.0.0": {{
                    "commit": "{commit}",
                    "dependencies": {{"python-requirements": ["numpy>=1.20"]}}
                }}
            }}
        }}}}}}"#,
        url = remote.path().display(),
        commit = releases[0].commit,
    );
    let registry: Registry = document.parse().unwrap();
    let app = App::from_registry(&registry, "quantum-viewer", apps_root.path()).unwrap();

    let bare_host: Vec<HostPackage> = vec![];
    assert!(!app.is_compatible("1.0.0", &bare_host).unwrap());

    let stocked_host = vec![HostPackage::new("numpy", "1.24.2")];
    assert!(app.is_compatible("1.0.0", &stocked_host).unwrap());

    // Incompatibility never blocks the core protocol; gating is the
    // management surface's job
    app.install(Some("1.0.0")).unwrap();
    assert_eq!(
        app.installed_version(),
        InstalledVersion::Version("1.0.0".to_string())
    );
}
