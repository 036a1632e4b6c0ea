//! Registry document builders matching the published JSON shape.

use serde_json::{Value, json};

use crate::git::TaggedRelease;

/// A release body with a commit and no dependency declarations.
pub fn release_entry(commit: &str) -> Value {
    json!({ "commit": commit, "dependencies": {} })
}

/// An app entry pointing at `git_url`, with one release per fixture tag.
pub fn app_entry(git_url: &str, releases: &[TaggedRelease]) -> Value {
    let mut body = serde_json::Map::new();
    for release in releases {
        body.insert(release.version.clone(), release_entry(&release.commit));
    }
    json!({
        "git_url": git_url,
        "categories": [],
        "metadata": {},
        "releases": Value::Object(body),
    })
}

/// A whole registry document: `{"apps": {name: entry, ...}}`.
pub fn registry_document(apps: &[(&str, Value)]) -> Value {
    let mut map = serde_json::Map::new();
    for (name, entry) in apps {
        map.insert((*name).to_string(), entry.clone());
    }
    json!({ "apps": Value::Object(map) })
}
