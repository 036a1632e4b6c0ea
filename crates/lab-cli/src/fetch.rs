//! Registry document loading.
//!
//! The registry source is either an `http(s)` URL or a local file path;
//! both yield the same JSON document. Fetching blocks the caller; there
//! is no timeout or retry policy at this layer.

use std::str::FromStr;

use lab_registry::Registry;

use crate::error::{CliError, Result};

/// Load and decode the registry document from `source`.
pub fn load_registry(source: &str) -> Result<Registry> {
    tracing::debug!(source, "loading app registry");
    let document = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_http(source)?
    } else {
        std::fs::read_to_string(source).map_err(|e| fetch_error(source, e))?
    };
    Registry::from_str(&document).map_err(|e| fetch_error(source, e))
}

fn fetch_http(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url).map_err(|e| fetch_error(url, e))?;
    let response = response.error_for_status().map_err(|e| fetch_error(url, e))?;
    response.text().map_err(|e| fetch_error(url, e))
}

fn fetch_error(url: &str, err: impl std::fmt::Display) -> CliError {
    CliError::RegistryFetch {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_registry_from_file_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("apps_meta.json");
        std::fs::write(
            &path,
            r#"{"apps": {"quantum-viewer": {"git_url": "https://x/y.git", "releases": {}}}}"#,
        )
        .unwrap();

        let registry = load_registry(path.to_str().unwrap()).unwrap();
        assert!(registry.contains("quantum-viewer"));
    }

    #[test]
    fn missing_file_reports_source() {
        let err = load_registry("/nonexistent/apps_meta.json").unwrap_err();
        assert!(matches!(err, CliError::RegistryFetch { ref url, .. } if url.contains("apps_meta")));
    }

    #[test]
    fn malformed_document_reports_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("apps_meta.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_registry(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::RegistryFetch { .. }));
    }
}
