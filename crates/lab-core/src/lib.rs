//! Core app-management layer for the lab platform.
//!
//! An *app* is a named, git-managed plugin directory. This crate combines
//! a registry record with a local working-directory path into an [`App`]
//! entity exposing installed-state queries, version resolution,
//! compatibility checks, and the install/uninstall protocol:
//!
//! ```text
//!        CLI / widgets
//!             |
//!          lab-core
//!             |
//!      +------+-------+
//!      |              |
//!   lab-git     lab-registry
//! ```
//!
//! Apps are stateless: every query re-derives its answer from the registry
//! snapshot and the live working-directory state, so there is no cached
//! installed-state to drift out of sync with the filesystem.

pub mod app;
pub mod compat;
pub mod config;
pub mod error;

pub use app::{App, InstalledVersion};
pub use compat::{Ecosystem, HostPackage, find_incompatibilities, is_compatible};
pub use error::{Error, Result};
