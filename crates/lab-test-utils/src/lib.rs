//! Shared test fixtures: local git "remotes" with tagged release history,
//! and registry documents wired to them.
//!
//! Everything here panics on failure; fixtures run inside tests only.

pub mod git;
pub mod registry;

pub use git::{TaggedRelease, app_remote, commit_file};
pub use registry::{app_entry, registry_document, release_entry};
