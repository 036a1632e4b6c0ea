//! Git working-directory adapter for the lab app manager.
//!
//! Bridges one app entity to one local version-controlled working
//! directory: read the current revision and dirty state, materialize a
//! shallow checkout of a release ref, and remove the tree again.

pub mod error;
pub mod workdir;

pub use error::{Error, Result};
pub use workdir::{clone_at, dirty, head, remove};
