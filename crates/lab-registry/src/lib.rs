//! App release registry for the lab app manager.
//!
//! The registry is an immutable, externally supplied document mapping app
//! names to their metadata and known releases. This crate provides the
//! parsed data model ([`Registry`], [`AppRecord`], [`Release`]), version
//! range constraints ([`VersionConstraint`]), and package requirement
//! parsing ([`Requirement`], [`AppSpecifier`]).
//!
//! The registry document itself is fetched and decoded by the caller; this
//! crate never mutates an entry after parsing.

pub mod error;
pub mod model;
pub mod registry;
pub mod requirement;
pub mod version;

pub use error::{Error, Result};
pub use model::{AppRecord, Release, Releases};
pub use registry::Registry;
pub use requirement::{AppSpecifier, Requirement, normalize_name};
pub use version::{VersionConstraint, parse_label};
