//! Swift toolchain version model
//!
//! Parses user-supplied version strings into a [`VersionIdentifier`] and
//! orders identifiers across both kinds.
//!
//! # Modules
//!
//! - [`release`]: Tagged release versions (`3.1.1`)
//! - [`snapshot`]: Dated development snapshots (`swift-4.0-DEVELOPMENT-SNAPSHOT-2017-08-04-a`)
//! - [`identifier`]: The release-or-snapshot union and its ordering
//! - [`parser`]: String to identifier conversion
//! - [`error`]: Parse and resolve error types

pub mod error;
pub mod identifier;
pub mod parser;
pub mod release;
pub mod snapshot;

pub use error::{ParseError, ResolveError};
pub use identifier::{VersionIdentifier, latest};
pub use parser::parse_version;
pub use release::ReleaseVersion;
pub use snapshot::DevelopmentSnapshot;
