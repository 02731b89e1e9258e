//! Download location resolution
//!
//! - [`platform`]: Platform tag to archive suffix table
//! - [`url`]: Builds archive names and download URLs from a parsed version

pub mod platform;
pub mod url;

pub use platform::{Platform, PlatformTable};
pub use url::{ResolvedToolchain, UrlResolver};
