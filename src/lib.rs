//! Prefix search over installed application launchers (`.desktop` files).
//!
//! [`sources::scanner::DirectoryScanner`] finds and parses launcher files,
//! [`engine::QueryEngine`] indexes them by lower-cased name in a
//! [`index::PrefixIndex`] and answers prefix queries.

pub mod config;
pub mod engine;
pub mod error;
pub mod executor;
pub mod index;
pub mod model;
pub mod render;
pub mod sources;

pub use engine::QueryEngine;
pub use index::PrefixIndex;
pub use model::LauncherRecord;
pub use sources::scanner::DirectoryScanner;
pub use sources::{ScanReport, Source};
