//! Mirror a package's translation catalogs from the trunk l10n tree into the
//! stable branch's working copy, ready for review and commit.

pub mod config;
pub mod languages;
pub mod output;
pub mod shell_exec;
pub mod styling;
pub mod sync;
pub mod vcs;
pub mod workspace;

pub use config::{ErrorPolicy, SyncConfig};
pub use sync::{Orchestrator, SyncError, SyncReport};
