//! Sync configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults (the KDE l10n-kde4 trunk and stable trees)
//! 2. The TOML config file, if present (see [`path::config_path`])
//! 3. `L10N_SYNC_*` environment variables, e.g. `L10N_SYNC_TRUNK_URL`
//! 4. Command-line flags, applied by the binary
//!
//! ```toml
//! trunk-url = "svn+ssh://svn.kde.org/home/kde/trunk/l10n-kde4"
//! stable-url = "svn+ssh://svn.kde.org/home/kde/branches/stable/l10n-kde4"
//! workdir = "build"
//! package = "libktorrent"
//! module = "extragear-network"
//! excluded-languages = ["x-test"]
//! error-policy = "continue-on-error"
//! ```

pub mod path;

use std::path::{Path, PathBuf};

use config::{Case, Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::languages::TEST_LANGUAGE;

/// Prefix of the environment variables that override config keys.
pub const ENV_PREFIX: &str = "L10N_SYNC";

const SVN_BASE: &str = "svn+ssh://svn.kde.org/home/kde/";

/// What to do when a step of the sync fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPolicy {
    /// Record the failure and carry on with the next step
    #[default]
    ContinueOnError,
    /// Stop the run at the first failing step
    FailFast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SyncConfig {
    /// Root of the development l10n tree
    pub trunk_url: String,
    /// Root of the release-branch l10n tree
    pub stable_url: String,
    /// Local directory for both working copies; must not exist yet
    pub workdir: PathBuf,
    /// Base name of the translation catalog (`<package>.po`, `<package>.pot`)
    pub package: String,
    /// Directory under `messages/` that holds the catalog
    pub module: String,
    /// Language codes from `subdirs` that are never synced
    pub excluded_languages: Vec<String>,
    /// Subversion client to run
    pub svn_program: String,
    pub error_policy: ErrorPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            trunk_url: format!("{SVN_BASE}trunk/l10n-kde4"),
            stable_url: format!("{SVN_BASE}branches/stable/l10n-kde4"),
            workdir: PathBuf::from("build"),
            package: "libktorrent".to_string(),
            module: "extragear-network".to_string(),
            excluded_languages: vec![TEST_LANGUAGE.to_string()],
            svn_program: "svn".to_string(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl SyncConfig {
    /// Load the configuration from `config_file` (if given) and the process environment.
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&SyncConfig::default())?);

        if let Some(file) = config_file {
            log::debug!("Loading config from {}", file.display());
            builder = builder.add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder
            .add_source(
                env.convert_case(Case::Kebab)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("excluded-languages"),
            )
            .build()?
            .try_deserialize()
    }

    /// URL of the `subdirs` listing of language directories in trunk.
    pub fn subdirs_url(&self) -> String {
        format!("{}/subdirs", self.trunk_url.trim_end_matches('/'))
    }

    /// File name of a language's translation catalog.
    pub fn po_file_name(&self) -> String {
        format!("{}.po", self.package)
    }

    /// File name of the catalog template.
    pub fn pot_file_name(&self) -> String {
        format!("{}.pot", self.package)
    }
}
