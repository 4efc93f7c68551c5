use std::path::PathBuf;

use clap::{ArgAction, Parser};
use l10n_sync::{ErrorPolicy, SyncConfig};

/// Copy a package's translations from the trunk l10n tree into stable.
///
/// Checks out sparse working copies of both trees into a fresh workspace,
/// copies the template and every language's catalog that exists in trunk,
/// and schedules the copies for addition. Review and commit the stable
/// working copy yourself afterwards.
#[derive(Parser, Debug)]
#[command(name = "l10n-sync", version, about, long_about)]
pub struct Cli {
    /// Config file [default: $L10N_SYNC_CONFIG_PATH, then ~/.config/l10n-sync/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Workspace directory to create (must not exist)
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// URL of the trunk l10n root
    #[arg(long, value_name = "URL")]
    pub trunk_url: Option<String>,

    /// URL of the stable l10n root
    #[arg(long, value_name = "URL")]
    pub stable_url: Option<String>,

    /// Catalog base name (`<NAME>.po`, `<NAME>.pot`)
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Directory under `messages/` holding the catalog
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    /// Language to leave out (repeatable; replaces the configured list)
    #[arg(long = "exclude", value_name = "LANG")]
    pub exclude: Vec<String>,

    /// Subversion client to run
    #[arg(long = "svn", value_name = "PROGRAM")]
    pub svn_program: Option<String>,

    /// Stop at the first failing step
    #[arg(long)]
    pub fail_fast: bool,

    /// Exit with status 2 if any step failed
    #[arg(long)]
    pub strict: bool,

    /// Verbose output (-v info, -vv shows every svn command)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut SyncConfig) {
        if let Some(workdir) = &self.workdir {
            config.workdir = workdir.clone();
        }
        if let Some(url) = &self.trunk_url {
            config.trunk_url = url.clone();
        }
        if let Some(url) = &self.stable_url {
            config.stable_url = url.clone();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(module) = &self.module {
            config.module = module.clone();
        }
        if !self.exclude.is_empty() {
            config.excluded_languages = self.exclude.clone();
        }
        if let Some(program) = &self.svn_program {
            config.svn_program = program.clone();
        }
        if self.fail_fast {
            config.error_policy = ErrorPolicy::FailFast;
        }
    }
}
