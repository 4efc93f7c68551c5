//! [`Vcs`] backed by the Subversion command-line client.

use std::path::Path;

use super::{Vcs, VcsError};
use crate::shell_exec::Cmd;

/// Runs `svn` subcommands, one process per operation.
///
/// Every invocation passes `--non-interactive` so a missing credential fails
/// the step instead of blocking on a prompt.
#[derive(Debug, Clone)]
pub struct Svn {
    program: String,
}

impl Svn {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn depth(recursive: bool) -> &'static str {
        if recursive { "infinity" } else { "files" }
    }

    fn run(&self, args: Vec<String>, context: &str) -> Result<String, VcsError> {
        let cmd = Cmd::new(&self.program)
            .arg("--non-interactive")
            .args(args)
            .context(context);
        let command = cmd.display();

        let output = cmd.run().map_err(|source| VcsError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command,
                exit_code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            log::debug!("{command}: {stderr}");
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for Svn {
    fn default() -> Self {
        Self::new("svn")
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Vcs for Svn {
    fn checkout(&self, url: &str, dest: &Path, recursive: bool) -> Result<(), VcsError> {
        self.run(
            vec![
                "checkout".into(),
                "--depth".into(),
                Self::depth(recursive).into(),
                url.into(),
                path_arg(dest),
            ],
            "checkout",
        )
        .map(drop)
    }

    fn update(&self, path: &Path, recursive: bool) -> Result<(), VcsError> {
        self.run(
            vec![
                "update".into(),
                "--depth".into(),
                Self::depth(recursive).into(),
                path_arg(path),
            ],
            "update",
        )
        .map(drop)
    }

    fn cat(&self, url: &str) -> Result<String, VcsError> {
        self.run(vec!["cat".into(), url.into()], "cat")
    }

    fn add(&self, path: &Path) -> Result<(), VcsError> {
        // --force: re-staging an already versioned file is a no-op, not an error
        self.run(
            vec![
                "add".into(),
                "--quiet".into(),
                "--force".into(),
                path_arg(path),
            ],
            "add",
        )
        .map(drop)
    }

    fn mkdir_parents(&self, path: &Path) -> Result<(), VcsError> {
        self.run(
            vec!["mkdir".into(), "--parents".into(), path_arg(path)],
            "mkdir",
        )
        .map(drop)
    }
}
