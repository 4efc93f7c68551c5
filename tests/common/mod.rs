
use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

pub const MODULE_DIR: &str = "messages/extragear-network";

/// Remote trunk/stable l10n trees plus a mock `svn`, all inside a temp dir.
pub struct TestL10n {
    temp_dir: TempDir,
    pub trunk: PathBuf,
    pub stable: PathBuf,
    pub workdir: PathBuf,
    bin_dir: PathBuf,
    log: PathBuf,
}

impl TestL10n {
    /// Trees with a template on both sides and `subdirs` listing `languages`.
    pub fn new(languages: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        // Canonicalize to resolve symlinks (important on macOS where /var is symlink to /private/var)
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp path");

        let bin_dir = root.join("bin");
        std::fs::create_dir(&bin_dir).unwrap();
        mock_commands::write_mock_svn(&bin_dir);

        let repo = Self {
            trunk: root.join("remote/trunk/l10n-kde4"),
            stable: root.join("remote/branches/stable/l10n-kde4"),
            workdir: root.join("build"),
            log: root.join("svn.log"),
            bin_dir,
            temp_dir,
        };

        let mut listing = languages.join("\n");
        listing.push('\n');
        repo.write_trunk("subdirs", &listing);
        repo.write_trunk(
            &format!("templates/{MODULE_DIR}/libktorrent.pot"),
            "msgid \"trunk template\"\n",
        );
        repo.write_stable(
            &format!("templates/{MODULE_DIR}/libktorrent.pot"),
            "msgid \"stable template\"\n",
        );
        repo
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_trunk(&self, rel: &str, contents: &str) {
        write_file(&self.trunk.join(rel), contents);
    }

    pub fn write_stable(&self, rel: &str, contents: &str) {
        write_file(&self.stable.join(rel), contents);
    }

    pub fn trunk_url(&self) -> String {
        format!("file://{}", self.trunk.display())
    }

    pub fn stable_url(&self) -> String {
        format!("file://{}", self.stable.display())
    }

    /// Path inside the local workspace.
    pub fn local(&self, rel: &str) -> PathBuf {
        self.workdir.join(rel)
    }

    /// Run `l10n-sync` against these trees with `extra` arguments appended.
    pub fn run(&self, extra: &[&str]) -> Output {
        self.run_with_env(extra, &[])
    }

    pub fn run_with_env(&self, extra: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = cargo_bin_cmd!("l10n-sync");
        cmd.current_dir(self.temp_path())
            .env("FAKE_SVN_LOG", &self.log)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            // Keep the user's real config out of tests
            .env("L10N_SYNC_CONFIG_PATH", self.temp_path().join("no-config.toml"))
            .arg("--svn")
            .arg(self.bin_dir.join("svn"))
            .arg("--workdir")
            .arg(&self.workdir)
            .arg("--trunk-url")
            .arg(self.trunk_url());
        // clap rejects a repeated `--stable-url`, so only pass the fixture's
        // URL when the caller doesn't supply its own.
        if !extra.contains(&"--stable-url") {
            cmd.arg("--stable-url").arg(self.stable_url());
        }
        cmd.args(extra);
        for (key, val) in envs {
            cmd.env(key, val);
        }
        cmd.output().expect("failed to run l10n-sync")
    }

    /// Argument lines of every mock `svn` invocation so far.
    pub fn svn_calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Snapshot settings that replace the temp directory with `[TEMP]`.
    pub fn snapshot_settings(&self) -> insta::Settings {
        let mut settings = insta::Settings::clone_current();
        let root = self.workdir.parent().unwrap().display().to_string();
        settings.add_filter(&regex::escape(&root), "[TEMP]");
        settings
    }

    /// Paths passed to `svn add`.
    pub fn staged(&self) -> Vec<PathBuf> {
        self.svn_calls()
            .iter()
            .filter_map(|line| line.strip_prefix("--non-interactive add --quiet --force "))
            .map(PathBuf::from)
            .collect()
    }
}

fn write_file(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Exit code and both streams, in the layout used by output snapshots.
pub fn combined(output: &Output) -> String {
    format!(
        "exit_code: {}\n----- stdout -----\n{}\n----- stderr -----\n{}",
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout),
        stderr(output)
    )
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
