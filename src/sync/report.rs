//! Outcome and error types of a sync run.

use std::path::PathBuf;

use strum::Display;

use crate::vcs::VcsError;

/// The kind of step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StepKind {
    #[strum(to_string = "checkout")]
    Checkout,
    #[strum(to_string = "update")]
    Update,
    #[strum(to_string = "copy template")]
    CopyTemplate,
    #[strum(to_string = "fetch language list")]
    FetchLanguages,
    #[strum(to_string = "create directory")]
    CreateDir,
    #[strum(to_string = "copy translation")]
    CopyTranslation,
    #[strum(to_string = "stage")]
    Stage,
}

#[derive(Debug)]
pub enum StepError {
    Vcs(VcsError),
    Io(std::io::Error),
}

impl StepError {
    /// Subprocess stderr worth quoting to the user, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            StepError::Vcs(e) => e.stderr(),
            StepError::Io(_) => None,
        }
    }
}

impl From<VcsError> for StepError {
    fn from(e: VcsError) -> Self {
        StepError::Vcs(e)
    }
}

impl From<std::io::Error> for StepError {
    fn from(e: std::io::Error) -> Self {
        StepError::Io(e)
    }
}

impl std::fmt::Display for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepError::Vcs(e) => write!(f, "{e}"),
            StepError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StepError {}

/// A step that did not succeed, with where it happened.
#[derive(Debug)]
pub struct StepFailure {
    pub kind: StepKind,
    /// Language being processed, `None` for setup steps
    pub language: Option<String>,
    /// Path or URL the step operated on
    pub target: String,
    pub error: StepError,
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(lang) = &self.language {
            write!(f, "[{lang}] ")?;
        }
        write!(f, "{} {} failed: {}", self.kind, self.target, self.error)
    }
}

impl std::error::Error for StepFailure {}

/// Errors that end a sync run.
#[derive(Debug)]
pub enum SyncError {
    /// The workspace directory already exists or could not be created
    Workspace {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A step failed under [`ErrorPolicy::FailFast`](crate::config::ErrorPolicy::FailFast)
    Step(StepFailure),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Workspace { path, source }
                if source.kind() == std::io::ErrorKind::AlreadyExists =>
            {
                write!(
                    f,
                    "Workspace {} already exists; remove it or choose another --workdir",
                    path.display()
                )
            }
            SyncError::Workspace { path, source } => {
                write!(f, "Cannot create workspace {}: {source}", path.display())
            }
            SyncError::Step(failure) => write!(f, "{failure}"),
        }
    }
}

impl std::error::Error for SyncError {}

/// What a completed run did.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Whether the template was copied to stable
    pub template_copied: bool,
    /// Languages considered, after exclusions, in listing order
    pub languages: Vec<String>,
    /// Languages whose catalog was copied and staged
    pub synced: Vec<String>,
    /// Languages without a catalog in trunk
    pub skipped: Vec<String>,
    /// Listing entries that are not plain directory names, never touched
    pub rejected: Vec<String>,
    /// Failures recorded under `ContinueOnError`
    pub failures: Vec<StepFailure>,
}

impl SyncReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Languages that had at least one failed step.
    pub fn failed_languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = Vec::new();
        for lang in self.failures.iter().filter_map(|f| f.language.as_deref()) {
            if !langs.contains(&lang) {
                langs.push(lang);
            }
        }
        langs
    }
}
