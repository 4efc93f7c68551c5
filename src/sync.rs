//! Mirroring trunk translations into the stable tree.
//!
//! A run creates a fresh workspace, checks out both l10n roots sparsely and
//! walks the language list from trunk's `subdirs` file. For each language with
//! a catalog in trunk the file is copied over the stable one and scheduled for
//! addition. Nothing is committed.

mod report;

use std::fmt::Display;

pub use report::{StepError, StepFailure, StepKind, SyncError, SyncReport};

use crate::config::{ErrorPolicy, SyncConfig};
use crate::languages::{is_language_dir_name, parse_listing};
use crate::vcs::Vcs;
use crate::workspace::{Tree, Workspace};

/// Milestones reported while a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    CheckingOut,
    UpdatingTemplates,
    FetchingLanguages,
    UpdatingLanguage(&'a str),
}

enum LanguageOutcome {
    Synced,
    Skipped,
    Failed,
}

/// Drives one sync run against a [`Vcs`].
#[derive(Debug)]
pub struct Orchestrator<V> {
    config: SyncConfig,
    workspace: Workspace,
    vcs: V,
}

impl<V: Vcs> Orchestrator<V> {
    pub fn new(config: SyncConfig, vcs: V) -> Self {
        let workspace = Workspace::new(&config.workdir, &config.module);
        Self {
            config,
            workspace,
            vcs,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn run(&self) -> Result<SyncReport, SyncError> {
        self.run_with(|_| {})
    }

    /// Run the sync, calling `on_progress` at each milestone.
    ///
    /// Fails if the workspace cannot be created, or at the first failing step
    /// under [`ErrorPolicy::FailFast`]. Otherwise step failures are collected in
    /// the returned report.
    pub fn run_with(
        &self,
        mut on_progress: impl FnMut(Progress<'_>),
    ) -> Result<SyncReport, SyncError> {
        let root = self.workspace.root();
        self.workspace
            .create()
            .map_err(|source| SyncError::Workspace {
                path: root.to_path_buf(),
                source,
            })?;
        log::info!("Created workspace {}", root.display());

        let mut report = SyncReport::default();

        on_progress(Progress::CheckingOut);
        for (tree, url) in [
            (Tree::Trunk, &self.config.trunk_url),
            (Tree::Stable, &self.config.stable_url),
        ] {
            let dest = self.workspace.tree(tree);
            self.attempt(&mut report, StepKind::Checkout, None, url, || {
                self.vcs.checkout(url, &dest, false).map_err(StepError::from)
            })?;
        }

        on_progress(Progress::UpdatingTemplates);
        for tree in Tree::BOTH {
            self.update_chain(&mut report, tree, "templates", None)?;
        }
        let pot = self.config.pot_file_name();
        let from = self.workspace.template_dir(Tree::Trunk).join(&pot);
        let to = self.workspace.template_dir(Tree::Stable).join(&pot);
        let copied = self.attempt(&mut report, StepKind::CopyTemplate, None, to.display(), || {
            std::fs::copy(&from, &to).map(drop).map_err(StepError::from)
        })?;
        report.template_copied = copied.is_some();

        on_progress(Progress::FetchingLanguages);
        let url = self.config.subdirs_url();
        let listing = self
            .attempt(&mut report, StepKind::FetchLanguages, None, &url, || {
                self.vcs.cat(&url).map_err(StepError::from)
            })?
            .unwrap_or_default();
        let (languages, rejected): (Vec<_>, Vec<_>) =
            parse_listing(&listing, &self.config.excluded_languages)
                .into_iter()
                .partition(|code| is_language_dir_name(code));
        for code in &rejected {
            log::warn!("Ignoring {code:?} in {url}: not a language directory name");
        }
        report.rejected = rejected;
        log::info!("{} languages to process", languages.len());

        for lang in &languages {
            on_progress(Progress::UpdatingLanguage(lang));
            match self.sync_language(&mut report, lang)? {
                LanguageOutcome::Synced => report.synced.push(lang.clone()),
                LanguageOutcome::Skipped => report.skipped.push(lang.clone()),
                LanguageOutcome::Failed => {}
            }
        }
        report.languages = languages;

        Ok(report)
    }

    fn sync_language(
        &self,
        report: &mut SyncReport,
        lang: &str,
    ) -> Result<LanguageOutcome, SyncError> {
        for tree in Tree::BOTH {
            self.update_chain(report, tree, lang, Some(lang))?;
        }

        let po = self.config.po_file_name();
        let source = self.workspace.language_dir(Tree::Trunk, lang).join(&po);
        if !source.is_file() {
            log::debug!("[{lang}] no {po} in trunk, skipping");
            return Ok(LanguageOutcome::Skipped);
        }

        let stable_dir = self.workspace.language_dir(Tree::Stable, lang);
        if !stable_dir.exists() {
            let created = self.attempt(
                report,
                StepKind::CreateDir,
                Some(lang),
                stable_dir.display(),
                || self.vcs.mkdir_parents(&stable_dir).map_err(StepError::from),
            )?;
            if created.is_none() {
                return Ok(LanguageOutcome::Failed);
            }
        }

        let dest = stable_dir.join(&po);
        let copied = self.attempt(
            report,
            StepKind::CopyTranslation,
            Some(lang),
            dest.display(),
            || std::fs::copy(&source, &dest).map(drop).map_err(StepError::from),
        )?;
        if copied.is_none() {
            return Ok(LanguageOutcome::Failed);
        }

        let staged = self.attempt(report, StepKind::Stage, Some(lang), dest.display(), || {
            self.vcs.add(&dest).map_err(StepError::from)
        })?;
        if staged.is_none() {
            return Ok(LanguageOutcome::Failed);
        }

        log::info!("[{lang}] staged {}", dest.display());
        Ok(LanguageOutcome::Synced)
    }

    /// Update `<top>`, `<top>/messages` and `<top>/messages/<module>` of `tree`.
    ///
    /// A failed update does not stop the rest of the chain.
    fn update_chain(
        &self,
        report: &mut SyncReport,
        tree: Tree,
        top: &str,
        language: Option<&str>,
    ) -> Result<(), SyncError> {
        for path in self.workspace.messages_chain(tree, top) {
            self.attempt(report, StepKind::Update, language, path.display(), || {
                self.vcs.update(&path, false).map_err(StepError::from)
            })?;
        }
        Ok(())
    }

    /// Run one step and apply the error policy to its failure.
    ///
    /// Returns `Ok(None)` when the step failed and the run continues.
    fn attempt<T>(
        &self,
        report: &mut SyncReport,
        kind: StepKind,
        language: Option<&str>,
        target: impl Display,
        step: impl FnOnce() -> Result<T, StepError>,
    ) -> Result<Option<T>, SyncError> {
        let error = match step() {
            Ok(value) => return Ok(Some(value)),
            Err(error) => error,
        };

        let failure = StepFailure {
            kind,
            language: language.map(str::to_string),
            target: target.to_string(),
            error,
        };
        match self.config.error_policy {
            ErrorPolicy::FailFast => Err(SyncError::Step(failure)),
            ErrorPolicy::ContinueOnError => {
                log::warn!("{failure}");
                report.failures.push(failure);
                Ok(None)
            }
        }
    }
}
