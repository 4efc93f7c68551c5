mod cli;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use color_print::cformat;
use l10n_sync::config::path::config_path;
use l10n_sync::sync::Progress;
use l10n_sync::vcs::Svn;
use l10n_sync::{Orchestrator, SyncConfig, SyncError, SyncReport, output};

use cli::Cli;

/// Exit status for a run that could not finish.
const EXIT_FATAL: i32 = 1;

/// Exit status when `--strict` is set and some step failed.
const EXIT_STEP_FAILURES: i32 = 2;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let level = record.level();
            let style = buf.default_level_style(level);
            writeln!(buf, "{style}{level}{style:#} {}", record.args())
        })
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<SyncConfig> {
    let path = config_path(cli.config.clone());
    let mut config = SyncConfig::load(path.as_deref()).with_context(|| match &path {
        Some(p) => format!("Failed to load config from {}", p.display()),
        None => "Failed to load config".to_string(),
    })?;
    cli.apply_to(&mut config);
    log::debug!("Effective config: {config:?}");
    Ok(config)
}

fn print_progress(progress: Progress<'_>) {
    match progress {
        Progress::CheckingOut => output::progress("Checking out stable and trunk translations"),
        Progress::UpdatingTemplates => output::progress("Updating templates"),
        Progress::FetchingLanguages => output::progress("Fetching language list"),
        Progress::UpdatingLanguage(lang) => output::progress(format!("Updating {lang}")),
    }
}

fn print_summary(report: &SyncReport, config: &SyncConfig) {
    for failure in &report.failures {
        output::warning(failure);
        if let Some(detail) = failure.error.detail() {
            output::gutter(detail);
        }
    }

    let template = if report.template_copied {
        cformat!(", template <bold>{}</> updated", config.pot_file_name())
    } else {
        String::new()
    };
    let message = cformat!(
        "Synced <bold>{}</> of {} languages{}",
        report.synced.len(),
        report.languages.len(),
        template
    );
    if report.is_clean() {
        output::success(message);
    } else {
        output::warning(message);
    }

    if !report.skipped.is_empty() {
        output::info(format!(
            "Skipped (no {} in trunk): {}",
            config.po_file_name(),
            report.skipped.join(", ")
        ));
    }
    if !report.rejected.is_empty() {
        output::warning(format!(
            "Ignored listing entries that are not language directories: {}",
            report.rejected.join(", ")
        ));
    }
    let failed = report.failed_languages();
    if !failed.is_empty() {
        output::info(format!("Failed: {}", failed.join(", ")));
    }
    output::info(format!(
        "Review and commit {}",
        config.workdir.join("stable").display()
    ));
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli)?;
    let vcs = Svn::new(&config.svn_program);
    log::info!(
        "Syncing {} from {} into {} using {}",
        config.package,
        config.trunk_url,
        config.stable_url,
        vcs.program()
    );

    let orchestrator = Orchestrator::new(config, vcs);
    let report = match orchestrator.run_with(print_progress) {
        Ok(report) => report,
        Err(SyncError::Step(failure)) => {
            output::error(&failure);
            if let Some(detail) = failure.error.detail() {
                output::gutter(detail);
            }
            return Ok(EXIT_FATAL);
        }
        Err(err) => return Err(err.into()),
    };

    print_summary(&report, orchestrator.config());

    if cli.strict && !report.is_clean() {
        return Ok(EXIT_STEP_FAILURES);
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            output::error(format!("{err:#}"));
            std::process::exit(EXIT_FATAL);
        }
    }
}
