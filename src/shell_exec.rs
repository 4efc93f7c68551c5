//! External command execution
//!
//! Every `svn` invocation goes through [`Cmd`], which logs the command line
//! before spawning and emits a trace line with its duration afterwards. Run
//! with `-vv` (or `RUST_LOG=debug`) to see both.

use std::borrow::Cow;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;
use std::time::Instant;

/// Monotonic epoch for trace timestamps.
static TRACE_EPOCH: OnceLock<Instant> = OnceLock::new();

fn trace_epoch() -> &'static Instant {
    TRACE_EPOCH.get_or_init(Instant::now)
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| shell_escape::escape(Cow::Borrowed(part)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builder for executing commands with logging and tracing.
///
/// # Examples
///
/// ```no_run
/// use l10n_sync::shell_exec::Cmd;
///
/// let output = Cmd::new("svn")
///     .args(["update", "--depth", "files", "build/trunk/templates"])
///     .context("trunk")
///     .run()?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
    context: Option<String>,
}

impl Cmd {
    /// Create a new command builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            context: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the logging context (the working copy or language being processed).
    pub fn context(mut self, ctx: impl Into<String>) -> Self {
        self.context = Some(ctx.into());
        self
    }

    /// The command line as it will be logged.
    pub fn display(&self) -> String {
        display_command(&self.program, &self.args)
    }

    /// Execute the command to completion and return its captured output.
    ///
    /// A non-zero exit status is not an error here; callers inspect `status`.
    pub fn run(self) -> std::io::Result<Output> {
        let cmd_str = self.display();

        match &self.context {
            Some(ctx) => log::debug!("$ {} [{}]", cmd_str, ctx),
            None => log::debug!("$ {}", cmd_str),
        }

        let t0 = Instant::now();
        let ts = t0.duration_since(*trace_epoch()).as_micros() as u64;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let result = cmd.output();

        let dur_us = t0.elapsed().as_micros() as u64;
        let context = self.context.as_deref().unwrap_or("-");
        match &result {
            Ok(output) => log::debug!(
                "[l10n-trace] ts={} context={} cmd=\"{}\" dur_us={} ok={}",
                ts,
                context,
                cmd_str,
                dur_us,
                output.status.success()
            ),
            Err(e) => log::debug!(
                "[l10n-trace] ts={} context={} cmd=\"{}\" dur_us={} err=\"{}\"",
                ts,
                context,
                cmd_str,
                dur_us,
                e
            ),
        }

        result
    }
}
