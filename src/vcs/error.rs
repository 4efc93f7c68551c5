//! Errors from version-control commands.

/// A version-control operation that did not succeed.
#[derive(Debug)]
pub enum VcsError {
    /// The client binary could not be started at all
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The client ran and exited unsuccessfully
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },
}

impl VcsError {
    /// Captured stderr of a failed command, if there is any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            VcsError::CommandFailed { stderr, .. } if !stderr.is_empty() => Some(stderr),
            _ => None,
        }
    }
}

impl std::fmt::Display for VcsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VcsError::Spawn { program, source } => {
                write!(f, "failed to run {program}: {source}")
            }
            VcsError::CommandFailed {
                command,
                exit_code: Some(code),
                ..
            } => write!(f, "`{command}` exited with status {code}"),
            VcsError::CommandFailed { command, .. } => {
                write!(f, "`{command}` was terminated by a signal")
            }
        }
    }
}

impl std::error::Error for VcsError {}
