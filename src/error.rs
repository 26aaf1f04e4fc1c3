use thiserror::Error;

/// Errors returned by [`crate::IPSet`].
#[derive(Debug, Error)]
pub enum Error {
    /// The ipset binary could not be found on PATH.
    #[error("{binary} not found: {source}")]
    BinaryNotFound {
        binary: String,
        #[source]
        source: which::Error,
    },

    /// The binary exited non-zero or could not be started.
    ///
    /// Displays as the captured stderr, verbatim. `code` is `None` when the
    /// process never ran or was terminated by a signal; `source` is set only
    /// in the first case.
    #[error("{stderr}")]
    ExecutionFailed {
        stderr: String,
        code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    /// Captured stderr of a failed invocation.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::ExecutionFailed { stderr, .. } => Some(stderr),
            Error::BinaryNotFound { .. } => None,
        }
    }
}

/// Errors from loading a [`crate::Config`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
