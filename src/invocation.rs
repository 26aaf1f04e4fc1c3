use std::{io, path::{Path, PathBuf}, process::Command};
use log::{debug, warn};
use crate::error::Error;

/// One finished run of the binary.
///
/// Built only by [`Invocation::run`], so the captured buffers are always
/// those of a terminated process.
#[derive(Debug)]
pub struct Invocation {
    pub path: PathBuf,
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` if the process did not start or died by a signal.
    pub code: Option<i32>,
    pub success: bool,
    /// Why the process could not be started.
    pub spawn_error: Option<io::Error>,
}

impl Invocation {
    /// Runs `path` with `args` and waits for it to exit.
    ///
    /// No shell is involved. stdin is not redirected and the environment is
    /// inherited.
    pub fn run(path: &Path, args: Vec<String>) -> Invocation {
        debug!("exec {} {}", path.display(), args.join(" "));
        match Command::new(path).args(&args).output() {
            Ok(output) => {
                let inv = Invocation {
                    path: path.to_path_buf(),
                    args,
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                    code: output.status.code(),
                    success: output.status.success(),
                    spawn_error: None,
                };
                if !inv.success {
                    warn!(
                        "{} {} exited with {:?}: {}",
                        path.display(),
                        inv.args.first().map(String::as_str).unwrap_or(""),
                        inv.code,
                        inv.stderr.trim_end()
                    );
                }
                inv
            }
            Err(e) => {
                warn!("failed to start {}: {}", path.display(), e);
                Invocation {
                    path: path.to_path_buf(),
                    args,
                    stdout: String::new(),
                    stderr: String::new(),
                    code: None,
                    success: false,
                    spawn_error: Some(e),
                }
            }
        }
    }

    pub fn error(&self) -> Option<Error> {
        if self.success {
            None
        } else {
            Some(Error::ExecutionFailed {
                stderr: self.stderr.clone(),
                code: self.code,
                source: self
                    .spawn_error
                    .as_ref()
                    .map(|e| io::Error::new(e.kind(), e.to_string())),
            })
        }
    }

    /// stdout on success, `ExecutionFailed` carrying stderr otherwise.
    pub fn into_result(self) -> Result<String, Error> {
        if self.success {
            Ok(self.stdout)
        } else {
            Err(Error::ExecutionFailed {
                stderr: self.stderr,
                code: self.code,
                source: self.spawn_error,
            })
        }
    }
}
