use std::{ffi::OsStr, path::{Path, PathBuf}};
use log::info;
use crate::command::SetCommand;
use crate::config::{Config, CONFIG};
use crate::error::Error;
use crate::invocation::Invocation;
use crate::listing::Listing;

/// A resolved ipset binary.
///
/// The path is looked up once when the handle is built and never again.
/// Every call spawns a fresh process and blocks until it exits; the handle
/// holds no per-call state, so it can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IPSet {
    path: PathBuf,
    options: Vec<String>,
}

/// Membership as reported by `ipset test`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Present,
    /// Non-zero exit code with nothing on stderr.
    Absent,
    /// An error message, or no exit code at all.
    Failed(String),
}

impl From<Result<(), Error>> for TestOutcome {
    fn from(res: Result<(), Error>) -> Self {
        match res {
            Ok(()) => TestOutcome::Present,
            Err(Error::ExecutionFailed { stderr, code: Some(_), .. }) if stderr.is_empty() => {
                TestOutcome::Absent
            }
            Err(Error::ExecutionFailed { code: None, source: Some(e), .. }) => {
                TestOutcome::Failed(format!("failed to start: {}", e))
            }
            Err(Error::ExecutionFailed { stderr, code: None, .. }) if stderr.is_empty() => {
                TestOutcome::Failed("terminated by signal".to_string())
            }
            Err(e) => TestOutcome::Failed(e.to_string()),
        }
    }
}

impl IPSet {
    /// Looks up the binary named in the process-wide [`CONFIG`] (`ipset`
    /// unless configured otherwise).
    pub fn new() -> Result<IPSet, Error> {
        IPSet::from_config(&CONFIG)
    }

    pub fn from_config(cfg: &Config) -> Result<IPSet, Error> {
        let mut set = IPSet::with_binary(&cfg.binary)?;
        set.options = cfg.options.clone();
        Ok(set)
    }

    /// Looks up `binary` on PATH. A path containing a separator is checked
    /// directly.
    pub fn with_binary<S: AsRef<OsStr>>(binary: S) -> Result<IPSet, Error> {
        let binary = binary.as_ref();
        let path = which::which(binary).map_err(|source| Error::BinaryNotFound {
            binary: binary.to_string_lossy().into_owned(),
            source,
        })?;
        info!("using {}", path.display());
        Ok(IPSet {
            path,
            options: Vec::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default options from the config. Not applied to any command.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Runs `cmd` and returns its stdout.
    pub fn exec(&self, cmd: SetCommand) -> Result<String, Error> {
        self.invoke(cmd).into_result()
    }

    pub fn invoke(&self, cmd: SetCommand) -> Invocation {
        Invocation::run(&self.path, cmd.args())
    }

    fn run(&self, cmd: SetCommand) -> Result<(), Error> {
        self.exec(cmd).map(|_| ())
    }

    /// Creates set `name` of type `kind` (e.g. `hash:ip`).
    ///
    /// `options` are passed as key/value pairs in order, e.g.
    /// `create("test", "hash:ip", &["timeout", "300"])`.
    pub fn create(&self, name: &str, kind: &str, options: &[&str]) -> Result<(), Error> {
        self.run(SetCommand::Create { name, kind, options })
    }

    pub fn add(&self, name: &str, entry: &str, options: &[&str]) -> Result<(), Error> {
        self.run(SetCommand::Add { name, entry, options })
    }

    /// Like [`IPSet::add`], but succeeds if the entry is already present.
    pub fn add_unique(&self, name: &str, entry: &str, options: &[&str]) -> Result<(), Error> {
        self.run(SetCommand::AddUnique { name, entry, options })
    }

    pub fn delete(&self, name: &str, entry: &str, options: &[&str]) -> Result<(), Error> {
        self.run(SetCommand::Delete { name, entry, options })
    }

    /// `Ok` if `entry` is in `name`.
    ///
    /// ipset reports a missing entry and a real failure the same way, with a
    /// non-zero exit. An `ExecutionFailed` with an exit code and empty
    /// stderr means absent; see [`IPSet::test_outcome`] for the split result.
    pub fn test(&self, name: &str, entry: &str, options: &[&str]) -> Result<(), Error> {
        self.run(SetCommand::Test { name, entry, options })
    }

    pub fn test_outcome(&self, name: &str, entry: &str, options: &[&str]) -> TestOutcome {
        self.test(name, entry, options).into()
    }

    pub fn destroy(&self, name: &str) -> Result<(), Error> {
        self.run(SetCommand::Destroy { name })
    }

    /// Destroys every set.
    pub fn destroy_all(&self) -> Result<(), Error> {
        self.run(SetCommand::DestroyAll)
    }

    pub fn save(&self, name: &str, filename: &str) -> Result<(), Error> {
        self.run(SetCommand::Save { name, file: filename })
    }

    pub fn save_all(&self, filename: &str) -> Result<(), Error> {
        self.run(SetCommand::SaveAll { file: filename })
    }

    pub fn restore(&self, filename: &str) -> Result<(), Error> {
        self.run(SetCommand::Restore { file: filename })
    }

    pub fn flush(&self, name: &str) -> Result<(), Error> {
        self.run(SetCommand::Flush { name })
    }

    pub fn flush_all(&self) -> Result<(), Error> {
        self.run(SetCommand::FlushAll)
    }

    pub fn rename(&self, from: &str, to: &str) -> Result<(), Error> {
        self.run(SetCommand::Rename { from, to })
    }

    pub fn swap(&self, from: &str, to: &str) -> Result<(), Error> {
        self.run(SetCommand::Swap { from, to })
    }

    /// Lists the members of `name`.
    ///
    /// stdout is parsed even when the run fails.
    pub fn list(&self, name: &str) -> Listing {
        let inv = self.invoke(SetCommand::List { name });
        let error = inv.error();
        Listing::from_output(&inv.stdout, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(stderr: &str) -> Result<(), Error> {
        Err(Error::ExecutionFailed {
            stderr: stderr.to_string(),
            code: Some(1),
            source: None,
        })
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(TestOutcome::from(Ok::<(), Error>(())), TestOutcome::Present);
        assert_eq!(TestOutcome::from(failed("")), TestOutcome::Absent);
        assert_eq!(
            TestOutcome::from(failed("ipset v7.x: The set with the given name does not exist")),
            TestOutcome::Failed("ipset v7.x: The set with the given name does not exist".to_string())
        );
    }

    #[test]
    fn test_outcome_without_exit_code_is_failed() {
        let spawn: Result<(), Error> = Err(Error::ExecutionFailed {
            stderr: String::new(),
            code: None,
            source: Some(std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory")),
        });
        assert_eq!(
            TestOutcome::from(spawn),
            TestOutcome::Failed("failed to start: No such file or directory".to_string())
        );

        let signal: Result<(), Error> = Err(Error::ExecutionFailed {
            stderr: String::new(),
            code: None,
            source: None,
        });
        assert_eq!(
            TestOutcome::from(signal),
            TestOutcome::Failed("terminated by signal".to_string())
        );
    }

    #[test]
    fn missing_binary_is_binary_not_found() {
        let err = IPSet::with_binary("ipset-runner-no-such-binary").unwrap_err();
        match err {
            Error::BinaryNotFound { binary, .. } => assert_eq!(binary, "ipset-runner-no-such-binary"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn from_config_keeps_options() {
        let cfg = Config {
            binary: "/bin/sh".to_string(),
            options: vec!["timeout".to_string(), "300".to_string()],
        };
        let set = IPSet::from_config(&cfg).unwrap();
        assert_eq!(set.path(), Path::new("/bin/sh"));
        assert_eq!(set.options(), ["timeout", "300"]);
    }

    #[test]
    fn with_binary_starts_with_no_options() {
        let set = IPSet::with_binary("/bin/sh").unwrap();
        assert!(set.options().is_empty());
        assert!(!set.path().as_os_str().is_empty());
    }
}
