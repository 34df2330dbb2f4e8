use std::{path::PathBuf, process::Command};

use anyhow::Context as _;

use crate::{config::BenchConfig, sanitize::sanitize_lines};

/// Runner
///
/// Invokes `<executable> workflow run test <workflow> --profile` and hands
/// back the sanitized stdout.
pub struct Runner {
    executable: PathBuf,
    workflow_dir: PathBuf,
    extension: String,
}

impl Runner {
    pub fn new<P: Into<PathBuf>, D: Into<PathBuf>, E: Into<String>>(
        executable: P,
        workflow_dir: D,
        extension: E,
    ) -> Self {
        Self {
            executable: executable.into(),
            workflow_dir: workflow_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(
            &config.executable,
            &config.workflow_dir,
            config.extension.as_str(),
        )
    }

    pub fn workflow_path(&self, name: &str) -> PathBuf {
        self.workflow_dir.join(format!("{name}.{}", self.extension))
    }

    /// command
    ///
    ///
    pub fn command(&self, name: &str) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .args(["workflow", "run", "test"])
            .arg(self.workflow_path(name))
            .arg("--profile");
        command
    }

    /// run
    ///
    /// Blocks until the process exits. A failing exit status is only logged:
    /// whatever it printed is still returned and checked by the extractor.
    pub fn run(&self, name: &str) -> anyhow::Result<Vec<String>> {
        let mut command = self.command(name);
        tracing::debug!("running {command:?}");

        let output = command
            .output()
            .with_context(|| format!("failed to execute {}", self.executable.display()))?;

        if !output.status.success() {
            tracing::warn!(
                "{name}: {} exited with {}: {}",
                self.executable.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(sanitize_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_command() {
        let runner = Runner::from_config(&BenchConfig::default());

        let command = runner.command("hello_world");
        let args: Vec<&OsStr> = command.get_args().collect();

        assert_eq!(command.get_program(), OsStr::new("bin/brane"));
        assert_eq!(
            args,
            ["workflow", "run", "test", "src/hello_world.bs", "--profile"]
                .map(OsStr::new)
                .to_vec()
        );
    }

    #[test]
    fn test_missing_executable() {
        let dir = tempfile::tempdir().unwrap();
        let runner = Runner::new(dir.path().join("no-such-brane"), "src", "bs");

        assert!(runner.run("hello_world").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let lines = Runner::new("echo", "wf", "bs").run("fib").unwrap();

        assert_eq!(lines, vec!["workflow run test wf/fib.bs --profile"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failing_process() {
        let lines = Runner::new("false", "wf", "bs").run("fib").unwrap();

        assert!(lines.is_empty());
    }
}
