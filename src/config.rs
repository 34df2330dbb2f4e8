use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use duration_str::deserialize_duration;

use crate::extract::Rule;

/// BenchConfig
///
/// Loaded from a YAML file; every field falls back to the default setup.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// orchestrator binary
    ///
    pub executable: PathBuf,

    /// directory holding the workflow files
    ///
    pub workflow_dir: PathBuf,

    /// extension of the workflow files
    ///
    pub extension: String,

    /// workflow file names, without directory or extension
    ///
    pub workflows: Vec<String>,

    /// rounds over all workflows
    ///
    pub repeat: usize,

    /// pause between two invocations
    ///
    #[serde(deserialize_with = "deserialize_duration")]
    pub cooldown: Duration,

    pub cache_path: PathBuf,
    pub report_dir: PathBuf,

    pub require_all_metrics: bool,
    pub rules: Vec<Rule>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            executable: "bin/brane".into(),
            workflow_dir: "src".into(),
            extension: "bs".to_string(),
            workflows: vec!["hello_world".to_string(), "hello_world10".to_string()],
            repeat: 50,
            cooldown: Duration::ZERO,
            cache_path: "bench_results.json".into(),
            report_dir: "./bench_report".into(),
            require_all_metrics: true,
            rules: Rule::defaults(),
        }
    }
}

impl BenchConfig {
    pub fn from_path<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open config {}", path.display()))?;
        let reader = std::io::BufReader::new(file);

        serde_yaml::from_reader(reader)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}
