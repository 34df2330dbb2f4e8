use std::{collections::BTreeMap, time::Duration};

use anyhow::Context as _;

use crate::{
    aggregate::{regroup, Grouped},
    config::BenchConfig,
    extract::Extractor,
    metric::Timings,
    runner::Runner,
};

/// Workflow name to its regrouped timings.
pub type BenchResults = BTreeMap<String, Grouped>;

/// Bench
///
/// Runs every workflow `repeat` times, one invocation after the other, in
/// the order they are configured.
pub struct Bench {
    runner: Runner,
    extractor: Extractor,
    workflows: Vec<String>,
    repeat: usize,
    cooldown: Duration,
}

impl Bench {
    /// new
    ///
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            runner: Runner::from_config(config),
            extractor: Extractor::new(config.rules.clone()).require_all(config.require_all_metrics),
            workflows: config.workflows.clone(),
            repeat: config.repeat,
            cooldown: config.cooldown,
        }
    }

    /// Only benchmark the given workflows.
    pub fn with_workflows(mut self, workflows: Vec<String>) -> Self {
        self.workflows = workflows;
        self
    }

    /// missing
    ///
    /// Configured workflows without results in `snapshot`.
    pub fn missing(&self, snapshot: &BenchResults) -> Vec<String> {
        self.workflows
            .iter()
            .filter(|name| !snapshot.contains_key(*name))
            .cloned()
            .collect()
    }

    /// resume
    ///
    ///
    pub fn resume(&self, snapshot: BenchResults) -> anyhow::Result<Resumed> {
        self.resume_with(snapshot, |name| self.runner.run(name))
    }

    /// resume_with
    ///
    /// Benchmarks the workflows missing from `snapshot` and merges them in.
    /// Results of workflows that are no longer configured stay in the
    /// snapshot but are left out of [`Resumed::configured`].
    pub fn resume_with<F>(&self, mut snapshot: BenchResults, invoke: F) -> anyhow::Result<Resumed>
    where
        F: FnMut(&str) -> anyhow::Result<Vec<String>>,
    {
        let benchmarked = self.missing(&snapshot);

        if benchmarked.is_empty() {
            tracing::info!("all workflows found in the snapshot");
        } else {
            tracing::info!("benchmarking {benchmarked:?}, {} rounds", self.repeat);
            snapshot.extend(self.run_workflows(&benchmarked, invoke)?);
        }

        let configured = snapshot
            .iter()
            .filter(|(name, _)| self.workflows.contains(*name))
            .map(|(name, grouped)| (name.clone(), grouped.clone()))
            .collect();

        Ok(Resumed {
            snapshot,
            configured,
            benchmarked,
        })
    }

    /// run
    ///
    ///
    pub fn run(&self) -> anyhow::Result<BenchResults> {
        self.run_with(|name| self.runner.run(name))
    }

    /// run_with
    ///
    /// Same as [`Bench::run`] with `invoke` producing the sanitized output
    /// of one invocation.
    pub fn run_with<F>(&self, invoke: F) -> anyhow::Result<BenchResults>
    where
        F: FnMut(&str) -> anyhow::Result<Vec<String>>,
    {
        self.run_workflows(&self.workflows, invoke)
    }

    fn run_workflows<F>(&self, workflows: &[String], mut invoke: F) -> anyhow::Result<BenchResults>
    where
        F: FnMut(&str) -> anyhow::Result<Vec<String>>,
    {
        let mut runs: BTreeMap<&str, Vec<Timings>> = workflows
            .iter()
            .map(|name| (name.as_str(), Vec::with_capacity(self.repeat)))
            .collect();

        for round in 0..self.repeat {
            tracing::info!("round {}/{}", round + 1, self.repeat);

            for name in workflows {
                let lines = invoke(name)?;
                let timings = self
                    .extractor
                    .extract(&lines)
                    .with_context(|| format!("round {}: cannot parse output of {name}", round + 1))?;

                tracing::debug!("{name}: {timings:?}");
                runs.entry(name.as_str()).or_default().push(timings);

                if !self.cooldown.is_zero() {
                    std::thread::sleep(self.cooldown);
                }
            }
        }

        Ok(runs
            .into_iter()
            .map(|(name, runs)| (name.to_string(), regroup(&runs)))
            .collect())
    }
}

/// Resumed
///
///
pub struct Resumed {
    /// everything to store back, including workflows no longer configured
    pub snapshot: BenchResults,

    /// results of the configured workflows only
    pub configured: BenchResults,

    /// workflows that were run this time
    pub benchmarked: Vec<String>,
}
