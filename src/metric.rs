use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Metric
///
/// Timings reported by `brane workflow run --profile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ContainerCreation,
    ContainerLaunching,
    ContainerRuntime,
    TotalRuntime,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::ContainerCreation,
        Metric::ContainerLaunching,
        Metric::ContainerRuntime,
        Metric::TotalRuntime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::ContainerCreation => "container_creation",
            Metric::ContainerLaunching => "container_launching",
            Metric::ContainerRuntime => "container_runtime",
            Metric::TotalRuntime => "total_runtime",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Timings
///
/// Durations in microseconds found in the output of a single invocation,
/// in the order the lines appeared. Every metric has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings(BTreeMap<Metric, Vec<u64>>);

impl Default for Timings {
    fn default() -> Self {
        Self(Metric::ALL.iter().map(|metric| (*metric, Vec::new())).collect())
    }
}

impl Timings {
    pub fn push(&mut self, metric: Metric, micros: u64) {
        self.0.entry(metric).or_default().push(micros);
    }

    pub fn get(&self, metric: Metric) -> &[u64] {
        self.0.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &[u64])> {
        self.0.iter().map(|(metric, values)| (*metric, values.as_slice()))
    }

    /// ensure_complete
    ///
    /// Fails on the first expected metric without any value, which means the
    /// output format did not match what the labels describe.
    pub fn ensure_complete(&self, expected: &[Metric]) -> Result<(), ParseError> {
        match expected.iter().find(|metric| self.get(**metric).is_empty()) {
            Some(metric) => Err(ParseError::NoResults(*metric)),
            None => Ok(()),
        }
    }
}

impl<const N: usize> From<[(Metric, Vec<u64>); N]> for Timings {
    fn from(entries: [(Metric, Vec<u64>); N]) -> Self {
        let mut timings = Self::default();
        timings.0.extend(entries);
        timings
    }
}
