use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metric::{Metric, Timings};

/// Grouped
///
/// Per metric, group `i` holds the `i`-th value of every run.
pub type Grouped = BTreeMap<Metric, Vec<Vec<u64>>>;

/// regroup
///
/// Transposes a list of runs into per-position groups. Runs shorter than
/// the longest one only contribute to the positions they have.
pub fn regroup(runs: &[Timings]) -> Grouped {
    for metric in uneven_metrics(runs) {
        tracing::warn!("{metric}: runs reported a different number of values");
    }

    let mut grouped = Grouped::new();

    for run in runs {
        for (metric, values) in run.iter() {
            let groups = grouped.entry(metric).or_default();

            if groups.len() < values.len() {
                groups.resize_with(values.len(), Vec::new);
            }

            for (group, value) in groups.iter_mut().zip(values) {
                group.push(*value);
            }
        }
    }

    grouped
}

/// uneven_metrics
///
/// Metrics for which some run reported a different number of values than
/// the first run.
pub fn uneven_metrics(runs: &[Timings]) -> Vec<Metric> {
    let Some((first, rest)) = runs.split_first() else {
        return Vec::new();
    };

    first
        .iter()
        .map(|(metric, _)| metric)
        .chain(rest.iter().flat_map(|run| run.iter().map(|(metric, _)| metric)))
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .filter(|metric| {
            let expected = first.get(*metric).len();
            rest.iter().any(|run| run.get(*metric).len() != expected)
        })
        .collect()
}

/// Summary
///
/// Statistics of one group, in microseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub samples: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u64,
    pub max: u64,
}

impl Summary {
    /// Population standard deviation; `None` for an empty group.
    pub fn of(values: &[u64]) -> Option<Self> {
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;

        let samples = values.len();
        let mean = values.iter().map(|v| *v as f64).sum::<f64>() / samples as f64;
        let variance = values
            .iter()
            .map(|v| (*v as f64 - mean).powi(2))
            .sum::<f64>()
            / samples as f64;

        Some(Self {
            samples,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// summarize
///
///
pub fn summarize(grouped: &Grouped) -> BTreeMap<Metric, Vec<Summary>> {
    grouped
        .iter()
        .map(|(metric, groups)| {
            let summaries = groups.iter().filter_map(|group| Summary::of(group)).collect();
            (*metric, summaries)
        })
        .collect()
}
