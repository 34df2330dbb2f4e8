use serde::{Deserialize, Serialize};

use crate::{duration::parse_micros, error::ParseError, metric::Metric, metric::Timings};

pub const CONTAINER_CREATION: &str = "Container creation timing results: ";
pub const CONTAINER_LAUNCHING: &str = "Container launching timing results: ";
pub const CONTAINER_RUNTIME: &str = "Container runtime timing results: ";
pub const TOTAL_RUNTIME: &str = "Total: ";
pub const TOTAL_RUNTIME_CONTEXT: &str = "Workflow timing results";

/// Rule
///
/// A line carrying `label` holds a value for `metric`. When `context` is set
/// the line only counts if the line right before it contains `context`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub metric: Metric,
    pub label: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl Rule {
    pub fn new<T: Into<String>>(metric: Metric, label: T) -> Self {
        Self {
            metric,
            label: label.into(),
            context: None,
        }
    }

    pub fn with_context<T: Into<String>>(mut self, context: T) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns `line` without the label when this rule applies to it. Text
    /// around the label is kept, so it fails to parse as a duration.
    fn apply(&self, previous: Option<&str>, line: &str) -> Option<String> {
        if let Some(context) = &self.context {
            if !previous.is_some_and(|previous| previous.contains(context.as_str())) {
                return None;
            }
        }

        line.contains(self.label.as_str())
            .then(|| line.replace(self.label.as_str(), "").trim().to_string())
    }

    pub fn defaults() -> Vec<Rule> {
        vec![
            Rule::new(Metric::ContainerCreation, CONTAINER_CREATION),
            Rule::new(Metric::ContainerLaunching, CONTAINER_LAUNCHING),
            Rule::new(Metric::ContainerRuntime, CONTAINER_RUNTIME),
            Rule::new(Metric::TotalRuntime, TOTAL_RUNTIME).with_context(TOTAL_RUNTIME_CONTEXT),
        ]
    }
}

/// Extractor
///
/// Scans sanitized output once, from top to bottom. Rules are tried in
/// order and the first one that applies owns the line.
#[derive(Debug, Clone)]
pub struct Extractor {
    rules: Vec<Rule>,
    require_all: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Rule::defaults())
    }
}

impl Extractor {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            require_all: false,
        }
    }

    /// require_all
    ///
    /// Make [`Extractor::extract`] fail when a metric of the rules did not
    /// match any line.
    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    pub fn metrics(&self) -> Vec<Metric> {
        let mut metrics: Vec<Metric> = self.rules.iter().map(|rule| rule.metric).collect();
        metrics.sort();
        metrics.dedup();
        metrics
    }

    /// extract
    ///
    ///
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> Result<Timings, ParseError> {
        let mut timings = Timings::default();
        let mut previous: Option<&str> = None;

        for line in lines {
            let line: &str = line.as_ref();
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.apply(previous, line).map(|value| (rule.metric, value)));

            if let Some((metric, value)) = matched {
                let micros = parse_micros(&value)?;
                tracing::trace!("{metric}: {value} -> {micros}us");
                timings.push(metric, micros);
            }

            previous = Some(line);
        }

        if self.require_all {
            timings.ensure_complete(&self.metrics())?;
        }

        Ok(timings)
    }
}
