use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write as _},
    path::Path,
};

use anyhow::Context as _;

use crate::bench::BenchResults;

/// load
///
/// Reads a snapshot written by [`store`]. A missing file is not an error.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Option<BenchResults>> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("cannot open {}", path.display()));
        }
    };

    let results = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("corrupted snapshot {}", path.display()))?;

    Ok(Some(results))
}

/// store
///
///
pub fn store<P: AsRef<Path>>(path: P, results: &BenchResults) -> anyhow::Result<()> {
    let path = path.as_ref();

    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, results)?;
    writer.flush()?;

    tracing::info!("results are saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aggregate::regroup, metric::Metric, metric::Timings};

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench_results.json");

        let runs = [
            Timings::from([(Metric::ContainerRuntime, vec![1, 2])]),
            Timings::from([(Metric::ContainerRuntime, vec![3, 4])]),
        ];
        let results = BenchResults::from([("hello_world".to_string(), regroup(&runs))]);

        store(&path, &results).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, Some(results));
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(load(dir.path().join("nothing.json")).unwrap(), None);
    }

    #[test]
    fn test_load_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench_results.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(load(&path).is_err());
    }
}
