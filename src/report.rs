use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{aggregate::summarize, bench::BenchResults};

const HEADER: &str = "workflow,metric,position,samples,mean_us,std_dev_us,min_us,max_us";

/// write_csv
///
/// One row per position of every metric of every workflow.
pub fn write_csv<W: Write>(writer: &mut W, results: &BenchResults) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;

    for (workflow, grouped) in results {
        for (metric, summaries) in summarize(grouped) {
            for (position, s) in summaries.iter().enumerate() {
                writeln!(
                    writer,
                    "{workflow},{metric},{position},{},{:.3},{:.3},{},{}",
                    s.samples, s.mean, s.std_dev, s.min, s.max
                )?;
            }
        }
    }

    Ok(())
}

/// save
///
/// Writes the csv into `dir`, named after the current local time.
pub fn save<P: AsRef<Path>>(dir: P, results: &BenchResults) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let file_name = dir.join(format!(
        "{}.csv",
        chrono::Local::now().format("%Y-%m%d-%H%M%S")
    ));
    let file = File::create(&file_name)
        .with_context(|| format!("cannot create {}", file_name.display()))?;
    let mut writer = BufWriter::new(file);

    write_csv(&mut writer, results)?;
    writer.flush()?;

    Ok(file_name)
}

/// render_table
///
///
pub fn render_table(results: &BenchResults) -> String {
    let mut table = String::new();

    for (workflow, grouped) in results {
        let _ = writeln!(table, "{workflow}");

        for (metric, summaries) in summarize(grouped) {
            if summaries.is_empty() {
                let _ = writeln!(table, "  {metric:<20} -");
                continue;
            }

            for (position, s) in summaries.iter().enumerate() {
                let _ = writeln!(
                    table,
                    "  {metric:<20} #{position:<3} {:>12.1}us ± {:<10.1} (n={})",
                    s.mean, s.std_dev, s.samples
                );
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{aggregate::regroup, metric::Metric, metric::Timings};

    fn results() -> BenchResults {
        let runs = [
            Timings::from([
                (Metric::ContainerCreation, vec![1_000]),
                (Metric::ContainerRuntime, vec![100, 10]),
            ]),
            Timings::from([
                (Metric::ContainerCreation, vec![3_000]),
                (Metric::ContainerRuntime, vec![300, 30]),
            ]),
        ];

        BenchResults::from([("hello_world".to_string(), regroup(&runs))])
    }

    #[test]
    fn test_write_csv() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &results()).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines,
            vec![
                HEADER,
                "hello_world,container_creation,0,2,2000.000,1000.000,1000,3000",
                "hello_world,container_runtime,0,2,200.000,100.000,100,300",
                "hello_world,container_runtime,1,2,20.000,10.000,10,30",
            ]
        );
    }

    #[test]
    fn test_save() {
        let dir = tempfile::tempdir().unwrap();

        let path = save(dir.path().join("report"), &results()).unwrap();

        assert_eq!(path.extension().unwrap(), "csv");
        let csv = std::fs::read_to_string(path).unwrap();
        assert!(csv.starts_with(HEADER));
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&results());

        assert!(table.starts_with("hello_world\n"));
        assert!(table.contains("container_runtime"));
        assert!(table.contains("total_runtime"));
    }
}
