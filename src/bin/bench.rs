use brane_bench::{cache, report, Bench, BenchConfig};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Load .env file
    //
    dotenvy::dotenv().ok();
    //
    // /////

    // Load bench configuration
    //
    let args = Arg::parse();
    let config = match args.config_path {
        Some(path) => BenchConfig::from_path(path)?,
        None => BenchConfig::default(),
    };

    println!("config: {config:#?}");
    //
    // /////

    // Initialize tracing
    //
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    //
    // /////

    // Reuse previous results
    //
    let snapshot = if args.fresh {
        Default::default()
    } else {
        cache::load(&config.cache_path)?.unwrap_or_default()
    };
    //
    // /////

    let resumed = Bench::new(&config).resume(snapshot)?;
    if !resumed.benchmarked.is_empty() {
        cache::store(&config.cache_path, &resumed.snapshot)?;
    }

    let results = resumed.configured;

    print!("{}", report::render_table(&results));

    let file_name = report::save(&config.report_dir, &results)?;
    println!("report is saved to {}", file_name.display());

    Ok(())
}

#[derive(Debug, clap::Parser)]
struct Arg {
    #[clap(long = "config")]
    config_path: Option<String>,

    /// ignore results stored by a previous run
    #[clap(long)]
    fresh: bool,
}
