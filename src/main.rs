use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vetjobs::{
    catalog::ScrapeCatalog, config::Config, models::CanonicalJobRecord,
    orchestrator::MatrixScraper, pipeline::JobPipeline, retrieval::JobSpyClient,
};

/// Veteran-friendly job posting aggregator.
///
/// Scrapes job boards across a (search term x location) matrix, tags each
/// posting with a veteran-friendliness indicator, and prints a JSON array
/// on stdout for the backend to consume.
#[derive(Parser, Debug)]
#[command(name = "vetjobs", about = "Veteran-friendly job posting aggregator")]
struct Cli {
    /// Advisory cap on total jobs, spread across the configured search
    /// terms unless VETJOBS_JOBS_PER_COMBINATION is set explicitly
    #[arg(long, default_value_t = 50)]
    max_jobs: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // All diagnostics go to stderr; stdout carries only the JSON payload.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vetjobs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // The consumer always expects well-formed JSON: any run-level failure
    // degrades to an empty array rather than an abnormal exit.
    let jobs = match run(&cli).await {
        Ok(jobs) => jobs,
        Err(error) => {
            error!(%error, "Scrape run failed, emitting empty result set");
            Vec::new()
        }
    };

    println!("{}", serde_json::to_string_pretty(&jobs)?);
    Ok(())
}

async fn run(cli: &Cli) -> anyhow::Result<Vec<CanonicalJobRecord>> {
    let config = Config::from_env()?;
    info!(scrape = ?config.scrape, "Configuration loaded");

    let catalog = ScrapeCatalog::standard();
    let retriever = JobSpyClient::from_config(&config.retrieval)?;

    let jobs_per_cell = config.scrape.jobs_per_cell(cli.max_jobs);
    let scraper = MatrixScraper::new(config.scrape, catalog.clone(), jobs_per_cell);
    let raw_jobs = scraper.run(&retriever).await;

    info!(count = raw_jobs.len(), "Scrape complete, normalizing records");
    let pipeline = JobPipeline::new(&catalog);
    Ok(pipeline.process(raw_jobs))
}
