mod error;
mod fetch;
mod parser;
mod pipeline;
mod release;
mod settings;
mod store;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use settings::Settings;

#[derive(Parser)]
#[command(name = "release_scraper", about = "Trading card release calendar scraper")]
struct Cli {
    /// Calendar page to fetch; also the base for resolving links
    #[arg(long)]
    url: Option<String>,
    /// Output JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    #[arg(long)]
    user_agent: Option<String>,
    /// Parse a saved copy of the page instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Print release counts per sport
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn apply(self, mut settings: Settings) -> Settings {
        if let Some(url) = self.url {
            settings.source_url = url;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        if let Some(ua) = self.user_agent {
            settings.user_agent = ua;
        }
        if self.input.is_some() {
            settings.input = self.input;
        }
        settings
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let summary = cli.summary;

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Ignoring RELEASES_* settings: {}", e);
        Settings::default()
    });
    let settings = cli.apply(settings);

    println!("Starting scraper...");
    let releases = pipeline::run(&settings).await;

    store::save_releases(&settings.output, &releases)
        .with_context(|| format!("Failed to save {}", settings.output.display()))?;
    println!(
        "Saved {} releases to {}",
        releases.len(),
        settings.output.display()
    );

    if releases.is_empty() {
        println!("No releases found or error occurred");
    } else {
        println!("Successfully scraped {} releases!", releases.len());
    }

    if summary && !releases.is_empty() {
        println!("\n{:<12} | {:>5}", "Sport", "Count");
        println!("{}", "-".repeat(20));
        for (sport, count) in release::count_by_sport(&releases) {
            println!("{:<12} | {:>5}", sport, count);
        }
        println!();
    }

    println!(
        "Last updated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    tracing::debug!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
