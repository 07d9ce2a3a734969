use tracing::{error, info};
use url::Url;

use crate::error::PipelineError;
use crate::fetch;
use crate::parser;
use crate::release::Release;
use crate::settings::Settings;

/// Fetch (or read) the calendar and extract its releases. Any failure is logged
/// and yields an empty list so the output file still gets written.
pub async fn run(settings: &Settings) -> Vec<Release> {
    match try_run(settings).await {
        Ok(releases) => {
            println!("Found {} releases", releases.len());
            releases
        }
        Err(e) => {
            error!("Scrape failed: {}", e);
            println!("Error scraping data: {}", e);
            Vec::new()
        }
    }
}

async fn try_run(settings: &Settings) -> Result<Vec<Release>, PipelineError> {
    let base = Url::parse(&settings.source_url)?;

    let html = match &settings.input {
        Some(path) => {
            println!("Reading saved page {}...", path.display());
            tokio::fs::read_to_string(path).await?
        }
        None => {
            println!("Fetching data from {}...", settings.source_url);
            fetch::fetch_page(settings).await?
        }
    };

    let releases = parser::process_page(&html, &base);
    info!("Extracted {} releases from {} bytes", releases.len(), html.len());
    Ok(releases)
}

// ── Tests ──
