use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::PipelineError;
use crate::settings::Settings;

/// GET the calendar page. Non-2xx responses are errors; nothing is retried.
pub async fn fetch_page(settings: &Settings) -> Result<String, PipelineError> {
    let client = reqwest::Client::builder()
        .user_agent(settings.user_agent.as_str())
        .timeout(settings.timeout())
        .build()?;

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("GET {}", settings.source_url));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = get_text(&client, &settings.source_url).await;
    spinner.finish_and_clear();

    let body = result?;
    info!("Fetched {} bytes from {}", body.len(), settings.source_url);
    Ok(body)
}

async fn get_text(client: &reqwest::Client, url: &str) -> Result<String, PipelineError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
