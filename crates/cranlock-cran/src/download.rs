//! Page downloading from a CRAN site.

use std::time::Duration;

use cranlock_util::errors::CranlockError;
use reqwest::Client;

const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Build a shared reqwest client for page downloads.
pub fn build_client(timeout: Duration) -> miette::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("cranlock/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            CranlockError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Download a text page, retrying server errors, timeouts and connection failures.
///
/// Returns `Ok(None)` for 404 (no such page), and an error for any other
/// unsuccessful status or once `max_retries` attempts are used up.
pub async fn download_text(
    client: &Client,
    url: &str,
    max_retries: u32,
) -> miette::Result<Option<String>> {
    let mut last_err = String::new();
    let attempts = max_retries.max(1);

    for attempt in 0..attempts {
        if attempt > 0 {
            tracing::debug!("Retrying {url} (attempt {})", attempt + 1);
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(CranlockError::Network {
                        message: format!("HTTP {status} fetching {url}"),
                    }
                    .into());
                }

                let text = resp.text().await.map_err(|e| CranlockError::Network {
                    message: format!("Failed to read response from {url}: {e}"),
                })?;
                return Ok(Some(text));
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(CranlockError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(CranlockError::Network {
        message: format!("Failed after {attempts} attempts for {url}: {last_err}"),
    }
    .into())
}
