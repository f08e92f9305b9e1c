// src/fetch/mod.rs

pub mod table;

use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use crate::config::{Config, FetchConfig};
use crate::error::{Error, Result};
use table::{parse_tables, select_by_signature, Columns, RawTable};

/// HTTP client bounded by the configured request timeout.
pub fn build_client(cfg: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .user_agent(cfg.user_agent.as_str())
        .build()
        .map_err(Error::HttpClient)
}

/// Longest single wait between two attempts.
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Delay before retry number `attempt` (1-based): `initial * 2^(attempt-1)`,
/// saturating and capped at [`MAX_BACKOFF`].
pub fn backoff_delay(initial_backoff_ms: u64, attempt: u32) -> Duration {
    let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
    Duration::from_millis(initial_backoff_ms.saturating_mul(factor)).min(MAX_BACKOFF)
}

async fn get_text_core(client: &Client, url: &str) -> std::result::Result<String, reqwest::Error> {
    debug!("Fetching text from {}", url);
    client.get(url).send().await?.error_for_status()?.text().await
}

/// GET `url`, retrying failures with exponential backoff.
pub async fn get_text_with_retry(
    client: &Client,
    url: &str,
    max_retries: u32,
    initial_backoff_ms: u64,
) -> Result<String> {
    let mut attempts = 0;
    loop {
        match get_text_core(client, url).await {
            Ok(t) => return Ok(t),
            Err(e) if attempts < max_retries => {
                attempts += 1;
                let backoff = backoff_delay(initial_backoff_ms, attempts);
                warn!(%url, attempt = attempts, delay_ms = backoff.as_millis() as u64, error = %e, "Retrying");
                sleep(backoff).await;
            }
            Err(e) => {
                error!(%url, error = %e, "Exhausted retries");
                return Err(Error::Retrieval {
                    url: url.to_string(),
                    source: e,
                });
            }
        }
    }
}

/// Pick the finals table out of an already-fetched page.
pub fn extract_finals_table(html: &str, cfg: &Config) -> Result<(RawTable, Columns)> {
    let tables = parse_tables(html);
    debug!(count = tables.len(), "tables on page");
    match select_by_signature(&tables, &cfg.source.signature) {
        Some((t, cols)) => Ok((t.clone(), cols)),
        None => Err(Error::TableNotFound {
            url: cfg.source.url.clone(),
            expected: cfg.source.signature.headers(),
        }),
    }
}

/// Fetch the source page and return the finals table with its column layout.
#[instrument(level = "info", skip(client, cfg), fields(url = %cfg.source.url))]
pub async fn ingest(client: &Client, cfg: &Config) -> Result<(RawTable, Columns)> {
    let html = get_text_with_retry(
        client,
        &cfg.source.url,
        cfg.fetch.max_retries,
        cfg.fetch.initial_backoff_ms,
    )
    .await?;
    info!(bytes = html.len(), "fetched source page");
    let (table, cols) = extract_finals_table(&html, cfg)?;
    info!(rows = table.rows.len(), ?cols, "found finals table");
    Ok((table, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use warp::{http::StatusCode, Filter};

    /// Local server answering 500 for the first `failures` requests, then 200.
    fn flaky_server(failures: usize) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let route = warp::any().map(move || {
            if counter.fetch_add(1, Ordering::SeqCst) < failures {
                warp::reply::with_status("unavailable", StatusCode::INTERNAL_SERVER_ERROR)
            } else {
                warp::reply::with_status("<table></table>", StatusCode::OK)
            }
        });
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        (format!("http://{addr}/"), hits)
    }

    fn client() -> Client {
        let mut cfg = FetchConfig::default();
        cfg.timeout_secs = 2;
        build_client(&cfg).unwrap()
    }

    #[test]
    fn backoff_doubles_then_saturates() {
        assert_eq!(backoff_delay(500, 1), Duration::from_millis(500));
        assert_eq!(backoff_delay(500, 3), Duration::from_millis(2000));
        assert_eq!(backoff_delay(0, 70), Duration::ZERO);
        assert_eq!(backoff_delay(500, 70), MAX_BACKOFF);
        assert_eq!(backoff_delay(u64::MAX, 2), MAX_BACKOFF);
    }

    #[tokio::test]
    async fn server_errors_are_retried_until_success() {
        let (url, hits) = flaky_server(2);
        let body = get_text_with_retry(&client(), &url, 3, 1).await.unwrap();
        assert_eq!(body, "<table></table>");
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries_plus_one_attempts() {
        let (url, hits) = flaky_server(usize::MAX);
        let err = get_text_with_retry(&client(), &url, 2, 1).await.unwrap_err();
        match err {
            Error::Retrieval { url: u, source } => {
                assert_eq!(u, url);
                assert_eq!(source.status().map(|s| s.as_u16()), Some(500));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn many_retries_end_in_retrieval_error() {
        let err = get_text_with_retry(&client(), "http://127.0.0.1:9/", 70, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Retrieval { .. }));
    }

    #[test]
    fn missing_table_is_table_not_found() {
        let cfg = Config::default();
        let err = extract_finals_table("<p>moved</p>", &cfg).unwrap_err();
        match err {
            Error::TableNotFound { url, expected } => {
                assert_eq!(url, cfg.source.url);
                assert_eq!(expected, vec!["Year", "Winners", "Runners-up"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_retrieval_error() {
        // port 9 on localhost: nothing listens, connection is refused
        let err = get_text_with_retry(&client(), "http://127.0.0.1:9/", 1, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Retrieval { .. }));
    }
}
