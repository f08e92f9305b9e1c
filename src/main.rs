use anyhow::{Context, Result};
use std::{env, net::SocketAddr, path::PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use wcfinals::{fetch, present, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!("startup");

    if let Err(e) = run().await {
        error!(error = %format!("{e:#}"), "startup failed");
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    // ─── 2) config ───────────────────────────────────────────────────
    let cfg_path = env::var_os("WCFINALS_CONFIG").map(PathBuf::from);
    let cfg = Config::load(cfg_path.as_deref()).context("loading config")?;

    // ─── 3) fetch & normalize, once ──────────────────────────────────
    let client = fetch::build_client(&cfg.fetch)?;
    let (table, cols) = fetch::ingest(&client, &cfg)
        .await
        .context("ingesting finals table")?;
    let state = AppState::build(&table, &cols, &cfg)?;
    if state.query.finals().is_empty() {
        anyhow::bail!("finals table yielded no usable records");
    }
    info!(
        finals = state.query.finals().len(),
        winners = state.summary.wins().len(),
        "dataset ready"
    );

    // ─── 4) serve ────────────────────────────────────────────────────
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .with_context(|| format!("parsing bind address {}:{}", cfg.server.host, cfg.server.port))?;
    let (bound, server) = warp::serve(present::routes(state))
        .try_bind_with_graceful_shutdown(addr, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown requested");
        })
        .with_context(|| format!("binding {addr}"))?;
    info!("Dashboard: http://{}/", bound);
    server.await;

    info!("all done");
    Ok(())
}
