use anyhow::Result;
use tracing::{info, warn};

use courtside::config::AppConfig;
use courtside::logging;
use courtside::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Guard must outlive main so the file writer flushes on exit
    let _log_guard = logging::init_logging();
    let run_id = logging::get_run_id();

    let config = AppConfig::from_env()?;

    info!(
        run_id = %run_id,
        bind = %config.bind,
        statistics_enabled = config.apisports_key.is_some(),
        odds_enabled = config.odds_api_key.is_some(),
        "Starting courtside board service"
    );

    if config.apisports_key.is_none() {
        warn!("APISPORTS_KEY not set; the board will have no live games");
    }
    if config.odds_api_key.is_none() {
        warn!("ODDS_API_KEY not set; all moneylines will be null");
    }

    let bind = config.bind;
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Listening on http://{}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}
