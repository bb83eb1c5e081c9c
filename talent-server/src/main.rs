use talent_server::{AppState, Config, DbService, logger, server};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    logger::init_logger();

    let config = Config::from_env()?;
    tracing::info!("Starting talent-server (env: {})", config.environment);

    // Single pool for the process lifetime
    let db = DbService::new(&config.database_path, config.db_max_connections).await?;
    let state = AppState::new(&config, db.clone());

    let result = server::run(&config, state).await;
    if let Err(e) = &result {
        tracing::error!("Server error: {e}");
    }

    db.close().await;
    result
}
