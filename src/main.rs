mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::router(AppState::new(db), &config.static_dir);

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
