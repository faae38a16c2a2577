use daily_tasks::models::AppData;
use daily_tasks::{AppState, Storage, load_days, load_theme, resolve_data_dir, router};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let storage = Storage::new(resolve_data_dir());
    storage.ensure_dir().await?;

    let data = AppData {
        days: load_days(&storage).await,
        theme: load_theme(&storage).await,
    };
    let state = AppState::new(storage, data);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
