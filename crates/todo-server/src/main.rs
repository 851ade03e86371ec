use std::net::SocketAddr;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use todo_api::AppStateInner;
use todo_store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,todo_api=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("TODO_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("TODO_PORT")
        .unwrap_or_else(|_| "3333".into())
        .parse()
        .context("parse TODO_PORT")?;

    // State lives only as long as the process
    let state = AppStateInner::new(Store::new());

    let app = todo_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("parse bind address")?;
    info!("Todo server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
