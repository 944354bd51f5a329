use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use emergency_events::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use emergency_events::shell::http::router;
use emergency_events::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let store = Arc::new(InMemoryEventStore::new());
    let state = AppState::new(store);

    let app = router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    tracing::info!("emergency events API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
