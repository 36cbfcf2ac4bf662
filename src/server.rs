//! Server lifecycle: menu loading, background sweeps, serving and shutdown.

use crate::{
    config::Config,
    menu::Catalog,
    router::create_app_router,
    state::{AppState, SharedState},
};
use std::{future::Future, time::Duration};

/// Loads the menu, binds the listener and serves until Ctrl-C.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&config.menu_path).await?;
    tracing::info!(
        path = %config.menu_path.display(),
        items = catalog.len(),
        "menu loaded"
    );

    let state = AppState::shared(catalog);

    if let Some(ttl) = config.session_idle_ttl {
        spawn_session_sweeper(state.clone(), ttl, config.session_sweep_interval)?;
    }

    let app = create_app_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Periodically drops sessions idle for longer than `ttl`.
pub fn spawn_session_sweeper(
    state: SharedState,
    ttl: Duration,
    every: Duration,
) -> Result<tokio::task::JoinHandle<()>, chrono::OutOfRangeError> {
    let max_idle = chrono::Duration::from_std(ttl)?;
    tracing::info!(ttl_secs = ttl.as_secs(), "session eviction enabled");

    Ok(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every.max(Duration::from_secs(1)));
        loop {
            ticker.tick().await;
            let evicted = state.sessions.evict_idle(max_idle);
            if evicted > 0 {
                tracing::info!(evicted, "evicted idle sessions");
            }
        }
    }))
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the signal cannot be installed the
/// server keeps running instead of shutting down immediately.
async fn wait_for_signal(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
