//! Application startup and server initialization.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;

/// Binds to the configured address and serves the demo routes until the
/// process is stopped.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the specified address
/// or encounters a runtime error during execution.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState {
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| format!("Could not bind to {}: {}", config.bind_address, e))?;

    let port = listener.local_addr()?.port();
    info!("{}", startup_message(port));

    axum::serve(listener, app).await?;

    Ok(())
}

/// The line logged once the listener is bound.
fn startup_message(port: u16) -> String {
    format!("Server running at http://localhost:{}", port)
}
