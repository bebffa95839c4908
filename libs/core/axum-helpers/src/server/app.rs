use super::shutdown::ShutdownCoordinator;
use axum::Router;
use core_config::server::ServerConfig;
use std::io;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the configured address and serves `router` until `shutdown` fires.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown: ShutdownCoordinator,
) -> io::Result<()> {
    let listener = TcpListener::bind(server_config.address()).await?;
    serve(listener, router, shutdown).await
}

/// Serves `router` on an already bound listener with graceful shutdown.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: ShutdownCoordinator,
) -> io::Result<()> {
    info!("HTTP server starting on {}", listener.local_addr()?);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::time::Duration;

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let router = Router::new().route("/ping", get(|| async { "pong" }));
        let (coordinator, _rx) = ShutdownCoordinator::new();

        let server = tokio::spawn(serve(listener, router, coordinator.clone()));
        coordinator.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should stop after shutdown")
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_app_reports_bind_errors() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = ServerConfig::new("127.0.0.1", port);

        let result = create_app(Router::new(), &config, ShutdownCoordinator::default()).await;
        assert!(result.is_err());
    }
}
