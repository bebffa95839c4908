//! Process bootstrap and listener lifecycle
//!
//! - Configuration and tracing
//! - Store connection and schema migration
//! - gRPC listener behind the interceptor chain, with `grpc.health.v1`
//! - HTTP gateway dialing the gRPC listener over loopback
//!
//! Both listeners share one [`ShutdownCoordinator`], so SIGINT/SIGTERM drains
//! them together.

use std::sync::Arc;
use std::time::Duration;

use axum_helpers::ShutdownCoordinator;
use core_config::FromEnv;
use core_config::tracing::init_tracing;
use database::{connect_store, run_migrations};
use domain_todo::{SqlTodoRepository, TodoRepository};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig, create_health_service};
use grpc_client::{InterceptorChain, JwtVerifier, TokenVerifier, create_channel_lazy};
use migration::Migrator;
use rpc::auth::v1::auth_service_server::{self, AuthServiceServer};
use rpc::todo::v1::todo_service_server::{self, TodoServiceServer};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::info;

use crate::auth_service::AuthServiceImpl;
use crate::config::{APP_NAME, Config};
use crate::gateway;
use crate::service::TodoServiceImpl;

/// Names reported through `grpc.health.v1`.
pub const SERVICES: [&str; 2] = [
    todo_service_server::SERVICE_NAME,
    auth_service_server::SERVICE_NAME,
];

/// Run the todo server until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration is missing or invalid
/// - The store cannot be reached or migrated
/// - Either listener fails to bind or dies while serving
pub async fn run() -> Result<()> {
    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);
    info!(?config, "Configuration loaded");

    info!(backend = config.store.backend_name(), "Connecting to store...");
    let db = connect_store(&config.store, None)
        .await
        .wrap_err("Failed to connect to store")?;
    run_migrations::<Migrator>(&db, APP_NAME)
        .await
        .wrap_err("Failed to apply migrations")?;

    let repository = Arc::new(SqlTodoRepository::new(db));
    let verifier: Arc<dyn TokenVerifier> =
        Arc::new(JwtVerifier::hs256(config.jwt_secret.as_bytes()));

    let grpc_listener = TcpListener::bind(config.grpc.addr_string())
        .await
        .wrap_err_with(|| format!("Failed to bind gRPC listener on {}", config.grpc.addr_string()))?;

    let channel = create_channel_lazy(config.grpc.loopback_uri())?;
    let gateway = gateway::router(channel, &config.cors_origins)
        .wrap_err("Invalid CORS_ALLOWED_ORIGIN")?;

    let (shutdown, _) = ShutdownCoordinator::new();
    let signals = shutdown.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    let grpc = serve_grpc(
        grpc_listener,
        repository,
        verifier,
        &config.grpc,
        shutdown.clone(),
    );
    let http = async {
        axum_helpers::create_app(gateway, &config.http, shutdown.clone())
            .await
            .wrap_err("HTTP gateway failed")
    };

    // Whichever side fails first takes the other down with it
    let outcome = tokio::try_join!(grpc, http);
    shutdown.shutdown();
    outcome?;

    info!("Todo server stopped");
    Ok(())
}

/// Serve `todo.v1.TodoService` (authenticated) and `auth.v1.AuthService`
/// (public) on an already bound listener until `shutdown` fires.
pub async fn serve_grpc<R>(
    listener: TcpListener,
    repository: Arc<R>,
    verifier: Arc<dyn TokenVerifier>,
    config: &ServerConfig,
    shutdown: ShutdownCoordinator,
) -> Result<()>
where
    R: TodoRepository + 'static,
{
    let chain = InterceptorChain::new(Arc::clone(&verifier));

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::set_serving(&health_reporter, &SERVICES).await;

    let mut todo = TodoServiceServer::new(TodoServiceImpl::from_arc(repository))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    let mut auth = AuthServiceServer::new(AuthServiceImpl::new(verifier));
    if config.enable_compression {
        todo = todo
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
        auth = auth
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let local_addr = listener.local_addr()?;
    GrpcServer::log_startup(config, &SERVICES);
    info!(%local_addr, "gRPC listener bound");

    Server::builder()
        .http2_keepalive_interval(Some(Duration::from_secs(config.keepalive_secs)))
        .add_service(health_service)
        .add_service(chain.protect(todo))
        .add_service(chain.public(auth))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
            shutdown.wait_for_shutdown().await;
            GrpcServer::set_not_serving(&health_reporter, &SERVICES).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("gRPC server stopped");
    Ok(())
}
