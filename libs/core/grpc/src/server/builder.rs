use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Startup logging and `grpc.health.v1` bookkeeping shared by RPC binaries.
pub struct GrpcServer;

impl GrpcServer {
    pub fn log_startup(config: &ServerConfig, service_names: &[&str]) {
        info!(
            addr = %config.addr_string(),
            services = ?service_names,
            compression = config.enable_compression,
            "gRPC server starting"
        );
    }

    /// Mark every service, plus the empty name used by generic probes, as serving.
    pub async fn set_serving(health_reporter: &HealthReporter, service_names: &[&str]) {
        for service_name in service_names {
            health_reporter
                .set_service_status(*service_name, ServingStatus::Serving)
                .await;
        }
        health_reporter.set_service_status("", ServingStatus::Serving).await;
    }

    /// Flip everything to not-serving so probes fail while connections drain.
    pub async fn set_not_serving(health_reporter: &HealthReporter, service_names: &[&str]) {
        for service_name in service_names {
            health_reporter
                .set_service_status(*service_name, ServingStatus::NotServing)
                .await;
        }
        health_reporter.set_service_status("", ServingStatus::NotServing).await;
        info!(services = ?service_names, "Services marked as not serving");
    }
}

pub use tonic_health::server::health_reporter as create_health_service;
