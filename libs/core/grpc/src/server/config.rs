//! RPC listener configuration

use core_config::{ConfigError, FromEnv, env_flag, env_or_default, env_parse};
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Accept and send zstd-compressed messages
    pub enable_compression: bool,
    pub max_decoding_message_size: usize,
    pub max_encoding_message_size: usize,
    pub keepalive_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            max_decoding_message_size: 4 * 1024 * 1024,
            max_encoding_message_size: 4 * 1024 * 1024,
            keepalive_secs: 60,
        }
    }
}

/// Reads `GRPC_HOST`, `GRPC_PORT`, `GRPC_COMPRESSION` and `GRPC_MAX_MESSAGE_SIZE`.
impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let max_message_size = env_parse(
            "GRPC_MAX_MESSAGE_SIZE",
            &defaults.max_decoding_message_size.to_string(),
        )?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", &defaults.host),
            port: env_parse("GRPC_PORT", &defaults.port.to_string())?,
            enable_compression: env_flag("GRPC_COMPRESSION", defaults.enable_compression)?,
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
            keepalive_secs: defaults.keepalive_secs,
        })
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.addr_string()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "GRPC_HOST".to_string(),
                details: e.to_string(),
            })
    }

    pub fn addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loopback URI the in-process gateway dials, whatever interface we bind.
    pub fn loopback_uri(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.addr_string(), "0.0.0.0:50051");
        assert!(config.enable_compression);
        assert_eq!(config.loopback_uri(), "http://127.0.0.1:50051");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new().with_host("127.0.0.1").with_port(6000).with_compression(false);

        assert_eq!(config.socket_addr().unwrap().port(), 6000);
        assert!(!config.enable_compression);
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("6001")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "127.0.0.1:6001");
                assert!(!config.enable_compression);
                assert_eq!(config.max_encoding_message_size, 4 * 1024 * 1024);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("http"), || {
            let err = ServerConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("GRPC_PORT"));
        });
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let config = ServerConfig::new().with_host("not a host");
        assert!(config.socket_addr().is_err());
    }
}
