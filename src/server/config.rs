use super::RequestsLoggingLevel;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub port: u16,
    pub metrics_port: u16,
    pub content_cache_age_sec: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            port: 3001,
            metrics_port: 9091,
            content_cache_age_sec: 3600,
        }
    }
}

impl From<&crate::config::AppConfig> for ServerConfig {
    fn from(config: &crate::config::AppConfig) -> Self {
        ServerConfig {
            requests_logging_level: config.logging_level.clone(),
            port: config.port,
            metrics_port: config.metrics_port,
            content_cache_age_sec: config.content_cache_age_sec,
        }
    }
}
