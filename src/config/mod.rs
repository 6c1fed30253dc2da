mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_CREW_FILE_NAME: &str = "resultado_crew.csv";
pub const DEFAULT_MOVIES_FILE_NAME: &str = "FuncionDirector.csv";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub crew_file: Option<PathBuf>,
    pub movies_file: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub crew_file: PathBuf,
    pub movies_file: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone());

        if let Some(dir) = &data_dir {
            if !dir.exists() {
                bail!("Data directory does not exist: {:?}", dir);
            }
            if !dir.is_dir() {
                bail!("data_dir is not a directory: {:?}", dir);
            }
        }

        // Explicit file paths win, otherwise fall back to the default names in data_dir.
        let resolve_table = |from_file: Option<String>,
                             from_cli: &Option<PathBuf>,
                             default_name: &str,
                             what: &str|
         -> Result<PathBuf> {
            from_file
                .map(PathBuf::from)
                .or_else(|| from_cli.clone())
                .or_else(|| data_dir.as_ref().map(|dir| dir.join(default_name)))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "{} must be specified via --data-dir, --{}-file or in config file",
                        what,
                        what
                    )
                })
        };

        let crew_file = resolve_table(
            file.crew_file,
            &cli.crew_file,
            DEFAULT_CREW_FILE_NAME,
            "crew",
        )?;
        let movies_file = resolve_table(
            file.movies_file,
            &cli.movies_file,
            DEFAULT_MOVIES_FILE_NAME,
            "movies",
        )?;

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        Ok(Self {
            crew_file,
            movies_file,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
