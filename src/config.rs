use anyhow::{Context, Result};
use clap::Parser;
use std::{env, path::PathBuf};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSET: &str = "logoswayatt.png";
pub const DEFAULT_LOG_FILTER: &str = "logo_server=info,tower_http=info";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub asset_path: PathBuf,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Serves a single static image and a health check")]
pub struct Args {
    /// Host to bind to (overrides LOGO_SERVER_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides LOGO_SERVER_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// File served at `/`, relative to the working directory (overrides LOGO_SERVER_ASSET)
    #[arg(long = "asset")]
    pub asset_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();
        Self::merge(args, |key| env::var(key))
    }

    /// Merge CLI args over values read through `lookup`, falling back to defaults.
    fn merge<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // --- Environment fallback ---
        let env_host = lookup("LOGO_SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let env_port = match lookup("LOGO_SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing LOGO_SERVER_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(err) => return Err(err).context("reading LOGO_SERVER_PORT"),
        };
        let env_asset = lookup("LOGO_SERVER_ASSET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ASSET));

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            asset_path: args.asset_path.unwrap_or(env_asset),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether `host` is a wildcard address that listens on every interface.
    pub fn binds_all_interfaces(&self) -> bool {
        matches!(self.host.as_str(), "0.0.0.0" | "::")
    }
}
