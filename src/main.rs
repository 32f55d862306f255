//! Stroop Web Server Binary
//!
//! Serves the Stroop page: server-rendered markup plus, in interactive mode,
//! the data and client bundle needed to hydrate it in the browser.
//!
//! # Usage
//!
//! ```bash
//! # Start with settings from ~/.config/stroop/config.toml (or defaults, port 3000)
//! stroop
//!
//! # Serve pages without the client bundle
//! stroop --mode static --port 8080
//!
//! # Load the client from an external dev server
//! stroop --bundle-url http://localhost:3001/pkg/stroop.js
//!
//! # Persist the current flags as the config file, then exit
//! stroop --port 8080 --mode static --write-config
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stroop::config::{Config, RenderMode};
use stroop::web;

/// Page mode selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Server markup plus hydration data and client bundle
    Interactive,
    /// Server markup only
    Static,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Interactive => Self::Interactive,
            ModeArg::Static => Self::Static,
        }
    }
}

/// Stroop - color-word interference demo server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Configuration file.
    /// Defaults to the platform-specific config directory:
    /// - Linux: ~/.config/stroop/config.toml
    /// - macOS: ~/Library/Application Support/stroop/config.toml
    /// - Windows: %APPDATA%\stroop\config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mode used for `/` (overrides config)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// URL of the client JS module (overrides config)
    #[arg(long)]
    bundle_url: Option<String>,

    /// Seed for reproducible initial states
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    write_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply_to(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(mode) = self.mode {
            config.page.mode = mode.into();
        }
        if let Some(bundle_url) = &self.bundle_url {
            config.client.bundle_url.clone_from(bundle_url);
        }
    }
}

/// Saves `config` to `path`, or to the platform config file when `path` is `None`.
fn write_config(config: &Config, path: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_file_path()?,
    };
    config.save_to(&path)?;
    Ok(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply_to(&mut config);
    config.validate()?;

    if args.write_config {
        let path = write_config(&config, args.config.as_deref())?;
        info!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    info!(
        "Serving {} pages by default",
        if config.page.mode.is_interactive() {
            "interactive"
        } else {
            "static"
        }
    );

    // Build socket address
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context(format!("Invalid bind address: {}", config.bind_address()))?;

    web::run_server(config, args.seed, addr).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_apply_to_config() {
        let args = Args::parse_from([
            "stroop",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--mode",
            "static",
            "--bundle-url",
            "/assets/stroop.js",
        ]);
        let mut config = Config::new();
        args.apply_to(&mut config);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.page.mode, RenderMode::Static);
        assert_eq!(config.client.bundle_url, "/assets/stroop.js");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["stroop"]);
        let mut config = Config::new();
        args.apply_to(&mut config);

        assert_eq!(config, Config::new());
        assert!(!args.write_config);
    }

    #[test]
    fn test_write_config_round_trips_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");
        let args = Args::parse_from([
            "stroop",
            "--port",
            "4000",
            "--mode",
            "static",
            "--write-config",
        ]);
        let mut config = Config::new();
        args.apply_to(&mut config);

        let written = write_config(&config, Some(&path)).unwrap();

        assert!(args.write_config);
        assert_eq!(written, path);
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.server.port, 4000);
        assert_eq!(loaded.page.mode, RenderMode::Static);
    }
}
