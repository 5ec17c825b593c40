use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;
use openclaw_mcp_bridge::{BridgeBuilder, CliTransport};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;

use config::{BridgeConfig, ConfigOverrides};

#[derive(Parser, Debug)]
#[command(
    name = "openclaw-mcp",
    version,
    about = "MCP server exposing the OpenClaw assistant over stdio",
    long_about = "Serves the Model Context Protocol on stdin/stdout. Offers a `chat` tool that talks to the OpenClaw assistant through the `openclaw` command-line program."
)]
struct Cli {
    #[arg(short, long, env = "OPENCLAW_MCP_CONFIG", help = "Path to a TOML config file")]
    config: Option<PathBuf>,

    #[arg(long = "bin", env = "OPENCLAW_BIN", help = "Path to the openclaw binary")]
    binary: Option<String>,

    #[arg(short, long, env = "OPENCLAW_SESSION", help = "Default session key for chat")]
    session: Option<String>,

    #[arg(
        short,
        long,
        env = "OPENCLAW_MCP_VERBOSE",
        value_parser = FalseyValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Log bridge diagnostics to stderr (off unless set here or in the config file)"
    )]
    verbose: Option<bool>,

    #[arg(long, help = "Server name reported to MCP clients")]
    server_name: Option<String>,

    #[arg(long, help = "Server version reported to MCP clients")]
    server_version: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            binary: self.binary.clone(),
            session: self.session.clone(),
            verbose: self.verbose,
            server_name: self.server_name.clone(),
            server_version: self.server_version.clone(),
        }
    }
}

/// Log to stderr; stdout carries MCP frames
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("openclaw_mcp=debug,info")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = BridgeConfig::load(cli.config.as_deref())?.with_overrides(cli.overrides());
    init_logging(config.verbose);
    debug!("configuration: {:?}", config);

    let bridge = BridgeBuilder::new()
        .transport(CliTransport::from_settings(config.cli))
        .server_info(config.server.name, config.server.version)
        .default_session_key(config.default_session_key)
        .verbose(config.verbose)
        .build()
        .context("failed to build bridge")?;

    bridge.load_gateway_tools().await;
    bridge.serve().await?;
    Ok(())
}
