//! Sapunoa: landing page server.
//!
//! This is the application entry point. It parses the command line, initializes
//! tracing, and starts one of three listeners: the configured site server, the
//! fixed-port development site server, or the fixed-port diagnostic server.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use sapunoa::config::{
    AppConfig, DEFAULT_CONFIG_PATH, DEV_DIAGNOSTIC_PORT, DEV_HOST, DEV_SITE_PORT,
};
use sapunoa::http::start_server;
use sapunoa::i18n::validate_bundles;
use sapunoa::telemetry::{init_tracing, resolve_filter};
use sapunoa::templates::init_templates;
use sapunoa::{create_diagnostic_router, create_router, AppState};

/// Sapunoa: landing page and status endpoint
#[derive(Parser, Debug)]
#[command(name = "sapunoa", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "sapunoa=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Serve the site using the configuration file (default)
    Serve,
    /// Serve the site on the local development port, without a config file
    Dev,
    /// Serve the diagnostic echo page on its local development port
    Diagnostic,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Serve);
    let log_filter = resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());

    let config = match command {
        Command::Serve => match AppConfig::load(&args.config) {
            Ok(config) => config,
            Err(e) => {
                // Tracing is configured from the file, so this one goes to stderr
                eprintln!("Failed to load configuration from {}: {}", args.config, e);
                return ExitCode::FAILURE;
            }
        },
        Command::Dev => AppConfig::development(DEV_SITE_PORT),
        Command::Diagnostic => AppConfig::development(DEV_DIAGNOSTIC_PORT),
    };

    init_tracing(&log_filter, config.logging.format);

    let result = match command {
        Command::Serve | Command::Dev => run_site(config).await,
        Command::Diagnostic => run_diagnostic().await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

/// Prepare the site handler and serve it. Preparation failures are fatal.
async fn run_site(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        site = %config.site.name,
        default_locale = %config.site.default_locale,
        "Loaded configuration"
    );

    if let Err(e) = validate_bundles() {
        tracing::error!(error = %e, "Startup failed: invalid locale bundle");
        return Err(e.into());
    }

    let tera = match init_templates(&config.site) {
        Ok(tera) => tera,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed: could not load templates");
            return Err(e.into());
        }
    };
    tracing::info!("Initialized templates");

    let host = config.http.host.clone();
    let port = config.http.port;
    let app = create_router(AppState::new(config, tera));

    start_server(app, &host, port).await?;
    Ok(())
}

async fn run_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    start_server(create_diagnostic_router(), DEV_HOST, DEV_DIAGNOSTIC_PORT).await?;
    Ok(())
}
