//! Creative-Forge API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use creative_forge::config::Settings;
use creative_forge::server;

/// Creative-Forge backend API.
#[derive(Parser, Debug)]
#[command(name = "creative-forge")]
#[command(about = "HTTP API for the Creative-Forge application")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the API (default). Host, port and reload come from API_HOST,
    /// API_PORT and API_RELOAD.
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

fn init_logging(verbose: bool, settings: Option<&Settings>) {
    let default_directive = settings.map_or("info", |s| s.rust_log.as_str());
    let filter = if verbose {
        EnvFilter::new("creative_forge=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
    };

    let json = settings.is_some_and(Settings::is_production);
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = Settings::load();
    init_logging(args.verbose, settings.as_ref().ok());

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&settings),
        Some(Command::Serve) | None => cmd_serve(&settings).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(settings: &Settings) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CREATIVE-FORGE API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match settings.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Title: {} v{}", settings.api_title, settings.api_version);
    println!("  Bind Address: {}", settings.bind_address());
    println!("  Reload: {}", settings.api_reload);
    println!("  Environment: {}", settings.environment);
    println!("  Debug: {}", settings.debug);
    println!("  CORS Origins:");
    for origin in settings.cors_allow_list() {
        println!("    - {}", origin);
    }
    match settings.metrics_port {
        Some(port) => println!("  Metrics: Enabled (port {})", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Serve the API until a shutdown signal arrives.
async fn cmd_serve(settings: &Settings) -> anyhow::Result<()> {
    info!(
        environment = %settings.environment,
        debug = settings.debug,
        "Starting {} v{}",
        settings.api_title,
        settings.api_version
    );

    server::run(settings).await.map_err(|e| {
        error!("Server failed: {}", e);
        e
    })?;

    Ok(())
}
