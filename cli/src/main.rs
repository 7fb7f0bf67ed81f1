//! CLI entrypoint for the tracking server
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use tracking_application::{GetTrackingStatusUseCase, NoQueryLogger, QueryLogger};
use tracking_domain::OutputFormat;
use tracking_infrastructure::{ConfigLoader, FileConfig, JsonlQueryLogger, load_store};
use tracking_presentation::{AppState, Cli, Command, ConsoleFormatter, build_router, to_fault};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, config.logging.directory.as_deref());

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("config: {}", issue.message);
        } else {
            warn!("config: {}", issue.message);
        }
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let store = load_store(&config.store).context("Failed to load package records")?;
    info!("Package store ready with {} records", store.len());

    let logger: Arc<dyn QueryLogger> = match config
        .logging
        .query_log
        .as_ref()
        .and_then(JsonlQueryLogger::new)
    {
        Some(logger) => {
            info!("Query log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoQueryLogger),
    };

    let use_case = Arc::new(
        GetTrackingStatusUseCase::new(Arc::new(store), logger)
            .with_config(config.query.to_query_config()),
    );

    match cli.command {
        None | Some(Command::Serve { .. }) => {
            serve(&config, use_case).await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Lookup {
            tracking_number,
            output,
        }) => {
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            Ok(lookup(&use_case, &tracking_number, format).await)
        }
    }
}

/// Command-line values win over every config layer
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(fixtures) = &cli.fixtures {
        config.store.fixtures = Some(fixtures.clone());
    }
    if let Some(Command::Serve { host, port }) = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
}

fn init_logging(verbose: u8, directory: Option<&Path>) -> Option<WorkerGuard> {
    // -v flags take precedence over RUST_LOG
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let (file_layer, guard) = match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "tracking-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

async fn serve(config: &FileConfig, use_case: Arc<GetTrackingStatusUseCase>) -> Result<()> {
    let app = build_router(AppState::new(use_case, &config.server.soap_path));

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(
        "SOAP endpoint listening on http://{}{}",
        addr, config.server.soap_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn lookup(
    use_case: &GetTrackingStatusUseCase,
    tracking_number: &str,
    format: OutputFormat,
) -> ExitCode {
    match use_case.execute(tracking_number).await {
        Ok(response) => {
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format(tracking_number, &response),
                OutputFormat::Json => ConsoleFormatter::format_json(&response),
            };
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            let fault = to_fault(&e);
            match format {
                OutputFormat::Text => eprint!("{}", ConsoleFormatter::format_fault(&fault)),
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_fault_json(&fault)),
            }
            ExitCode::FAILURE
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Could not listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Could not listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
