//! Keep-alive pinger.
//!
//! ```text
//!   register SIGINT/SIGTERM
//!        │
//!        ▼
//!   config (defaults ← TOML ← flags/env)
//!        │
//!        ▼
//!   build HTTP client ──✗──▶ diagnostic, exit 1
//!        │
//!        ▼
//!   ┌──────────────────────────────┐
//!   │ ping → classify → log        │◀── cycle 0 fires immediately
//!   │   │                          │
//!   │   ▼                          │
//!   │ sleep(interval) ─────────────┼──▶ SIGINT/SIGTERM: banner, exit 0
//!   └──────────────────────────────┘
//! ```

use std::process::ExitCode;

use clap::Parser;

use keep_alive::cli::Cli;
use keep_alive::error::KeepAliveError;
use keep_alive::lifecycle::{build_pinger, shutdown_banner, startup_banner, Shutdown, ShutdownSignal};
use keep_alive::observability::{logging, metrics};

fn report(err: &KeepAliveError) -> ExitCode {
    eprintln!("{}", err.report());
    ExitCode::from(err.exit_code())
}

fn stopped(signal: &str) -> ExitCode {
    tracing::info!(signal, "Shutdown signal received");
    println!("{}", shutdown_banner());
    ExitCode::SUCCESS
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Registered first so an interrupt at any later point still ends in the banner
    let mut signal = match ShutdownSignal::register() {
        Ok(signal) => signal,
        Err(e) => return report(&KeepAliveError::Signal(e)),
    };

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => return report(&KeepAliveError::Config(e)),
    };

    if let Err(e) = logging::init_logging(&config.observability) {
        return report(&e);
    }

    // HTTP capability check; no network activity before this succeeds
    let pinger = match build_pinger(&config) {
        Ok(pinger) => pinger,
        Err(e) => return report(&e),
    };

    // Validation already rejected an unparseable address
    if let Ok(Some(addr)) = config.observability.metrics_socket() {
        if let Err(e) = metrics::init_metrics(addr) {
            tracing::error!(error = %e, "Continuing without metrics");
        }
    }

    if cli.once {
        return tokio::select! {
            biased;
            name = signal.recv() => stopped(name),
            _ = pinger.ping_once() => ExitCode::SUCCESS,
        };
    }

    println!("{}", startup_banner(&config));

    let shutdown = Shutdown::new();
    let loop_handle = tokio::spawn(pinger.run(shutdown.subscribe()));

    let name = signal.recv().await;
    shutdown.trigger();

    if let Err(e) = loop_handle.await {
        tracing::error!(error = %e, "Ping loop terminated abnormally");
    }

    stopped(name)
}
