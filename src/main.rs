#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe CLI

pub mod cli_options;
pub mod commands;
pub mod config;
pub mod logger;
pub mod renderer;
pub mod setup;

use crate::{
    cli_options::{
        CliOptions,
        Subcommand,
    },
    config::Config,
};
use anyhow::Context as _;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// Data from the setup function
struct SetupData {
    config: Config,
    worker_guard: WorkerGuard,
}

/// Pre-main setup
fn setup(cli_options: &CliOptions) -> anyhow::Result<SetupData> {
    let config = setup::load_config(&cli_options.config).context("failed to load config")?;

    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    Ok(SetupData {
        config,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This also loads the config and sets up logging,
/// printing errors to the stderr instead of the loggers, which are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(&cli_options)?;
    let ret = real_main(cli_options, &setup_data.config);

    if let Err(error) = ret.as_ref() {
        tracing::error!("{error:?}");
    }
    info!("shutting down");

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}

/// The actual entry point
fn real_main(cli_options: CliOptions, config: &Config) -> anyhow::Result<()> {
    match cli_options.subcommand {
        None | Some(Subcommand::Play(_)) => {
            commands::play::exec(config).context("failed to play game")?;
        }
        Some(Subcommand::Solve(options)) => {
            commands::solve::exec(options).context("failed to solve board")?;
        }
    }

    Ok(())
}
