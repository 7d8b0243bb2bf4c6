// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Boot-time entrypoint: loads the config, picks a property backend and runs
//! the hook once.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;
use sysprop::CommandStore;

use land_init::config::DEFAULT_CONFIG_PATH;
use land_init::{device_codename, dry_run, load_properties, Config};

/// Publishes board, heap and graphics properties for land devices.
#[derive(Debug, Parser)]
#[command(name = "land-init", version)]
struct Args {
    /// Configuration file; a missing file is an error only when given explicitly.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the properties instead of calling setprop.
    #[arg(long)]
    dry_run: bool,

    /// Device codename to assume during a dry run instead of querying getprop.
    #[arg(long, value_name = "CODENAME", requires = "dry_run")]
    device: Option<String>,

    /// Log every property write.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let loaded = match &args.config {
        Some(path) => Config::load(path),
        None => Config::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH)),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            error!("land-init: {err}");
            return ExitCode::FAILURE;
        }
    };

    if !args.dry_run {
        load_properties(&config, &CommandStore::default());
        return ExitCode::SUCCESS;
    }

    let device = args
        .device
        .clone()
        .or_else(|| device_codename(&config, &CommandStore::default()));
    for (key, value) in dry_run(&config, device) {
        println!("{key}={value}");
    }
    ExitCode::SUCCESS
}
