// ABOUTME: VitalSense CLI - command-line front end for the health assessment engine
// ABOUTME: BMI, heart and diabetes risk, meal and exercise plans, overview and full report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMI for a profile
//! vitalsense-cli bmi --age 45 --gender female --height 165 --weight 82
//!
//! # Heart risk with two clinical overrides
//! vitalsense-cli heart --age 58 --chol 280 --thalach 120
//!
//! # Diabetes risk as JSON
//! vitalsense-cli --format json diabetes --glucose 160 --dpf 1.2
//!
//! # Meal plan using an earlier heart prediction
//! vitalsense-cli diet --weight 95 --heart-risk 0.62
//!
//! # Everything at once
//! vitalsense-cli report --age 52 --gender male --height 178 --weight 96
//! ```

mod args;
mod commands;
mod helpers;

use std::env;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use vitalsense::errors::AppResult;
use vitalsense::logging::{LogFormat, LoggingConfig};

use args::{DiabetesArgs, HeartArgs, OutputArg, ProfileArgs, RiskArgs};
use helpers::output::emit_error;

#[derive(Parser)]
#[command(
    name = "vitalsense-cli",
    version,
    about = "VitalSense health assessment CLI",
    long_about = "Compute BMI, simulate heart-disease and diabetes risk, and generate meal and exercise plans from a basic health profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputArg::Text)]
    format: OutputArg,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body-mass index and category
    Bmi {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Heart-disease risk prediction
    Heart {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        inputs: HeartArgs,
    },

    /// Diabetes risk prediction
    Diabetes {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        inputs: DiabetesArgs,
    },

    /// Daily meal plan
    Diet {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        risks: RiskArgs,
    },

    /// Weekly exercise plan
    Exercise {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        risks: RiskArgs,
    },

    /// BMI plus known risk scores
    Overview {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        risks: RiskArgs,
    },

    /// Both predictions and every plan
    Report {
        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        heart: HeartArgs,

        #[command(flatten)]
        diabetes: DiabetesArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Stdout carries command output; keep log events quiet unless asked for
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    } else if env::var_os("RUST_LOG").is_none() {
        "warn".clone_into(&mut logging.level);
    }
    if logging.format == LogFormat::Pretty {
        logging.format = LogFormat::Compact;
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let format = cli.format;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            emit_error(error, format.serialized());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    debug!(format = ?cli.format, "VitalSense CLI");

    match cli.command {
        Command::Bmi { profile } => commands::assess::bmi(&profile, cli.format),
        Command::Heart { profile, inputs } => {
            commands::assess::heart(&profile, &inputs, cli.format)
        }
        Command::Diabetes { profile, inputs } => {
            commands::assess::diabetes(&profile, &inputs, cli.format)
        }
        Command::Diet { profile, risks } => commands::plan::diet(&profile, &risks, cli.format),
        Command::Exercise { profile, risks } => {
            commands::plan::exercise(&profile, &risks, cli.format)
        }
        Command::Overview { profile, risks } => {
            commands::assess::overview(&profile, &risks, cli.format)
        }
        Command::Report {
            profile,
            heart,
            diabetes,
        } => commands::assess::report(&profile, &heart, &diabetes, cli.format),
    }
}
