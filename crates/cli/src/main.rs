// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::{Result, eyre::Context};
use commands::Command;
use giftstock::Projector;
use giftstock_domain::ProjectionConfig;
use giftstock_persistence::Persistence;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Milestone gift counts and inventory restock projections.
#[derive(Parser, Debug)]
#[command(name = "giftstock", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the `SQLite` record store.
    #[arg(short, long, global = true, default_value = "giftstock.db")]
    database: PathBuf,

    /// JSON projection config; missing keys use defaults.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Date treated as today (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, global = true)]
    as_of: Option<NaiveDate>,

    /// Low-inventory threshold overriding the config value.
    #[arg(short, long, global = true)]
    threshold: Option<i64>,
}

impl Args {
    /// Loads the config file, if any, and applies flag overrides.
    fn projection_config(&self) -> Result<ProjectionConfig> {
        let mut config: ProjectionConfig = match &self.config {
            Some(path) => load_config(path)?,
            None => ProjectionConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.low_inventory_threshold = threshold;
        }

        Ok(config)
    }

    fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}

fn load_config(path: &Path) -> Result<ProjectionConfig> {
    let text: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse config file {}", path.display()))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr so the JSON report on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: ProjectionConfig = args.projection_config()?;
    let today: NaiveDate = args.today();

    info!(
        database = %args.database.display(),
        today = %today,
        "Opening record store"
    );
    let persistence: Persistence = Persistence::new_with_file(&args.database)
        .wrap_err_with(|| format!("Failed to open {}", args.database.display()))?;

    let mut projector: Projector<Persistence> = Projector::new(persistence, config, today);
    let report: Value = args.command.run(&mut projector)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
