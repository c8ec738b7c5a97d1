pub mod cli;
pub mod columns;
pub mod customize;
pub mod customize_cmd;
pub mod diag;
pub mod labelize;
pub mod schema;
pub mod spec;
pub mod table;
pub mod views;
pub mod views_cmd;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::cli::{Cli, Commands};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("gridcols", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Columns(args) => columns::execute(&args),
        Commands::Customize(args) => customize_cmd::execute(&args),
        Commands::Views(args) => views_cmd::execute(&args),
    }
}
