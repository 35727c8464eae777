mod commands;
mod config;
mod cursor;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::navigate::Step;
use commands::Context;
use monthcal_core::YearMonth;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "Month-view calendar with per-day events stored on this machine")]
struct Cli {
    /// Config file (defaults to ~/.config/monthcal/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for stored events, overriding the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current month, or jump to another one
    Show {
        /// Month to show (YYYY-MM)
        month: Option<YearMonth>,

        /// One line per day instead of a grid
        #[arg(short, long)]
        list: bool,
    },
    /// Go to the next month
    Next {
        #[arg(short, long)]
        list: bool,
    },
    /// Go to the previous month
    Prev {
        #[arg(short, long)]
        list: bool,
    },
    /// Go back to the current month
    Today {
        #[arg(short, long)]
        list: bool,
    },
    /// List the events of a day
    Day {
        /// Day of the month
        day: u32,

        /// Month the day is in (YYYY-MM, defaults to the month being shown)
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Add an event to a day
    Add {
        /// Day of the month
        day: u32,

        /// Time of day, 24-hour HH:MM
        #[arg(short, long)]
        time: String,

        /// What is happening (letters, digits and spaces are kept)
        #[arg(short, long)]
        description: String,

        /// Month the day is in (YYYY-MM, defaults to the month being shown)
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
    /// Change an existing event
    Edit {
        /// Day of the month
        day: u32,

        /// Event id, as shown by `monthcal day`
        id: String,

        /// New time of day, 24-hour HH:MM
        #[arg(short, long)]
        time: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// Month the day is in (YYYY-MM, defaults to the month being shown)
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MONTHCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;
    let mut ctx = Context::load(&cfg, cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Show { month, list } => commands::show::run(&mut ctx, month, list),
        Commands::Next { list } => commands::navigate::run(&mut ctx, Step::Next, list),
        Commands::Prev { list } => commands::navigate::run(&mut ctx, Step::Prev, list),
        Commands::Today { list } => commands::navigate::run(&mut ctx, Step::Today, list),
        Commands::Day { day, month } => commands::day::run(&ctx, day, month),
        Commands::Add {
            day,
            time,
            description,
            month,
        } => commands::add::run(&mut ctx, day, time, description, month),
        Commands::Edit {
            day,
            id,
            time,
            description,
            month,
        } => commands::edit::run(&mut ctx, day, &id, time, description, month),
    }
}
