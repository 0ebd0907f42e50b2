mod commands;
mod dateparse;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lifetrack")]
#[command(about = "Track your days: calendar, habits, diary, goals, meals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar events
    #[command(subcommand)]
    Event(commands::event::EventCmd),
    /// Habit tracking
    #[command(subcommand)]
    Habit(commands::habit::HabitCmd),
    /// Diary entries
    #[command(subcommand)]
    Diary(commands::diary::DiaryCmd),
    /// Goals and milestones
    #[command(subcommand)]
    Goal(commands::goal::GoalCmd),
    /// Bookmark collection
    #[command(subcommand)]
    Collect(commands::collect::CollectCmd),
    /// Idea backlog
    #[command(subcommand)]
    Idea(commands::idea::IdeaCmd),
    /// Daily, weekly and monthly reflections
    #[command(subcommand)]
    Reflect(commands::reflect::ReflectCmd),
    /// Nutrition log
    #[command(subcommand)]
    Meal(commands::meal::MealCmd),
    /// Show tomorrow's events
    Upcoming,
    /// Desktop reminders for tomorrow's events
    Remind {
        /// Keep running and re-check periodically
        #[arg(long)]
        watch: bool,

        /// Minutes between checks in watch mode
        #[arg(long, default_value_t = 5)]
        interval: u64,

        /// Turn reminders on before checking
        #[arg(long)]
        enable: bool,

        /// Turn reminders off and exit
        #[arg(long, conflicts_with = "enable")]
        disable: bool,
    },
    /// Show paths, or move the data directory
    Config {
        /// Set a new data directory
        #[arg(long)]
        data_dir: Option<std::path::PathBuf>,
    },
    /// Backup, restore or clear the journal
    #[command(subcommand)]
    Backup(commands::backup::BackupCmd),
    /// Copy the journal into per-entity table files
    Migrate,
    /// Today at a glance
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Event(cmd) => commands::event::run(cmd),
        Commands::Habit(cmd) => commands::habit::run(cmd),
        Commands::Diary(cmd) => commands::diary::run(cmd),
        Commands::Goal(cmd) => commands::goal::run(cmd),
        Commands::Collect(cmd) => commands::collect::run(cmd),
        Commands::Idea(cmd) => commands::idea::run(cmd),
        Commands::Reflect(cmd) => commands::reflect::run(cmd),
        Commands::Meal(cmd) => commands::meal::run(cmd),
        Commands::Upcoming => commands::upcoming::run(),
        Commands::Remind {
            watch,
            interval,
            enable,
            disable,
        } => commands::remind::run(watch, interval, enable, disable),
        Commands::Config { data_dir } => commands::config::run(data_dir),
        Commands::Backup(cmd) => commands::backup::run(cmd),
        Commands::Migrate => commands::migrate::run(),
        Commands::Stats => commands::stats::run(),
    }
}
