mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fingercap", about = "Fingerprint capture and matching tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an image's clarity against the capture gate
    Quality(commands::quality::QualityArgs),
    /// Sharpen and contrast-boost a fingerprint image
    Enhance(commands::enhance::EnhanceArgs),
    /// Crop a region out of a fingerprint image
    Crop(commands::crop::CropArgs),
    /// Enroll a fingerprint with the matching service
    Register(commands::register::RegisterArgs),
    /// Verify a fingerprint against an enrolled user
    Verify(commands::verify::VerifyArgs),
    /// List enrolled users
    Users(commands::users::UsersArgs),
    /// Show one enrolled user
    User(commands::users::UserArgs),
    /// Update an enrolled user's details
    Update(commands::users::UpdateArgs),
    /// Remove an enrolled user
    Delete(commands::users::DeleteArgs),
    /// Print or save the default capture config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Quality(args) => commands::quality::run(args),
        Commands::Enhance(args) => commands::enhance::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Register(args) => commands::register::run(args),
        Commands::Verify(args) => commands::verify::run(args),
        Commands::Users(args) => commands::users::run_list(args),
        Commands::User(args) => commands::users::run_show(args),
        Commands::Update(args) => commands::users::run_update(args),
        Commands::Delete(args) => commands::users::run_delete(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
