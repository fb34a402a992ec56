use clap::{Parser, Subcommand};
use weightlog_core::Config;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "weightlog-cli", version, about = "weightlog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill derived body-composition fields
    Derive(commands::derive::DeriveArgs),
    /// Recompute BMI for every record with a new height
    RefreshBmi(commands::derive::RefreshBmiArgs),
    /// Synthesize values for days without a weigh-in
    Interpolate(commands::series::InterpolateArgs),
    /// Latest weigh-in
    Current(commands::series::InputArgs),
    /// Newest weigh-ins first
    Recent(commands::series::RecentArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init(&config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "config could not be loaded, using defaults");
    }

    let result = match cli.command {
        Commands::Derive(args) => commands::derive::run(args, &config),
        Commands::RefreshBmi(args) => commands::derive::refresh(args),
        Commands::Interpolate(args) => commands::series::interpolate(args, &config),
        Commands::Current(args) => commands::series::current(args),
        Commands::Recent(args) => commands::series::recent(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
