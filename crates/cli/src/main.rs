use clap::Parser;
use secret_env_config::ConfigLoader;
use secret_env_core::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_ENVIRONMENT, SECRET_ENV_CONFIG_VAR, SECRET_ENV_ENVIRONMENT_VAR,
};
use std::path::PathBuf;

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "secret-env")]
#[command(about = "Load environment variables with secrets resolved from storage", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(short, long, env = SECRET_ENV_CONFIG_VAR, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Environment section to load (e.g., development, staging, production)
    #[arg(short = 'e', long = "env", env = SECRET_ENV_ENVIRONMENT_VAR, default_value = DEFAULT_ENVIRONMENT)]
    environment: String,

    /// Directory relative paths resolve against (defaults to current directory)
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    secret_env_utils::tracing::init().map_err(|e| eyre::eyre!(e))?;

    let cli = Cli::parse();

    let mut config_loader = ConfigLoader::new().path(cli.config);
    if let Some(directory) = cli.directory {
        config_loader = config_loader.directory(directory);
    }

    let code = cli.command.execute(&config_loader, &cli.environment)?;
    std::process::exit(code);
}
