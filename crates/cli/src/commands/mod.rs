use clap::Subcommand;
use secret_env_config::ConfigLoader;

pub mod check;
pub mod exec;
pub mod export;

#[derive(Subcommand)]
pub enum Commands {
    /// Print shell `export` statements for the variables a load would set
    Export,

    /// Load the environment and run a command inside it
    Exec {
        /// Command to run
        command: String,

        /// Arguments to pass to the command
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Exit successfully if the configuration defines the environment
    Check,
}

impl Commands {
    /// Run the command, returning the process exit code
    pub fn execute(self, config_loader: &ConfigLoader, environment: &str) -> eyre::Result<i32> {
        match self {
            Commands::Export => export::execute(config_loader, environment),
            Commands::Exec { command, args } => {
                exec::execute(config_loader, environment, &command, &args)
            }
            Commands::Check => check::execute(config_loader, environment),
        }
    }
}
