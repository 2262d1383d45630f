use secret_env_config::ConfigLoader;
use secret_env_loader::Loader;
use secret_env_utils::ProcessEnv;
use std::process::Command;

pub fn execute(
    config_loader: &ConfigLoader,
    environment: &str,
    command: &str,
    args: &[String],
) -> eyre::Result<i32> {
    let loader = Loader::from_config_loader(config_loader)?;
    loader.load(environment, &ProcessEnv)?;

    tracing::debug!(command = %command, "Running command in loaded environment");
    let status = Command::new(command)
        .args(args)
        .status()
        .map_err(|e| eyre::eyre!("failed to run '{command}': {e}"))?;

    // Killed by a signal: report the conventional shell code
    Ok(status.code().unwrap_or(128))
}
