use secret_env_config::ConfigLoader;
use secret_env_loader::Loader;
use secret_env_utils::ProcessEnv;
use std::io::Write;

pub fn execute(config_loader: &ConfigLoader, environment: &str) -> eyre::Result<i32> {
    let loader = Loader::from_config_loader(config_loader)?;
    let values = loader.resolve(environment, &ProcessEnv)?;

    let mut stdout = std::io::stdout().lock();
    for (key, value) in &values {
        writeln!(stdout, "{}", export_line(key, value)?)?;
    }

    Ok(0)
}

/// `export KEY='value'`, quoted for POSIX shells
fn export_line(key: &str, value: &str) -> eyre::Result<String> {
    let quoted = shlex::try_quote(value)
        .map_err(|e| eyre::eyre!("cannot quote value of '{key}' for the shell: {e}"))?;
    Ok(format!("export {key}={quoted}"))
}
