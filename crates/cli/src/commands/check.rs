use secret_env_config::ConfigLoader;
use secret_env_loader::Loader;

pub fn execute(config_loader: &ConfigLoader, environment: &str) -> eyre::Result<i32> {
    let loader = Loader::from_config_loader(config_loader)?;

    if loader.has_environment(environment) {
        println!("environment '{environment}' is defined");
        return Ok(0);
    }

    let defined: Vec<&str> = loader.config().environment_names().collect();
    if defined.is_empty() {
        println!("environment '{environment}' is not defined (no environments configured)");
    } else {
        println!(
            "environment '{environment}' is not defined (available: {})",
            defined.join(", ")
        );
    }
    Ok(1)
}
