/// Constants used throughout the secret-env codebase
// Configuration file locations
pub const DEFAULT_CONFIG_PATH: &str = "config/secret_env.yml";
pub const DEFAULT_SECRETS_FILE_PATH: &str = "config/secret_env.local";
pub const DEFAULT_ENVIRONMENT: &str = "development";

// Environment variable names
pub const SECRET_ENV_CONFIG_VAR: &str = "SECRET_ENV_CONFIG";
pub const SECRET_ENV_ENVIRONMENT_VAR: &str = "SECRET_ENV_ENVIRONMENT";
pub const SECRET_ENV_LOG_VAR: &str = "SECRET_ENV_LOG";

// Placeholder grammar
pub const PLACEHOLDER_OPEN: &str = "#{";
pub const PLACEHOLDER_CLOSE: &str = "}";
pub const FALLBACK_SEPARATOR: &str = "||";

// Sibling references deeper than this are rejected
pub const MAX_REFERENCE_DEPTH: usize = 64;

// Keyring service used by the remote backend when none is configured
pub const DEFAULT_KEYRING_SERVICE: &str = "secret-env";
