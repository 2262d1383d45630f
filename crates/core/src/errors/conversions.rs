//! Conversion implementations for error types

use super::types::Error;

// Kept manual so the message is captured alongside the source
impl From<serde_yaml::Error> for Error {
    fn from(error: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: error.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_storage_type_names_the_type() {
        let err = Error::unknown_storage_type("vault");
        assert_eq!(err.to_string(), "Unknown storage type: vault");
    }

    #[test]
    fn test_key_not_found_keeps_full_candidate_text() {
        let err = Error::key_not_found("A || B");
        assert!(err.is_key_not_found());
        assert_eq!(err.to_string(), "secret key not found: 'A || B'");
    }

    #[test]
    fn test_cyclic_reference_renders_chain() {
        let err = Error::cyclic_reference(vec!["A".into(), "B".into(), "A".into()]);
        assert_eq!(err.to_string(), "cyclic reference detected: A -> B -> A");
    }

    #[test]
    fn test_file_system_error_keeps_context() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::file_system("config/secret_env.local", "read", io);
        assert_eq!(
            err.to_string(),
            "file system read operation failed for 'config/secret_env.local': missing"
        );
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(err.to_string().starts_with("YAML error:"));
    }
}
