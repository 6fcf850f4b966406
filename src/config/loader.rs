//! Route-table loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RoutesConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for route-table loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate a route table from a TOML file.
pub fn load_routes(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RoutesConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_route_table() {
        let file = write_config(
            r#"
            [[routes]]
            pattern = "/"
            view = "home"

            [[routes]]
            pattern = "/posts/:id"
            view = "post"

            [not_found]
            view = "missing"
            "#,
        );

        let config = load_routes(file.path()).unwrap();
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].pattern, "/posts/:id");
        assert_eq!(config.not_found.unwrap().view, "missing");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_routes(Path::new("/nonexistent/routes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let file = write_config("[[routes]\npattern = ");
        let err = load_routes(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_pattern_fails_at_load_time() {
        let file = write_config(
            r#"
            [[routes]]
            pattern = "/posts//comments"
            view = "post"
            "#,
        );

        let err = load_routes(file.path()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {}", other),
        }
    }
}
