use std::path::Path;

use crate::config::schema::{Config, CONFIG_VERSION};
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.version != CONFIG_VERSION {
        return Err(ConfigError::Validation {
            message: format!("Unsupported config version: {}", config.version),
        });
    }

    if config.input_path.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "input_path must not be empty".to_string(),
        });
    }

    if matches!(&config.output_path, Some(p) if p.trim().is_empty()) {
        return Err(ConfigError::Validation {
            message: "output_path must not be empty when set".to_string(),
        });
    }

    if config.eligible_status.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: "eligible_status must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.resolved_output_path(), "materials_rows.csv");
    }

    #[test]
    fn test_explicit_fields() {
        let config = load_config_from_str(
            r#"{
                "version": "1.0",
                "input_path": "data/in.csv",
                "output_path": "data/out.csv",
                "eligible_status": "draft",
                "dry_run": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.input_path, "data/in.csv");
        assert_eq!(config.resolved_output_path(), "data/out.csv");
        assert_eq!(config.eligible_status, "draft");
        assert!(config.dry_run);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = load_config_from_str(r#"{"version": "2.0"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_rejects_blank_paths_and_status() {
        for json in [
            r#"{"input_path": " "}"#,
            r#"{"output_path": ""}"#,
            r#"{"eligible_status": ""}"#,
        ] {
            let err = load_config_from_str(json).unwrap_err();
            assert!(matches!(err, ConfigError::Validation { .. }), "{json}");
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = load_config_from_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"input_path": "rows.csv"}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.input_path, "rows.csv");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
