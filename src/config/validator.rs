use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.root_id.trim().is_empty() {
            errors.push(ValidationError::MissingField("root_id".to_string()));
        }

        if let Some(dialog_id) = &settings.dialog_id {
            if dialog_id.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    field: "dialog_id".to_string(),
                    reason: "must not be blank when set".to_string(),
                });
            }
        }

        if let Some(path) = &settings.editor_schema {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    field: "editor_schema".to_string(),
                    reason: "path is empty".to_string(),
                });
            }
        }

        if let Some(dir) = &settings.overrides_dir {
            if !dir.is_dir() {
                errors.push(ValidationError::InvalidValue {
                    field: "overrides_dir".to_string(),
                    reason: format!("{} is not a directory", dir.display()),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_valid_config() {
        let settings = Settings::default();
        assert!(ConfigValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_empty_root_id() {
        let settings = Settings {
            root_id: "  ".to_string(),
            ..Default::default()
        };

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::MissingField(_)));
    }

    #[test]
    fn test_missing_overrides_dir() {
        let settings = Settings {
            overrides_dir: Some(PathBuf::from("/nonexistent/overrides")),
            ..Default::default()
        };

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("overrides_dir"));
    }

    #[test]
    fn test_collects_every_error() {
        let settings = Settings {
            root_id: String::new(),
            dialog_id: Some(String::new()),
            editor_schema: Some(PathBuf::new()),
            ..Default::default()
        };

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
