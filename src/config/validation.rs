//! Configuration validation using JSON Schema

use crate::config::manager::{parse_config, ConfigFormat};
use crate::config::Config;
use schemars::schema_for;
use serde_json::Value;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Configuration validator
pub struct ConfigValidator {
    schema: Value,
}

impl ConfigValidator {
    /// Create a new validator with the generated schema
    pub fn new() -> Self {
        let schema = schema_for!(Config);
        Self {
            schema: serde_json::to_value(&schema).unwrap_or_default(),
        }
    }

    /// Get the JSON Schema for the configuration
    pub fn get_schema(&self) -> &Value {
        &self.schema
    }

    /// Export the schema to a JSON string
    pub fn export_schema(&self) -> String {
        serde_json::to_string_pretty(&self.schema).unwrap_or_default()
    }

    /// Validate a configuration file
    pub async fn validate_file(&self, path: &str) -> Result<(), Vec<ValidationError>> {
        let expanded = shellexpand::tilde(path).to_string();
        let path = Path::new(&expanded);

        if !path.exists() {
            return Err(vec![ValidationError {
                path: path.to_string_lossy().to_string(),
                message: "Configuration file does not exist".to_string(),
            }]);
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            vec![ValidationError {
                path: path.to_string_lossy().to_string(),
                message: format!("Failed to read file: {}", e),
            }]
        })?;

        let format = ConfigFormat::detect(&PathBuf::from(path), &content);
        self.validate_content(&content, format)
    }

    /// Validate configuration content
    pub fn validate_content(
        &self,
        content: &str,
        format: ConfigFormat,
    ) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let config = match parse_config(content, format) {
            Ok(c) => c,
            Err(e) => {
                errors.push(ValidationError {
                    path: "root".to_string(),
                    message: e.to_string(),
                });
                return Err(errors);
            }
        };

        // Validate using validator crate
        if let Err(validation_errors) = config.validate() {
            collect_validator_errors("", &validation_errors, &mut errors);
        }

        self.validate_semantics(&config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_semantics(&self, config: &Config, errors: &mut Vec<ValidationError>) {
        if config.server.port == 0 {
            errors.push(ValidationError {
                path: "server.port".to_string(),
                message: "Port must be greater than 0".to_string(),
            });
        }

        if config.catalog.manifest_path.is_empty() {
            errors.push(ValidationError {
                path: "catalog.manifest_path".to_string(),
                message: "Manifest path cannot be empty".to_string(),
            });
        }

        if config.catalog.evaluations_dir.is_empty() {
            errors.push(ValidationError {
                path: "catalog.evaluations_dir".to_string(),
                message: "Evaluations directory cannot be empty".to_string(),
            });
        }
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten validator errors, including nested struct fields
fn collect_validator_errors(
    prefix: &str,
    validation_errors: &validator::ValidationErrors,
    out: &mut Vec<ValidationError>,
) {
    for (field, kind) in validation_errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(ValidationError {
                        path: path.clone(),
                        message: error.code.to_string(),
                    });
                }
            }
            validator::ValidationErrorsKind::Struct(nested) => {
                collect_validator_errors(&path, nested, out);
            }
            validator::ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_validator_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}
