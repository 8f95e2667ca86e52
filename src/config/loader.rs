//! Reading editor schemas, override files and field descriptors from disk.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::field::FieldDescriptor;
use crate::domain::overrides::{OverrideMap, OverrideRecord};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{0} is neither JSON nor YAML")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Read a JSON or YAML document, picking the parser from the extension.
///
/// Files with another extension are tried as JSON, then as YAML.
pub fn read_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Some("yaml" | "yml") => serde_yaml::from_str(&content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        _ => serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|_| LoadError::UnsupportedFormat(path.to_path_buf())),
    }
}

pub fn load_editor_schema(path: &Path) -> Result<Value, LoadError> {
    let schema = read_document(path)?;
    tracing::info!("Loaded editor schema from {}", path.display());
    Ok(schema)
}

/// Field descriptor document, in the form library's prop names
pub fn load_field(path: &Path) -> Result<FieldDescriptor, LoadError> {
    let document = read_document(path)?;
    serde_json::from_value(document).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge every `*.json`, `*.yaml` and `*.yml` file of a directory into `overrides`.
///
/// Each file is an object of title → override record. Files are applied in
/// path order, so a later file wins for a title defined twice.
pub fn load_overrides_from_dir(dir: &Path, overrides: &mut OverrideMap) -> Result<usize, LoadError> {
    let pattern = format!("{}/*", dir.display());
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => {
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if matches!(ext, "json" | "yaml" | "yml") {
                        paths.push(path);
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
        }
    }
    paths.sort();

    let mut loaded = 0;
    for path in paths {
        let document = read_document(&path)?;
        let Some(entries) = document.as_object() else {
            tracing::warn!("Skipping {}: expected an object of overrides", path.display());
            continue;
        };
        for (title, value) in entries {
            match OverrideRecord::from_value(value) {
                Some(record) => {
                    overrides.insert(title.clone(), record);
                    loaded += 1;
                }
                None => tracing::warn!(
                    "Skipping override for '{}' in {}: not an object",
                    title,
                    path.display()
                ),
            }
        }
    }
    Ok(loaded)
}
