use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::config::types::Settings;
use crate::config::validation;
use crate::utils::error::{BoxResult, MdtocError};

/// Settings file names to look for
const CONFIG_FILES: [&str; 4] = [".mdtoc.toml", ".mdtoc.yml", ".mdtoc.yaml", ".mdtoc.json"];

/// Load settings from the given files, or from the default files in `source_dir`
///
/// Each file is a layer: a key present in a later file overrides the same
/// key from earlier files, even when it sets the default value back.
pub fn load_settings<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Settings> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    let mut merged = Value::Object(Map::new());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let layer = read_config_file(&path)?;
            merge_values(&mut merged, layer);
        }
    }

    // Keys missing from every layer fall back to their serde defaults
    let settings: Settings = serde_json::from_value(merged)
        .map_err(|e| MdtocError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_settings(&settings)?;

    debug!("Configuration loaded: {:?}", settings);
    Ok(settings)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Read one configuration file into a layer of raw values
fn read_config_file(config_path: &Path) -> BoxResult<Value> {
    if !config_path.exists() {
        return Err(MdtocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| MdtocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    // Parse based on file extension
    let layer = match config_path.extension() {
        Some(ext) => {
            let ext_str = ext.to_string_lossy().to_lowercase();
            match ext_str.as_str() {
                "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
                "toml" => parse_toml_config(&content, config_path)?,
                "json" => parse_json_config(&content, config_path)?,
                _ => {
                    return Err(MdtocError::Config(format!(
                        "Unsupported configuration file format: {}", ext.to_string_lossy()
                    )).into());
                }
            }
        }
        // Assume TOML if no extension
        None => parse_toml_config(&content, config_path)?,
    };

    match layer {
        // An empty YAML document deserializes to null, not to a mapping
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(layer),
        _ => Err(MdtocError::Config(format!(
            "Configuration file {} must contain a table of settings", config_path.display()
        )).into()),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(content)
        .map_err(|e| MdtocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Value> {
    toml::from_str(content)
        .map_err(|e| MdtocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Value> {
    serde_json::from_str(content)
        .map_err(|e| MdtocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Overlay `source` onto `target`; tables merge key by key, anything else replaces
fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => {
            if source.is_array() {
                debug!("Replacing list setting with {:?}", source);
            }
            *target = source;
        }
    }
}
