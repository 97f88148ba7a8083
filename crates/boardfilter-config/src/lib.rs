use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use boardfilter_core::{EmptyTermPolicy, SearchField, DEFAULT_SEARCH_FIELDS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "boardfilter";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub default_dataset: Option<PathBuf>,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub fields: Vec<SearchField>,
    pub empty_terms: EmptyTermPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_dataset: None,
            search: SearchConfig {
                fields: DEFAULT_SEARCH_FIELDS.to_vec(),
                empty_terms: EmptyTermPolicy::default(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("search.fields must list at least one field")]
    EmptySearchFields,
    #[error("duplicate search field: {0}")]
    DuplicateSearchField(String),
    #[error("invalid default_dataset path")]
    InvalidDatasetPath,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_dataset: Option<PathBuf>,
    search: Option<SearchFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchFile {
    fields: Option<Vec<SearchField>>,
    empty_terms: Option<EmptyTermPolicy>,
}

/// Loads boardfilter settings. An explicit `config_path` must exist; the
/// default XDG location is optional and falls back to [`AppConfig::default`].
/// A relative `default_dataset` resolves against the config file's directory.
pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(Some(merge_config(parsed, base_dir)?))
}

fn merge_config(parsed: ConfigFile, base_dir: &Path) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(dataset) = parsed.default_dataset {
        if dataset.as_os_str().is_empty() {
            return Err(ConfigError::InvalidDatasetPath);
        }
        // Relative paths are anchored at the config file's directory.
        config.default_dataset = Some(if dataset.is_relative() {
            base_dir.join(dataset)
        } else {
            dataset
        });
    }

    if let Some(search) = parsed.search {
        if let Some(fields) = search.fields {
            config.search.fields = validate_fields(fields)?;
        }
        if let Some(policy) = search.empty_terms {
            config.search.empty_terms = policy;
        }
    }

    Ok(config)
}

fn validate_fields(fields: Vec<SearchField>) -> Result<Vec<SearchField>> {
    if fields.is_empty() {
        return Err(ConfigError::EmptySearchFields);
    }
    let mut seen = HashSet::new();
    for field in &fields {
        if !seen.insert(*field) {
            return Err(ConfigError::DuplicateSearchField(field.as_str().to_string()));
        }
    }
    Ok(fields)
}
