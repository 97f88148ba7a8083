use boardfilter_core::{CoreError, LeaderboardRow};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const STDIN_PATH: &str = "-";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid row {index}: {source}")]
    InvalidRow {
        index: usize,
        #[source]
        source: CoreError,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Rows(Vec<LeaderboardRow>),
    Wrapped { rows: Vec<LeaderboardRow> },
}

/// Loads rows from a JSON file, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<Vec<LeaderboardRow>> {
    let contents = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        if !path.exists() {
            return Err(DatasetError::Missing(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    let rows = parse(&contents)?;
    debug!(path = %path.display(), rows = rows.len(), "dataset loaded");
    Ok(rows)
}

pub fn parse(contents: &str) -> Result<Vec<LeaderboardRow>> {
    let rows = match serde_json::from_str(contents)? {
        DatasetFile::Rows(rows) => rows,
        DatasetFile::Wrapped { rows } => rows,
    };
    for (index, row) in rows.iter().enumerate() {
        row.validate()
            .map_err(|source| DatasetError::InvalidRow { index, source })?;
    }
    Ok(rows)
}
