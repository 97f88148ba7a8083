use anyhow::{Context as _, Result};
use boardfilter_config::AppConfig;
use boardfilter_core::LeaderboardRow;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::dataset;
use crate::error::invalid_input;

pub mod completions;
pub mod explain;
pub mod filter;

pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub data: Option<PathBuf>,
    pub json: bool,
}

impl Context<'_> {
    /// Loads the dataset named by `--data`, falling back to the configured
    /// `default_dataset`.
    pub fn load_rows(&self) -> Result<Vec<LeaderboardRow>> {
        let path = self
            .data
            .clone()
            .or_else(|| self.config.default_dataset.clone())
            .ok_or_else(|| invalid_input("no dataset given: pass --data or set default_dataset"))?;
        debug!(path = %path.display(), "dataset path resolved");
        dataset::load(&path).with_context(|| format!("load dataset {}", path.display()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
