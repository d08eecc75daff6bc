//! Watcher configuration loaded from a TOML file

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::memory::DEFAULT_PROCESS_NAME;
use crate::memory::layout::timing;
use crate::offset::{ActorOffsets, TableLayout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Executable name of the game client
    pub process_name: String,
    /// Address of the actor pointer table; zero means unknown
    pub table_address: u64,
    pub tick_interval_ms: u64,
    pub table: TableLayout,
    pub actor: ActorOffsets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            table_address: 0,
            tick_interval_ms: timing::TICK_INTERVAL_MS,
            table: TableLayout::default(),
            actor: ActorOffsets::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved config to {}", path.as_ref().display());
        Ok(())
    }

    /// Check the layout tables; the table address is checked when attaching
    pub fn validate(&self) -> Result<()> {
        self.table.validate()?;
        self.actor.validate()
    }
}
