//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod hex_utils;
pub mod init_config;
pub mod player;
pub mod snapshot;
pub mod watch;

use anyhow::Result;
use rezwatch_core::{ProcessHandle, TickSubscription};
use tracing::info;

use hex_utils::format_hex_address;

/// Find and open the game process named in the config
pub fn attach(config: &rezwatch_core::Config) -> Result<ProcessHandle> {
    let process = ProcessHandle::find_and_open(&config.process_name)?;
    info!(
        "Found {} (pid {}), actor table at {}",
        process.name,
        process.pid,
        format_hex_address(config.table_address)
    );
    Ok(process)
}

/// Subscription for one-shot commands that drive ticks by hand
pub struct ManualTicks;

impl TickSubscription for ManualTicks {
    fn subscribe(&mut self) {}

    fn unsubscribe(&mut self) {}
}
