//! Snapshot command: scan once and print JSON.

use std::path::Path;

use anyhow::Result;
use rezwatch_core::{ActorWatcher, MemoryReader};

use super::ManualTicks;

pub fn run(config: &rezwatch_core::Config, output: Option<&Path>) -> Result<()> {
    let process = super::attach(config)?;
    let reader = MemoryReader::new(&process);

    let mut watcher = ActorWatcher::new(reader, config, ManualTicks)?;
    watcher.enable();
    watcher.on_tick();

    let json = watcher.snapshot().to_json()?;
    if let Some(path) = output {
        std::fs::write(path, json)?;
        eprintln!("Snapshot saved to: {}", path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
