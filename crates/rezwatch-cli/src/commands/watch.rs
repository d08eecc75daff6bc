//! Main watch mode command.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;
use rezwatch_core::{ActorWatcher, MemoryReader, Revival, WatcherSnapshot};
use tracing::{debug, info, warn};

use crate::scheduler::{FrameClock, StopSignal};

/// Run the watch loop until Ctrl+C or the game exits
pub fn run(config: &rezwatch_core::Config, interval_ms: Option<u64>) -> Result<()> {
    let stop = Arc::new(StopSignal::new());
    let stop_ctrlc = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        info!("Received shutdown signal, stopping...");
        stop_ctrlc.stop();
    })?;

    let current_version = env!("CARGO_PKG_VERSION");
    info!("rezwatch {}", current_version);

    let process = super::attach(config)?;
    let reader = MemoryReader::new(&process);

    let interval = Duration::from_millis(interval_ms.unwrap_or(config.tick_interval_ms));
    let clock = FrameClock::new(interval);
    let mut watcher = ActorWatcher::new(reader, config, clock.subscription())?;
    watcher.enable();

    let (job, level) = watcher.current_player_job();
    info!("Local player: {} lv{}", job, level);
    debug!("Scanning every {:?}", interval);

    println!("Watching for revivals... (Ctrl+C to quit)");
    let mut last_revivals: Vec<Revival> = Vec::new();
    let mut last_contested: Option<Revival> = None;
    clock.run(&stop, || {
        if !watcher.table().is_readable() {
            warn!("Actor table is no longer readable, the game has probably exited");
            return false;
        }

        watcher.on_tick();
        let snapshot = watcher.snapshot();

        let revivals = snapshot.revivals();
        if revivals != last_revivals {
            print_revivals(&revivals);
            last_revivals = revivals;
        }

        let contested = snapshot.contested_player_cast();
        if contested != last_contested {
            if let Some(revival) = &contested {
                print_contested(revival, &snapshot);
            }
            last_contested = contested;
        }
        true
    });

    watcher.disable();
    info!("Stopped after {} scans", watcher.tick_count());
    Ok(())
}

fn print_revivals(revivals: &[Revival]) {
    if revivals.is_empty() {
        println!("{}", "No revivals in progress".dimmed());
        return;
    }

    for revival in revivals {
        match &revival.caster_name {
            Some(caster) => println!("{} <- {}", revival.corpse_name.red(), caster.green()),
            None => println!("{} <- {}", revival.corpse_name.red(), "raise effect".yellow()),
        }
    }
}

fn print_contested(revival: &Revival, snapshot: &WatcherSnapshot) {
    let by = revival
        .caster_name
        .clone()
        .unwrap_or_else(|| "a raise effect".to_string());
    let position = snapshot
        .positions
        .get(&revival.corpse_id)
        .map(|p| format!(" at ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z))
        .unwrap_or_default();
    println!(
        "{} {}{} is already being raised by {}",
        "!".bold().red(),
        revival.corpse_name,
        position,
        by.bold()
    );
}
