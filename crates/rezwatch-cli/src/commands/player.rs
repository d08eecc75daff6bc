//! Player command: report the local player's job.

use anyhow::Result;
use rezwatch_core::{ActorWatcher, Job, MemoryReader};

use super::ManualTicks;

pub fn run(config: &rezwatch_core::Config) -> Result<()> {
    let process = super::attach(config)?;
    let reader = MemoryReader::new(&process);
    let watcher = ActorWatcher::new(reader, config, ManualTicks)?;

    match watcher.current_player_job() {
        (Job::Adv, 0) => println!("No local player loaded"),
        (job, level) => {
            let raise = if job.can_raise() { "can raise" } else { "cannot raise" };
            println!("{} lv{} ({})", job.short_name(), level, raise);
        }
    }

    Ok(())
}
