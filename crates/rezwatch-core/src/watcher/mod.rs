//! Per-tick actor table scan.
//!
//! [`ActorWatcher`] walks the player segment of the actor table once per
//! host tick and publishes:
//! - which corpse is being revived by whom (`resurrections`)
//! - the local player's own resurrection cast (`player_cast`)
//! - name and position caches keyed by actor id
//!
//! The resurrection map and the caster half of the player cast are rebuilt
//! every tick. The name cache only grows and the position cache keeps the
//! latest position seen for each corpse.

mod snapshot;
mod table;
mod tick;

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::actor::decode;
use crate::actor::{ActorClass, Corpse, Job, Position3, RaiseCast, classify};
use crate::config::Config;
use crate::error::Result;
use crate::memory::{ByteBuffer, ReadMemory};
use crate::offset::ActorOffsets;

pub use snapshot::{Revival, WatcherSnapshot};
pub use table::ActorTable;
pub use tick::TickSubscription;

/// Caster id recorded for a corpse revived by a status effect
pub const UNKNOWN_CASTER: u32 = 0;

/// Slot holding the local player's own record
const LOCAL_PLAYER_SLOT: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatcherState {
    #[default]
    Disabled,
    Enabled,
}

/// The local player's resurrection cast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCast {
    pub target_id: u32,
    /// [`PlayerCast::NO_CASTER`] when the player is not casting
    pub caster_id: u32,
}

impl PlayerCast {
    pub const NO_CASTER: u32 = u32::MAX;

    pub fn is_casting(&self) -> bool {
        self.caster_id != Self::NO_CASTER
    }
}

impl Default for PlayerCast {
    fn default() -> Self {
        Self {
            target_id: 0,
            caster_id: Self::NO_CASTER,
        }
    }
}

/// State published to readers between ticks
#[derive(Debug, Clone, Default)]
struct Published {
    resurrections: HashMap<u32, u32>,
    names: HashMap<u32, String>,
    positions: HashMap<u32, Position3>,
    player_cast: PlayerCast,
}

impl Published {
    fn begin_tick(&mut self) {
        self.resurrections.clear();
        // The target is kept until a new cast replaces it
        self.player_cast.caster_id = PlayerCast::NO_CASTER;
    }

    fn cache_name(&mut self, actor_id: u32, record: &ByteBuffer, offsets: &ActorOffsets) {
        self.names
            .entry(actor_id)
            .or_insert_with(|| decode::name(record, offsets).unwrap_or_default());
    }

    fn record_corpse(&mut self, corpse: Corpse, record: &ByteBuffer, offsets: &ActorOffsets) {
        self.positions.insert(corpse.actor_id, corpse.position);
        if corpse.pending_raise {
            // Never replaces a caster already seen this tick
            self.resurrections
                .entry(corpse.actor_id)
                .or_insert(UNKNOWN_CASTER);
        }
        self.cache_name(corpse.actor_id, record, offsets);
    }

    fn record_cast(
        &mut self,
        slot: usize,
        cast: RaiseCast,
        record: &ByteBuffer,
        offsets: &ActorOffsets,
    ) {
        self.cache_name(cast.caster_id, record, offsets);

        if slot == LOCAL_PLAYER_SLOT {
            self.player_cast = PlayerCast {
                target_id: cast.target_id,
                caster_id: cast.caster_id,
            };
        }

        // First caster wins, except over the local player's own entry
        match self.resurrections.get(&cast.target_id) {
            Some(&caster) if caster != self.player_cast.caster_id => {
                trace!(
                    "{:08X} already revived by {:08X}, ignoring {} from {:08X}",
                    cast.target_id,
                    caster,
                    cast.action.name(),
                    cast.caster_id
                );
            }
            _ => {
                trace!(
                    "{:08X} casting {} on {:08X}",
                    cast.caster_id,
                    cast.action.name(),
                    cast.target_id
                );
                self.resurrections.insert(cast.target_id, cast.caster_id);
            }
        }
    }
}

/// Scans the actor table on every host tick while enabled.
///
/// All mutation happens in [`ActorWatcher::on_tick`], which takes `&mut self`;
/// readers borrow the published maps between ticks.
pub struct ActorWatcher<R, S: TickSubscription> {
    table: ActorTable<R>,
    offsets: ActorOffsets,
    subscription: S,
    state: WatcherState,
    tick: u64,
    published: Published,
}

impl<R: ReadMemory, S: TickSubscription> ActorWatcher<R, S> {
    /// Create a disabled watcher over the table at `config.table_address`.
    ///
    /// Fails with [`crate::Error::TableUnavailable`] when the address is zero.
    pub fn new(reader: R, config: &Config, subscription: S) -> Result<Self> {
        config.actor.validate()?;
        let record_len = config.actor.required_len()?;
        let table = ActorTable::new(
            reader,
            config.table_address,
            config.table.clone(),
            record_len,
        )?;
        debug!(
            "Actor table at {:#x}, {} player slots, record length {:#x}",
            table.base(),
            table.layout().player_slots,
            record_len
        );

        Ok(Self {
            table,
            offsets: config.actor.clone(),
            subscription,
            state: WatcherState::Disabled,
            tick: 0,
            published: Published::default(),
        })
    }

    /// Scan the table once. Ticks delivered while disabled are ignored.
    pub fn on_tick(&mut self) {
        if self.state == WatcherState::Disabled {
            trace!("Ignoring tick while disabled");
            return;
        }

        self.tick += 1;
        self.published.begin_tick();

        let mut players = 0usize;
        for (slot, record) in self.table.player_records() {
            let Some(class) = classify(&record, &self.offsets) else {
                continue;
            };
            players += 1;

            match class {
                ActorClass::Dead(corpse) => {
                    self.published.record_corpse(corpse, &record, &self.offsets)
                }
                ActorClass::CastingRaise(cast) => {
                    self.published
                        .record_cast(slot, cast, &record, &self.offsets)
                }
                ActorClass::Other => {}
            }
        }

        trace!(
            "Tick {}: {} players, {} revivals",
            self.tick,
            players,
            self.published.resurrections.len()
        );
    }

    /// Job and level of the local player, `(Job::Adv, 0)` when unavailable
    pub fn current_player_job(&self) -> (Job, u8) {
        match self.table.local_player() {
            Some(record) if decode::is_player(&record, &self.offsets) => (
                decode::job(&record, &self.offsets).unwrap_or_default(),
                decode::level(&record, &self.offsets).unwrap_or(0),
            ),
            _ => (Job::Adv, 0),
        }
    }
}

impl<R, S: TickSubscription> ActorWatcher<R, S> {
    pub fn enable(&mut self) {
        if self.state == WatcherState::Enabled {
            return;
        }

        self.subscription.subscribe();
        self.state = WatcherState::Enabled;
        debug!("Actor watcher enabled");
    }

    /// Stop receiving ticks and clear the resurrection state.
    ///
    /// Name and position caches are kept; they are keyed by actor id.
    pub fn disable(&mut self) {
        if self.state == WatcherState::Disabled {
            return;
        }

        self.subscription.unsubscribe();
        self.state = WatcherState::Disabled;
        self.published.resurrections.clear();
        // Caster resets to NO_CASTER rather than 0, so is_casting() is false
        self.published.player_cast = PlayerCast::default();
        debug!("Actor watcher disabled");
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == WatcherState::Enabled
    }

    /// Number of scans performed
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Corpse id -> caster id, [`UNKNOWN_CASTER`] for effect revivals
    pub fn resurrections(&self) -> &HashMap<u32, u32> {
        &self.published.resurrections
    }

    pub fn names(&self) -> &HashMap<u32, String> {
        &self.published.names
    }

    pub fn positions(&self) -> &HashMap<u32, Position3> {
        &self.published.positions
    }

    pub fn player_cast(&self) -> PlayerCast {
        self.published.player_cast
    }

    pub fn table(&self) -> &ActorTable<R> {
        &self.table
    }

    pub fn snapshot(&self) -> WatcherSnapshot {
        WatcherSnapshot {
            tick: self.tick,
            captured_at: Utc::now(),
            resurrections: self.published.resurrections.clone().into_iter().collect(),
            names: self.published.names.clone().into_iter().collect(),
            positions: self.published.positions.clone().into_iter().collect(),
            player_cast: self.published.player_cast,
        }
    }
}

impl<R, S: TickSubscription> Drop for ActorWatcher<R, S> {
    fn drop(&mut self) {
        self.disable();
    }
}
