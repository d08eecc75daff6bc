use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actor::Position3;
use crate::error::Result;
use crate::watcher::{PlayerCast, UNKNOWN_CASTER};

/// Owned copy of the watcher's published state after one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherSnapshot {
    pub tick: u64,
    pub captured_at: DateTime<Utc>,
    /// Corpse id -> caster id (0 when revived by an effect)
    pub resurrections: BTreeMap<u32, u32>,
    pub names: BTreeMap<u32, String>,
    pub positions: BTreeMap<u32, Position3>,
    pub player_cast: PlayerCast,
}

/// One corpse and whoever is reviving it, with names resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Revival {
    pub corpse_id: u32,
    pub corpse_name: String,
    /// `None` when the revival comes from a status effect
    pub caster_id: Option<u32>,
    pub caster_name: Option<String>,
}

impl WatcherSnapshot {
    /// Revivals in corpse id order
    pub fn revivals(&self) -> Vec<Revival> {
        self.resurrections
            .iter()
            .map(|(&corpse_id, &caster)| {
                let caster_id = (caster != UNKNOWN_CASTER).then_some(caster);
                Revival {
                    corpse_id,
                    corpse_name: self.name_of(corpse_id),
                    caster_id,
                    caster_name: caster_id.map(|id| self.name_of(id)),
                }
            })
            .collect()
    }

    /// The revival of the local player's target when someone else owns it
    pub fn contested_player_cast(&self) -> Option<Revival> {
        if !self.player_cast.is_casting() {
            return None;
        }
        let target_id = self.player_cast.target_id;
        let caster = *self.resurrections.get(&target_id)?;
        if caster == self.player_cast.caster_id {
            return None;
        }

        self.revivals()
            .into_iter()
            .find(|revival| revival.corpse_id == target_id)
    }

    fn name_of(&self, id: u32) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("{:08X}", id))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
