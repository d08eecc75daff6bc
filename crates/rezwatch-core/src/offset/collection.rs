use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::memory::layout::{actor, status, table};

/// Byte offsets of the fields read from one actor record.
///
/// Defaults match the supported client version. Offsets can be overridden
/// from the config file when the client layout moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorOffsets {
    pub name: usize,
    pub name_len: usize,
    pub actor_id: usize,
    pub object_kind: usize,
    /// Start of the X, Z, Y float block
    pub position: usize,
    pub current_hp: usize,
    pub job: usize,
    pub level: usize,
    pub cast_type: usize,
    pub cast_id: usize,
    pub cast_target: usize,
    pub status_list: usize,
    pub status_entry_size: usize,
    pub status_count: usize,
}

impl Default for ActorOffsets {
    fn default() -> Self {
        Self {
            name: actor::NAME,
            name_len: actor::NAME_LEN,
            actor_id: actor::ACTOR_ID,
            object_kind: actor::OBJECT_KIND,
            position: actor::POSITION,
            current_hp: actor::CURRENT_HP,
            job: actor::JOB,
            level: actor::LEVEL,
            cast_type: actor::CAST_TYPE,
            cast_id: actor::CAST_ID,
            cast_target: actor::CAST_TARGET,
            status_list: status::LIST,
            status_entry_size: status::ENTRY_SIZE,
            status_count: status::MAX_ENTRIES,
        }
    }
}

impl ActorOffsets {
    /// Smallest record length that covers every field.
    ///
    /// Fails when the configured offsets overflow `usize`.
    pub fn required_len(&self) -> Result<usize> {
        let position_span = [actor::POSITION_X, actor::POSITION_Y, actor::POSITION_Z]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 4;
        let status_span = self.status_entry_size.checked_mul(self.status_count);

        [
            (self.name, Some(self.name_len)),
            (self.actor_id, Some(4)),
            (self.object_kind, Some(1)),
            (self.position, Some(position_span)),
            (self.current_hp, Some(4)),
            (self.job, Some(1)),
            (self.level, Some(1)),
            (self.cast_type, Some(2)),
            (self.cast_id, Some(2)),
            (self.cast_target, Some(4)),
            (self.status_list, status_span),
        ]
        .into_iter()
        .try_fold(0usize, |len, (offset, span)| {
            span.and_then(|span| offset.checked_add(span))
                .map(|end| len.max(end))
        })
        .ok_or_else(|| Error::InvalidOffset("actor offsets overflow".to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.status_entry_size < 2 {
            return Err(Error::InvalidOffset(format!(
                "status entry size {} cannot hold a status id",
                self.status_entry_size
            )));
        }
        if self.name_len == 0 {
            return Err(Error::InvalidOffset("name length is zero".to_string()));
        }
        let len = self.required_len()?;
        if len > actor::MAX_RECORD_LEN {
            return Err(Error::InvalidOffset(format!(
                "record length {:#x} exceeds {:#x}",
                len,
                actor::MAX_RECORD_LEN
            )));
        }
        Ok(())
    }
}

/// Shape of the actor pointer table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Total pointer slots in the table
    pub capacity: usize,
    /// Pointer slots reserved for player-controlled actors
    pub player_slots: usize,
    /// Pointer widths per logical actor
    pub stride: usize,
    pub pointer_width: u64,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            capacity: table::CAPACITY,
            player_slots: table::PLAYER_SLOTS,
            stride: table::STRIDE,
            pointer_width: table::POINTER_WIDTH,
        }
    }
}

impl TableLayout {
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 {
            return Err(Error::InvalidOffset("table stride is zero".to_string()));
        }
        if !matches!(self.pointer_width, 4 | 8) {
            return Err(Error::InvalidOffset(format!(
                "unsupported pointer width {}",
                self.pointer_width
            )));
        }
        if self.player_slots > self.capacity {
            return Err(Error::InvalidOffset(format!(
                "player segment ({}) exceeds table capacity ({})",
                self.player_slots, self.capacity
            )));
        }
        Ok(())
    }

    /// Pointer slot indices visited by a scan, local player first
    pub fn player_slot_indices(&self) -> impl Iterator<Item = usize> + use<> {
        (0..self.player_slots).step_by(self.stride.max(1))
    }

    /// Address of the pointer stored in `slot`, `None` past the address space
    pub fn slot_address(&self, base: u64, slot: usize) -> Option<u64> {
        u64::try_from(slot)
            .ok()?
            .checked_mul(self.pointer_width)?
            .checked_add(base)
    }

    /// Whether every slot of a table at `base` is addressable
    pub fn fits_at(&self, base: u64) -> bool {
        self.slot_address(base, self.capacity).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_required_len_covers_cast_target() {
        let offsets = ActorOffsets::default();
        // cast target (0x1B90 + 4) is the furthest field
        assert_eq!(offsets.required_len().unwrap(), 0x1B94);
        assert!(offsets.validate().is_ok());
    }

    #[test]
    fn test_required_len_follows_status_list() {
        let offsets = ActorOffsets {
            status_list: 0x2000,
            ..Default::default()
        };
        assert_eq!(offsets.required_len().unwrap(), 0x2000 + 12 * 20);
    }

    #[test]
    fn test_overflowing_status_list_rejected() {
        let offsets = ActorOffsets {
            status_count: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(offsets.required_len(), Err(Error::InvalidOffset(_))));
        assert!(matches!(offsets.validate(), Err(Error::InvalidOffset(_))));

        let offsets = ActorOffsets {
            cast_target: usize::MAX - 1,
            ..Default::default()
        };
        assert!(offsets.validate().is_err());
    }

    #[test]
    fn test_oversized_record_rejected() {
        // Fits in usize but would copy gigabytes per actor
        let offsets = ActorOffsets {
            status_count: 1 << 28,
            ..Default::default()
        };
        assert!(offsets.required_len().is_ok());
        assert!(matches!(offsets.validate(), Err(Error::InvalidOffset(_))));
    }

    #[test]
    fn test_invalid_status_entry_size() {
        let offsets = ActorOffsets {
            status_entry_size: 1,
            ..Default::default()
        };
        assert!(offsets.validate().is_err());
    }

    #[test]
    fn test_player_slot_indices_skip_metadata() {
        let layout = TableLayout::default();
        let slots: Vec<usize> = layout.player_slot_indices().collect();

        assert_eq!(slots.len(), 128);
        assert_eq!(slots[0], 0);
        assert_eq!(slots[1], 2);
        assert_eq!(*slots.last().unwrap(), 254);
        assert_eq!(layout.slot_address(0x1000, 2), Some(0x1010));
    }

    #[test]
    fn test_slot_address_past_address_space() {
        let layout = TableLayout::default();
        assert_eq!(layout.slot_address(u64::MAX - 8, 1), Some(u64::MAX));
        assert_eq!(layout.slot_address(u64::MAX - 8, 2), None);
        assert!(!layout.fits_at(u64::MAX - 8));
        assert!(layout.fits_at(0x7FF6_0000_0000));
    }

    #[test]
    fn test_table_layout_validation() {
        assert!(TableLayout::default().validate().is_ok());

        let oversized = TableLayout {
            player_slots: 500,
            ..Default::default()
        };
        assert!(oversized.validate().is_err());

        let zero_stride = TableLayout {
            stride: 0,
            ..Default::default()
        };
        assert!(zero_stride.validate().is_err());
    }
}
