//! Field decoders for a single actor record.
//!
//! Every decoder reads at an offset from [`ActorOffsets`] inside a bounded
//! [`ByteBuffer`] and returns `None` when the field does not fit the record.

use serde::{Deserialize, Serialize};

use crate::actor::{Job, ObjectKind, is_pending_raise_status};
use crate::memory::ByteBuffer;
use crate::memory::layout::actor::{CAST_TYPE_SPELL, POSITION_X, POSITION_Y, POSITION_Z};
use crate::offset::ActorOffsets;

/// World position of an actor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub fn object_kind(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u8> {
    record.u8_at(offsets.object_kind)
}

pub fn is_player(record: &ByteBuffer, offsets: &ActorOffsets) -> bool {
    object_kind(record, offsets).and_then(ObjectKind::from_u8) == Some(ObjectKind::Player)
}

pub fn current_hp(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u32> {
    record.u32_at(offsets.current_hp)
}

pub fn is_dead(record: &ByteBuffer, offsets: &ActorOffsets) -> bool {
    current_hp(record, offsets) == Some(0)
}

pub fn job(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<Job> {
    record.u8_at(offsets.job).map(Job::from_u8)
}

pub fn level(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u8> {
    record.u8_at(offsets.level)
}

/// Action id of the spell being cast, if a spell cast is in progress
pub fn current_cast(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u16> {
    if record.u16_at(offsets.cast_type)? != CAST_TYPE_SPELL {
        return None;
    }
    record.u16_at(offsets.cast_id)
}

pub fn cast_target(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u32> {
    record.u32_at(offsets.cast_target)
}

pub fn actor_id(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<u32> {
    record.u32_at(offsets.actor_id)
}

/// Display name, cut at the first NUL with trailing padding removed
pub fn name(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<String> {
    let bytes = record.slice(offsets.name, offsets.name_len)?;
    let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
    let decoded = String::from_utf8_lossy(&bytes[..len]);
    Some(decoded.trim_end().to_string())
}

/// Position block; the client stores the floats as X, Z, Y
pub fn position(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<Position3> {
    Some(Position3 {
        x: record.f32_at(offsets.position + POSITION_X)?,
        y: record.f32_at(offsets.position + POSITION_Y)?,
        z: record.f32_at(offsets.position + POSITION_Z)?,
    })
}

/// Scan the status list for a pending-raise status.
///
/// The list ends at the first zero id or after `status_count` entries.
pub fn has_pending_raise(record: &ByteBuffer, offsets: &ActorOffsets) -> bool {
    for index in 0..offsets.status_count {
        let Some(entry) = index
            .checked_mul(offsets.status_entry_size)
            .and_then(|delta| delta.checked_add(offsets.status_list))
        else {
            return false;
        };
        match record.u16_at(entry) {
            Some(0) | None => return false,
            Some(id) if is_pending_raise_status(id) => return true,
            Some(_) => {}
        }
    }
    false
}
