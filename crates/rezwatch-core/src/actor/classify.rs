use crate::actor::RaiseAction;
use crate::actor::decode::{self, Position3};
use crate::memory::ByteBuffer;
use crate::offset::ActorOffsets;

/// A dead player actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corpse {
    pub actor_id: u32,
    pub position: Position3,
    /// A raise status is already applied
    pub pending_raise: bool,
}

/// A player actor casting a resurrection ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseCast {
    pub caster_id: u32,
    pub action: RaiseAction,
    pub target_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActorClass {
    Dead(Corpse),
    CastingRaise(RaiseCast),
    Other,
}

/// Classify one actor record.
///
/// Returns `None` for anything that is not a player actor, or when the
/// record is too short to hold an actor id.
pub fn classify(record: &ByteBuffer, offsets: &ActorOffsets) -> Option<ActorClass> {
    if !decode::is_player(record, offsets) {
        return None;
    }
    let actor_id = decode::actor_id(record, offsets)?;

    if decode::is_dead(record, offsets) {
        return Some(ActorClass::Dead(Corpse {
            actor_id,
            position: decode::position(record, offsets).unwrap_or_default(),
            pending_raise: decode::has_pending_raise(record, offsets),
        }));
    }

    let raise = decode::current_cast(record, offsets).and_then(RaiseAction::from_action_id);
    match (raise, decode::cast_target(record, offsets)) {
        (Some(action), Some(target_id)) => Some(ActorClass::CastingRaise(RaiseCast {
            caster_id: actor_id,
            action,
            target_id,
        })),
        _ => Some(ActorClass::Other),
    }
}
