//! Memory layout constants for the client's actor structures
//!
//! This module centralizes all byte offsets used for reading actor data.
//! Constants are organized by structure type. They match the supported
//! client version and are the defaults for [`crate::offset::ActorOffsets`].

/// Layout of the actor pointer table
pub mod table {
    /// Total number of pointer slots in the table
    pub const CAPACITY: usize = 424;

    /// Pointer slots reserved for player-controlled actors (table prefix)
    pub const PLAYER_SLOTS: usize = 256;

    /// Pointer widths per logical actor (actor pointer + one metadata pointer)
    pub const STRIDE: usize = 2;

    /// Size of one pointer slot (64-bit client)
    pub const POINTER_WIDTH: u64 = 8;
}

/// Layout of a single actor record
pub mod actor {
    /// Display name, fixed-size buffer
    pub const NAME: usize = 0x30;
    pub const NAME_LEN: usize = 30;

    pub const ACTOR_ID: usize = 0x74;

    /// Object kind byte (1 = player)
    pub const OBJECT_KIND: usize = 0x8C;

    /// Position block; the client stores X, Z, Y
    pub const POSITION: usize = 0xA0;
    pub const POSITION_X: usize = 0;
    pub const POSITION_Y: usize = 8;
    pub const POSITION_Z: usize = 4;

    pub const CURRENT_HP: usize = 0x1C4;
    pub const JOB: usize = 0x1E2;
    pub const LEVEL: usize = 0x1E3;

    pub const CAST_TYPE: usize = 0x1B82;
    pub const CAST_ID: usize = 0x1B84;
    pub const CAST_TARGET: usize = 0x1B90;

    /// Cast type value for a spell cast; anything else is not a real cast
    pub const CAST_TYPE_SPELL: u16 = 0x01;

    /// Upper bound on the bytes copied per record
    pub const MAX_RECORD_LEN: usize = 0x10000;
}

/// Layout of the status effect list inside an actor record
pub mod status {
    pub const LIST: usize = 0x19F8;

    /// Each entry starts with a u16 status id
    pub const ENTRY_SIZE: usize = 12;
    pub const MAX_ENTRIES: usize = 20;
}

/// Timing constants for the tick driver
pub mod timing {
    /// Interval between scans when no host frame clock is available (ms)
    pub const TICK_INTERVAL_MS: u64 = 100;
}
