//! # rezwatch-core
//!
//! Core library for the rezwatch resurrection tracker.
//!
//! This crate provides:
//! - Bounds-checked decoding of actor records read from game memory
//! - Classification of player actors (dead, casting a resurrection, other)
//! - A per-tick scan of the actor table that tracks who is reviving whom
//! - Windows process memory reading
//! - Configuration of table address and record offsets

pub mod actor;
pub mod config;
pub mod error;
pub mod memory;
pub mod offset;
pub mod watcher;

pub use actor::{
    ActorClass, Corpse, Job, ObjectKind, PENDING_RAISE_STATUSES, Position3, RaiseAction,
    RaiseCast, classify, is_pending_raise_status,
};
pub use config::Config;
pub use error::{Error, Result};
pub use memory::{ByteBuffer, DEFAULT_PROCESS_NAME, MemoryReader, ProcessHandle, ReadMemory};
pub use offset::{ActorOffsets, TableLayout};
pub use watcher::{
    ActorTable, ActorWatcher, PlayerCast, Revival, TickSubscription, UNKNOWN_CASTER,
    WatcherSnapshot, WatcherState,
};
