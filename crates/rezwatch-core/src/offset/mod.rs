mod collection;

pub use collection::{ActorOffsets, TableLayout};
