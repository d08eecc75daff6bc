mod classify;
pub mod decode;
mod enums;
mod lookup;

pub use classify::*;
pub use enums::*;
pub use lookup::*;
pub use decode::Position3;
