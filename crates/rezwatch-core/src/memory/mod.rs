mod buffer;
pub mod layout;
mod process;
mod reader;

#[cfg(test)]
pub mod mock;

pub use buffer::ByteBuffer;
pub use process::*;
pub use reader::{MemoryReader, ReadMemory};

#[cfg(test)]
pub use mock::{MockMemoryBuilder, MockMemoryReader};
