use crate::error::{Error, Result};
use crate::memory::{ByteBuffer, ProcessHandle};

/// Read access to another process's memory.
///
/// Implementors only provide [`ReadMemory::read_bytes`]; the typed helpers
/// decode little-endian values on top of it.
pub trait ReadMemory {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    fn read_u8(&self, address: u64) -> Result<u8> {
        Ok(read_array::<1>(self.read_bytes(address, 1)?, address)?[0])
    }

    fn read_u16(&self, address: u64) -> Result<u16> {
        read_array(self.read_bytes(address, 2)?, address).map(u16::from_le_bytes)
    }

    fn read_u32(&self, address: u64) -> Result<u32> {
        read_array(self.read_bytes(address, 4)?, address).map(u32::from_le_bytes)
    }

    fn read_u64(&self, address: u64) -> Result<u64> {
        read_array(self.read_bytes(address, 8)?, address).map(u64::from_le_bytes)
    }

    /// Read a pointer-sized value; a width other than 4 or 8 is an error
    fn read_pointer(&self, address: u64, width: u64) -> Result<u64> {
        match width {
            8 => self.read_u64(address),
            4 => self.read_u32(address).map(u64::from),
            _ => Err(Error::InvalidOffset(format!(
                "unsupported pointer width {}",
                width
            ))),
        }
    }

    /// Copy `size` bytes into a bounds-checked buffer
    fn read_buffer(&self, address: u64, size: usize) -> Result<ByteBuffer> {
        Ok(ByteBuffer::new(address, self.read_bytes(address, size)?))
    }
}

impl<T: ReadMemory + ?Sized> ReadMemory for &T {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        (**self).read_bytes(address, size)
    }
}

fn read_array<const N: usize>(bytes: Vec<u8>, address: u64) -> Result<[u8; N]> {
    let len = bytes.len();
    bytes.try_into().map_err(|_| Error::MemoryReadFailed {
        address,
        message: format!("expected {} bytes, got {}", N, len),
    })
}

/// [`ReadMemory`] backed by an open game process
pub struct MemoryReader<'a> {
    process: &'a ProcessHandle,
}

impl<'a> MemoryReader<'a> {
    pub fn new(process: &'a ProcessHandle) -> Self {
        Self { process }
    }
}

impl ReadMemory for MemoryReader<'_> {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        self.process.read_memory(address, size)
    }
}
