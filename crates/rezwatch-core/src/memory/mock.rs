//! In-memory [`ReadMemory`] double for tests

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// Sparse memory image made of independent regions.
///
/// A read succeeds only when it lies entirely inside one region.
#[derive(Debug, Clone, Default)]
pub struct MockMemoryReader {
    regions: RefCell<BTreeMap<u64, Vec<u8>>>,
}

impl MockMemoryReader {
    /// Overwrite bytes inside an already mapped region
    pub fn poke(&self, address: u64, bytes: &[u8]) {
        let mut regions = self.regions.borrow_mut();
        let (start, region) = regions
            .range_mut(..=address)
            .next_back()
            .expect("poke outside mapped memory");
        let offset = (address - start) as usize;
        region[offset..offset + bytes.len()].copy_from_slice(bytes);
    }
}

impl ReadMemory for MockMemoryReader {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let regions = self.regions.borrow();
        let (start, bytes) = regions
            .range(..=address)
            .next_back()
            .ok_or_else(|| unmapped(address))?;

        let offset = (address - start) as usize;
        bytes
            .get(offset..offset + size)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| unmapped(address))
    }
}

fn unmapped(address: u64) -> Error {
    Error::MemoryReadFailed {
        address,
        message: "unmapped mock address".to_string(),
    }
}

#[derive(Debug, Default)]
pub struct MockMemoryBuilder {
    regions: BTreeMap<u64, Vec<u8>>,
}

impl MockMemoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a zero-filled region
    pub fn zeroed(self, address: u64, len: usize) -> Self {
        self.write(address, &vec![0; len])
    }

    /// Write bytes, patching an existing region when it covers the range
    pub fn write(mut self, address: u64, bytes: &[u8]) -> Self {
        if let Some((start, region)) = self.regions.range_mut(..=address).next_back() {
            let offset = (address - start) as usize;
            if offset + bytes.len() <= region.len() {
                region[offset..offset + bytes.len()].copy_from_slice(bytes);
                return self;
            }
        }
        self.regions.insert(address, bytes.to_vec());
        self
    }

    pub fn write_u64(self, address: u64, value: u64) -> Self {
        self.write(address, &value.to_le_bytes())
    }

    pub fn build(self) -> MockMemoryReader {
        MockMemoryReader {
            regions: RefCell::new(self.regions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_within_region() {
        let reader = MockMemoryBuilder::new()
            .zeroed(0x1000, 16)
            .write_u64(0x1008, 0xDEAD_BEEF)
            .build();

        assert_eq!(reader.read_u64(0x1000).unwrap(), 0);
        assert_eq!(reader.read_u64(0x1008).unwrap(), 0xDEAD_BEEF);
        assert_eq!(reader.read_u32(0x1008).unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_reads_outside_region_fail() {
        let reader = MockMemoryBuilder::new().zeroed(0x1000, 16).build();

        assert!(reader.read_u64(0x0FFC).is_err());
        assert!(reader.read_u64(0x100C).is_err());
        assert!(reader.read_bytes(0x2000, 1).is_err());
    }

    #[test]
    fn test_poke_patches_region() {
        let reader = MockMemoryBuilder::new().zeroed(0x1000, 16).build();
        reader.poke(0x1004, &7u32.to_le_bytes());

        assert_eq!(reader.read_u32(0x1004).unwrap(), 7);
        assert_eq!((&reader).read_u32(0x1000).unwrap(), 0);
    }

    #[test]
    fn test_read_pointer_widths() {
        let reader = MockMemoryBuilder::new()
            .write_u64(0x10, 0x1_0000_0002)
            .build();

        assert_eq!(reader.read_pointer(0x10, 8).unwrap(), 0x1_0000_0002);
        assert_eq!(reader.read_pointer(0x10, 4).unwrap(), 2);
        assert!(reader.read_pointer(0x10, 3).is_err());
    }
}
