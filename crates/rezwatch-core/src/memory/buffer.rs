/// Owned copy of a bounded region of process memory.
///
/// All typed reads are relative to the start of the buffer and return `None`
/// when the requested range does not fit, so decoding a truncated record can
/// never read past its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    address: u64,
    bytes: Vec<u8>,
}

impl ByteBuffer {
    pub fn new(address: u64, bytes: Vec<u8>) -> Self {
        Self { address, bytes }
    }

    /// Address the buffer was read from
    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.bytes.get(offset..end)
    }

    pub fn u8_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    pub fn u16_at(&self, offset: usize) -> Option<u16> {
        self.array_at(offset).map(u16::from_le_bytes)
    }

    pub fn u32_at(&self, offset: usize) -> Option<u32> {
        self.array_at(offset).map(u32::from_le_bytes)
    }

    pub fn f32_at(&self, offset: usize) -> Option<f32> {
        self.array_at(offset).map(f32::from_le_bytes)
    }

    fn array_at<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.slice(offset, N)?.try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_reads_little_endian() {
        let buffer = ByteBuffer::new(0x1000, vec![0x01, 0x02, 0x03, 0x04, 0x00, 0x00, 0x80, 0x3F]);

        assert_eq!(buffer.u8_at(0), Some(0x01));
        assert_eq!(buffer.u16_at(0), Some(0x0201));
        assert_eq!(buffer.u32_at(0), Some(0x0403_0201));
        assert_eq!(buffer.f32_at(4), Some(1.0));
        assert_eq!(buffer.address(), 0x1000);
    }

    #[test]
    fn test_reads_past_end_are_rejected() {
        let buffer = ByteBuffer::new(0, vec![0xFF; 6]);

        assert_eq!(buffer.u32_at(2), Some(u32::MAX));
        assert_eq!(buffer.u32_at(3), None);
        assert_eq!(buffer.u8_at(6), None);
        assert_eq!(buffer.slice(4, 4), None);
        assert_eq!(buffer.slice(usize::MAX, 2), None);
    }
}
