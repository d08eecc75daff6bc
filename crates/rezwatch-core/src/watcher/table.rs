use tracing::{trace, warn};

use crate::error::{Error, Result};
use crate::memory::{ByteBuffer, ReadMemory};
use crate::offset::TableLayout;

/// View of the live actor pointer table
pub struct ActorTable<R> {
    reader: R,
    base: u64,
    layout: TableLayout,
    record_len: usize,
}

impl<R: ReadMemory> ActorTable<R> {
    /// `record_len` bytes are copied for every actor visited
    pub fn new(reader: R, base: u64, layout: TableLayout, record_len: usize) -> Result<Self> {
        if base == 0 {
            return Err(Error::TableUnavailable);
        }
        layout.validate()?;
        if !layout.fits_at(base) {
            warn!(
                "Actor table at {:#x} does not fit in the address space",
                base
            );
            return Err(Error::TableUnavailable);
        }

        Ok(Self {
            reader,
            base,
            layout,
            record_len,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Whether the table itself can still be read (the process is alive)
    pub fn is_readable(&self) -> bool {
        self.reader
            .read_pointer(self.base, self.layout.pointer_width)
            .is_ok()
    }

    /// Copy the record referenced by pointer slot `slot`.
    ///
    /// Empty slots and unreadable memory yield `None`.
    pub fn record(&self, slot: usize) -> Option<ByteBuffer> {
        let Some(slot_address) = self.layout.slot_address(self.base, slot) else {
            trace!("Slot {} is past the address space", slot);
            return None;
        };
        let pointer = match self
            .reader
            .read_pointer(slot_address, self.layout.pointer_width)
        {
            Ok(pointer) => pointer,
            Err(e) => {
                trace!("Slot {} pointer unreadable: {}", slot, e);
                return None;
            }
        };
        if pointer == 0 {
            return None;
        }

        match self.reader.read_buffer(pointer, self.record_len) {
            Ok(record) => Some(record),
            Err(e) => {
                trace!("Slot {} record at {:#x} unreadable: {}", slot, pointer, e);
                None
            }
        }
    }

    /// The local player's own record (slot 0)
    pub fn local_player(&self) -> Option<ByteBuffer> {
        self.record(0)
    }

    /// Records of the player segment in slot order, skipping empty slots
    pub fn player_records(&self) -> impl Iterator<Item = (usize, ByteBuffer)> + '_ {
        self.layout
            .player_slot_indices()
            .filter_map(|slot| self.record(slot).map(|record| (slot, record)))
    }
}
