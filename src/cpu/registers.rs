//! USCC register storage.
//!
//! The calculator has two banks:
//! - 22 number registers, with register 0 hard-wired to zero and a
//!   write cursor that rolls over slots 1..=21
//! - a 10-slot circular history log with a separate read cursor that
//!   walks backwards from the most recent entry

use serde::{Deserialize, Serialize};

/// Number of number registers, register 0 included.
pub const NUM_REGISTERS: usize = 22;

/// Number of history log slots.
pub const HISTORY_SIZE: usize = 10;

/// The 22-slot number register bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBank {
    slots: [i64; NUM_REGISTERS],
    /// Next slot to write. Stores only ever land in 1..=21.
    cursor: usize,
}

impl RegisterBank {
    /// Create a zero-initialized bank with the cursor at register 1.
    pub fn new() -> Self {
        Self {
            slots: [0; NUM_REGISTERS],
            cursor: 1,
        }
    }

    /// Store a value at the write cursor and return the slot used.
    ///
    /// The cursor wraps from 21 back to 1, so register 0 is never a
    /// write target; it is forced back to zero before every store.
    pub fn store(&mut self, value: i64) -> usize {
        if self.cursor > NUM_REGISTERS - 1 {
            self.cursor = 1;
        }
        self.slots[0] = 0;
        let slot = self.cursor;
        self.slots[slot] = value;
        self.cursor += 1;
        slot
    }

    /// Read the value held in a register.
    ///
    /// # Panics
    /// Panics if `index` is not in 0..22.
    pub fn load(&self, index: usize) -> i64 {
        assert!(
            index < NUM_REGISTERS,
            "register index {} out of range (0-{})",
            index,
            NUM_REGISTERS - 1
        );
        self.slots[index]
    }
}

impl Default for RegisterBank {
    fn default() -> Self {
        Self::new()
    }
}

/// The 10-slot circular history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    slots: [i64; HISTORY_SIZE],
    /// Next slot to write. Wraps from 10 back to 0.
    write_cursor: usize,
    /// Backward-retrieval cursor. Mirrors the write cursor after every
    /// append and decrements once per retrieval.
    read_cursor: i64,
}

impl HistoryLog {
    /// Create an empty, zero-initialized log.
    pub fn new() -> Self {
        Self {
            slots: [0; HISTORY_SIZE],
            write_cursor: 0,
            read_cursor: 0,
        }
    }

    /// Append a result, advancing the write cursor with wraparound.
    ///
    /// The read cursor is reset to sit just past the new entry, so the
    /// next retrieval returns it.
    pub fn append(&mut self, value: i64) {
        if self.write_cursor > HISTORY_SIZE - 1 {
            self.write_cursor = 0;
        }
        self.slots[self.write_cursor] = value;
        self.write_cursor += 1;
        self.read_cursor = self.write_cursor as i64;
    }

    /// Step the read cursor back one entry and return it.
    ///
    /// The cursor wraps modulo the log size instead of underflowing:
    /// retrieving more entries than were appended keeps walking the
    /// circular buffer, reading zeros where nothing was ever written.
    pub fn retrieve_last(&mut self) -> i64 {
        self.read_cursor -= 1;
        self.slots[self.read_cursor.rem_euclid(HISTORY_SIZE as i64) as usize]
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
