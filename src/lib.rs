//! # USCC Emulator
//!
//! An emulator of the USCC Headquarters four-function binary calculator.
//!
//! The USCC is a toy processor that receives 32-bit instructions as
//! strings of '0'/'1' characters. It stores 10-bit literals into a
//! rolling bank of 22 number registers (register 0 hard-wired to zero),
//! runs add/subtract/multiply/divide over two register operands, and
//! keeps the last ten results in a circular history log that can be
//! recalled most-recent-first.

pub mod binary;
pub mod cpu;
pub mod display;
pub mod tape;

// Re-export commonly used types
pub use binary::{format_bits, parse_bits, Fields, FieldSpec};
pub use cpu::{divide, ArithOp, Calculator, DecodeError, HistoryLog, Instruction, RegisterBank};
pub use display::{BufferSink, Console, DisplaySink};
pub use tape::{load_tape, Tape, TapeError};
