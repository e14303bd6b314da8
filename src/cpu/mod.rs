//! The USCC calculator core.
//!
//! This module implements the complete USCC architecture:
//! - 22 number registers (register 0 constant zero) with a rolling store cursor
//! - 10-slot circular history log with backward recall
//! - four-function arithmetic unit
//! - 32-bit string instruction decoder and dispatcher

pub mod alu;
pub mod decode;
pub mod execute;
pub mod registers;

pub use alu::{divide, ArithOp};
pub use decode::{DecodeError, Instruction};
pub use execute::Calculator;
pub use registers::{HistoryLog, RegisterBank};
