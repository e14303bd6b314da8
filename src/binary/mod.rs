//! Binary string primitives.
//!
//! This module provides the text boundary of the emulator:
//! - [`parse_bits`] / [`format_bits`] - binary text <-> native integers
//! - [`Fields`] - fixed-schema slicing of a 32-character instruction

pub mod bits;
pub mod field;

pub use bits::{format_bits, parse_bits, ParseBitsError};
pub use field::{FieldSpec, Fields, InvalidLength, INSTRUCTION_FIELDS, INSTRUCTION_WIDTH};
