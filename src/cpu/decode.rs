//! Instruction decoder for the USCC.
//!
//! Every instruction is a 32-character binary string. The 6-bit opcode
//! selects the instruction class; arithmetic instructions additionally
//! carry a 6-bit function code naming the operation:
//!
//! | opcode   | function | meaning                               |
//! |----------|----------|---------------------------------------|
//! | `000000` | `100000` | add two registers                     |
//! | `000000` | `100010` | subtract two registers                |
//! | `000000` | `011000` | multiply two registers                |
//! | `000000` | `011010` | divide two registers                  |
//! | `000001` | -        | store the 10-bit literal              |
//! | `100001` | -        | recall the previous calculation       |

use crate::binary::bits::{parse_bits, ParseBitsError};
use crate::binary::field::{Fields, InvalidLength};
use crate::cpu::alu::ArithOp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opcode bit patterns (6 characters, MSB first).
struct Opcode;

impl Opcode {
    /// Arithmetic instruction; the function code picks the operation.
    const ARITH: &'static str = "000000";
    /// Store the 10-bit literal into the next number register.
    const STORE: &'static str = "000001";
    /// Recall the previous calculation from the history log.
    const RECALL: &'static str = "100001";
}

/// Function code bit patterns for arithmetic instructions.
struct FunctionCode;

impl FunctionCode {
    const ADD: &'static str = "100000";
    const SUB: &'static str = "100010";
    const MUL: &'static str = "011000";
    const DIV: &'static str = "011010";
}

/// A decoded USCC instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Write a literal value into the next number register.
    Store { value: i64 },

    /// Recall the most recent calculation from the history log.
    Recall,

    /// Apply an arithmetic operation to two register-resident values.
    Arith {
        op: ArithOp,
        source_one: usize,
        source_two: usize,
    },
}

/// Decode a 32-character binary instruction.
///
/// Checks run in dispatch order: length first, then opcode, then (for
/// arithmetic instructions) the function code.
pub fn decode(instruction: &str) -> Result<Instruction, DecodeError> {
    let fields = Fields::slice(instruction)?;

    match fields.opcode {
        Opcode::STORE => {
            let value = parse_bits(fields.store)?;
            Ok(Instruction::Store { value })
        }
        Opcode::RECALL => Ok(Instruction::Recall),
        Opcode::ARITH => {
            let op = match fields.function_code {
                FunctionCode::ADD => ArithOp::Add,
                FunctionCode::SUB => ArithOp::Subtract,
                FunctionCode::MUL => ArithOp::Multiply,
                FunctionCode::DIV => ArithOp::Divide,
                _ => return Err(DecodeError::InvalidFunctionCode),
            };
            let source_one = parse_bits(fields.source_one)? as usize;
            let source_two = parse_bits(fields.source_two)? as usize;
            Ok(Instruction::Arith {
                op,
                source_one,
                source_two,
            })
        }
        _ => Err(DecodeError::InvalidOpcode),
    }
}

/// Errors that can occur during instruction decoding.
///
/// The `Display` strings for the first three variants are the exact
/// status lines the calculator reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Instruction is not exactly 32 characters.
    #[error("{0}")]
    InvalidLength(#[from] InvalidLength),

    /// Opcode is not one of the recognized patterns.
    #[error("Invalid OPCODE")]
    InvalidOpcode,

    /// Arithmetic opcode with an unrecognized function code.
    #[error("Invalid Function Code")]
    InvalidFunctionCode,

    /// A recognized opcode whose operand field holds non-binary
    /// characters. Outside the input contract, but reported rather
    /// than panicking.
    #[error("{0}")]
    MalformedField(#[from] ParseBitsError),
}
