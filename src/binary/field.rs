//! Fixed-schema instruction field layout.
//!
//! A USCC instruction is 32 '0'/'1' characters, MSB first, carved into
//! five named fields at fixed offsets:
//!
//! | field         | bits    | width |
//! |---------------|---------|-------|
//! | opcode        | 0 - 5   | 6     |
//! | source_one    | 6 - 10  | 5     |
//! | source_two    | 11 - 15 | 5     |
//! | store         | 16 - 25 | 10    |
//! | function_code | 26 - 31 | 6     |
//!
//! The layout lives in one descriptor table consumed by a single slicing
//! routine, so the field boundaries are checked in one place.

use thiserror::Error;

/// Total instruction width in characters.
pub const INSTRUCTION_WIDTH: usize = 32;

/// A named field at a fixed offset within the instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

/// The instruction field schema, in wire order.
pub const INSTRUCTION_FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "opcode", offset: 0, width: 6 },
    FieldSpec { name: "source_one", offset: 6, width: 5 },
    FieldSpec { name: "source_two", offset: 11, width: 5 },
    FieldSpec { name: "store", offset: 16, width: 10 },
    FieldSpec { name: "function_code", offset: 26, width: 6 },
];

// The schema must tile the instruction exactly: contiguous fields,
// widths summing to the instruction width.
const _: () = {
    let mut expected_offset = 0;
    let mut i = 0;
    while i < INSTRUCTION_FIELDS.len() {
        assert!(INSTRUCTION_FIELDS[i].offset == expected_offset);
        expected_offset += INSTRUCTION_FIELDS[i].width;
        i += 1;
    }
    assert!(expected_offset == INSTRUCTION_WIDTH);
};

/// The five field slices of a validated 32-character instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub opcode: &'a str,
    pub source_one: &'a str,
    pub source_two: &'a str,
    pub store: &'a str,
    pub function_code: &'a str,
}

impl<'a> Fields<'a> {
    /// Slice an instruction into its five fields.
    ///
    /// The only precondition checked here is the length; field contents
    /// are validated by whoever parses them.
    pub fn slice(instruction: &'a str) -> Result<Self, InvalidLength> {
        if instruction.len() != INSTRUCTION_WIDTH || !instruction.is_ascii() {
            return Err(InvalidLength(instruction.chars().count()));
        }

        let field = |i: usize| {
            let f = &INSTRUCTION_FIELDS[i];
            &instruction[f.offset..f.offset + f.width]
        };

        // Indices follow INSTRUCTION_FIELDS order.
        Ok(Self {
            opcode: field(0),
            source_one: field(1),
            source_two: field(2),
            store: field(3),
            function_code: field(4),
        })
    }
}

/// The instruction was not exactly 32 characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid Instruction Length")]
pub struct InvalidLength(pub usize);
