//! Execution engine for the USCC.
//!
//! Implements the decode-dispatch cycle: each instruction is decoded,
//! routed to the register bank or the arithmetic unit, and its outcome
//! reported through the display sink. Decode failures become status
//! lines, never errors to the caller.

use crate::cpu::decode::{self, Instruction};
use crate::cpu::registers::{HistoryLog, RegisterBank};
use crate::display::{Console, DisplaySink};

/// The USCC calculator.
///
/// Owns all machine state: the number register bank, the history log,
/// and the display sink. Instructions execute synchronously, one call
/// per instruction, with no state shared between callers.
pub struct Calculator<D: DisplaySink = Console> {
    name: String,
    regs: RegisterBank,
    history: HistoryLog,
    sink: D,
}

impl Calculator<Console> {
    /// Create a calculator that writes status lines to stdout.
    pub fn new(name: &str) -> Self {
        Self::with_sink(name, Console)
    }
}

impl<D: DisplaySink> Calculator<D> {
    /// Create a calculator with a custom display sink.
    ///
    /// Greets the operator with `"Welcome, <name>"` immediately.
    pub fn with_sink(name: &str, mut sink: D) -> Self {
        sink.write_line(&format!("Welcome, {}", name));
        Self {
            name: name.to_string(),
            regs: RegisterBank::new(),
            history: HistoryLog::new(),
            sink,
        }
    }

    /// Execute one 32-character binary instruction.
    ///
    /// Never fails: every error is reported through the display sink,
    /// and a rejected instruction leaves the machine state untouched.
    pub fn execute(&mut self, instruction: &str) {
        let instr = match decode::decode(instruction) {
            Ok(instr) => instr,
            Err(e) => {
                self.sink.write_line(&e.to_string());
                return;
            }
        };

        match instr {
            Instruction::Store { value } => {
                let slot = self.regs.store(value);
                self.sink.write_line(&format!("Register {}: {}", slot, value));
            }

            Instruction::Recall => {
                let value = self.history.retrieve_last();
                self.sink.write_line(&format!("Last Result={}", value));
            }

            Instruction::Arith {
                op,
                source_one,
                source_two,
            } => {
                let a = self.regs.load(source_one);
                let b = self.regs.load(source_two);
                let result = op.apply(a, b);
                self.history.append(result);
                self.sink
                    .write_line(&format!("{} Result: {}", op.name(), result));
            }
        }
    }

    /// The operator name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number register bank.
    pub fn registers(&self) -> &RegisterBank {
        &self.regs
    }

    /// The calculation history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The display sink.
    pub fn sink(&self) -> &D {
        &self.sink
    }
}

impl<D: DisplaySink> std::fmt::Debug for Calculator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("name", &self.name)
            .field("regs", &self.regs)
            .field("history", &self.history)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::BufferSink;

    // Instructions from the original USCC test program
    const STORE_5: &str = "00000100000000000000000101000000";
    const STORE_10: &str = "00000100000000000000001010000000";
    const ADD_R1_R2: &str = "00000000001000100000000000100000";
    const SUB_R1_R2: &str = "00000000001000100000000000100010";
    const MUL_R1_R2: &str = "00000000001000100000000000011000";
    const DIV_R1_R2: &str = "00000000001000100000000000011010";
    const RECALL: &str = "10000100000000000000000000000000";

    fn calc() -> Calculator<BufferSink> {
        Calculator::with_sink("James", BufferSink::new())
    }

    #[test]
    fn test_welcome_greeting() {
        let calc = calc();
        assert_eq!(calc.sink().lines, vec!["Welcome, James"]);
        assert_eq!(calc.name(), "James");
    }

    #[test]
    fn test_store_reports_slot_and_value() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);

        assert_eq!(calc.sink().lines[1], "Register 1: 5");
        assert_eq!(calc.sink().lines[2], "Register 2: 10");
        assert_eq!(calc.registers().load(1), 5);
        assert_eq!(calc.registers().load(2), 10);
    }

    #[test]
    fn test_add_stores_result_in_history() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);
        calc.execute(ADD_R1_R2);

        assert_eq!(calc.sink().last(), Some("Add Result: 15"));

        calc.execute(RECALL);
        assert_eq!(calc.sink().last(), Some("Last Result=15"));
    }

    #[test]
    fn test_subtract_can_go_negative() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);
        calc.execute(SUB_R1_R2);

        assert_eq!(calc.sink().last(), Some("Subtract Result: -5"));
    }

    #[test]
    fn test_divide_floors_not_short_circuits() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);
        calc.execute(DIV_R1_R2);

        // floor(5 / 10) = 0, distinct from the zero-operand policy
        assert_eq!(calc.sink().last(), Some("Divide Result: 0"));
    }

    #[test]
    fn test_multiply_by_stored_zero() {
        let mut calc = calc();
        calc.execute("00000100000000000000000000000000"); // store 0 -> register 1
        calc.execute(STORE_10); // register 2
        calc.execute(MUL_R1_R2);

        assert_eq!(calc.sink().last(), Some("Multiply Result: 0"));
    }

    #[test]
    fn test_original_driver_sequence() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);
        calc.execute(ADD_R1_R2);
        calc.execute(SUB_R1_R2);
        calc.execute(MUL_R1_R2);
        calc.execute(DIV_R1_R2);
        calc.execute(RECALL);
        calc.execute(RECALL);
        calc.execute(RECALL);

        assert_eq!(
            calc.sink().lines,
            vec![
                "Welcome, James",
                "Register 1: 5",
                "Register 2: 10",
                "Add Result: 15",
                "Subtract Result: -5",
                "Multiply Result: 50",
                "Divide Result: 0",
                "Last Result=0",
                "Last Result=50",
                "Last Result=-5",
            ]
        );
    }

    #[test]
    fn test_invalid_length_mutates_nothing() {
        let mut calc = calc();
        calc.execute("1234567812345678123456781234567");

        assert_eq!(calc.sink().last(), Some("Invalid Instruction Length"));
        for i in 0..22 {
            assert_eq!(calc.registers().load(i), 0);
        }

        // Next store still lands in register 1
        calc.execute(STORE_5);
        assert_eq!(calc.sink().last(), Some("Register 1: 5"));
    }

    #[test]
    fn test_invalid_opcode_reported() {
        let mut calc = calc();
        calc.execute("11111100000000000000000000000000");
        assert_eq!(calc.sink().last(), Some("Invalid OPCODE"));
    }

    #[test]
    fn test_invalid_function_code_skips_history() {
        let mut calc = calc();
        calc.execute(STORE_5);
        calc.execute(STORE_10);
        calc.execute("00000000001000100000000000111111");
        assert_eq!(calc.sink().last(), Some("Invalid Function Code"));

        // Nothing was appended; recall walks into never-written slots
        calc.execute(RECALL);
        assert_eq!(calc.sink().last(), Some("Last Result=0"));
    }

    #[test]
    fn test_store_wraps_after_twenty_one_slots() {
        let mut calc = calc();
        for _ in 0..21 {
            calc.execute(STORE_5);
        }
        calc.execute(STORE_10);
        assert_eq!(calc.sink().last(), Some("Register 1: 10"));
    }
}
