//! Arithmetic unit for the USCC.
//!
//! Four integer operations over two register-resident values. Division
//! follows the original calculator's policy: a zero in either operand
//! short-circuits to 0, and otherwise the quotient is floored.

use serde::{Deserialize, Serialize};

/// An arithmetic operation, selected by the instruction's function code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    /// Display name used in `"<name> Result: <value>"` status lines.
    pub const fn name(self) -> &'static str {
        match self {
            ArithOp::Add => "Add",
            ArithOp::Subtract => "Subtract",
            ArithOp::Multiply => "Multiply",
            ArithOp::Divide => "Divide",
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            ArithOp::Add => a + b,
            ArithOp::Subtract => a - b,
            ArithOp::Multiply => a * b,
            ArithOp::Divide => divide(a, b),
        }
    }
}

/// Floored division with the USCC zero policy.
///
/// Returns 0 whenever either operand is 0. This is not ordinary
/// divide-by-zero guarding: dividing a zero-valued register by anything,
/// or anything by a zero-valued register, also yields 0.
pub fn divide(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }

    // Floor toward negative infinity, not toward zero.
    let quotient = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_op_names() {
        assert_eq!(ArithOp::Add.name(), "Add");
        assert_eq!(ArithOp::Subtract.name(), "Subtract");
        assert_eq!(ArithOp::Multiply.name(), "Multiply");
        assert_eq!(ArithOp::Divide.name(), "Divide");
    }

    #[test]
    fn test_apply() {
        assert_eq!(ArithOp::Add.apply(5, 10), 15);
        assert_eq!(ArithOp::Subtract.apply(5, 10), -5);
        assert_eq!(ArithOp::Multiply.apply(5, 10), 50);
        assert_eq!(ArithOp::Divide.apply(5, 10), 0);
    }

    #[test]
    fn test_divide_zero_operand_short_circuit() {
        assert_eq!(divide(0, 7), 0);
        assert_eq!(divide(7, 0), 0);
        assert_eq!(divide(0, 0), 0);
        // Even a legitimately-zero dividend short-circuits
        assert_eq!(divide(0, -3), 0);
    }

    #[test]
    fn test_divide_floors_toward_negative_infinity() {
        assert_eq!(divide(5, 10), 0);
        assert_eq!(divide(-5, 10), -1);
        assert_eq!(divide(5, -10), -1);
        assert_eq!(divide(-5, -10), 0);
        assert_eq!(divide(-7, -2), 3);
        assert_eq!(divide(7, 2), 3);
        assert_eq!(divide(-7, 2), -4);
    }

    proptest! {
        #[test]
        fn prop_divide_matches_floor(a in -10_000i64..=10_000, b in -10_000i64..=10_000) {
            prop_assume!(a != 0 && b != 0);
            let expected = ((a as f64) / (b as f64)).floor() as i64;
            prop_assert_eq!(divide(a, b), expected);
        }

        #[test]
        fn prop_divide_zero_absorbs(v in any::<i64>()) {
            prop_assert_eq!(divide(0, v), 0);
            prop_assert_eq!(divide(v, 0), 0);
        }
    }
}
