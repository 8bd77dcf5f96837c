//! Binary operations: deferred by the engine until the second operand is known
use crate::etc::infix;

// ----- C O M P U T E -----------------------------------------------------------------

pub(super) fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub(super) fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub(super) fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub(super) fn divide(a: f64, b: f64) -> f64 {
    a / b
}

// ----- R E N D E R -------------------------------------------------------------------

// Note that the minus key (U+2212) renders as a plain ASCII hyphen

pub(super) fn add_text(a: &str, b: &str) -> String {
    infix(a, "+", b)
}

pub(super) fn subtract_text(a: &str, b: &str) -> String {
    infix(a, "-", b)
}

pub(super) fn multiply_text(a: &str, b: &str) -> String {
    infix(a, "×", b)
}

pub(super) fn divide_text(a: &str, b: &str) -> String {
    infix(a, "÷", b)
}

// ----- T E S T S ---------------------------------------------------------------------
