//! Unary operations: computed and rendered immediately
use crate::etc::wrap;

// ----- C O M P U T E -----------------------------------------------------------------

// sqrt, cos, sin, tan and log are taken directly from f64

pub(super) fn negate(x: f64) -> f64 {
    -x
}

pub(super) fn square(x: f64) -> f64 {
    x * x
}

pub(super) fn reciprocal(x: f64) -> f64 {
    1. / x
}

// ----- R E N D E R -------------------------------------------------------------------

pub(super) fn negate_text(d: &str) -> String {
    wrap("-(", d, ")")
}

pub(super) fn sqrt_text(d: &str) -> String {
    wrap("²√(", d, ")")
}

pub(super) fn cos_text(d: &str) -> String {
    wrap("cos(", d, ")")
}

pub(super) fn sin_text(d: &str) -> String {
    wrap("sin(", d, ")")
}

pub(super) fn tan_text(d: &str) -> String {
    wrap("tan(", d, ")")
}

pub(super) fn log_text(d: &str) -> String {
    wrap("log(", d, ")")
}

pub(super) fn square_text(d: &str) -> String {
    wrap("(", d, ")²")
}

pub(super) fn reciprocal_text(d: &str) -> String {
    wrap("(", d, ")⁻¹")
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn compute() {
        assert_eq!(negate(4.), -4.);
        assert_eq!(square(-3.), 9.);
        assert_eq!(reciprocal(4.), 0.25);
        assert_eq!(reciprocal(0.), f64::INFINITY);
        assert_eq!(reciprocal(-0.), f64::NEG_INFINITY);
        assert_float_eq!(f64::ln(std::f64::consts::E), 1., abs <= 1e-15);
        assert!(f64::ln(-1.).is_nan());
    }

    #[test]
    fn render() {
        assert_eq!(negate_text("3.0"), "-(3.0)");
        assert_eq!(sqrt_text("π"), "²√(π)");
        assert_eq!(cos_text("π"), "cos(π)");
        assert_eq!(sin_text("x"), "sin(x)");
        assert_eq!(tan_text("1.0"), "tan(1.0)");
        assert_eq!(log_text("e"), "log(e)");
        assert_eq!(square_text("3.0 + 4.0"), "(3.0 + 4.0)²");
        assert_eq!(reciprocal_text("2.0"), "(2.0)⁻¹");
    }
}
