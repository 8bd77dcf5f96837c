use crate::internal::*;
use once_cell::sync::Lazy;

// ----- B U I L T I N   O P E R A T I O N S -------------------------------------------

// Install new builtin operations by adding them in the `mod` and
// `BUILTIN_OPERATIONS` blocks below

mod binary;
mod unary;

#[rustfmt::skip]
const BUILTIN_OPERATIONS: [(&str, Operation); 15] = [
    ("π",    Operation::Constant(std::f64::consts::PI)),
    ("e",    Operation::Constant(std::f64::consts::E)),

    ("±",    Operation::Unary(UnaryFn { compute: unary::negate,     render: unary::negate_text     })),
    ("√",    Operation::Unary(UnaryFn { compute: f64::sqrt,         render: unary::sqrt_text       })),
    ("cos",  Operation::Unary(UnaryFn { compute: f64::cos,          render: unary::cos_text        })),
    ("sin",  Operation::Unary(UnaryFn { compute: f64::sin,          render: unary::sin_text        })),
    ("tan",  Operation::Unary(UnaryFn { compute: f64::tan,          render: unary::tan_text        })),
    ("log",  Operation::Unary(UnaryFn { compute: f64::ln,           render: unary::log_text        })),
    ("x²",   Operation::Unary(UnaryFn { compute: unary::square,     render: unary::square_text     })),
    ("x⁻¹",  Operation::Unary(UnaryFn { compute: unary::reciprocal, render: unary::reciprocal_text })),

    ("+",    Operation::Binary(BinaryFn { compute: binary::add,      render: binary::add_text      })),
    ("−",    Operation::Binary(BinaryFn { compute: binary::subtract, render: binary::subtract_text })),
    ("×",    Operation::Binary(BinaryFn { compute: binary::multiply, render: binary::multiply_text })),
    ("÷",    Operation::Binary(BinaryFn { compute: binary::divide,   render: binary::divide_text   })),

    ("=",    Operation::Equals),
];

// The const table above is the source of truth. The map is just for lookup,
// since a BTreeMap cannot be compile-time const-constructed.
static REGISTRY: Lazy<BTreeMap<&'static str, Operation>> =
    Lazy::new(|| BUILTIN_OPERATIONS.into_iter().collect());

/// Look up the operation bound to `symbol` in the builtin registry
pub fn builtin(symbol: &str) -> Result<Operation, Error> {
    lookup(symbol).ok_or_else(|| Error::NotFound(symbol.to_string(), ": Unknown operation".into()))
}

/// Like [`builtin`], but for the (common) case where absence is not an error
pub(crate) fn lookup(symbol: &str) -> Option<Operation> {
    REGISTRY.get(symbol).copied()
}

/// The symbols of all builtin operations, in registry order
pub fn symbols() -> Vec<&'static str> {
    BUILTIN_OPERATIONS.iter().map(|(symbol, _)| *symbol).collect()
}

// ----- E N U M   O P E R A T I O N ---------------------------------------------------

/// What a symbol does, once it reaches the engine.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replace the accumulator by a fixed value. The description becomes
    /// the symbol itself
    Constant(f64),
    /// Apply a function to the accumulator immediately
    Unary(UnaryFn),
    /// Defer a function of two arguments until its second operand is known
    Binary(BinaryFn),
    /// Resolve whatever is pending
    Equals,
}

// ----- S T R U C T S   U N A R Y F N   A N D   B I N A R Y F N ----------------------

/// The compute/render pair of a unary operation.
#[derive(Clone, Copy)]
pub struct UnaryFn {
    pub compute: fn(f64) -> f64,
    pub render: fn(&str) -> String,
}

/// The compute/render pair of a binary operation. Both functions take
/// the first operand as their first argument.
#[derive(Clone, Copy)]
pub struct BinaryFn {
    pub compute: fn(f64, f64) -> f64,
    pub render: fn(&str, &str) -> String,
}

// Cannot autoderive the Debug trait
impl core::fmt::Debug for UnaryFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "UnaryFn")
    }
}

impl core::fmt::Debug for BinaryFn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BinaryFn")
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry() -> Result<(), Error> {
        assert_eq!(symbols().len(), BUILTIN_OPERATIONS.len());
        assert_eq!(REGISTRY.len(), BUILTIN_OPERATIONS.len());

        assert!(matches!(builtin("π")?, Operation::Constant(v) if v == std::f64::consts::PI));
        assert!(matches!(builtin("=")?, Operation::Equals));
        assert!(matches!(builtin("×")?, Operation::Binary(_)));
        assert!(matches!(builtin("x⁻¹")?, Operation::Unary(_)));

        // The ASCII hyphen is not the minus operator
        assert!(matches!(builtin("-"), Err(Error::NotFound(_, _))));
        assert!(lookup("M").is_none());
        Ok(())
    }

    #[test]
    fn dispatch() -> Result<(), Error> {
        let Operation::Binary(minus) = builtin("−")? else {
            panic!("minus is not binary");
        };
        assert_eq!((minus.compute)(7., 2.), 5.);
        assert_eq!((minus.render)("7.0", "2.0"), "7.0 - 2.0");

        let Operation::Unary(root) = builtin("√")? else {
            panic!("root is not unary");
        };
        assert_eq!((root.compute)(16.), 4.);
        assert!((root.compute)(-4.).is_nan());
        assert_eq!((root.render)("-4.0"), "²√(-4.0)");
        Ok(())
    }
}
