//! *The evaluation engine of a four-function calculator*.
//!
//! Keys in, numbers out
//! ====================
//!
//! A [`Brain`] keeps a running accumulator, defers binary operators in a
//! single pending slot, and builds a human readable description of the
//! expression while it is being entered. Everything entered is recorded
//! in a [`Program`], which can be taken out, stored by the caller, and
//! replayed later to rebuild exactly the same state.
//!
//! ```
//! use calcbrain::prelude::*;
//!
//! let mut brain = Brain::new();
//! brain.set_operand(3.);
//! brain.perform_operation("+");
//! brain.set_operand(4.);
//! brain.perform_operation("×");
//! brain.set_operand(2.);
//! brain.perform_operation("=");
//! assert_eq!(brain.result(), 14.);
//! assert_eq!(brain.description(), "3.0 + 4.0 × 2.0");
//! ```
//!
//! The [`Keypad`] is the thin client of the engine: digit entry, a display,
//! a memory key and a single saved-program slot.

mod brain;
mod etc;
mod keypad;
mod operation;
mod program;

pub use brain::Brain;
pub use brain::DEFAULT_VARIABLE_VALUE;
pub use brain::MEMORY_VARIABLE;
pub use brain::TEXTUAL_ZERO;
pub use etc::render_number;
pub use keypad::Keypad;
pub use operation::builtin;
pub use operation::symbols;
pub use operation::BinaryFn;
pub use operation::Operation;
pub use operation::UnaryFn;
pub use program::Program;
pub use program::ProgramEntry;

/// Preamble for users of the library
pub mod prelude {
    pub use crate::Brain;
    pub use crate::Error;
    pub use crate::Keypad;
    pub use crate::Operation;
    pub use crate::Program;
    pub use crate::ProgramEntry;
    pub use crate::MEMORY_VARIABLE;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use std::collections::BTreeMap;

    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub(crate) use crate::etc;
    pub use crate::operation::Operation;
    pub use crate::program::Program;
    pub use crate::program::ProgramEntry;
    pub use crate::Error;
}

use thiserror::Error;

/// The error type of the library. The engine itself never fails: unknown
/// symbols and unbound variables are tolerated, and floating point trouble
/// propagates as IEEE-754 infinities and NaNs. The errors below stem from
/// the edges: program transport and keypad input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    General(&'static str),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("not a keypad digit: {0:?}")]
    BadDigit(char),

    #[error("{0} not found{1}")]
    NotFound(String, String),
}
