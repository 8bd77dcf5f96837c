use crate::internal::*;
use crate::operation;

mod pending;
use pending::PendingBinaryOperation;

/// The value of a variable that has never been bound
pub const DEFAULT_VARIABLE_VALUE: f64 = 0.;

/// The memory variable. The only binding that does not survive a `clear()`
pub const MEMORY_VARIABLE: &str = "M";

/// The description of a freshly cleared engine
pub const TEXTUAL_ZERO: &str = "0";

// ----- T H E   E V A L U A T I O N   E N G I N E -------------------------------------

/// The evaluation engine.
///
/// Operands and operators are fed in one at a time, with no precedence:
/// a binary operator is kept pending until its second operand arrives, and
/// entering a new binary operator first resolves the one already pending.
/// Alongside the numeric accumulator, the engine builds a textual
/// description of the expression, and records everything in a [`Program`]
/// that can be replayed to rebuild the same state.
#[derive(Debug, Clone)]
pub struct Brain {
    accumulator: f64,
    description_accumulator: String,
    pending: Option<PendingBinaryOperation>,
    /// Variable bindings. Unbound variables evaluate to `DEFAULT_VARIABLE_VALUE`
    variables: BTreeMap<String, f64>,
    /// Everything entered since the last clear
    program: Program,
}

impl Default for Brain {
    fn default() -> Self {
        Brain {
            accumulator: 0.,
            description_accumulator: TEXTUAL_ZERO.to_string(),
            pending: None,
            variables: BTreeMap::new(),
            program: Program::new(),
        }
    }
}

impl Brain {
    pub fn new() -> Brain {
        Brain::default()
    }

    /// An engine with a set of variable bindings already in place
    pub fn with_variables(variables: BTreeMap<String, f64>) -> Brain {
        Brain {
            variables,
            ..Brain::default()
        }
    }

    // ----- O P E R A N D S -----------------------------------------------------------

    pub fn set_operand(&mut self, value: f64) {
        trace!("operand {value}");
        self.accumulator = value;
        self.description_accumulator = etc::render_number(value);
        self.program.push(ProgramEntry::Number(value));
    }

    pub fn set_variable_operand(&mut self, name: &str) {
        self.accumulator = self.variable(name);
        trace!("variable {name} = {}", self.accumulator);
        self.description_accumulator = name.to_string();
        self.program.push(ProgramEntry::Text(name.to_string()));
    }

    // ----- O P E R A T I O N S -------------------------------------------------------

    /// Perform the operation bound to `symbol`.
    ///
    /// The symbol is recorded in the program even if it is unknown, in which
    /// case nothing else happens.
    pub fn perform_operation(&mut self, symbol: &str) {
        self.program.push(ProgramEntry::Text(symbol.to_string()));

        let Some(operation) = operation::lookup(symbol) else {
            warn!("Unknown operation '{symbol}' - ignored");
            return;
        };
        trace!("operation {symbol}");

        match operation {
            Operation::Constant(value) => {
                self.accumulator = value;
                self.description_accumulator = symbol.to_string();
            }
            Operation::Unary(function) => {
                self.accumulator = (function.compute)(self.accumulator);
                self.description_accumulator = (function.render)(&self.description_accumulator);
            }
            Operation::Binary(function) => {
                // A pending operation is resolved with whatever the accumulator
                // holds now - i.e. chained operators see their own first operand
                self.execute_pending_binary_operation();
                self.pending = Some(PendingBinaryOperation::new(
                    self.accumulator,
                    &self.description_accumulator,
                    function,
                ));
            }
            Operation::Equals => self.execute_pending_binary_operation(),
        }
    }

    fn execute_pending_binary_operation(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.accumulator = pending.compute(self.accumulator);
        self.description_accumulator = pending.render(&self.description_accumulator);
    }

    // ----- R E S U L T S -------------------------------------------------------------

    pub fn result(&self) -> f64 {
        self.accumulator
    }

    /// True while a binary operation waits for its second operand
    pub fn is_partial_result(&self) -> bool {
        self.pending.is_some()
    }

    /// The expression entered so far.
    ///
    /// While a binary operation is pending, its second operand is shown only
    /// once something new has been entered: `3.0 + ` before, `3.0 + 4.0` after.
    pub fn description(&self) -> String {
        let Some(pending) = &self.pending else {
            return self.description_accumulator.clone();
        };
        if pending.description_operand != self.description_accumulator {
            return pending.render(&self.description_accumulator);
        }
        pending.render("")
    }

    // ----- V A R I A B L E S ---------------------------------------------------------

    pub fn variables(&self) -> &BTreeMap<String, f64> {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut BTreeMap<String, f64> {
        &mut self.variables
    }

    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// The value bound to `name`, or `DEFAULT_VARIABLE_VALUE` if unbound
    pub fn variable(&self, name: &str) -> f64 {
        self.variables
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_VARIABLE_VALUE)
    }

    // ----- P R O G R A M S -----------------------------------------------------------

    pub fn program(&self) -> Program {
        self.program.clone()
    }

    /// Rebuild the state described by `program`, starting from a cleared engine
    pub fn set_program(&mut self, program: &Program) {
        self.clear();
        self.replay(program);
    }

    /// Feed the entries of `program` into the engine, on top of its current state.
    ///
    /// Numbers become operands. Texts naming an operation are performed,
    /// all other texts are taken as variable names.
    pub fn replay(&mut self, program: &Program) {
        debug!("Replaying {} program entries", program.len());
        for entry in program {
            match entry {
                ProgramEntry::Number(value) => self.set_operand(*value),
                ProgramEntry::Text(text) if operation::lookup(text).is_some() => {
                    self.perform_operation(text)
                }
                ProgramEntry::Text(text) => self.set_variable_operand(text),
            }
        }
    }

    /// Back to square one. Variable bindings survive, except `MEMORY_VARIABLE`
    pub fn clear(&mut self) {
        trace!("clear");
        self.accumulator = 0.;
        self.description_accumulator = TEXTUAL_ZERO.to_string();
        self.pending = None;
        self.variables.remove(MEMORY_VARIABLE);
        self.program.clear();
    }

    // ----- R E G I S T R Y -----------------------------------------------------------

    /// The operation bound to `symbol`, if any
    pub fn operation(&self, symbol: &str) -> Option<Operation> {
        operation::lookup(symbol)
    }

    pub fn is_operation(&self, symbol: &str) -> bool {
        operation::lookup(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        operation::symbols()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
