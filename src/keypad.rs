use crate::internal::*;
use crate::Brain;
use crate::MEMORY_VARIABLE;
use crate::TEXTUAL_ZERO;

// ----- T H E   K E Y P A D -----------------------------------------------------------

/// A calculator session: the thin client feeding keys into a [`Brain`].
///
/// Digits are collected in the display until an operation key is pressed,
/// at which point the display value becomes an operand. The keypad also
/// holds the single saved-program slot, and implements the memory key
/// (storing the display value in `M` and re-evaluating).
#[derive(Debug, Clone)]
pub struct Keypad {
    brain: Brain,
    display: String,
    description_line: String,
    user_is_typing: bool,
    saved_program: Option<Program>,
}

impl Default for Keypad {
    fn default() -> Self {
        Keypad::with_brain(Brain::new())
    }
}

impl Keypad {
    pub fn new() -> Keypad {
        Keypad::default()
    }

    /// A keypad driving an already configured engine
    pub fn with_brain(brain: Brain) -> Keypad {
        Keypad {
            brain,
            display: TEXTUAL_ZERO.to_string(),
            description_line: TEXTUAL_ZERO.to_string(),
            user_is_typing: false,
            saved_program: None,
        }
    }

    // ----- K E Y S -------------------------------------------------------------------

    /// Type a digit or a decimal point into the display
    pub fn touch_digit(&mut self, key: char) -> Result<(), Error> {
        if !etc::is_digit_key(key) {
            return Err(Error::BadDigit(key));
        }

        if key == '.' {
            if !self.user_is_typing {
                self.display = "0.".to_string();
            } else if !self.display.contains('.') {
                self.display.push('.');
            }
        } else if self.user_is_typing {
            self.display.push(key);
        } else {
            self.display = key.to_string();
        }

        self.user_is_typing = true;
        Ok(())
    }

    /// Press an operation key. Whatever was being typed becomes an operand first
    pub fn perform(&mut self, symbol: &str) -> Result<(), Error> {
        if self.user_is_typing {
            let value = self.display_value()?;
            self.brain.set_operand(value);
            self.user_is_typing = false;
        }
        self.brain.perform_operation(symbol);
        self.show_result();
        Ok(())
    }

    /// Press a variable key
    pub fn recall(&mut self, variable: &str) {
        self.user_is_typing = false;
        self.brain.set_variable_operand(variable);
        self.show_result();
    }

    /// Store the display value in the memory variable, and re-evaluate
    /// everything entered so far with the new binding in place.
    pub fn store_memory(&mut self) -> Result<(), Error> {
        self.user_is_typing = false;
        let value = self.display_value()?;
        debug!("Storing {value} in {MEMORY_VARIABLE}");

        // Clearing unbinds the memory variable, so bind it after the clear
        let program = self.brain.program();
        self.brain.clear();
        self.brain.set_variable(MEMORY_VARIABLE, value);
        self.brain.replay(&program);
        self.show_result();
        Ok(())
    }

    /// Keep a copy of the current program in the saved-program slot
    pub fn save(&mut self) {
        self.saved_program = Some(self.brain.program());
    }

    /// Rebuild the state from the saved-program slot. Nothing happens if
    /// nothing was saved
    pub fn restore(&mut self) {
        let Some(program) = self.saved_program.clone() else {
            return;
        };
        self.load(&program);
    }

    /// Rebuild the state from `program`, e.g. one received from elsewhere
    pub fn load(&mut self, program: &Program) {
        self.user_is_typing = false;
        self.brain.set_program(program);
        self.show_result();
    }

    pub fn clear(&mut self) {
        self.user_is_typing = false;
        self.brain.clear();
        self.display = TEXTUAL_ZERO.to_string();
        self.description_line = TEXTUAL_ZERO.to_string();
    }

    // ----- R E A D O U T -------------------------------------------------------------

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The description, marked " ..." while a binary operation is pending, " =" otherwise
    pub fn description_line(&self) -> &str {
        &self.description_line
    }

    pub fn display_value(&self) -> Result<f64, Error> {
        self.display
            .parse::<f64>()
            .map_err(|_| Error::General("Keypad: display does not hold a number"))
    }

    pub fn is_typing(&self) -> bool {
        self.user_is_typing
    }

    pub fn saved_program(&self) -> Option<&Program> {
        self.saved_program.as_ref()
    }

    pub fn brain(&self) -> &Brain {
        &self.brain
    }

    pub fn brain_mut(&mut self) -> &mut Brain {
        &mut self.brain
    }

    fn show_result(&mut self) {
        self.display = etc::render_number(self.brain.result());
        let marker = if self.brain.is_partial_result() {
            " ..."
        } else {
            " ="
        };
        self.description_line = self.brain.description() + marker;
    }
}

// ----- T E S T S ---------------------------------------------------------------------
