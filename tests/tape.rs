use calcbrain::prelude::*;
use float_eq::assert_float_eq;

// ----- U S E R   P R O V I D E D   C L I E N T -------------------------------------

/// A paper-tape calculator: a client of the engine written entirely outside
/// of the library, printing one tape line per key. Here used as a test and
/// demo of how a client other than the `Keypad` drives a `Brain`.
#[derive(Debug, Default)]
pub struct Tape {
    brain: Brain,
    lines: Vec<String>,
}

impl Tape {
    /// Whitespace separated keys: numbers are operands, operation symbols
    /// are performed, and anything else is a variable.
    pub fn feed(&mut self, keys: &str) -> &mut Self {
        for key in keys.split_whitespace() {
            if let Ok(value) = key.parse::<f64>() {
                self.brain.set_operand(value);
            } else if self.brain.is_operation(key) {
                self.brain.perform_operation(key);
            } else {
                self.brain.set_variable_operand(key);
            }
            let marker = if self.brain.is_partial_result() { "..." } else { "=" };
            self.lines.push(format!(
                "{} {} {}",
                self.brain.description(),
                marker,
                calcbrain::render_number(self.brain.result())
            ));
        }
        self
    }

    pub fn last(&self) -> &str {
        self.lines.last().map_or("", |line| line.as_str())
    }
}

fn state(brain: &Brain) -> (String, String, bool) {
    (
        calcbrain::render_number(brain.result()),
        brain.description(),
        brain.is_partial_result(),
    )
}

// ----- T E S T S ------------------------------------------------------------------

#[test]
fn tape() {
    let mut tape = Tape::default();
    tape.feed("3 + 4 × 2 =");
    assert_eq!(tape.lines.len(), 6);
    assert_eq!(tape.lines[1], "3.0 +  ... 3.0");
    assert_eq!(tape.lines[2], "3.0 + 4.0 ... 4.0");
    assert_eq!(tape.last(), "3.0 + 4.0 × 2.0 = 14.0");
    assert_eq!(tape.brain.result(), 14.);
}

#[test]
fn chained_operators() {
    let mut tape = Tape::default();
    tape.feed("5 + + 2 =");
    assert_eq!(tape.brain.result(), 12.);
    assert_eq!(tape.last(), "5.0 + 5.0 + 2.0 = 12.0");
}

#[test]
fn memory_variable() {
    let mut tape = Tape::default();
    tape.brain.set_variable(MEMORY_VARIABLE, 7.);
    tape.brain.set_variable("x", 1.5);
    tape.feed("M + 3 =");
    assert_eq!(tape.brain.result(), 10.);

    tape.brain.clear();
    assert!(!tape.brain.variables().contains_key(MEMORY_VARIABLE));
    assert_eq!(tape.brain.variable("x"), 1.5);

    tape.feed("M + x =");
    assert_eq!(tape.last(), "M + x = 1.5");
}

#[test]
fn square_root_of_negative() {
    let mut tape = Tape::default();
    tape.feed("-4 √");
    assert!(tape.brain.result().is_nan());
    assert_eq!(tape.brain.description(), "²√(-4.0)");
    assert_eq!(tape.last(), "²√(-4.0) = NaN");
}

#[test]
fn partial_result_flag() {
    let mut tape = Tape::default();
    tape.feed("8 ÷");
    assert!(tape.brain.is_partial_result());
    tape.feed("x⁻¹");
    assert!(tape.brain.is_partial_result());
    tape.feed("=");
    assert!(!tape.brain.is_partial_result());
    assert_float_eq!(tape.brain.result(), 64., abs <= 1e-12);
}

#[test]
fn transport() -> Result<(), Error> {
    let mut tape = Tape::default();
    tape.brain.set_variable("r", 2.);
    tape.feed("π × r x² = + 1 ÷");
    let before = state(&tape.brain);

    // Ship the program as JSON, and rebuild the state in another engine
    let json = tape.brain.program().to_json()?;
    assert_eq!(json, r#"["π","×","r","x²","=","+",1.0,"÷"]"#);

    let mut other = Brain::new();
    other.set_variable("r", 2.);
    other.set_program(&Program::from_json(&json)?);
    assert_eq!(state(&other), before);
    assert_float_eq!(other.result(), 4. * std::f64::consts::PI + 1., abs <= 1e-12);
    Ok(())
}

#[test]
fn keypad_and_tape_agree() -> Result<(), Error> {
    let mut keypad = Keypad::new();
    for key in "12".chars() {
        keypad.touch_digit(key)?;
    }
    keypad.perform("−")?;
    keypad.touch_digit('5')?;
    keypad.perform("=")?;

    let mut tape = Tape::default();
    tape.feed("12 − 5 =");

    assert_eq!(keypad.brain().program(), tape.brain.program());
    assert_eq!(state(keypad.brain()), state(&tape.brain));
    assert_eq!(keypad.description_line(), "12.0 - 5.0 =");
    Ok(())
}
