use crate::internal::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ----- E N U M   P R O G R A M E N T R Y ---------------------------------------------

/// One entry of a [`Program`]: either a numeric operand, or a text which is
/// an operator symbol or a variable name. Which of the two is decided only
/// when the program is replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgramEntry {
    Number(f64),
    Text(String),
}

impl From<f64> for ProgramEntry {
    fn from(value: f64) -> Self {
        ProgramEntry::Number(value)
    }
}

impl From<&str> for ProgramEntry {
    fn from(text: &str) -> Self {
        ProgramEntry::Text(text.to_string())
    }
}

// ----- S T R U C T   P R O G R A M ---------------------------------------------------

/// The ordered record of everything entered into a [`Brain`](crate::Brain)
/// since it was last cleared.
///
/// Treat it as opaque: take it out with `Brain::program()`, keep it as long
/// as needed, and hand it back with `Brain::set_program()`. The JSON form is
/// a plain array of numbers and strings, e.g. `[3.0, "+", 4.0, "="]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(Vec<ProgramEntry>);

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProgramEntry> {
        self.0.iter()
    }

    pub fn entries(&self) -> &[ProgramEntry] {
        &self.0
    }

    pub(crate) fn push(&mut self, entry: ProgramEntry) {
        self.0.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// The JSON transport form of the program.
    ///
    /// JSON has no representation of infinities and NaNs, so non-finite
    /// operands come out as `null` (and are skipped by [`Program::from_json`]).
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::Syntax(e.to_string()))
    }

    /// Read a program from its JSON transport form.
    ///
    /// Anything but a JSON array is an error. Inside the array, entries that
    /// are neither numbers nor strings are skipped with a warning, so a
    /// partially damaged program still replays as far as possible.
    pub fn from_json(json: &str) -> Result<Program, Error> {
        let values: Vec<Value> =
            serde_json::from_str(json).map_err(|e| Error::Syntax(e.to_string()))?;

        let mut program = Program::new();
        for (index, value) in values.into_iter().enumerate() {
            match value {
                Value::Number(n) => match n.as_f64() {
                    Some(v) => program.push(ProgramEntry::Number(v)),
                    None => warn!("Program entry {index}: number {n} out of range - skipped"),
                },
                Value::String(s) => program.push(ProgramEntry::Text(s)),
                other => warn!("Program entry {index}: unexpected {other} - skipped"),
            }
        }
        debug!("Program read from JSON: {} entries", program.len());
        Ok(program)
    }
}

impl From<Vec<ProgramEntry>> for Program {
    fn from(entries: Vec<ProgramEntry>) -> Self {
        Program(entries)
    }
}

impl FromIterator<ProgramEntry> for Program {
    fn from_iter<I: IntoIterator<Item = ProgramEntry>>(iter: I) -> Self {
        Program(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a ProgramEntry;
    type IntoIter = std::slice::Iter<'a, ProgramEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
