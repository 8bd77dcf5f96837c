use crate::operation::BinaryFn;

/// A binary operation waiting for its second operand
#[derive(Debug, Clone)]
pub(crate) struct PendingBinaryOperation {
    pub first_operand: f64,
    pub description_operand: String,
    pub function: BinaryFn,
}

impl PendingBinaryOperation {
    pub fn new(first_operand: f64, description_operand: &str, function: BinaryFn) -> Self {
        PendingBinaryOperation {
            first_operand,
            description_operand: description_operand.to_string(),
            function,
        }
    }

    /// Combine the first operand with `second`
    pub fn compute(&self, second: f64) -> f64 {
        (self.function.compute)(self.first_operand, second)
    }

    /// Combine the first operand's description with `second`
    pub fn render(&self, second: &str) -> String {
        (self.function.render)(&self.description_operand, second)
    }
}
