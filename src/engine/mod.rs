//! Calculator engine
//!
//! A small state machine behind the keypad: the number being typed, the
//! left-hand operand captured at the last operator press, and the operator
//! itself. Every press goes through [`Engine::apply`]; the caller reads
//! [`Engine::display`] afterwards.
//!
//! There is no error return. Division by zero and non-finite results put the
//! literal `"Error"` on the display, and the next press of any key resets
//! the engine before (for digits and the decimal point) starting a new entry.

mod format;
mod symbol;

#[cfg(test)]
mod tests;

pub use format::format_number;
pub use symbol::{parse_sequence, Operator, Symbol};

use serde::Serialize;

/// Display marker for a failed evaluation
pub const ERROR_DISPLAY: &str = "Error";

/// Tunables for the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Maximum digits accepted in one entry (None = unbounded)
    pub max_input_len: Option<usize>,
}

/// Calculator state, mutated in place by every key press
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Engine {
    display: String,
    pending_operand: f64,
    pending_operator: Operator,
    #[serde(skip)]
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            display: "0".to_string(),
            pending_operand: 0.0,
            pending_operator: Operator::None,
            options,
        }
    }

    /// Current display text: a decimal numeral or [`ERROR_DISPLAY`]
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operand(&self) -> f64 {
        self.pending_operand
    }

    pub fn pending_operator(&self) -> Operator {
        self.pending_operator
    }

    /// Whether a left-hand operand is held (drives the AC/C label)
    pub fn has_pending_operand(&self) -> bool {
        self.pending_operand != 0.0
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Return to the initial state, keeping options
    pub fn reset(&mut self) {
        self.display = "0".to_string();
        self.pending_operand = 0.0;
        self.pending_operator = Operator::None;
    }

    /// Apply one key press
    pub fn apply(&mut self, input: Symbol) {
        if self.is_error() {
            self.reset();
            tracing::debug!(?input, "Cleared error display");
            if !input.is_entry() {
                return;
            }
        }

        match input {
            Symbol::Digit(d) => self.push_digit(d),
            Symbol::Decimal => self.push_decimal(),
            Symbol::Add | Symbol::Subtract | Symbol::Multiply | Symbol::Divide => {
                if let Some(op) = input.operator() {
                    self.select_operator(op);
                }
            }
            Symbol::Equals => self.evaluate(),
            Symbol::Clear => self.clear(),
            Symbol::Negate => self.replace_value(|x| -x),
            Symbol::Percent => self.replace_value(|x| x / 100.0),
        }

        tracing::trace!(
            ?input,
            display = %self.display,
            operand = self.pending_operand,
            operator = ?self.pending_operator,
            "Applied key"
        );
    }

    /// Numeric value of the display
    fn value(&self) -> f64 {
        // Outside the error state the display is always a numeral
        self.display.parse().unwrap_or_default()
    }

    fn entry_full(&self) -> bool {
        match self.options.max_input_len {
            Some(max) => self.display.chars().filter(char::is_ascii_digit).count() >= max,
            None => false,
        }
    }

    fn push_digit(&mut self, digit: u8) {
        let c = char::from(b'0' + digit);
        if self.display == "0" {
            self.display = c.to_string();
        } else if !self.entry_full() {
            self.display.push(c);
        }
    }

    fn push_decimal(&mut self) {
        if !self.display.contains('.') && !self.entry_full() {
            self.display.push('.');
        }
    }

    fn select_operator(&mut self, op: Operator) {
        self.pending_operand = self.value();
        self.pending_operator = op;
        self.display = "0".to_string();
    }

    fn evaluate(&mut self) {
        let rhs = self.value();
        let lhs = self.pending_operand;

        let result = match self.pending_operator {
            Operator::None => return,
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    tracing::debug!(lhs, "Division by zero");
                    self.display = ERROR_DISPLAY.to_string();
                    return;
                }
                lhs / rhs
            }
        };

        if self.set_value(result) {
            self.pending_operator = Operator::None;
        }
    }

    fn clear(&mut self) {
        if self.display != "0" {
            self.display = "0".to_string();
        } else if self.has_pending_operand() {
            self.reset();
        }
    }

    fn replace_value(&mut self, f: impl FnOnce(f64) -> f64) {
        let value = f(self.value());
        self.set_value(value);
    }

    /// Write a result to the display; returns false if it overflowed to Error
    fn set_value(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            tracing::debug!(value, "Result overflowed");
            self.display = ERROR_DISPLAY.to_string();
            return false;
        }
        self.display = format_number(value);
        true
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
