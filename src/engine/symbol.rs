//! Input symbols and pending operators
//!
//! `Symbol` is the only thing the engine consumes. How a symbol looks on
//! screen (glyph, color, width) lives in the keypad table, not here.

use anyhow::{bail, Result};
use serde::Serialize;

/// One discrete keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A digit 0-9 (construct with [`Symbol::digit`])
    Digit(u8),
    Decimal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    Negate,
    Percent,
}

impl Symbol {
    /// Digit symbol, or None if `n` is not a single decimal digit
    pub fn digit(n: u8) -> Option<Self> {
        (n <= 9).then_some(Symbol::Digit(n))
    }

    /// Binary operator this symbol selects, if it is one
    pub fn operator(self) -> Option<Operator> {
        match self {
            Symbol::Add => Some(Operator::Add),
            Symbol::Subtract => Some(Operator::Subtract),
            Symbol::Multiply => Some(Operator::Multiply),
            Symbol::Divide => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Whether this symbol edits the number being typed
    pub fn is_entry(self) -> bool {
        matches!(self, Symbol::Digit(_) | Symbol::Decimal)
    }

    /// Parse a button label or one of its ASCII aliases
    pub fn from_label(label: &str) -> Option<Self> {
        let symbol = match label {
            "." => Symbol::Decimal,
            "+" => Symbol::Add,
            "-" => Symbol::Subtract,
            "×" | "x" | "X" | "*" => Symbol::Multiply,
            "÷" | "/" => Symbol::Divide,
            "=" => Symbol::Equals,
            "AC" | "ac" | "C" | "c" => Symbol::Clear,
            "±" | "-/+" | "+/-" => Symbol::Negate,
            "%" => Symbol::Percent,
            _ => {
                let mut chars = label.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return None;
                };
                Symbol::digit(c.to_digit(10)? as u8)?
            }
        };
        Some(symbol)
    }
}

/// Parse a whitespace-separated key sequence such as `"12.5 + 3 ="`
///
/// Tokens are either a single label (`AC`, `±`, `÷`, ...) or a run of digits
/// and decimal points, which expands to one press per character.
pub fn parse_sequence(input: &str) -> Result<Vec<Symbol>> {
    let mut symbols = Vec::new();

    for token in input.split_whitespace() {
        if let Some(symbol) = Symbol::from_label(token) {
            symbols.push(symbol);
            continue;
        }

        if !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            bail!("Unknown key '{}'", token);
        }

        for c in token.chars() {
            let symbol = match c.to_digit(10) {
                Some(n) => Symbol::Digit(n as u8),
                None => Symbol::Decimal,
            };
            symbols.push(symbol);
        }
    }

    Ok(symbols)
}

/// Operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Short glyph for the status bar
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rejects_out_of_range() {
        assert_eq!(Symbol::digit(7), Some(Symbol::Digit(7)));
        assert_eq!(Symbol::digit(10), None);
    }

    #[test]
    fn labels_and_aliases() {
        assert_eq!(Symbol::from_label("÷"), Some(Symbol::Divide));
        assert_eq!(Symbol::from_label("/"), Some(Symbol::Divide));
        assert_eq!(Symbol::from_label("x"), Some(Symbol::Multiply));
        assert_eq!(Symbol::from_label("-/+"), Some(Symbol::Negate));
        assert_eq!(Symbol::from_label("AC"), Some(Symbol::Clear));
        assert_eq!(Symbol::from_label("C"), Some(Symbol::Clear));
        assert_eq!(Symbol::from_label("9"), Some(Symbol::Digit(9)));
        assert_eq!(Symbol::from_label("12"), None);
        assert_eq!(Symbol::from_label("sqrt"), None);
    }

    #[test]
    fn sequence_expands_number_runs() {
        let symbols = parse_sequence("12 + 3 =").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Digit(1),
                Symbol::Digit(2),
                Symbol::Add,
                Symbol::Digit(3),
                Symbol::Equals,
            ]
        );

        let symbols = parse_sequence("1.5 %").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Digit(1),
                Symbol::Decimal,
                Symbol::Digit(5),
                Symbol::Percent,
            ]
        );
    }

    #[test]
    fn sequence_rejects_unknown_token() {
        let err = parse_sequence("5 ^ 2").unwrap_err();
        assert!(err.to_string().contains("'^'"));
    }

    #[test]
    fn operator_mapping() {
        assert_eq!(Symbol::Divide.operator(), Some(Operator::Divide));
        assert_eq!(Symbol::Equals.operator(), None);
        assert_eq!(Operator::default(), Operator::None);
    }
}
