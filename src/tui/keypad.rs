// Keypad table - how each engine symbol appears on screen
//
// The engine only knows `Symbol`. Glyphs, color classes, grid placement and
// focus navigation live here.
//
//   AC  ±  %  ÷
//    7  8  9  ×
//    4  5  6  -
//    1  2  3  +
//    0 ─── .  =

use crate::engine::Symbol;

/// Number of grid columns
pub const COLUMNS: u16 = 4;

/// Number of grid rows
pub const ROWS: usize = 5;

/// Color class of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// ÷ × - + =
    Operator,
    /// AC ± %
    Function,
    /// 0-9 and the decimal point
    Digit,
}

/// A key placed on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub symbol: Symbol,
    /// First grid column covered by the key
    pub col: u16,
    /// Number of columns the key spans
    pub span: u16,
}

const fn key(symbol: Symbol, col: u16) -> Key {
    Key {
        symbol,
        col,
        span: 1,
    }
}

const fn wide(symbol: Symbol, col: u16) -> Key {
    Key {
        symbol,
        col,
        span: 2,
    }
}

/// The keypad, row by row
pub static GRID: [&[Key]; ROWS] = [
    &[
        key(Symbol::Clear, 0),
        key(Symbol::Negate, 1),
        key(Symbol::Percent, 2),
        key(Symbol::Divide, 3),
    ],
    &[
        key(Symbol::Digit(7), 0),
        key(Symbol::Digit(8), 1),
        key(Symbol::Digit(9), 2),
        key(Symbol::Multiply, 3),
    ],
    &[
        key(Symbol::Digit(4), 0),
        key(Symbol::Digit(5), 1),
        key(Symbol::Digit(6), 2),
        key(Symbol::Subtract, 3),
    ],
    &[
        key(Symbol::Digit(1), 0),
        key(Symbol::Digit(2), 1),
        key(Symbol::Digit(3), 2),
        key(Symbol::Add, 3),
    ],
    &[
        wide(Symbol::Digit(0), 0),
        key(Symbol::Decimal, 2),
        key(Symbol::Equals, 3),
    ],
];

const DIGIT_GLYPHS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Button label for a symbol
///
/// The clear key reads "C" while a left-hand operand is held and "AC" otherwise.
pub fn label(symbol: Symbol, has_pending_operand: bool) -> &'static str {
    match symbol {
        Symbol::Digit(d) => DIGIT_GLYPHS.get(d as usize).copied().unwrap_or("?"),
        Symbol::Decimal => ".",
        Symbol::Add => "+",
        Symbol::Subtract => "-",
        Symbol::Multiply => "×",
        Symbol::Divide => "÷",
        Symbol::Equals => "=",
        Symbol::Clear if has_pending_operand => "C",
        Symbol::Clear => "AC",
        Symbol::Negate => "±",
        Symbol::Percent => "%",
    }
}

/// Color class for a symbol
pub fn class(symbol: Symbol) -> KeyClass {
    match symbol {
        Symbol::Add | Symbol::Subtract | Symbol::Multiply | Symbol::Divide | Symbol::Equals => {
            KeyClass::Operator
        }
        Symbol::Clear | Symbol::Negate | Symbol::Percent => KeyClass::Function,
        Symbol::Digit(_) | Symbol::Decimal => KeyClass::Digit,
    }
}

/// A focus position: grid row and column
///
/// The column is kept as-is when moving vertically, so passing over the
/// wide 0 key and back returns to the column you started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPos {
    pub row: usize,
    pub col: u16,
}

impl Default for KeyPos {
    /// Start on the 5 key
    fn default() -> Self {
        Self { row: 2, col: 1 }
    }
}

/// Focus movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Key covering a grid position
pub fn key_at(pos: KeyPos) -> Option<&'static Key> {
    GRID.get(pos.row)?
        .iter()
        .find(|k| pos.col >= k.col && pos.col < k.col + k.span)
}

/// Move focus one key in `direction`, stopping at the grid edges
pub fn step(pos: KeyPos, direction: Direction) -> KeyPos {
    let Some(current) = key_at(pos) else {
        return KeyPos::default();
    };

    match direction {
        Direction::Up => KeyPos {
            row: pos.row.saturating_sub(1),
            col: pos.col,
        },
        Direction::Down => KeyPos {
            row: (pos.row + 1).min(ROWS - 1),
            col: pos.col,
        },
        Direction::Left if current.col > 0 => KeyPos {
            row: pos.row,
            col: current.col - 1,
        },
        Direction::Right if current.col + current.span < COLUMNS => KeyPos {
            row: pos.row,
            col: current.col + current.span,
        },
        Direction::Left | Direction::Right => pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_keys() -> impl Iterator<Item = &'static Key> {
        GRID.iter().flat_map(|row| row.iter())
    }

    #[test]
    fn every_symbol_appears_once() {
        let symbols: Vec<Symbol> = all_keys().map(|k| k.symbol).collect();
        assert_eq!(symbols.len(), 19);
        for (i, a) in symbols.iter().enumerate() {
            assert!(!symbols[i + 1..].contains(a), "{:?} repeated", a);
        }
        for d in 0..=9 {
            assert!(symbols.contains(&Symbol::Digit(d)));
        }
    }

    #[test]
    fn rows_cover_all_columns() {
        for row in GRID {
            let width: u16 = row.iter().map(|k| k.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn zero_is_double_width() {
        let zero = all_keys().find(|k| k.symbol == Symbol::Digit(0)).unwrap();
        assert_eq!(zero.span, 2);
        assert_eq!(key_at(KeyPos { row: 4, col: 1 }), Some(zero));
    }

    #[test]
    fn clear_label_reflects_pending_operand() {
        assert_eq!(label(Symbol::Clear, false), "AC");
        assert_eq!(label(Symbol::Clear, true), "C");
        assert_eq!(label(Symbol::Digit(7), true), "7");
    }

    #[test]
    fn classes_match_button_colors() {
        assert_eq!(class(Symbol::Equals), KeyClass::Operator);
        assert_eq!(class(Symbol::Percent), KeyClass::Function);
        assert_eq!(class(Symbol::Decimal), KeyClass::Digit);
    }

    #[test]
    fn step_clamps_at_edges() {
        let top_left = KeyPos { row: 0, col: 0 };
        assert_eq!(step(top_left, Direction::Up), top_left);
        assert_eq!(step(top_left, Direction::Left), top_left);

        let equals = KeyPos { row: 4, col: 3 };
        assert_eq!(step(equals, Direction::Down), equals);
        assert_eq!(step(equals, Direction::Right), equals);
    }

    #[test]
    fn step_treats_wide_key_as_one() {
        let decimal = KeyPos { row: 4, col: 2 };
        let on_zero = step(decimal, Direction::Left);
        assert_eq!(key_at(on_zero).unwrap().symbol, Symbol::Digit(0));

        let back = step(on_zero, Direction::Right);
        assert_eq!(key_at(back).unwrap().symbol, Symbol::Decimal);
    }

    #[test]
    fn vertical_moves_keep_column() {
        let two = KeyPos { row: 3, col: 1 };
        let zero = step(two, Direction::Down);
        assert_eq!(key_at(zero).unwrap().symbol, Symbol::Digit(0));
        let up = step(zero, Direction::Up);
        assert_eq!(key_at(up).unwrap().symbol, Symbol::Digit(2));
    }
}
