//! Layout decisions for the TUI: width breakpoints, display scaling, and
//! the keypad geometry shared by rendering and mouse hit testing.
//!
//! Single source of truth for sizes - no magic numbers scattered in render code.

use super::bigtext;
use super::keypad::{Key, KeyPos, COLUMNS, GRID, ROWS};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 40 cols: minimal terminal, hints dropped
    Compact,
    /// 40-69 cols
    Normal,
    /// 70+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=39 => Breakpoint::Compact,
            40..=69 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// How the display value is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayScale {
    /// Block-glyph digits
    Large,
    /// Regular text, truncated on the left if it doesn't fit
    Plain,
}

impl DisplayScale {
    /// Large while the value fits the panel, shrinking to plain text as it grows
    pub fn for_value(value: &str, area: Rect) -> Self {
        let fits = bigtext::width(value).is_some_and(|w| w <= area.width as usize);
        if fits && area.height as usize >= bigtext::HEIGHT {
            DisplayScale::Large
        } else {
            DisplayScale::Plain
        }
    }
}

/// Keep the rightmost cells of `text` that fit in `width`, marking the cut with `…`
pub fn truncate_left(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept: Vec<char> = Vec::new();
    let mut used = 1; // room for the ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }

    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Screen rectangle of every key, paired with its focus position
pub fn key_cells(area: Rect) -> Vec<(KeyPos, &'static Key, Rect)> {
    let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS]).split(area);
    let mut cells = Vec::new();

    for (row, (keys, row_area)) in GRID.iter().zip(rows.iter()).enumerate() {
        let columns = Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS as usize])
            .split(*row_area);

        for key in keys.iter() {
            let first = columns[key.col as usize];
            let last = columns[(key.col + key.span - 1) as usize];
            let rect = first.union(last);
            let pos = KeyPos { row, col: key.col };
            cells.push((pos, key, rect));
        }
    }

    cells
}

/// Key under a screen position, if any
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<KeyPos> {
    let point = Position::new(column, row);
    key_cells(area)
        .into_iter()
        .find(|(_, _, rect)| rect.contains(point))
        .map(|(pos, _, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Symbol;
    use crate::tui::keypad::key_at;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(30), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(69), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(70), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn display_shrinks_as_value_grows() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(DisplayScale::for_value("12", area), DisplayScale::Large);
        assert_eq!(
            DisplayScale::for_value("1234567890", area),
            DisplayScale::Plain
        );
        assert_eq!(DisplayScale::for_value("Error", area), DisplayScale::Plain);
        assert_eq!(
            DisplayScale::for_value("1", Rect::new(0, 0, 20, 3)),
            DisplayScale::Plain
        );
    }

    #[test]
    fn truncate_keeps_rightmost_digits() {
        assert_eq!(truncate_left("12345", 10), "12345");
        assert_eq!(truncate_left("1234567890", 5), "…7890");
        assert_eq!(truncate_left("123", 0), "");
    }

    #[test]
    fn cells_cover_every_key() {
        let cells = key_cells(Rect::new(0, 0, 40, 20));
        assert_eq!(cells.len(), 19);

        let (_, zero, rect) = cells
            .iter()
            .find(|(_, k, _)| k.symbol == Symbol::Digit(0))
            .unwrap();
        assert_eq!(zero.span, 2);
        assert_eq!(rect.width, 20);
    }

    #[test]
    fn hit_test_maps_clicks_to_keys() {
        let area = Rect::new(10, 5, 40, 20);

        // Top-left cell is AC
        let pos = hit_test(area, 11, 6).unwrap();
        assert_eq!(key_at(pos).unwrap().symbol, Symbol::Clear);

        // Right half of the wide zero key still hits 0
        let pos = hit_test(area, 25, 22).unwrap();
        assert_eq!(key_at(pos).unwrap().symbol, Symbol::Digit(0));

        // Bottom-right is equals
        let pos = hit_test(area, 49, 24).unwrap();
        assert_eq!(key_at(pos).unwrap().symbol, Symbol::Equals);

        assert_eq!(hit_test(area, 0, 0), None);
    }
}
