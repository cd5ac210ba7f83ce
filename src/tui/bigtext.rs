// Block-glyph digits for the display panel
//
// Each glyph is five rows tall. Only the characters a numeric display can
// contain are covered; anything else (the error marker) falls back to
// plain text in the caller.

use unicode_width::UnicodeWidthStr;

/// Rows per glyph
pub const HEIGHT: usize = 5;

/// Columns between adjacent glyphs
const SPACING: usize = 1;

fn glyph(c: char) -> Option<[&'static str; HEIGHT]> {
    let rows = match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => [" █ ", "██ ", " █ ", " █ ", "███"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        '.' => [" ", " ", " ", " ", "█"],
        '-' => ["   ", "   ", "███", "   ", "   "],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width in cells, or None if `text` has no block rendering
pub fn width(text: &str) -> Option<usize> {
    let mut total = 0;
    let mut count: usize = 0;
    for c in text.chars() {
        total += glyph(c)?[0].width();
        count += 1;
    }
    Some(total + count.saturating_sub(1) * SPACING)
}

/// Render `text` as block rows, or None if any character has no glyph
pub fn render(text: &str) -> Option<Vec<String>> {
    let glyphs = text.chars().map(glyph).collect::<Option<Vec<_>>>()?;
    let gap = " ".repeat(SPACING);

    let rows = (0..HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(&gap)
        })
        .collect();
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_glyphs_and_gaps() {
        assert_eq!(width("8"), Some(3));
        assert_eq!(width("10"), Some(7));
        assert_eq!(width("0.5"), Some(9));
        assert_eq!(width(""), Some(0));
        assert_eq!(width("-"), Some(3));
    }

    #[test]
    fn error_marker_has_no_glyphs() {
        assert_eq!(width("Error"), None);
        assert!(render("Error").is_none());
    }

    #[test]
    fn rows_have_uniform_width() {
        let rows = render("-12.5").unwrap();
        assert_eq!(rows.len(), HEIGHT);
        let expected = width("-12.5").unwrap();
        for row in rows {
            assert_eq!(row.width(), expected);
        }
    }
}
