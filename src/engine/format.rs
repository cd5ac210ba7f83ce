//! Number rendering for the display
//!
//! `f64`'s `Display` already prints whole values without a fractional part
//! and never switches to exponent notation, so the only fixup needed is
//! folding negative zero into "0".

/// Render a finite value for the display
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_values_collapse_to_integers() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-9.0), "-9");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_representation() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(1e-7), "0.0000001");
    }
}
