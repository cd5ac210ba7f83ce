//! Engine behavior tests
//!
//! Each test drives the engine through a key sequence the way the keypad
//! would, then checks the display and pending state.

use super::*;

fn run(keys: &str) -> Engine {
    let mut engine = Engine::new();
    press(&mut engine, keys);
    engine
}

fn press(engine: &mut Engine, keys: &str) {
    for symbol in parse_sequence(keys).expect("valid key sequence") {
        engine.apply(symbol);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn initial_state() {
    let engine = Engine::new();
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.pending_operand(), 0.0);
    assert_eq!(engine.pending_operator(), Operator::None);
    assert!(!engine.has_pending_operand());
}

#[test]
fn leading_zero_is_replaced() {
    assert_eq!(run("0 5").display(), "5");
    assert_eq!(run("0 0 0").display(), "0");
    assert_eq!(run("1 0 0 7").display(), "1007");
}

#[test]
fn digits_concatenate_without_bound() {
    let digits = "9876543210".repeat(4);
    let engine = run(&digits);
    assert_eq!(engine.display(), digits);
}

#[test]
fn second_decimal_point_is_ignored() {
    assert_eq!(run("1 . 2 . 5").display(), "1.25");
    assert_eq!(run(". 5").display(), "0.5");
}

#[test]
fn input_cap_ignores_extra_digits() {
    let mut engine = Engine::with_options(EngineOptions {
        max_input_len: Some(4),
    });
    press(&mut engine, "1 2 3 4 5 6");
    assert_eq!(engine.display(), "1234");

    press(&mut engine, ".");
    assert_eq!(engine.display(), "1234");

    // A fresh entry after an operator starts counting again
    press(&mut engine, "+ 9 8");
    assert_eq!(engine.display(), "98");
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators and evaluation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn operator_captures_operand() {
    let engine = run("1 2 +");
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.pending_operand(), 12.0);
    assert_eq!(engine.pending_operator(), Operator::Add);
}

#[test]
fn chained_operator_overwrites_pending() {
    let engine = run("5 + 3 -");
    assert_eq!(engine.pending_operand(), 3.0);
    assert_eq!(engine.pending_operator(), Operator::Subtract);
    assert_eq!(engine.display(), "0");
}

#[test]
fn addition_collapses_to_integer() {
    let engine = run("7 + 3 =");
    assert_eq!(engine.display(), "10");
    assert_eq!(engine.pending_operator(), Operator::None);
    // Operand is left stale until the next operator press
    assert_eq!(engine.pending_operand(), 7.0);
}

#[test]
fn subtraction_and_multiplication() {
    assert_eq!(run("3 - 8 =").display(), "-5");
    assert_eq!(run("2.5 × 4 =").display(), "10");
    assert_eq!(run("1.5 × 1.5 =").display(), "2.25");
}

#[test]
fn division_uses_default_float_rendering() {
    let engine = run("1 ÷ 3 =");
    assert!(engine.display().starts_with("0.333"));
    assert_eq!(engine.display(), "0.3333333333333333");
}

#[test]
fn equals_without_operator_is_noop() {
    let engine = run("4 2 =");
    assert_eq!(engine.display(), "42");
    assert_eq!(engine.pending_operator(), Operator::None);
}

#[test]
fn digits_append_to_result() {
    let engine = run("7 + 3 = 5");
    assert_eq!(engine.display(), "105");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn division_by_zero_shows_error() {
    let engine = run("5 ÷ 0 =");
    assert_eq!(engine.display(), ERROR_DISPLAY);
    assert!(engine.is_error());
    // Pending state is left as it was
    assert_eq!(engine.pending_operand(), 5.0);
    assert_eq!(engine.pending_operator(), Operator::Divide);
}

#[test]
fn digit_after_error_starts_fresh() {
    let engine = run("5 ÷ 0 = 7");
    assert_eq!(engine.display(), "7");
    assert_eq!(engine.pending_operand(), 0.0);
    assert_eq!(engine.pending_operator(), Operator::None);
}

#[test]
fn decimal_after_error_starts_fresh() {
    assert_eq!(run("5 ÷ 0 = .").display(), "0.");
}

#[test]
fn other_keys_after_error_only_reset() {
    for key in ["+", "=", "±", "%", "AC"] {
        let engine = run(&format!("5 ÷ 0 = {}", key));
        assert_eq!(engine, Engine::new(), "key {}", key);
    }
}

#[test]
fn overflow_shows_error() {
    let huge = format!("1{}", "0".repeat(308));
    let engine = run(&format!("{} × 1 0 =", huge));
    assert!(engine.is_error());
}

#[test]
fn negating_unrepresentable_entry_shows_error() {
    let huge = "9".repeat(400);
    let engine = run(&format!("{} ±", huge));
    assert!(engine.is_error());
}

// ─────────────────────────────────────────────────────────────────────────────
// Unary keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn negate_toggles_sign() {
    let mut engine = run("9 ±");
    assert_eq!(engine.display(), "-9");
    press(&mut engine, "±");
    assert_eq!(engine.display(), "9");
}

#[test]
fn negate_zero_stays_zero() {
    assert_eq!(run("±").display(), "0");
}

#[test]
fn negate_keeps_pending_state() {
    let engine = run("4 × 2 ±");
    assert_eq!(engine.display(), "-2");
    assert_eq!(engine.pending_operand(), 4.0);
    assert_eq!(engine.pending_operator(), Operator::Multiply);
}

#[test]
fn percent_divides_by_hundred() {
    assert_eq!(run("5 0 %").display(), "0.5");
    assert_eq!(run("2 0 0 %").display(), "2");
    assert_eq!(run("1 %").display(), "0.01");
}

// ─────────────────────────────────────────────────────────────────────────────
// Clear
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn clear_is_two_tier() {
    let mut engine = run("5 + 3");
    assert!(engine.has_pending_operand());

    press(&mut engine, "AC");
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.pending_operand(), 5.0);
    assert_eq!(engine.pending_operator(), Operator::Add);

    press(&mut engine, "AC");
    assert_eq!(engine, Engine::new());
}

#[test]
fn clear_on_initial_state_is_noop() {
    let engine = run("AC AC");
    assert_eq!(engine, Engine::new());
}

#[test]
fn reset_keeps_options() {
    let options = EngineOptions {
        max_input_len: Some(2),
    };
    let mut engine = Engine::with_options(options);
    press(&mut engine, "1 2 + 3");
    engine.reset();
    press(&mut engine, "4 5 6");
    assert_eq!(engine.display(), "45");
}

#[test]
fn state_serializes_for_json_output() {
    let engine = run("5 + 3");
    let json = serde_json::to_value(&engine).unwrap();
    assert_eq!(json["display"], "3");
    assert_eq!(json["pending_operand"], 5.0);
    assert_eq!(json["pending_operator"], "add");
    assert!(json.get("options").is_none());
}
