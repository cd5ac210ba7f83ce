// Input handling system with configurable key behaviors
//
// Terminals differ in what they report for a held key. Without the kitty
// keyboard protocol every auto-repeat arrives as another Press and no
// Release is ever sent; with it, repeats arrive as Repeat and releases are
// reported. This module normalizes both:
// - Every Press triggers, so quick successive presses are never dropped
// - Repeat events trigger only for repeatable keys (moving focus), after a delay

use crossterm::event::{KeyCode, KeyEventKind};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key should behave when held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger once per press; repeats are ignored (pressing a keypad button)
    StateChange,

    /// Trigger on press, then repeat after initial delay
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Focus movement across the keypad
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(80),
        }
    }
}

/// Timing of the current hold of a single key
#[derive(Debug)]
struct KeyState {
    press_started: Instant,
    last_triggered: Instant,
}

impl KeyState {
    fn new(now: Instant) -> Self {
        Self {
            press_started: now,
            last_triggered: now,
        }
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key event
    /// Returns true if the action should be triggered
    pub fn handle_key(&mut self, key: KeyCode, kind: KeyEventKind) -> bool {
        let now = Instant::now();

        match kind {
            KeyEventKind::Press => {
                self.key_states.insert(key, KeyState::new(now));
                true
            }
            KeyEventKind::Repeat => self.handle_repeat(key, now),
            KeyEventKind::Release => {
                self.key_states.remove(&key);
                false
            }
        }
    }

    fn handle_repeat(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let KeyBehavior::Repeatable {
            initial_delay,
            repeat_interval,
        } = behavior
        else {
            return false;
        };

        // A repeat whose press we never saw (e.g. held across startup) starts the hold
        let Some(state) = self.key_states.get_mut(&key) else {
            self.key_states.insert(key, KeyState::new(now));
            return true;
        };

        if now.duration_since(state.press_started) >= initial_delay
            && now.duration_since(state.last_triggered) >= repeat_interval
        {
            state.last_triggered = now;
            return true;
        }
        false
    }

    /// Default configuration for the calculator's keys
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Focus movement - repeatable
        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::Char('l'),
            ],
            KeyBehavior::navigation(),
        );

        // Button presses and app actions - once per press
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Char(' '),
                KeyCode::Esc,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
                KeyCode::Char('?'),
                KeyCode::Char('y'),
                KeyCode::Char('L'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_every_press_triggers_without_release() {
        let mut handler = InputHandler::with_default_config();

        // No release in between, as on terminals without event-type reporting
        assert!(handler.handle_key(KeyCode::Enter, KeyEventKind::Press));
        assert!(handler.handle_key(KeyCode::Enter, KeyEventKind::Press));
        assert!(handler.handle_key(KeyCode::Right, KeyEventKind::Press));
        assert!(handler.handle_key(KeyCode::Right, KeyEventKind::Press));
    }

    #[test]
    fn test_state_change_ignores_repeat() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Enter, KeyBehavior::StateChange);

        assert!(handler.handle_key(KeyCode::Enter, KeyEventKind::Press));
        assert!(!handler.handle_key(KeyCode::Enter, KeyEventKind::Repeat));
        assert!(!handler.handle_key(KeyCode::Enter, KeyEventKind::Release));

        // Next press triggers again
        assert!(handler.handle_key(KeyCode::Enter, KeyEventKind::Press));
    }

    #[test]
    fn test_repeatable_with_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Down,
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        // Press triggers immediately
        assert!(handler.handle_key(KeyCode::Down, KeyEventKind::Press));

        // Repeat within the initial delay doesn't trigger
        assert!(!handler.handle_key(KeyCode::Down, KeyEventKind::Repeat));

        thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key(KeyCode::Down, KeyEventKind::Repeat));

        // Too soon after the last repeat
        assert!(!handler.handle_key(KeyCode::Down, KeyEventKind::Repeat));

        thread::sleep(Duration::from_millis(60));
        assert!(handler.handle_key(KeyCode::Down, KeyEventKind::Repeat));
    }

    #[test]
    fn test_release_resets_hold() {
        let mut handler = InputHandler::with_default_config();
        assert!(handler.handle_key(KeyCode::Up, KeyEventKind::Press));
        assert!(!handler.handle_key(KeyCode::Up, KeyEventKind::Release));

        // A repeat with no tracked press starts a new hold
        assert!(handler.handle_key(KeyCode::Up, KeyEventKind::Repeat));
        assert!(!handler.handle_key(KeyCode::Up, KeyEventKind::Repeat));
    }
}
