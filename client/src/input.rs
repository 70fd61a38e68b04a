//! Keyboard state for the two local players

use std::collections::HashSet;

use game_core::{EventSource, InputState, PaddleKeys, Polled};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keys held right now, fed from window events and sampled once per frame
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed: HashSet<KeyCode>,
    close_requested: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(code);
            }
            ElementState::Released => {
                self.pressed.remove(&code);
            }
        }
    }

    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Focus loss never delivers the key-up events
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, code: KeyCode) -> bool {
        self.pressed.contains(&code)
    }

    /// W/S drive the left paddle, the arrow keys the right one
    pub fn snapshot(&self) -> InputState {
        InputState {
            left: PaddleKeys {
                up: self.is_pressed(KeyCode::KeyW),
                down: self.is_pressed(KeyCode::KeyS),
            },
            right: PaddleKeys {
                up: self.is_pressed(KeyCode::ArrowUp),
                down: self.is_pressed(KeyCode::ArrowDown),
            },
        }
    }
}

impl EventSource for Keyboard {
    fn poll(&mut self) -> Polled {
        Polled {
            close_requested: self.close_requested,
            input: self.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_map_to_paddles() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key(KeyCode::ArrowDown, ElementState::Pressed);

        let input = keyboard.snapshot();
        assert!(input.left.up && !input.left.down);
        assert!(!input.right.up && input.right.down);
    }

    #[test]
    fn test_release_clears_key() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyS, ElementState::Pressed);
        keyboard.handle_key(KeyCode::KeyS, ElementState::Released);
        assert_eq!(keyboard.snapshot(), InputState::new());
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::Space, ElementState::Pressed);
        keyboard.handle_key(KeyCode::KeyA, ElementState::Pressed);
        assert_eq!(keyboard.snapshot(), InputState::new());
    }

    #[test]
    fn test_poll_reports_close() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        assert!(!keyboard.poll().close_requested);

        keyboard.request_close();
        let polled = keyboard.poll();
        assert!(polled.close_requested);
        assert!(polled.input.right.up);
    }

    #[test]
    fn test_release_all() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyW, ElementState::Pressed);
        keyboard.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        keyboard.release_all();
        assert_eq!(keyboard.snapshot(), InputState::new());
    }
}
