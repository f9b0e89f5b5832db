//! Held control state built from raw key events.

use engine::{EventSource, Key, RawEvent};

/// Snapshot of what the player currently wants.
///
/// Every flag is level-triggered: it stays set until the opposite event
/// arrives. `quit` never clears.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

#[derive(Debug, Default)]
pub struct InputState {
    intent: Intent,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    /// Apply every event pending in `source`, oldest first. Never blocks.
    pub fn poll(&mut self, source: &mut impl EventSource) {
        while let Some(event) = source.next_event() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: RawEvent) {
        match event {
            RawEvent::Quit => {
                if !self.intent.quit {
                    log::debug!("quit requested");
                }
                self.intent.quit = true;
            }
            RawEvent::KeyDown(key) => *self.flag(key) = true,
            RawEvent::KeyUp(key) => *self.flag(key) = false,
        }
    }

    fn flag(&mut self, key: Key) -> &mut bool {
        match key {
            Key::A => &mut self.intent.left,
            Key::D => &mut self.intent.right,
            Key::W => &mut self.intent.up,
            Key::S => &mut self.intent.down,
            Key::Enter => &mut self.intent.fire,
        }
    }
}
