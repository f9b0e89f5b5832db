//! Raw keyboard/window events, captured by the window callbacks and drained
//! once per tick by whoever owns the control state.

use std::collections::VecDeque;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// The keys the engine forwards. Everything else is dropped on capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    S,
    Enter,
}

impl Key {
    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyS => Some(Key::S),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// The window was asked to close.
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

impl RawEvent {
    /// Translate a window event. Returns `None` for anything the game does not
    /// listen to, including key auto-repeat.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::CloseRequested => Some(RawEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = Key::from_code(code)?;
                Some(match event.state {
                    ElementState::Pressed => RawEvent::KeyDown(key),
                    ElementState::Released => RawEvent::KeyUp(key),
                })
            }
            _ => None,
        }
    }
}

/// Non-blocking source of raw events.
pub trait EventSource {
    /// Next pending event, or `None` when the source is drained.
    fn next_event(&mut self) -> Option<RawEvent>;
}

/// FIFO of events received since the last drain.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<RawEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: RawEvent) {
        self.pending.push_back(event);
    }

    /// Queue the translation of `event`, if it is one we forward.
    pub fn capture(&mut self, event: &WindowEvent) {
        if let Some(raw) = RawEvent::from_window_event(event) {
            log::trace!("captured {raw:?}");
            self.push(raw);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl EventSource for EventQueue {
    fn next_event(&mut self) -> Option<RawEvent> {
        self.pending.pop_front()
    }
}
