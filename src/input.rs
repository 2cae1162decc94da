//! Key events and the bounded queue between the input source and the loop.
//!
//! The platform calls [`InputListener::on_input`] for every key transition;
//! the loop drains the queue one event per iteration.

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::sim::Command;

/// Device keys the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
    /// Centre/OK button.
    Confirm,
    Back,
}

/// Kind of key transition reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    /// Key went down.
    Press,
    /// Key went up.
    Release,
    /// Press and release within the short-press window.
    Short,
    /// Key held past the long-press threshold.
    Long,
    /// Auto-repeat while held.
    Repeat,
}

/// A normalized key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputEvent {
    pub key: InputKey,
    pub kind: InputType,
}

impl InputEvent {
    pub const fn press(key: InputKey) -> Self {
        Self {
            key,
            kind: InputType::Press,
        }
    }

    pub const fn release(key: InputKey) -> Self {
        Self {
            key,
            kind: InputType::Release,
        }
    }
}

impl Command {
    /// Map a key event to a game command. Only presses count.
    pub fn from_event(event: &InputEvent) -> Option<Self> {
        if event.kind != InputType::Press {
            return None;
        }
        Some(match event.key {
            InputKey::Up => Command::Up,
            InputKey::Down => Command::Down,
            InputKey::Left => Command::MoveLeft,
            InputKey::Right => Command::MoveRight,
            InputKey::Confirm => Command::Confirm,
            InputKey::Back => Command::Cancel,
        })
    }
}

/// Create the bounded event queue.
pub fn event_queue(capacity: usize) -> (InputListener, Receiver<InputEvent>) {
    let (tx, rx) = bounded(capacity);
    (InputListener { sender: tx }, rx)
}

/// Producer side of the event queue, handed to the input source.
#[derive(Debug, Clone)]
pub struct InputListener {
    sender: Sender<InputEvent>,
}

impl InputListener {
    /// Enqueue one event, blocking while the queue is full.
    ///
    /// Returns `false` once the loop has gone away; the caller should stop
    /// producing.
    pub fn on_input(&self, event: InputEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}
