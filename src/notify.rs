//! Haptic/audio notification sequences
//!
//! Sequences are plain data; a [`Notifier`] plays them on whatever the
//! platform has (motor, speaker, backlight).

use std::time::Duration;

use NotificationMessage as Msg;

/// Notes used by the game cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    /// High blip when an obstacle is dodged
    C7,
    /// Low buzz on a crash
    Ds4,
}

impl Note {
    /// Pitch in Hz
    pub fn frequency(&self) -> f32 {
        match self {
            Note::C7 => 2093.0,
            Note::Ds4 => 311.13,
        }
    }
}

/// One step of a notification sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationMessage {
    VibroOn,
    VibroOff,
    Note(Note),
    SoundOff,
    /// Wait before the next message
    DelayMs(u32),
    /// Keep the display backlight on regardless of idle timeout
    BacklightEnforceOn,
    /// Hand the backlight back to its automatic timeout
    BacklightEnforceAuto,
}

/// A fixed list of messages played in order
pub type NotificationSequence = [NotificationMessage];

/// Played each time an obstacle scrolls past the player
pub const SEQUENCE_OBSTACLE: &NotificationSequence = &[
    Msg::Note(Note::C7),
    Msg::DelayMs(10),
    Msg::SoundOff,
];

/// Played (blocking) when the player crashes
pub const SEQUENCE_FAIL: &NotificationSequence = &[
    Msg::VibroOn,
    Msg::Note(Note::Ds4),
    Msg::DelayMs(10),
    Msg::SoundOff,
    Msg::DelayMs(10),
    Msg::Note(Note::Ds4),
    Msg::DelayMs(10),
    Msg::SoundOff,
    Msg::DelayMs(10),
    Msg::Note(Note::Ds4),
    Msg::DelayMs(10),
    Msg::SoundOff,
    Msg::DelayMs(10),
    Msg::VibroOff,
];

pub const SEQUENCE_BACKLIGHT_ENFORCE_ON: &NotificationSequence = &[Msg::BacklightEnforceOn];

pub const SEQUENCE_BACKLIGHT_ENFORCE_AUTO: &NotificationSequence = &[Msg::BacklightEnforceAuto];

/// Total time a sequence spends in delays
pub fn sequence_duration(sequence: &NotificationSequence) -> Duration {
    let ms: u64 = sequence
        .iter()
        .map(|m| match m {
            Msg::DelayMs(ms) => *ms as u64,
            _ => 0,
        })
        .sum();
    Duration::from_millis(ms)
}

/// Notification service handle
pub trait Notifier {
    /// Queue a sequence and return immediately
    fn message(&mut self, sequence: &'static NotificationSequence);

    /// Play a sequence to completion before returning
    fn message_block(&mut self, sequence: &'static NotificationSequence);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_sequence_shape() {
        assert_eq!(SEQUENCE_FAIL.first(), Some(&Msg::VibroOn));
        assert_eq!(SEQUENCE_FAIL.last(), Some(&Msg::VibroOff));
        let buzzes = SEQUENCE_FAIL
            .iter()
            .filter(|m| matches!(m, Msg::Note(Note::Ds4)))
            .count();
        assert_eq!(buzzes, 3);
        assert_eq!(sequence_duration(SEQUENCE_FAIL), Duration::from_millis(60));
    }

    #[test]
    fn test_obstacle_cue_is_short() {
        assert_eq!(sequence_duration(SEQUENCE_OBSTACLE), Duration::from_millis(10));
        assert_eq!(SEQUENCE_OBSTACLE.last(), Some(&Msg::SoundOff));
    }

    #[test]
    fn test_backlight_sequences_have_no_delay() {
        assert_eq!(sequence_duration(SEQUENCE_BACKLIGHT_ENFORCE_ON), Duration::ZERO);
        assert_eq!(sequence_duration(SEQUENCE_BACKLIGHT_ENFORCE_AUTO), Duration::ZERO);
    }
}
