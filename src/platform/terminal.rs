//! Terminal host: plays the game in a text terminal via crossterm.
//!
//! The 128x64 canvas maps to 128 columns by 32 rows of half-block glyphs.
//! Keys: arrows move, Enter/Space confirm, Esc/Backspace/q (or Ctrl-C) back.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style, terminal};

use super::{Display, Platform, TelemetryEvent};
use crate::error::{GameError, Result};
use crate::input::{InputEvent, InputKey, InputListener, InputType};
use crate::notify::{NotificationMessage, NotificationSequence, Notifier};
use crate::renderer::{Canvas, FrameBuffer};

/// How long the input thread waits for a key before checking for shutdown
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Terminal-backed platform
#[derive(Debug)]
pub struct TerminalPlatform {
    /// Ring the terminal bell for sound cues
    pub sound: bool,
}

impl Default for TerminalPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPlatform {
    pub fn new() -> Self {
        Self { sound: true }
    }
}

impl Platform for TerminalPlatform {
    type Input = TerminalInput;
    type Screen = TerminalDisplay;
    type Notification = TerminalNotifier;

    fn open_input(&mut self, listener: InputListener) -> Result<TerminalInput> {
        TerminalInput::spawn(listener, INPUT_POLL)
    }

    fn open_display(&mut self) -> Result<TerminalDisplay> {
        TerminalDisplay::open()
    }

    fn open_notification(&mut self) -> Result<TerminalNotifier> {
        Ok(TerminalNotifier { sound: self.sound })
    }

    fn telemetry(&mut self, event: TelemetryEvent) {
        log::info!(target: "telemetry", "{}", event.to_json());
    }
}

// ── Display ─────────────────────────────────────────────────────────────────

/// Raw-mode alternate screen; restores the terminal on drop
pub struct TerminalDisplay {
    out: io::Stdout,
}

impl TerminalDisplay {
    fn open() -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        terminal::enable_raw_mode()?;

        let mut out = io::stdout();
        if let Err(e) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }

        if cols < 128 || rows < 32 {
            log::warn!("Terminal is {cols}x{rows}; the 128x32 playfield will be clipped");
        }
        log::info!("Terminal display opened");
        Ok(Self { out })
    }
}

impl TerminalDisplay {
    fn write_frame(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        for (row, line) in text_rows(frame).iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }
        self.out.flush()
    }
}

impl Display for TerminalDisplay {
    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.write_frame(frame).map_err(GameError::Present)
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to disable raw mode: {e}");
        }
        log::info!("Terminal display released");
    }
}

/// Convert a frame to terminal rows: two pixel rows per text row, with text
/// labels written over the pixels centred on their text box.
pub fn text_rows(frame: &FrameBuffer) -> Vec<String> {
    let size = frame.size();
    let rows = (size.y + 1) / 2;

    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|row| {
            (0..size.x)
                .map(|x| {
                    let top = frame.pixel(x, row * 2);
                    let bottom = frame.pixel(x, row * 2 + 1);
                    match (top, bottom) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    }
                })
                .collect()
        })
        .collect();

    for label in frame.labels() {
        let row = (label.origin.y + label.size.y / 2) / 2;
        let Some(line) = usize::try_from(row).ok().and_then(|r| grid.get_mut(r)) else {
            continue;
        };
        let len = label.text.chars().count() as i32;
        let start = label.origin.x + label.size.x / 2 - len / 2;
        for (i, ch) in label.text.chars().enumerate() {
            let col = start + i as i32;
            if let Some(cell) = usize::try_from(col).ok().and_then(|c| line.get_mut(c)) {
                *cell = ch;
            }
        }
    }

    grid.into_iter().map(|line| line.into_iter().collect()).collect()
}

// ── Input ───────────────────────────────────────────────────────────────────

/// Input thread polling terminal key events
pub struct TerminalInput {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl TerminalInput {
    fn spawn(listener: InputListener, poll_timeout: Duration) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("flip4speed-input".to_string())
            .spawn(move || Self::run_loop(&listener, &shutdown_clone, poll_timeout))
            .map_err(|source| GameError::Spawn {
                name: "input",
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    fn run_loop(listener: &InputListener, shutdown: &AtomicBool, poll_timeout: Duration) {
        while !shutdown.load(Ordering::Relaxed) {
            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        let Some(input) = convert_key(key.code, key.modifiers, key.kind) else {
                            continue;
                        };
                        if !listener.on_input(input) {
                            // Loop is gone
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::error!("Terminal input failed: {e}");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Terminal input poll failed: {e}");
                    break;
                }
            }
        }
        log::debug!("Input thread exiting");
    }
}

impl Drop for TerminalInput {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        // Polls are bounded and the loop drops the receiver before this runs,
        // so a thread parked in a blocking send wakes up too
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Input thread panicked");
            }
        }
        log::debug!("Terminal input released");
    }
}

/// Map a terminal key to a device key event
pub fn convert_key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Option<InputEvent> {
    let key = match code {
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Enter | KeyCode::Char(' ') => InputKey::Confirm,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => InputKey::Back,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => InputKey::Back,
        _ => return None,
    };
    let kind = match kind {
        KeyEventKind::Press => InputType::Press,
        KeyEventKind::Release => InputType::Release,
        KeyEventKind::Repeat => InputType::Repeat,
    };
    Some(InputEvent { key, kind })
}

// ── Notifications ───────────────────────────────────────────────────────────

/// Terminal bell for notes, log lines for everything the terminal lacks
pub struct TerminalNotifier {
    sound: bool,
}

impl TerminalNotifier {
    fn play(&mut self, sequence: &NotificationSequence, blocking: bool) {
        for message in sequence {
            match message {
                NotificationMessage::Note(note) => {
                    log::trace!("note {:?} ({} Hz)", note, note.frequency());
                    if self.sound {
                        self.bell();
                    }
                }
                NotificationMessage::DelayMs(ms) if blocking => {
                    thread::sleep(Duration::from_millis(*ms as u64));
                }
                NotificationMessage::VibroOn => log::debug!("vibro on"),
                NotificationMessage::VibroOff => log::debug!("vibro off"),
                NotificationMessage::BacklightEnforceOn => log::debug!("backlight forced on"),
                NotificationMessage::BacklightEnforceAuto => log::debug!("backlight auto"),
                NotificationMessage::SoundOff | NotificationMessage::DelayMs(_) => {}
            }
        }
    }

    fn bell(&mut self) {
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::warn!("Bell failed: {e}");
        }
    }
}

impl Notifier for TerminalNotifier {
    fn message(&mut self, sequence: &'static NotificationSequence) {
        self.play(sequence, false);
    }

    fn message_block(&mut self, sequence: &'static NotificationSequence) {
        self.play(sequence, true);
    }
}

impl Drop for TerminalNotifier {
    fn drop(&mut self) {
        log::info!("Notification service released");
    }
}
