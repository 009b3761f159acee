//! Input sources for the game loop
//!
//! `CrosstermInput` blocks on terminal key events. `ScriptedInput` reads
//! whitespace-separated commands (`up`, `down`, `left`, `right`, `confirm`,
//! `redraw`, `quit`, `resize W H`) from a string or a reader, which is how
//! piped stdin and the tests drive a session. End of input ends the session.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::grid::Direction;

/// One decoded player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Confirm,
    Resize(u16, u16),
    Redraw,
    Quit,
}

pub trait InputSource {
    /// Block until the next recognised input
    fn next_event(&mut self) -> io::Result<InputEvent>;
}

impl<I: InputSource + ?Sized> InputSource for Box<I> {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        (**self).next_event()
    }
}

/// Map a key press to an input; unrecognised keys yield `None`
pub fn key_to_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Down => Some(InputEvent::Move(Direction::Down)),
        KeyCode::Left => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Right => Some(InputEvent::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Redraw)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Terminal keyboard input; expects raw mode to be enabled by the display
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        CrosstermInput
    }
}

impl InputSource for CrosstermInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = key_to_event(key) {
                        debug!("Key {:?} -> {:?}", key.code, input);
                        return Ok(input);
                    }
                }
                Event::Resize(width, height) => return Ok(InputEvent::Resize(width, height)),
                _ => {}
            }
        }
    }
}

/// Parse one script word
pub fn parse_command(word: &str) -> Option<InputEvent> {
    match word.to_ascii_lowercase().as_str() {
        "up" | "u" | "k" => Some(InputEvent::Move(Direction::Up)),
        "down" | "d" | "j" => Some(InputEvent::Move(Direction::Down)),
        "left" | "l" | "h" => Some(InputEvent::Move(Direction::Left)),
        "right" | "r" => Some(InputEvent::Move(Direction::Right)),
        "confirm" | "enter" | "c" | "x" => Some(InputEvent::Confirm),
        "redraw" => Some(InputEvent::Redraw),
        "quit" | "q" | "exit" => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Parse the `W H` arguments of a `resize` command
pub fn parse_size(width: Option<&str>, height: Option<&str>) -> Option<InputEvent> {
    let width = width?.parse().ok()?;
    let height = height?.parse().ok()?;
    Some(InputEvent::Resize(width, height))
}

/// Scripted commands from a fixed string and/or a line reader
pub struct ScriptedInput {
    pending: VecDeque<InputEvent>,
    reader: Option<Box<dyn BufRead>>,
}

impl ScriptedInput {
    pub fn from_script(script: &str) -> Self {
        let mut input = ScriptedInput {
            pending: VecDeque::new(),
            reader: None,
        };
        input.queue_line(script);
        input
    }

    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        ScriptedInput {
            pending: VecDeque::new(),
            reader: Some(Box::new(reader)),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn queue_line(&mut self, line: &str) {
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word.eq_ignore_ascii_case("resize") {
                let size = (words.next(), words.next());
                match parse_size(size.0, size.1) {
                    Some(event) => self.pending.push_back(event),
                    None => warn!("Ignoring resize with bad size {:?}", size),
                }
                continue;
            }
            match parse_command(word) {
                Some(event) => self.pending.push_back(event),
                None => warn!("Ignoring unknown command '{}'", word),
            }
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> io::Result<InputEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }
            let Some(reader) = self.reader.as_mut() else {
                debug!("Script exhausted");
                return Ok(InputEvent::Quit);
            };
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                debug!("EOF on scripted input");
                self.reader = None;
                continue;
            }
            self.queue_line(&line);
        }
    }
}
