//! Narration sinks
//!
//! Every vehicle operation reports what happened as a line of text. Where the
//! lines go is up to the caller: the binary prints them, tests record them.

use log::debug;

/// Receives narrated lines in the order they are produced.
pub trait Narrator {
    fn notify(&mut self, line: String);
}

/// Prints every line to stdout
#[derive(Debug, Default)]
pub struct ConsoleNarrator;

impl Narrator for ConsoleNarrator {
    fn notify(&mut self, line: String) {
        debug!("narration: {}", line);
        println!("{}", line);
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    lines: Vec<String>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Index of the first line containing `needle`
    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl Narrator for RecordingNarrator {
    fn notify(&mut self, line: String) {
        debug!("narration: {}", line);
        self.lines.push(line);
    }
}
