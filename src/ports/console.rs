// src/ports/console.rs
use crate::application::Notifier;
use std::io::{self, Write};

/// Prints one-line notices, like a toast in a graphical client.
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, marker: char, message: &str) {
        // A notice that cannot be printed has nowhere else to go.
        let _ = writeln!(self.out, "{} {}", marker, message);
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn success(&mut self, message: &str) {
        self.emit('✓', message);
    }

    fn failure(&mut self, message: &str) {
        self.emit('✗', message);
    }
}
