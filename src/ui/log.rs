//! Append-only deployment log

use chrono::Local;

/// Timestamped, append-only record of everything a deployment attempt did.
///
/// Entries are echoed to the terminal as they arrive and kept in memory so
/// tests can assert on them. The log is never cleared.
pub struct EventLog {
    entries: Vec<String>,
    echo: bool,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            echo: true,
        }
    }

    /// A log that only records, for use in tests.
    pub fn silent() -> Self {
        Self {
            entries: Vec::new(),
            echo: false,
        }
    }

    pub fn append(&mut self, message: &str) {
        let line = format!("[{}] {}", Local::now().format("%H:%M:%S"), message);
        if self.echo {
            println!("{}", line);
        }
        self.entries.push(line);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether any entry contains the given text (timestamps excluded from
    /// the caller's concern).
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|line| line.contains(needle))
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
