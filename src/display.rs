//! Display sink: the calculator's only output channel.
//!
//! Every status line the USCC produces goes through a [`DisplaySink`].
//! The real machine wrote to the operator terminal; tests capture lines
//! with a [`BufferSink`] instead.

/// A line-oriented output collaborator.
pub trait DisplaySink {
    fn write_line(&mut self, line: &str);
}

/// Writes status lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl DisplaySink for Console {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Captures status lines in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    pub lines: Vec<String>,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently written line, if any.
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl DisplaySink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_records_lines() {
        let mut sink = BufferSink::new();
        sink.write_line("first");
        sink.write_line("second");

        assert_eq!(sink.lines, vec!["first", "second"]);
        assert_eq!(sink.last(), Some("second"));
    }
}
