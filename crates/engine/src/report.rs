//! Line-oriented report sinks.
//!
//! The harness layer talks to the outside world through one contract:
//! "emit this line of output". The CLI plugs in stdout; tests plug in a
//! `Vec<String>` and assert on the captured lines.

/// Destination for human-readable report lines.
pub trait ReportSink {
    /// Emits one line (without trailing newline).
    fn emit(&mut self, line: &str);
}

/// Sink that prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Capture sink for tests and trace inspection.
impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}
