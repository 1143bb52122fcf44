//! TestConsole for capturing output in tests
//!
//! Provides a LabConsole whose stdout and stderr are captured for assertion
//! instead of written to the process streams.

use std::io::Write;
use std::sync::{Arc, Mutex};

use strip_ansi_escapes::strip;

use crate::color::Stream;
use crate::config::LogConfig;
use crate::console::LabConsole;

/// A console that captures output for testing
///
/// Use `console()` to log through it, then `output()`, `errors()`,
/// `entries()`, `contains()` and the assertion methods to verify.
pub struct TestConsole {
    inner: Arc<LabConsole>,
    buffer: Arc<Mutex<TestBuffer>>,
}

#[derive(Debug, Default)]
struct StreamBuffer {
    /// One element per written unit, ANSI stripped, without the newline
    entries: Vec<String>,
    /// Lines with ANSI codes stripped
    lines: Vec<String>,
    /// Lines with ANSI codes preserved
    raw_lines: Vec<String>,
}

#[derive(Debug, Default)]
struct TestBuffer {
    stdout: StreamBuffer,
    stderr: StreamBuffer,
}

impl TestBuffer {
    fn stream(&self, stream: Stream) -> &StreamBuffer {
        match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
        }
    }

    fn stream_mut(&mut self, stream: Stream) -> &mut StreamBuffer {
        match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        }
    }
}

impl TestConsole {
    /// Create a test console with colors off
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::new().plain_mode())
    }

    /// Create a test console with colors forced on
    #[must_use]
    pub fn new_colored() -> Self {
        Self::with_config(LogConfig::new().force_color(true))
    }

    /// Create a test console with explicit configuration
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        let buffer = Arc::new(Mutex::new(TestBuffer::default()));
        let stdout = BufferWriter {
            buffer: buffer.clone(),
            stream: Stream::Stdout,
        };
        let stderr = BufferWriter {
            buffer: buffer.clone(),
            stream: Stream::Stderr,
        };

        Self {
            inner: Arc::new(LabConsole::with_writers(config, stdout, stderr)),
            buffer,
        }
    }

    /// Get the underlying console
    #[must_use]
    pub fn console(&self) -> &LabConsole {
        &self.inner
    }

    /// Get a shared handle to the underlying console (for loggers and layers)
    #[must_use]
    pub fn shared(&self) -> Arc<LabConsole> {
        self.inner.clone()
    }

    fn read<T>(&self, f: impl FnOnce(&TestBuffer) -> T) -> Option<T> {
        self.buffer.lock().ok().map(|b| f(&b))
    }

    /// Stdout lines (ANSI codes stripped)
    #[must_use]
    pub fn output(&self) -> Vec<String> {
        self.read(|b| b.stdout.lines.clone()).unwrap_or_default()
    }

    /// Stderr lines (ANSI codes stripped)
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.read(|b| b.stderr.lines.clone()).unwrap_or_default()
    }

    /// Stdout lines (with ANSI codes)
    #[must_use]
    pub fn raw_output(&self) -> Vec<String> {
        self.read(|b| b.stdout.raw_lines.clone())
            .unwrap_or_default()
    }

    /// Stderr lines (with ANSI codes)
    #[must_use]
    pub fn raw_errors(&self) -> Vec<String> {
        self.read(|b| b.stderr.raw_lines.clone())
            .unwrap_or_default()
    }

    /// Stdout write units: one per logged argument
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.stream_entries(Stream::Stdout)
    }

    /// Write units on the given stream
    #[must_use]
    pub fn stream_entries(&self, stream: Stream) -> Vec<String> {
        self.read(|b| b.stream(stream).entries.clone())
            .unwrap_or_default()
    }

    /// Stdout then stderr, as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        let mut all = self.output();
        all.extend(self.errors());
        all.join("\n")
    }

    /// Check if output contains a string (case-insensitive)
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        let output = self.output_string().to_lowercase();
        output.contains(&needle.to_lowercase())
    }

    /// Check if output contains all of the given strings
    #[must_use]
    pub fn contains_all(&self, needles: &[&str]) -> bool {
        needles.iter().all(|n| self.contains(n))
    }

    /// Check if output matches a regex pattern
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match regex::Regex::new(pattern) {
            Ok(re) => re.is_match(&self.output_string()),
            Err(_) => false,
        }
    }

    /// Assert that output contains a string
    ///
    /// # Panics
    ///
    /// Panics if the output does not contain the needle string.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "Output did not contain '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert that output does NOT contain a string
    ///
    /// # Panics
    ///
    /// Panics if the output contains the needle string.
    pub fn assert_not_contains(&self, needle: &str) {
        assert!(
            !self.contains(needle),
            "Output unexpectedly contained '{}'. Actual output:\n{}",
            needle,
            self.output_string()
        );
    }

    /// Assert stdout has specific number of lines
    ///
    /// # Panics
    ///
    /// Panics if the line count doesn't match expected.
    pub fn assert_line_count(&self, expected: usize) {
        let actual = self.output().len();
        assert_eq!(
            actual, expected,
            "Expected {} lines but got {}. Actual output:\n{}",
            expected, actual, self.output_string()
        );
    }

    /// Clear both buffers
    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            *buf = TestBuffer::default();
        }
    }

    /// Print output for debugging (in tests)
    pub fn debug_print(&self) {
        eprintln!("=== TestConsole Output ===");
        for (i, line) in self.output().iter().enumerate() {
            eprintln!("{:3}: {}", i + 1, line);
        }
        for (i, line) in self.errors().iter().enumerate() {
            eprintln!("{:3}! {}", i + 1, line);
        }
        eprintln!("==========================");
    }
}

impl Default for TestConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TestConsole {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            buffer: self.buffer.clone(),
        }
    }
}

impl std::fmt::Debug for TestConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestConsole")
            .field("stdout_lines", &self.output().len())
            .field("stderr_lines", &self.errors().len())
            .finish()
    }
}

/// Writer that captures one stream into the shared buffer
///
/// The console issues exactly one write per logged argument, so each
/// `write` call is recorded as one entry.
struct BufferWriter {
    buffer: Arc<Mutex<TestBuffer>>,
    stream: Stream,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let raw = String::from_utf8_lossy(buf);
        let stripped = strip(buf);
        let stripped = String::from_utf8_lossy(&stripped);

        if let Ok(mut buffer) = self.buffer.lock() {
            let target = buffer.stream_mut(self.stream);
            target.raw_lines.extend(raw.lines().map(String::from));
            target.lines.extend(stripped.lines().map(String::from));
            target
                .entries
                .push(stripped.strip_suffix('\n').unwrap_or(&stripped).to_string());
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
