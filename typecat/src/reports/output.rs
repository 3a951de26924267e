//! Where reports are rendered to.

use std::io::{self, Write};

/// Semantic sink for report content.
///
/// Reports say what they contain; the output decides how it looks.
pub trait Output {
    /// A heading, e.g. `libs (7 accessors):`.
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    /// A key-value pair nested under the last section.
    fn key_value_indented(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// A problem; goes to the error stream.
    fn error(&mut self, msg: &str);

    /// A labelled rule between blocks of text.
    fn divider(&mut self, label: &str);

    /// Text written as is.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text output: content to one writer, errors to another.
///
/// Write failures are dropped; a closed stdout must not turn a finished run
/// into a panic.
pub struct TerminalOutput<W = io::Stdout, E = io::Stderr> {
    out: W,
    err: E,
}

impl TerminalOutput {
    /// Output to stdout and stderr.
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> TerminalOutput<W, E> {
    pub fn with_writers(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// The content and error writers.
    #[cfg(test)]
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}

impl<W: Write, E: Write> Output for TerminalOutput<W, E> {
    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.line(&format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    fn error(&mut self, msg: &str) {
        let _ = writeln!(self.err, "error: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        self.line(&format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}

/// Render `report` into memory, returning its stdout and stderr text.
#[cfg(test)]
pub fn render_to_strings(report: &dyn Report) -> (String, String) {
    let mut out = TerminalOutput::with_writers(Vec::new(), Vec::new());
    report.render(&mut out);
    let (stdout, stderr) = out.into_writers();
    (
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}
