//! Output sinks for tree rendering
//!
//! The walker emits entries and marker lines through the `TreeOutput`
//! trait. `PlainFormatter` writes uncolored text to any writer (tests
//! render into a `Vec<u8>`); `ColorFormatter` writes to stdout with
//! termcolor.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// What kind of line an entry renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file; `size` is `None` when the stat failed.
    File { size: Option<u64> },
    /// A directory, rendered with a trailing slash.
    Dir,
}

/// Callback for streaming tree output - receives lines as the walker
/// produces them.
pub trait TreeOutput {
    /// A file or directory entry at the current level.
    fn entry(
        &mut self,
        prefix: &str,
        is_last: bool,
        name: &str,
        kind: EntryKind,
    ) -> io::Result<()>;

    /// A marker line under the current prefix: `(empty directory)`,
    /// `... (max depth reached)`, or a listing error.
    fn marker(&mut self, prefix: &str, text: &str) -> io::Result<()>;

    /// A standalone error line (the walked path is not a directory).
    fn error(&mut self, text: &str) -> io::Result<()>;
}

fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Uncolored formatter over any writer.
pub struct PlainFormatter<W: Write> {
    out: W,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TreeOutput for PlainFormatter<W> {
    fn entry(
        &mut self,
        prefix: &str,
        is_last: bool,
        name: &str,
        kind: EntryKind,
    ) -> io::Result<()> {
        let connector = connector(is_last);
        match kind {
            EntryKind::Dir => writeln!(self.out, "{}{}{}/", prefix, connector, name),
            EntryKind::File { size: Some(bytes) } => {
                writeln!(self.out, "{}{}{} ({} bytes)", prefix, connector, name, bytes)
            }
            EntryKind::File { size: None } => {
                writeln!(self.out, "{}{}{} (size unknown)", prefix, connector, name)
            }
        }
    }

    fn marker(&mut self, prefix: &str, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}{}", prefix, text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

/// Terminal formatter - blue bold directories, white file names, green
/// sizes. Line content matches `PlainFormatter` exactly.
pub struct ColorFormatter {
    stdout: StandardStream,
}

impl ColorFormatter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl TreeOutput for ColorFormatter {
    fn entry(
        &mut self,
        prefix: &str,
        is_last: bool,
        name: &str,
        kind: EntryKind,
    ) -> io::Result<()> {
        write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        match kind {
            EntryKind::Dir => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(self.stdout, "{}", name)?;
                self.stdout.reset()?;
                writeln!(self.stdout, "/")?;
            }
            EntryKind::File { size } => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(self.stdout, "{}", name)?;
                self.stdout.reset()?;
                match size {
                    Some(bytes) => {
                        write!(self.stdout, " ")?;
                        self.stdout
                            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                        write!(self.stdout, "({} bytes)", bytes)?;
                        self.stdout.reset()?;
                        writeln!(self.stdout)?;
                    }
                    None => writeln!(self.stdout, " (size unknown)")?,
                }
            }
        }
        Ok(())
    }

    fn marker(&mut self, prefix: &str, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}{}", prefix, text)
    }

    fn error(&mut self, text: &str) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        writeln!(self.stdout, "{}", text)?;
        self.stdout.reset()
    }
}
