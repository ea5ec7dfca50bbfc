use crate::prelude::*;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

const STDIO_PLACEHOLDER: &str = "-";

/// Where values are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

/// Where results are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Source {
    /// `None` and `-` both select standard input
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new(STDIO_PLACEHOLDER) => Source::File(p.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    /// True when reading would block on an interactive terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Source::Stdin) && io::stdin().is_terminal()
    }

    /// Read the whole source into memory
    pub fn read_to_string(&self) -> Result<String> {
        let mut text = String::new();
        match self {
            Source::Stdin => {
                io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
            }
            Source::File(path) => {
                File::open(path)
                    .with_context(|| f!("Failed to open input file {}", path.display()))?
                    .read_to_string(&mut text)
                    .with_context(|| f!("Failed to read input file {}", path.display()))?;
            }
        }
        Ok(text)
    }
}

impl Sink {
    /// `None` and `-` both select standard output
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new(STDIO_PLACEHOLDER) => Sink::File(p.to_path_buf()),
            _ => Sink::Stdout,
        }
    }

    /// Write `content` and flush before returning
    pub fn write_all(&self, content: &str) -> Result<()> {
        let inner: Box<dyn Write> = match self {
            Sink::Stdout => Box::new(io::stdout().lock()),
            Sink::File(path) => Box::new(
                File::create(path)
                    .with_context(|| f!("Failed to create output file {}", path.display()))?,
            ),
        };
        let mut writer = BufWriter::new(inner);

        writer
            .write_all(content.as_bytes())
            .with_context(|| f!("Failed to write to {self}"))?;
        writer
            .flush()
            .with_context(|| f!("Failed to flush {self}"))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => write!(f, "<stdout>"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_arg() {
        assert_eq!(Source::from_arg(None), Source::Stdin);
        assert_eq!(Source::from_arg(Some(Path::new("-"))), Source::Stdin);
        assert_eq!(
            Source::from_arg(Some(Path::new("data.txt"))),
            Source::File(PathBuf::from("data.txt"))
        );
    }

    #[test]
    fn test_sink_from_arg() {
        assert_eq!(Sink::from_arg(None), Sink::Stdout);
        assert_eq!(Sink::from_arg(Some(Path::new("-"))), Sink::Stdout);
        assert_eq!(
            Sink::from_arg(Some(Path::new("out.txt"))),
            Sink::File(PathBuf::from("out.txt"))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Source::Stdin.to_string(), "<stdin>");
        assert_eq!(Sink::File(PathBuf::from("out.txt")).to_string(), "out.txt");
    }

    #[test]
    fn test_file_source_is_never_interactive() {
        assert!(!Source::File(PathBuf::from("data.txt")).is_interactive());
    }
}
