use std::io::{self, Write};

/// Writer that prefixes every non-empty line with the current indentation
///
/// Indentation is counted in levels of `indent_size` spaces. Nested
/// [`IndentWriter::indent_writes`] calls are additive.
pub struct IndentWriter<W: Write> {
    inner: W,
    indent_size: u32,
    level: u32,
    at_line_start: bool,
}

impl<W: Write> IndentWriter<W> {
    pub fn new(inner: W, indent_size: u32) -> Self {
        Self {
            inner,
            indent_size,
            level: 0,
            at_line_start: true,
        }
    }

    /// Run `writes` one or more levels deeper than the current indentation
    pub fn indent_writes<T>(
        &mut self,
        levels: u32,
        writes: impl FnOnce(&mut Self) -> io::Result<T>,
    ) -> io::Result<T> {
        self.level += levels;
        let result = writes(self);
        self.level -= levels;
        result
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.new_line()
    }

    /// Write `line` surrounded by `padding` blank lines on each side
    pub fn write_padded_line(&mut self, line: &str, padding: usize) -> io::Result<()> {
        for _ in 0..padding {
            self.new_line()?;
        }
        self.write_line(line)?;
        for _ in 0..padding {
            self.new_line()?;
        }
        Ok(())
    }

    pub fn new_line(&mut self) -> io::Result<()> {
        self.write_all(b"\n")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn spaces(&self) -> usize {
        (self.indent_size as usize).saturating_mul(self.level as usize)
    }
}

impl<W: Write> Write for IndentWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for chunk in buf.split_inclusive(|byte| *byte == b'\n') {
            // Blank lines stay blank
            if self.at_line_start && chunk != b"\n" {
                let spaces = self.spaces();
                write!(self.inner, "{:spaces$}", "")?;
            }

            self.inner.write_all(chunk)?;
            self.at_line_start = chunk.ends_with(b"\n");
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
