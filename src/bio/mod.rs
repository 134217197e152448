//! Buffered access to a judge's input and output streams.

mod error;

pub use error::{Error, Result};

use std::{
    any::type_name,
    fmt::Display,
    io::{BufRead, BufReader, BufWriter, LineWriter, Read, Write},
    str::FromStr,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Read the whole input up front and hold output until flushed.
    #[default]
    Full,
    /// Read input a line at a time and flush output at every newline.
    /// Interactive problems need this.
    Line,
}

enum Sink<W: Write> {
    Full(BufWriter<W>),
    Line(LineWriter<W>),
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Full(writer) => writer.write(buf),
            Sink::Line(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Full(writer) => writer.flush(),
            Sink::Line(writer) => writer.flush(),
        }
    }
}

/// Whitespace-separated token reader paired with a buffered writer.
///
/// Output is written through [`Write`], so `write!` and `writeln!` work
/// directly on a `BufferedIO`. Anything still buffered is flushed on drop,
/// but errors are only reported by an explicit [`Write::flush`].
pub struct BufferedIO<R: Read, W: Write> {
    reader: BufReader<R>,
    writer: Sink<W>,
    mode: Mode,
    /// Unconsumed input: everything in full mode, the current line in line mode.
    buffer: Vec<u8>,
    position: usize,
    exhausted: bool,
}

impl<R: Read, W: Write> BufferedIO<R, W> {
    pub fn new(mode: Mode, reader: R, writer: W) -> Result<Self> {
        let mut io = BufferedIO {
            reader: BufReader::new(reader),
            writer: match mode {
                Mode::Full => Sink::Full(BufWriter::new(writer)),
                Mode::Line => Sink::Line(LineWriter::new(writer)),
            },
            mode,
            buffer: Vec::new(),
            position: 0,
            exhausted: false,
        };
        if mode == Mode::Full {
            let read = io.reader.read_to_end(&mut io.buffer)?;
            io.exhausted = true;
            log::debug!("buffered {read} bytes of input");
        }
        Ok(io)
    }

    pub fn full(reader: R, writer: W) -> Result<Self> {
        Self::new(Mode::Full, reader, writer)
    }

    pub fn line(reader: R, writer: W) -> Result<Self> {
        Self::new(Mode::Line, reader, writer)
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The underlying writer; holds only what has been flushed so far.
    pub fn writer(&self) -> &W {
        match &self.writer {
            Sink::Full(writer) => writer.get_ref(),
            Sink::Line(writer) => writer.get_ref(),
        }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_writer(self) -> Result<W> {
        match self.writer {
            Sink::Full(writer) => writer.into_inner().map_err(|err| err.into_error().into()),
            Sink::Line(writer) => writer.into_inner().map_err(|err| err.into_error().into()),
        }
    }

    /// Pulls the next line into the buffer. Returns `false` at end of input.
    fn fill(&mut self) -> Result<bool> {
        if self.exhausted {
            return Ok(false);
        }
        self.buffer.clear();
        self.position = 0;
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        log::trace!("read line of {read} bytes");
        if read == 0 {
            self.exhausted = true;
        }
        Ok(read != 0)
    }

    /// Returns the next whitespace-separated token, or `None` at end of input.
    pub fn token(&mut self) -> Result<Option<&[u8]>> {
        loop {
            while self
                .buffer
                .get(self.position)
                .is_some_and(u8::is_ascii_whitespace)
            {
                self.position += 1;
            }
            if self.position < self.buffer.len() {
                break;
            }
            if !self.fill()? {
                return Ok(None);
            }
        }

        let start = self.position;
        while self
            .buffer
            .get(self.position)
            .is_some_and(|byte| !byte.is_ascii_whitespace())
        {
            self.position += 1;
        }
        Ok(Some(&self.buffer[start..self.position]))
    }

    /// Parses the next token, or returns `None` at end of input.
    pub fn try_read<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.token()? {
            Some(token) => parse(token).map(Some),
            None => Ok(None),
        }
    }

    /// Parses the next token, failing with [`Error::Eof`] at end of input.
    pub fn read<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.try_read()?.ok_or(Error::Eof)
    }

    pub fn read_vec<T>(&mut self, count: usize) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        (0..count).map(|_| self.read()).collect()
    }

    /// Returns the rest of the current line without its terminator.
    ///
    /// After a token has been read this is whatever follows it on the same
    /// line, which may be empty.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if self.position >= self.buffer.len() && !self.fill()? {
            return Ok(None);
        }

        let rest = &self.buffer[self.position..];
        let (line, consumed) = match rest.iter().position(|&byte| byte == b'\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let line = std::str::from_utf8(line)?.to_owned();
        self.position += consumed;
        Ok(Some(line))
    }
}

fn parse<T>(token: &[u8]) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text = std::str::from_utf8(token)?;
    text.parse().map_err(|err: T::Err| Error::Parse {
        token: text.to_owned(),
        target: type_name::<T>(),
        reason: err.to_string(),
    })
}

impl<R: Read, W: Write> Write for BufferedIO<R, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        log::trace!("flushing output");
        self.writer.flush()
    }
}
