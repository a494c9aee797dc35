//! Byte output for a render job, with optional stream compression.
//!
//! A `Sink` owns the writer a job emits into. Compressed output variants
//! (`vmlz` and friends) swap the plain writer for a gzip encoder at
//! `begin_job` and unwrap it again when the document ends; the serializer
//! logic above it is identical either way.

use crate::error::RenderError;
use std::io::{self, Write};
use std::mem;

#[cfg(feature = "zlib")]
use flate2::write::GzEncoder;

/// Compression modes a backend may request at job start.
///
/// The `Zlib` variant only exists when the crate is built with the `zlib`
/// feature; without it, compressed formats are simply not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    #[cfg(feature = "zlib")]
    Zlib,
}

enum State<W: Write> {
    Plain(W),
    #[cfg(feature = "zlib")]
    Zlib(GzEncoder<W>),
    /// Transitional marker while swapping states; not observable through
    /// the public API.
    Taken,
}

pub struct Sink<W: Write> {
    state: State<W>,
}

impl<W: Write> Sink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            state: State::Plain(writer),
        }
    }

    /// Write a literal string fragment.
    pub fn put_str(&mut self, s: &str) -> Result<(), RenderError> {
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Begin writing through a compression stream.
    ///
    /// `Compression::None` is a no-op. Starting a second stream on top of
    /// a live one is a contract violation and fails.
    pub fn start_compression(&mut self, mode: Compression) -> Result<(), RenderError> {
        match mode {
            Compression::None => Ok(()),
            #[cfg(feature = "zlib")]
            Compression::Zlib => match mem::replace(&mut self.state, State::Taken) {
                State::Plain(writer) => {
                    self.state = State::Zlib(GzEncoder::new(writer, flate2::Compression::default()));
                    Ok(())
                }
                other => {
                    self.state = other;
                    Err(RenderError::Compression(
                        "compression stream already started".to_string(),
                    ))
                }
            },
        }
    }

    /// Flush and close a live compression stream, restoring the plain
    /// writer. No-op when the sink is uncompressed.
    pub fn finish_compression(&mut self) -> Result<(), RenderError> {
        match mem::replace(&mut self.state, State::Taken) {
            State::Plain(writer) => {
                self.state = State::Plain(writer);
                Ok(())
            }
            #[cfg(feature = "zlib")]
            State::Zlib(encoder) => {
                let writer = encoder.finish()?;
                self.state = State::Plain(writer);
                Ok(())
            }
            State::Taken => Err(RenderError::Sink(
                "output sink already consumed".to_string(),
            )),
        }
    }

    /// Consume the sink, finishing any live compression stream, and return
    /// the underlying writer.
    pub fn into_inner(mut self) -> Result<W, RenderError> {
        self.finish_compression()?;
        match self.state {
            State::Plain(writer) => Ok(writer),
            _ => Err(RenderError::Sink(
                "output sink in an inconsistent state".to_string(),
            )),
        }
    }
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.state {
            State::Plain(writer) => writer.write(buf),
            #[cfg(feature = "zlib")]
            State::Zlib(encoder) => encoder.write(buf),
            State::Taken => Err(io::Error::other("output sink already consumed")),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.state {
            State::Plain(writer) => writer.flush(),
            #[cfg(feature = "zlib")]
            State::Zlib(encoder) => encoder.flush(),
            State::Taken => Err(io::Error::other("output sink already consumed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_sink_passes_bytes_through() {
        let mut sink = Sink::new(Vec::new());
        sink.put_str("hello ").unwrap();
        write!(sink, "{}", 42).unwrap();
        let out = sink.into_inner().unwrap();
        assert_eq!(out, b"hello 42");
    }

    #[test]
    fn compression_none_is_a_no_op() {
        let mut sink = Sink::new(Vec::new());
        sink.start_compression(Compression::None).unwrap();
        sink.put_str("plain").unwrap();
        sink.finish_compression().unwrap();
        assert_eq!(sink.into_inner().unwrap(), b"plain");
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn zlib_sink_round_trips_through_gzip() {
        use std::io::Read;

        let mut sink = Sink::new(Vec::new());
        sink.start_compression(Compression::Zlib).unwrap();
        sink.put_str("compressed payload").unwrap();
        sink.finish_compression().unwrap();
        let bytes = sink.into_inner().unwrap();

        // gzip magic
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);

        let mut decoded = String::new();
        flate2::read::GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut decoded)
            .unwrap();
        assert_eq!(decoded, "compressed payload");
    }

    #[cfg(feature = "zlib")]
    #[test]
    fn starting_compression_twice_fails() {
        let mut sink = Sink::new(Vec::new());
        sink.start_compression(Compression::Zlib).unwrap();
        let err = sink.start_compression(Compression::Zlib).unwrap_err();
        assert!(matches!(err, RenderError::Compression(_)));
    }
}
