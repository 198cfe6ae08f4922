/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Byte sources for the streaming decoders
//!
//! This exposes the trait and implementations for the inputs
//! the peaksnr decoders read from.

use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{BufRead, BufReader, Cursor, Read};

/// Errors returned when the underlying reader of a byte source fails
pub enum ByteSourceError {
    StdIoError(io::Error),
    Generic(&'static str)
}

impl Debug for ByteSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteSourceError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteSourceError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl From<io::Error> for ByteSourceError {
    fn from(value: io::Error) -> Self {
        ByteSourceError::StdIoError(value)
    }
}

/// The de-facto input trait implemented for readers.
///
/// Sources are forward only: bytes come out one at a time and a byte
/// that has been handed out is never seen again. There is deliberately
/// no seek, peek or rewind here, a decoder that needs to remember a
/// byte carries that state itself.
///
/// We implement this trait for two types, [`Cursor`] for in-memory
/// buffers and [`BufReader`] for anything that implements [`Read`],
/// e.g a file opened for binary reading.
pub trait ByteSourceTrait {
    /// Pull the next byte out of the source.
    ///
    /// Returns `Ok(None)` once the source is exhausted, every call
    /// after that keeps returning `Ok(None)`.
    fn next_byte(&mut self) -> Result<Option<u8>, ByteSourceError>;
}

impl<T> ByteSourceTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn next_byte(&mut self) -> Result<Option<u8>, ByteSourceError> {
        let position = self.position() as usize;

        match self.get_ref().as_ref().get(position).copied() {
            Some(byte) => {
                self.set_position(position as u64 + 1);
                Ok(Some(byte))
            }
            None => Ok(None)
        }
    }
}

impl<R: Read> ByteSourceTrait for BufReader<R> {
    #[inline]
    fn next_byte(&mut self) -> Result<Option<u8>, ByteSourceError> {
        let byte = self.fill_buf()?.first().copied();

        if byte.is_some() {
            self.consume(1);
        }
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor};

    use crate::bytesource::ByteSourceTrait;

    #[test]
    fn cursor_yields_bytes_then_none() {
        let mut source = Cursor::new([1_u8, 2, 3]);

        assert_eq!(source.next_byte().unwrap(), Some(1));
        assert_eq!(source.next_byte().unwrap(), Some(2));
        assert_eq!(source.next_byte().unwrap(), Some(3));
        assert_eq!(source.next_byte().unwrap(), None);
        // exhausted sources stay exhausted
        assert_eq!(source.next_byte().unwrap(), None);
    }

    #[test]
    fn buf_reader_yields_bytes_then_none() {
        let data = [5_u8, 6];
        let mut source = BufReader::new(&data[..]);

        assert_eq!(source.next_byte().unwrap(), Some(5));
        assert_eq!(source.next_byte().unwrap(), Some(6));
        assert_eq!(source.next_byte().unwrap(), None);
    }
}
