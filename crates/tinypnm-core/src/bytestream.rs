/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple byte reader over an in-memory buffer
//!
//! The reader keeps a cursor into a borrowed slice and offers
//! infallible reads (returning zero past the end) for the header scanner
//! as well as checked reads for sample data.
use core::fmt::{Debug, Display, Formatter};

use crate::endian::u16_from_be;

/// Errors from reading past the end of the underlying buffer
pub enum ZByteIoError {
    /// requested, remaining
    NotEnoughBytes(usize, usize)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A cursor over a byte slice
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Number of bytes left to read
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Return the bytes not yet read, without consuming them
    pub fn remaining_bytes(&self) -> &'a [u8] {
        self.stream.get(self.position..).unwrap_or(&[])
    }

    /// Move the cursor `num` bytes forward, stopping at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Read a single byte, returning 0 when the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }

    /// Read a single byte, or error out if the stream is exhausted
    #[inline]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }

    /// Look at the next byte without consuming it
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return a reference to the next `num` bytes and advance past them
    pub fn get_as_ref(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        let end = self
            .position
            .checked_add(num)
            .ok_or(ZByteIoError::NotEnoughBytes(num, self.remaining()))?;

        match self.stream.get(self.position..end) {
            Some(bytes) => {
                self.position = end;
                Ok(bytes)
            }
            None => Err(ZByteIoError::NotEnoughBytes(num, self.remaining()))
        }
    }

    /// Read a big endian u16 and return it in host order
    #[inline]
    pub fn get_u16_be_err(&mut self) -> Result<u16, ZByteIoError> {
        let bytes = self.get_as_ref(2)?;
        // bytes are copied in stream order, then normalized
        Ok(u16_from_be(u16::from_ne_bytes([bytes[0], bytes[1]])))
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_stop_at_end() {
        let mut reader = ZByteReader::new(&[1, 2]);
        assert_eq!(reader.get_u8(), 1);
        assert_eq!(reader.get_u8(), 2);
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.get_u8(), 0);
        assert!(reader.get_u8_err().is_err());
    }

    #[test]
    fn big_endian_u16() {
        let mut reader = ZByteReader::new(&[0xab, 0xcd, 0x01]);
        assert_eq!(reader.get_u16_be_err().ok(), Some(0xabcd));
        assert!(reader.get_u16_be_err().is_err());
        // a failed read does not move the cursor
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn skip_and_peek() {
        let mut reader = ZByteReader::new(b"P6\n");
        reader.skip(1);
        assert_eq!(reader.peek_u8(), Some(b'6'));
        assert_eq!(reader.remaining_bytes(), b"6\n");
        reader.skip(10);
        assert_eq!(reader.peek_u8(), None);
        assert!(reader.remaining_bytes().is_empty());
    }
}
