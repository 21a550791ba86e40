/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{CodecError, Result};
use crate::traits::*;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// An implementation of [`BitRead`] for a [`ByteRead`].
///
/// The reader keeps the byte currently being consumed and the number of its
/// bits not read yet; a new byte is pulled from the backend only when all
/// bits of the current one have been consumed, so the reader never reads
/// ahead of the last value decoded by more than the bits of one byte.
///
/// Dropping the reader (or calling [`into_inner`](BufBitReader::into_inner))
/// discards the unread bits of the current byte, which are padding at the
/// end of a stream.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BufBitReader<R: ByteRead> {
    /// The [`ByteRead`] from which we read bytes.
    backend: R,
    /// The current byte; only the lowest `bits_in_buffer` bits are unread.
    buffer: u8,
    /// Number of unread bits in `buffer`, in [0..8].
    bits_in_buffer: usize,
    /// Number of bits read so far.
    bits_read: u64,
}

impl<R: ByteRead> BufBitReader<R> {
    /// Create a new [`BufBitReader`] around a [`ByteRead`].
    #[must_use]
    pub fn new(backend: R) -> Self {
        Self {
            backend,
            buffer: 0,
            bits_in_buffer: 0,
            bits_read: 0,
        }
    }

    /// Return the backend, discarding the unread bits of the current byte.
    pub fn into_inner(self) -> R {
        self.backend
    }

    #[inline(always)]
    fn refill(&mut self) -> Result<()> {
        if self.bits_in_buffer == 0 {
            self.buffer = self.backend.read_byte()?;
            self.bits_in_buffer = 8;
        }
        Ok(())
    }

    /// The unread bits of the current byte.
    #[inline(always)]
    fn available(&self) -> u8 {
        if self.bits_in_buffer == 0 {
            0
        } else {
            self.buffer & (u8::MAX >> (8 - self.bits_in_buffer))
        }
    }
}

impl<R: ByteRead> BitRead for BufBitReader<R> {
    #[inline]
    fn read_bit(&mut self) -> Result<bool> {
        self.refill()?;
        self.bits_in_buffer -= 1;
        self.bits_read += 1;
        Ok((self.buffer >> self.bits_in_buffer) & 1 != 0)
    }

    #[inline]
    fn read_bits(&mut self, n_bits: usize) -> Result<u64> {
        if n_bits > 64 {
            return Err(CodecError::InvalidArgument(
                "cannot read more than 64 bits at once",
            ));
        }
        let mut result = 0_u64;
        let mut to_read = n_bits;
        while to_read > 0 {
            self.refill()?;
            let take = to_read.min(self.bits_in_buffer);
            let shift = self.bits_in_buffer - take;
            let chunk = (self.available() >> shift) as u64;
            result = (result << take) | chunk;
            self.bits_in_buffer -= take;
            to_read -= take;
            self.bits_read += take as u64;
        }
        Ok(result)
    }

    #[inline]
    fn read_unary(&mut self) -> Result<u64> {
        let mut zeros = 0_u64;
        loop {
            self.refill()?;
            let available = self.available();
            if available == 0 {
                zeros += self.bits_in_buffer as u64;
                self.bits_read += self.bits_in_buffer as u64;
                self.bits_in_buffer = 0;
                continue;
            }
            // position (1-based) of the highest one among the unread bits
            let highest = 8 - available.leading_zeros() as usize;
            let skipped = self.bits_in_buffer - highest;
            zeros += skipped as u64;
            self.bits_in_buffer = highest - 1;
            self.bits_read += skipped as u64 + 1;
            return Ok(zeros);
        }
    }

    #[inline(always)]
    fn bit_pos(&self) -> u64 {
        self.bits_read
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_read_across_bytes() -> Result<()> {
        let data = [0b1011_0011_u8, 0b1000_0001, 0xFF];
        let mut reader = BufBitReader::new(MemByteReader::new(&data));
        assert!(reader.read_bit()?);
        assert_eq!(reader.read_bits(3)?, 0b011);
        assert_eq!(reader.read_bits(6)?, 0b0011_10);
        assert_eq!(reader.read_unary()?, 5);
        assert_eq!(reader.bit_pos(), 16);
        assert_eq!(reader.read_bits(7)?, 0b111_1111);
        assert!(matches!(
            reader.read_bits(2),
            Err(CodecError::EndOfInput { byte_pos: 3 })
        ));
        Ok(())
    }

    #[test]
    fn test_read_64_bits() -> Result<()> {
        let data = [0x80, 0, 0, 0, 0, 0, 0, 1, 0b1100_0000];
        let mut reader = BufBitReader::new(MemByteReader::new(&data));
        assert_eq!(reader.read_bits(64)?, (1 << 63) | 1);
        assert_eq!(reader.read_bits(0)?, 0);
        assert_eq!(reader.read_bits(2)?, 0b11);
        assert!(reader.read_bits(65).is_err());
        Ok(())
    }

    #[test]
    fn test_long_unary() -> Result<()> {
        let data = [0, 0, 0, 0, 0, 0, 0, 0, 0b0010_0000];
        let mut reader = BufBitReader::new(MemByteReader::new(&data));
        assert_eq!(reader.read_unary()?, 66);
        assert_eq!(reader.bit_pos(), 67);
        assert_eq!(reader.read_bits(5)?, 0);
        assert!(reader.read_unary().is_err());
        Ok(())
    }
}
