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

/// An implementation of [`BitWrite`] for a [`ByteWrite`].
///
/// Bits are accumulated in a one-byte buffer, which is handed to the backend
/// as soon as it is full. The last partial byte is emitted, padded with
/// zeros, only by [`flush`](BitWrite::flush) or
/// [`into_inner`](BufBitWriter::into_inner).
///
/// The writer does *not* flush on drop: dropping a writer abandons the bits
/// of the current partial byte, which is how an encoding session is
/// cancelled.
#[derive(Debug)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct BufBitWriter<W: ByteWrite> {
    /// The [`ByteWrite`] to which we will write bytes.
    backend: W,
    /// The buffer where we store bits until we have a byte worth of them.
    buffer: u8,
    /// Number of valid bits in `buffer`, always in [0..8).
    bits_in_buffer: usize,
    /// Number of bits written so far, padding excluded.
    bits_written: u64,
}

impl<W: ByteWrite> BufBitWriter<W> {
    /// Create a new [`BufBitWriter`] from a backend byte writer.
    #[must_use]
    pub fn new(backend: W) -> Self {
        Self {
            backend,
            buffer: 0,
            bits_in_buffer: 0,
            bits_written: 0,
        }
    }

    /// Flush the bit stream and return the backend.
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.backend)
    }
}

impl<W: ByteWrite> BitWrite for BufBitWriter<W> {
    #[inline]
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize> {
        if n_bits > 64 {
            return Err(CodecError::InvalidArgument(
                "cannot write more than 64 bits at once",
            ));
        }
        let mut to_write = n_bits;
        while to_write > 0 {
            let take = to_write.min(8 - self.bits_in_buffer);
            let chunk = ((value >> (to_write - take)) & ((1 << take) - 1)) as u8;
            self.buffer = (((self.buffer as u16) << take) as u8) | chunk;
            self.bits_in_buffer += take;
            to_write -= take;
            if self.bits_in_buffer == 8 {
                self.backend.write_byte(self.buffer)?;
                self.buffer = 0;
                self.bits_in_buffer = 0;
            }
        }
        self.bits_written += n_bits as u64;
        Ok(n_bits)
    }

    #[inline]
    fn write_unary(&mut self, value: u64) -> Result<usize> {
        let mut zeros = value;
        while zeros > 0 {
            let n = zeros.min(64);
            self.write_bits(0, n as usize)?;
            zeros -= n;
        }
        self.write_bits(1, 1)?;
        Ok(value as usize + 1)
    }

    fn flush(&mut self) -> Result<usize> {
        let mut padding = 0;
        if self.bits_in_buffer > 0 {
            padding = 8 - self.bits_in_buffer;
            self.backend.write_byte(self.buffer << padding)?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.backend.flush()?;
        Ok(padding)
    }

    #[inline(always)]
    fn bit_pos(&self) -> u64 {
        self.bits_written
    }
}
