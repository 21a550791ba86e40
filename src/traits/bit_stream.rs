/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;

/// Sequential, streaming bit-by-bit reads.
///
/// This trait specify basic operation over which codes can be implemented by
/// traits such as [`GammaRead`](crate::codes::GammaRead).
///
/// Bits are consumed starting from the most significant bit of each byte.
pub trait BitRead {
    /// Read a single bit.
    #[inline(always)]
    fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read `n` bits and return them in the lowest bits, the first bit read
    /// being the most significant one.
    ///
    /// `n` must be at most 64.
    fn read_bits(&mut self, n: usize) -> Result<u64>;

    /// Read a unary code, that is, count the zeros preceding the next one,
    /// consuming the one as well.
    fn read_unary(&mut self) -> Result<u64>;

    /// Return the number of bits read so far.
    fn bit_pos(&self) -> u64;
}

/// Sequential, streaming bit-by-bit writes.
///
/// This trait specify basic operation over which codes can be implemented
/// by traits such as [`GammaWrite`](crate::codes::GammaWrite).
pub trait BitWrite {
    /// Write the lowest `n` bits of `value` to the stream, most significant
    /// first, and return the number of bits written, that is, `n`.
    ///
    /// The other bits of `value` are ignored. `n` must be at most 64.
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize>;

    /// Write `value` as a unary code to the stream (`value` zeros followed by
    /// a one) and return the number of bits written, that is, `value` plus one.
    fn write_unary(&mut self, value: u64) -> Result<usize>;

    /// Pad the last partial byte with zeros and emit it.
    ///
    /// Returns the number of padding bits added. This must be called only at
    /// the end of a stream: values written afterwards start on a new byte.
    fn flush(&mut self) -> Result<usize>;

    /// Return the number of bits written so far, padding excluded.
    fn bit_pos(&self) -> u64;
}

impl<R: BitRead + ?Sized> BitRead for &mut R {
    #[inline(always)]
    fn read_bit(&mut self) -> Result<bool> {
        (**self).read_bit()
    }

    #[inline(always)]
    fn read_bits(&mut self, n: usize) -> Result<u64> {
        (**self).read_bits(n)
    }

    #[inline(always)]
    fn read_unary(&mut self) -> Result<u64> {
        (**self).read_unary()
    }

    #[inline(always)]
    fn bit_pos(&self) -> u64 {
        (**self).bit_pos()
    }
}

impl<W: BitWrite + ?Sized> BitWrite for &mut W {
    #[inline(always)]
    fn write_bits(&mut self, value: u64, n: usize) -> Result<usize> {
        (**self).write_bits(value, n)
    }

    #[inline(always)]
    fn write_unary(&mut self, value: u64) -> Result<usize> {
        (**self).write_unary(value)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<usize> {
        (**self).flush()
    }

    #[inline(always)]
    fn bit_pos(&self) -> u64 {
        (**self).bit_pos()
    }
}
