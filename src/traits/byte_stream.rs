/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;

/// Sequential, streaming byte-by-byte reads.
pub trait ByteRead {
    /// Read a byte and advance the current position.
    ///
    /// Implementations must fail with
    /// [`CodecError::EndOfInput`](crate::error::CodecError::EndOfInput) when
    /// no byte is left.
    fn read_byte(&mut self) -> Result<u8>;

    /// Return the number of bytes read so far.
    fn byte_pos(&self) -> u64;
}

/// Sequential, streaming byte-by-byte writes.
pub trait ByteWrite {
    /// Write a byte and advance the current position.
    fn write_byte(&mut self, byte: u8) -> Result<()>;

    /// Return the number of bytes written so far.
    fn byte_pos(&self) -> u64;

    /// Flush the underlying transport, if any.
    #[inline(always)]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<R: ByteRead + ?Sized> ByteRead for &mut R {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8> {
        (**self).read_byte()
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        (**self).byte_pos()
    }
}

impl<W: ByteWrite + ?Sized> ByteWrite for &mut W {
    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        (**self).byte_pos()
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
