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
use std::io::{ErrorKind, Read, Write};

/// An adapter from [`Read`] and [`Write`] to [`ByteRead`] and [`ByteWrite`],
/// respectively.
///
/// Instances of this struct turn every standard source or destination of
/// bytes (such as [`std::fs::File`], [`std::io::BufReader`], sockets, etc.)
/// into a byte source or sink for codes. Since codes read and write one byte
/// at a time, unbuffered backends should be wrapped in a
/// [`std::io::BufReader`] or [`std::io::BufWriter`].
///
/// An unexpected end of file is reported as
/// [`CodecError::EndOfInput`]; every other failure of the backend is
/// reported as [`CodecError::Io`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct ByteAdapter<B> {
    backend: B,
    byte_pos: u64,
}

impl<B> ByteAdapter<B> {
    /// Create a new [`ByteAdapter`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            byte_pos: 0,
        }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> ByteRead for ByteAdapter<B> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0_u8];
        self.backend.read_exact(&mut byte).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => CodecError::EndOfInput {
                byte_pos: self.byte_pos,
            },
            _ => CodecError::Io(e),
        })?;
        self.byte_pos += 1;
        Ok(byte[0])
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        self.byte_pos
    }
}

impl<B: Write> ByteWrite for ByteAdapter<B> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.backend.write_all(&[byte])?;
        self.byte_pos += 1;
        Ok(())
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        self.byte_pos
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.backend.flush()?)
    }
}
