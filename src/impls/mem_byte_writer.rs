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

/// An implementation of [`ByteWrite`] for a mutable slice of fixed size.
///
/// Writing past the end of the slice fails with
/// [`CodecError::EndOfOutput`].
///
/// # Example
/// ```
/// use universal_codes::prelude::*;
///
/// let mut bytes = [0_u8; 2];
/// let mut writer = MemByteWriter::new(&mut bytes);
///
/// assert!(writer.write_byte(0xAC).is_ok());
/// assert!(writer.write_byte(0x02).is_ok());
/// assert!(writer.write_byte(0xFF).is_err());
/// assert_eq!(writer.byte_pos(), 2);
/// assert_eq!(bytes, [0xAC, 0x02]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriter<B: AsMut<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsMut<[u8]>> MemByteWriter<B> {
    /// Create a new [`MemByteWriter`] writing from the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// Return the bytes written so far.
    pub fn written(&mut self) -> &[u8] {
        &self.data.as_mut()[..self.byte_index]
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<[u8]>> ByteWrite for MemByteWriter<B> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        match self.data.as_mut().get_mut(self.byte_index) {
            Some(byte_ref) => {
                *byte_ref = byte;
                self.byte_index += 1;
                Ok(())
            }
            None => Err(CodecError::EndOfOutput {
                byte_pos: self.byte_index as u64,
            }),
        }
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        self.byte_index as u64
    }
}

/// An implementation of [`ByteWrite`] for a growable [`Vec<u8>`].
///
/// Unlike [`MemByteWriter`], bytes are appended to the vector, which is
/// extended as needed, so writes never fail. Bytes already present in the
/// vector are left untouched, and [`byte_pos`](ByteWrite::byte_pos) counts
/// only the bytes written through this writer.
///
/// # Example
/// ```
/// use universal_codes::prelude::*;
///
/// let mut bytes = vec![0xFF_u8];
/// let mut writer = MemByteWriterVec::new(&mut bytes);
///
/// assert!(writer.write_byte(0).is_ok());
/// assert!(writer.write_byte(1).is_ok());
/// assert_eq!(writer.byte_pos(), 2);
/// assert_eq!(bytes, vec![0xFF, 0, 1]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriterVec<B: AsMut<alloc::vec::Vec<u8>>> {
    data: B,
    written: usize,
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> MemByteWriterVec<B> {
    /// Create a new [`MemByteWriterVec`] appending to `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, written: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.data.as_mut().push(byte);
        self.written += 1;
        Ok(())
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        self.written as u64
    }
}
