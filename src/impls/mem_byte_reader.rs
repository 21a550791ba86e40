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

/// An implementation of [`ByteRead`] for a slice, with a cursor.
///
/// # Example
/// ```
/// use universal_codes::prelude::*;
///
/// let data = [0xAC_u8, 0x02];
/// let mut reader = MemByteReader::new(&data);
///
/// assert_eq!(reader.read_byte().unwrap(), 0xAC);
/// assert_eq!(reader.byte_pos(), 1);
/// assert_eq!(reader.read_byte().unwrap(), 0x02);
/// assert!(reader.read_byte().is_err());
///
/// // errored reads don't change the current position
/// assert_eq!(reader.byte_pos(), 2);
/// reader.set_byte_pos(0).unwrap();
/// assert_eq!(reader.read_byte().unwrap(), 0xAC);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    byte_index: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Create a new [`MemByteReader`] positioned at the start of `data`.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self {
            data,
            byte_index: 0,
        }
    }

    /// Return the number of bytes not read yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.as_ref().len() - self.byte_index
    }

    /// Move the cursor to `byte_index`, which may be at most the length of
    /// the underlying slice.
    pub fn set_byte_pos(&mut self, byte_index: usize) -> Result<()> {
        if byte_index > self.data.as_ref().len() {
            return Err(CodecError::InvalidArgument(
                "position beyond end of slice",
            ));
        }
        self.byte_index = byte_index;
        Ok(())
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self
            .data
            .as_ref()
            .get(self.byte_index)
            .ok_or(CodecError::EndOfInput {
                byte_pos: self.byte_index as u64,
            })?;
        self.byte_index += 1;
        Ok(byte)
    }

    #[inline(always)]
    fn byte_pos(&self) -> u64 {
        self.byte_index as u64
    }
}
