/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte-level entry points for single values and sequences.
//!
//! Every method of [`Bulk`] that touches a byte stream owns a single bit
//! stream for the duration of the call: encoding methods wrap the sink in a
//! [`BufBitWriter`], write all values back to back, and pad the last byte
//! with zeros once at the end; decoding methods wrap the source in a
//! [`BufBitReader`] and discard the unread bits of the last byte they
//! touched. Thus, the output of a call is a sequence of whole bytes that
//! can be decoded by a single matching call with the same code.
//!
//! Streams carry no count: the caller must know how many values to decode.
//! Decoding past the last value reads the zero padding, which for some
//! codes (e.g., ω, whose codeword for 0 is `0`) is itself a valid codeword.
//!
//! ```
//! use universal_codes::prelude::*;
//!
//! let code = Code::vlq_default();
//! let mut bytes = Vec::new();
//! code.encode_many(MemByteWriterVec::new(&mut bytes), &[300, 0, 1 << 40], 0, 3)?;
//! assert_eq!(&bytes[..2], &[0xAC, 0x02]);
//!
//! let values = code.decode_vec(MemByteReader::new(&bytes), 3)?;
//! assert_eq!(values, vec![300, 0, 1 << 40]);
//! # Ok::<(), CodecError>(())
//! ```

use super::Codec;
use crate::error::{CodecError, Result};
use crate::impls::{BufBitReader, BufBitWriter};
use crate::traits::*;

#[inline(always)]
fn check_range(len: usize, offset: usize, count: usize) -> Result<()> {
    match offset.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(CodecError::InvalidArgument(
            "offset + count exceeds the length of the buffer",
        )),
    }
}

/// Byte-level encoding and decoding methods, available on every [`Codec`].
pub trait Bulk: Codec {
    /// Encode `value` on `sink`, padding the last byte with zeros, and
    /// return the number of bits of the codeword.
    fn encode_single<S: ByteWrite>(&self, sink: S, value: Self::Value) -> Result<usize> {
        let mut writer = BufBitWriter::new(sink);
        let bits = self.write(&mut writer, value)?;
        writer.into_inner()?;
        tracing::trace!(bits, "encoded single value");
        Ok(bits)
    }

    /// Decode a single value from `source`.
    ///
    /// The unread bits of the last byte read are discarded.
    fn decode_single<S: ByteRead>(&self, source: S) -> Result<Self::Value> {
        self.read(&mut BufBitReader::new(source))
    }

    /// Encode `values[offset..offset + count]` on `sink`, back to back,
    /// padding the last byte with zeros, and return the number of bits
    /// written, padding excluded.
    ///
    /// Nothing is written if the range is out of bounds. If a value cannot be
    /// encoded, the values preceding it have already been handed to `sink`
    /// (except for a partial last byte).
    fn encode_many<S: ByteWrite>(
        &self,
        sink: S,
        values: &[Self::Value],
        offset: usize,
        count: usize,
    ) -> Result<usize> {
        check_range(values.len(), offset, count)?;
        let mut writer = BufBitWriter::new(sink);
        let mut bits = 0;
        for &value in &values[offset..offset + count] {
            bits += self.write(&mut writer, value)?;
        }
        writer.into_inner()?;
        tracing::trace!(count, bits, "encoded values");
        Ok(bits)
    }

    /// Decode `count` values from `source` into
    /// `values[offset..offset + count]`.
    ///
    /// If `source` ends before `count` values have been decoded, the values
    /// decoded so far are stored and
    /// [`CodecError::InsufficientInput`] is returned.
    fn decode_many<S: ByteRead>(
        &self,
        source: S,
        values: &mut [Self::Value],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        check_range(values.len(), offset, count)?;
        let mut decoder = Decoder::new(self, source, count);
        for value in &mut values[offset..offset + count] {
            *value = decoder.next_value()?;
        }
        tracing::trace!(count, bits = decoder.bit_pos(), "decoded values");
        Ok(())
    }

    /// Decode `count` values from `source` into a new vector.
    #[cfg(feature = "alloc")]
    fn decode_vec<S: ByteRead>(&self, source: S, count: usize) -> Result<alloc::vec::Vec<Self::Value>> {
        // cap the preallocation
        let mut values = alloc::vec::Vec::with_capacity(count.min(1 << 16));
        let mut decoder = Decoder::new(self, source, count);
        for _ in 0..count {
            values.push(decoder.next_value()?);
        }
        tracing::trace!(count, bits = decoder.bit_pos(), "decoded values");
        Ok(values)
    }

    /// Return the number of bits of the codeword of `value`, or `None` if
    /// `value` is not encodable.
    ///
    /// No I/O is performed; the result is always equal to the value returned
    /// by [`Codec::write`].
    #[inline]
    fn calculate_encoded_bits(&self, value: Self::Value) -> Option<u32> {
        self.len(value).and_then(|len| u32::try_from(len).ok())
    }

    /// Return a [`Decoder`] producing `count` values from `source`.
    fn decoder<S: ByteRead>(&self, source: S, count: usize) -> Decoder<'_, Self, S> {
        Decoder::new(self, source, count)
    }
}

impl<C: Codec + ?Sized> Bulk for C {}

/// A decoder producing a fixed number of values from a byte source.
///
/// Values can be obtained one at a time with
/// [`next_value`](Decoder::next_value), which fails with
/// [`CodecError::AlreadyComplete`] once all values have been produced, or
/// through the [`Iterator`] implementation, which is fused.
///
/// If the source ends before the last value,
/// [`CodecError::InsufficientInput`] is returned, and the decoder is then
/// complete.
///
/// ```
/// use universal_codes::prelude::*;
///
/// let mut bytes = Vec::new();
/// Code::Gamma.encode_many(MemByteWriterVec::new(&mut bytes), &[4, 2], 0, 2)?;
///
/// let mut decoder = Code::Gamma.decoder(MemByteReader::new(&bytes), 2);
/// assert_eq!(decoder.next_value()?, 4);
/// assert_eq!(decoder.next_value()?, 2);
/// assert!(matches!(decoder.next_value(), Err(CodecError::AlreadyComplete)));
/// # Ok::<(), CodecError>(())
/// ```
#[derive(Debug)]
pub struct Decoder<'a, C: Codec + ?Sized, R: ByteRead> {
    code: &'a C,
    reader: BufBitReader<R>,
    requested: usize,
    decoded: usize,
}

impl<'a, C: Codec + ?Sized, R: ByteRead> Decoder<'a, C, R> {
    /// Create a decoder producing `count` values from `source` using `code`.
    pub fn new(code: &'a C, source: R, count: usize) -> Self {
        Self {
            code,
            reader: BufBitReader::new(source),
            requested: count,
            decoded: 0,
        }
    }

    /// Decode the next value.
    pub fn next_value(&mut self) -> Result<C::Value> {
        if self.decoded == self.requested {
            return Err(CodecError::AlreadyComplete);
        }
        match self.code.read(&mut self.reader) {
            Ok(value) => {
                self.decoded += 1;
                Ok(value)
            }
            Err(CodecError::EndOfInput { byte_pos }) => {
                let decoded = self.decoded;
                self.decoded = self.requested;
                Err(CodecError::InsufficientInput {
                    decoded,
                    requested: self.requested,
                    byte_pos,
                })
            }
            Err(err) => {
                self.decoded = self.requested;
                Err(err)
            }
        }
    }

    /// Return the number of values still to be decoded.
    pub fn remaining(&self) -> usize {
        self.requested - self.decoded
    }

    /// Return the number of bits read so far.
    pub fn bit_pos(&self) -> u64 {
        self.reader.bit_pos()
    }

    /// Return the byte source, discarding the unread bits of the current
    /// byte.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<C: Codec + ?Sized, R: ByteRead> Iterator for Decoder<'_, C, R> {
    type Item = Result<C::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.decoded == self.requested {
            None
        } else {
            Some(self.next_value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<C: Codec + ?Sized, R: ByteRead> core::iter::FusedIterator for Decoder<'_, C, R> {}
