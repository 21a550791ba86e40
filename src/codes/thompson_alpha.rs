/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Thompson-Alpha code.
//!
//! The α code with prefix width `k` of a natural number `n` is the
//! concatenation of the length `l` of the binary representation of `n + 1`,
//! written as a fixed-width field of `k` bits, and the binary representation
//! of `n + 1` with the most significant bit removed.
//!
//! The code is defined only when `l` fits in the prefix, that is, when
//! `l` ≤ 2<sup>`k`</sup> − 1: with `k` = 6 the largest encodable value is
//! 2⁶³ − 2, and `k` ≥ 7 covers all `u64` values.
//!
//! A length field of zero is never written. When `k` is less than eight, the
//! reader takes it for the zero padding of the last byte and reports
//! [`CodecError::EndOfInput`]; otherwise the stream is malformed.

use super::unshift;
use crate::error::{CodecError, Result};
use crate::traits::*;
use crate::utils::bit_len;

/// The prefix width used by
/// [`Code::thompson_alpha_default`](super::Code::thompson_alpha_default).
pub const DEFAULT_THOMPSON_ALPHA_PREFIX_BITS: usize = 6;

#[inline(always)]
fn check_prefix_bits(prefix_bits: usize) -> Result<()> {
    if prefix_bits == 0 || prefix_bits > 32 {
        return Err(CodecError::InvalidArgument(
            "Thompson-Alpha prefix width must be in [1..32]",
        ));
    }
    Ok(())
}

/// Return the length of the α code with prefix width `prefix_bits` for `n`,
/// or `None` if `n` cannot be encoded or `prefix_bits` is not in [1..32].
#[must_use]
#[inline]
pub fn len_thompson_alpha(n: u64, prefix_bits: usize) -> Option<usize> {
    check_prefix_bits(prefix_bits).ok()?;
    let l = bit_len(n as u128 + 1);
    (l < 1 << prefix_bits).then_some(prefix_bits + l - 1)
}

/// Trait for reading α codes.
pub trait ThompsonAlphaRead: BitRead {
    fn read_thompson_alpha(&mut self, prefix_bits: usize) -> Result<u64> {
        check_prefix_bits(prefix_bits)?;
        let l = self.read_bits(prefix_bits)?;
        if l == 0 {
            // a field narrower than a byte can be the zero padding of the
            // last byte of the stream
            if prefix_bits < 8 {
                return Err(CodecError::EndOfInput {
                    byte_pos: self.bit_pos().div_ceil(8),
                });
            }
            return Err(CodecError::Malformed {
                code: "Thompson-Alpha",
                reason: "zero length field",
            });
        }
        let number_of_bits_to_read = l - 1;
        if number_of_bits_to_read > 64 {
            return Err(CodecError::ValueTooLarge {
                value: 1_u128
                    .checked_shl(number_of_bits_to_read as u32)
                    .map_or(u128::MAX, |x| x - 1),
                code: "Thompson-Alpha",
            });
        }
        let low = self.read_bits(number_of_bits_to_read as usize)?;
        unshift((1 << number_of_bits_to_read) | low as u128, "Thompson-Alpha")
    }
}

/// Trait for writing α codes.
pub trait ThompsonAlphaWrite: BitWrite {
    fn write_thompson_alpha(&mut self, n: u64, prefix_bits: usize) -> Result<usize> {
        check_prefix_bits(prefix_bits)?;
        let m = n as u128 + 1;
        let l = bit_len(m);
        if l >= 1 << prefix_bits {
            return Err(CodecError::ValueTooLarge {
                value: n as u128,
                code: "Thompson-Alpha",
            });
        }
        Ok(self.write_bits(l as u64, prefix_bits)? + self.write_bits(m as u64, l - 1)?)
    }
}

impl<B: BitRead + ?Sized> ThompsonAlphaRead for B {}
impl<B: BitWrite + ?Sized> ThompsonAlphaWrite for B {}

#[cfg(test)]
mod test {
    use super::super::test_utils::*;
    use crate::prelude::*;

    #[test]
    fn test_thompson_alpha() {
        for (value, expected) in [
            (0, "000001"),
            (1, "0000100"),
            (2, "0000101"),
            (5, "00001110"),
            (6, "00001111"),
            (7, "000100000"),
        ] {
            let bits = bit_string(|w| w.write_thompson_alpha(value, 6));
            assert_eq!(bits, expected, "for value {value}");
            assert_eq!(Some(bits.len()), len_thompson_alpha(value, 6));
            assert_eq!(bit_reader(&bits).read_thompson_alpha(6).unwrap(), value);
        }
    }

    #[test]
    fn test_thompson_alpha_domain() {
        // with 6 bits the length field goes up to 63
        let max = (1 << 63) - 2;
        assert_eq!(len_thompson_alpha(max, 6), Some(6 + 62));
        assert_eq!(len_thompson_alpha(max + 1, 6), None);
        assert_eq!(len_thompson_alpha(u64::MAX, 6), None);
        assert_eq!(len_thompson_alpha(u64::MAX, 7), Some(7 + 64));
        assert_eq!(len_thompson_alpha(0, 1), Some(1));
        assert_eq!(len_thompson_alpha(1, 1), None);
        assert_eq!(len_thompson_alpha(1, 0), None);
        assert_eq!(len_thompson_alpha(1, 33), None);

        let bits = bit_string(|w| w.write_thompson_alpha(max, 6));
        assert_eq!(bit_reader(&bits).read_thompson_alpha(6).unwrap(), max);
        let bits = bit_string(|w| w.write_thompson_alpha(u64::MAX, 7));
        assert_eq!(bit_reader(&bits).read_thompson_alpha(7).unwrap(), u64::MAX);

        let mut bytes = Vec::new();
        let mut writer = BufBitWriter::new(MemByteWriterVec::new(&mut bytes));
        assert!(matches!(
            writer.write_thompson_alpha(max + 1, 6),
            Err(CodecError::ValueTooLarge { code: "Thompson-Alpha", .. })
        ));
        assert!(matches!(
            writer.write_thompson_alpha(0, 0),
            Err(CodecError::InvalidArgument(_))
        ));
        assert_eq!(writer.bit_pos(), 0);
    }

    #[test]
    fn test_thompson_alpha_malformed() {
        assert!(matches!(
            bit_reader("00000000").read_thompson_alpha(8),
            Err(CodecError::Malformed { .. })
        ));
        // zero padding filling the length field
        assert!(matches!(
            bit_reader("0000000").read_thompson_alpha(6),
            Err(CodecError::EndOfInput { byte_pos: 1 })
        ));
        assert!(matches!(
            bit_reader("0").read_thompson_alpha(7),
            Err(CodecError::EndOfInput { byte_pos: 1 })
        ));
        // a length field of 66 needs 65 more bits
        let bits = "1000010".to_string() + &"0".repeat(70);
        assert!(matches!(
            bit_reader(&bits).read_thompson_alpha(7),
            Err(CodecError::ValueTooLarge { .. })
        ));
        // a length field of 65 with a non-zero tail
        let bits = "1000001".to_string() + &"0".repeat(63) + "1";
        assert!(matches!(
            bit_reader(&bits).read_thompson_alpha(7),
            Err(CodecError::ValueTooLarge { .. })
        ));
    }
}
