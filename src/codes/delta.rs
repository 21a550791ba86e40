/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elias δ code.
//!
//! The δ code of a natural number `n` is the concatenation of the
//! [γ](super::gamma) code of `⌊log₂(n + 1)⌋` and the binary representation of
//! `n + 1` with the most significant bit removed.

use super::{len_gamma, unshift, GammaRead, GammaWrite};
use crate::error::{CodecError, Result};
use crate::utils::bit_len;

/// Return the length of the δ code for `n`.
#[must_use]
#[inline]
pub fn len_delta(n: u64) -> usize {
    let number_of_bits_to_write = bit_len(n as u128 + 1) - 1;
    number_of_bits_to_write + len_gamma(number_of_bits_to_write as u64)
}

/// Trait for reading δ codes.
pub trait DeltaRead: GammaRead {
    fn read_delta(&mut self) -> Result<u64>;
}

/// Trait for writing δ codes.
pub trait DeltaWrite: GammaWrite {
    fn write_delta(&mut self, n: u64) -> Result<usize>;
}

impl<B: GammaRead + ?Sized> DeltaRead for B {
    #[inline]
    fn read_delta(&mut self) -> Result<u64> {
        let len = self.read_gamma()?;
        if len > 64 {
            return Err(CodecError::ValueTooLarge {
                value: 1_u128.checked_shl(len as u32).map_or(u128::MAX, |x| x - 1),
                code: "Delta",
            });
        }
        let low = self.read_bits(len as usize)?;
        unshift((1 << len) | low as u128, "Delta")
    }
}

impl<B: GammaWrite + ?Sized> DeltaWrite for B {
    #[inline]
    fn write_delta(&mut self, n: u64) -> Result<usize> {
        let m = n as u128 + 1;
        let number_of_bits_to_write = bit_len(m) - 1;
        Ok(self.write_gamma(number_of_bits_to_write as u64)?
            + self.write_bits(m as u64, number_of_bits_to_write)?)
    }
}

#[cfg(test)]
mod test {
    use super::super::test_utils::*;
    use crate::prelude::*;

    #[test]
    fn test_delta() {
        for (value, expected) in [
            (0, "1"),
            (1, "0100"),
            (2, "0101"),
            (3, "01100"),
            (6, "01111"),
            (7, "00100000"),
            (14, "00100111"),
            (15, "001010000"),
        ] {
            let bits = bit_string(|w| w.write_delta(value));
            assert_eq!(bits, expected, "for value {value}");
            assert_eq!(bits.len(), len_delta(value));
            assert_eq!(bit_reader(&bits).read_delta().unwrap(), value);
        }
    }

    #[test]
    fn test_delta_bounds() {
        for value in [(1 << 32) - 1, 1 << 32, u64::MAX - 1, u64::MAX] {
            let bits = bit_string(|w| w.write_delta(value));
            assert_eq!(bits.len(), len_delta(value));
            assert_eq!(bit_reader(&bits).read_delta().unwrap(), value);
        }
        // γ(64) is 13 bits long
        assert_eq!(len_delta(u64::MAX), 13 + 64);
    }

    #[test]
    fn test_delta_overflow() {
        // a length field of 65
        let bits = "0000001000010".to_string() + &"0".repeat(70);
        assert!(matches!(
            bit_reader(&bits).read_delta(),
            Err(CodecError::ValueTooLarge { code: "Delta", .. })
        ));
    }
}
