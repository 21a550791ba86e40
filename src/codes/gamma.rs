/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elias γ code.
//!
//! The γ code of a natural number `n` is the concatenation of the unary code of
//! `⌊log₂(n + 1)⌋` and the binary representation of `n + 1` with the most
//! significant bit removed.

use super::unshift;
use crate::error::{CodecError, Result};
use crate::traits::*;
use crate::utils::bit_len;

/// Return the length of the γ code for `n`.
#[must_use]
#[inline]
pub fn len_gamma(n: u64) -> usize {
    2 * bit_len(n as u128 + 1) - 1
}

/// Trait for reading γ codes.
pub trait GammaRead: BitRead {
    fn read_gamma(&mut self) -> Result<u64>;
}

/// Trait for writing γ codes.
pub trait GammaWrite: BitWrite {
    fn write_gamma(&mut self, n: u64) -> Result<usize>;
}

impl<B: BitRead + ?Sized> GammaRead for B {
    #[inline]
    fn read_gamma(&mut self) -> Result<u64> {
        let len = self.read_unary()?;
        if len > 64 {
            return Err(CodecError::ValueTooLarge {
                value: 1_u128.checked_shl(len as u32).map_or(u128::MAX, |x| x - 1),
                code: "Gamma",
            });
        }
        let low = self.read_bits(len as usize)?;
        unshift((1 << len) | low as u128, "Gamma")
    }
}

impl<B: BitWrite + ?Sized> GammaWrite for B {
    #[inline]
    fn write_gamma(&mut self, n: u64) -> Result<usize> {
        let m = n as u128 + 1;
        let number_of_bits_to_write = bit_len(m) - 1;
        Ok(self.write_unary(number_of_bits_to_write as u64)?
            + self.write_bits(m as u64, number_of_bits_to_write)?)
    }
}
