/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Variable-length quantities.
//!
//! A variable-length quantity with group size *g* splits the binary
//! representation of a natural number into groups of *g* bits, starting
//! from the least significant one. Each group is written least-significant
//! group first, prefixed by a continuation bit, which is one for all groups
//! except the last one. Zero is written as a single group of zeros.
//!
//! The code uses ⌈*k* / *g*⌉ groups for a number with a binary
//! representation of *k* > 0 bits. With *g* = 7, every group fills exactly a
//! byte and the code coincides with unsigned
//! [LEB128](https://en.wikipedia.org/wiki/LEB128): for example, 300 is
//! written as `0xAC 0x02`.
//!
//! This representation is not *complete*, as, for instance, zero could be
//! written also as a continued group of zeros followed by a final group of
//! zeros; such sequences are never produced, but they are accepted by the
//! reader.

use crate::error::{CodecError, Result};
use crate::traits::*;
use crate::utils::bit_len;

/// The group size used by [`Code::vlq_default`](super::Code::vlq_default).
pub const DEFAULT_VLQ_GROUP_BITS: usize = 7;

#[inline(always)]
fn check_group_bits(group_bits: usize) -> Result<()> {
    if group_bits == 0 || group_bits > 64 {
        return Err(CodecError::InvalidArgument(
            "VLQ group size must be in [1..64]",
        ));
    }
    Ok(())
}

/// Return the length in bits of the variable-length quantity for `value`
/// with groups of `group_bits` bits, or `None` if `group_bits` is not in
/// [1..64].
#[must_use]
#[inline]
pub fn len_vlq(value: u64, group_bits: usize) -> Option<usize> {
    check_group_bits(group_bits).ok()?;
    let groups = bit_len(value as u128).div_ceil(group_bits).max(1);
    Some(groups * (group_bits + 1))
}

/// Trait for reading variable-length quantities.
pub trait VlqRead: BitRead {
    fn read_vlq(&mut self, group_bits: usize) -> Result<u64> {
        check_group_bits(group_bits)?;
        let mut value = 0_u64;
        let mut shift = 0_usize;
        loop {
            let more = self.read_bit()?;
            let group = self.read_bits(group_bits)?;
            if group != 0 {
                if shift + bit_len(group as u128) > 64 {
                    return Err(CodecError::ValueTooLarge {
                        value: (group as u128).checked_shl(shift as u32).unwrap_or(u128::MAX),
                        code: "VLQ",
                    });
                }
                value |= group << shift;
            }
            if !more {
                return Ok(value);
            }
            shift = shift.saturating_add(group_bits);
        }
    }
}

/// Trait for writing variable-length quantities.
pub trait VlqWrite: BitWrite {
    fn write_vlq(&mut self, mut value: u64, group_bits: usize) -> Result<usize> {
        check_group_bits(group_bits)?;
        let mask = u64::MAX >> (64 - group_bits);
        let mut written = 0;
        loop {
            let rest = value.checked_shr(group_bits as u32).unwrap_or(0);
            written += self.write_bits((rest != 0) as u64, 1)?;
            written += self.write_bits(value & mask, group_bits)?;
            if rest == 0 {
                return Ok(written);
            }
            value = rest;
        }
    }
}

impl<B: BitRead + ?Sized> VlqRead for B {}
impl<B: BitWrite + ?Sized> VlqWrite for B {}
