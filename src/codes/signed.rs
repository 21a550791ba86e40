/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Codes for signed integers.
//!
//! [`Signed`] extends a code for natural numbers to `i64` by composing it
//! with the zigzag bijection of [`ToNat`]/[`ToInt`]: 0, −1, 1, −2, 2, …
//! are mapped to 0, 1, 2, 3, 4, …, so values of small magnitude get
//! short codewords regardless of their sign.

use super::Codec;
use crate::error::Result;
use crate::traits::{BitRead, BitWrite};
use crate::utils::{ToInt, ToNat};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A code for `i64` built on a code for `u64`.
///
/// ```
/// use universal_codes::prelude::*;
///
/// let code = Signed(Code::Gamma);
/// assert_eq!(code.len(0), Some(1));
/// assert_eq!(code.len(-1), Code::Gamma.len(1));
/// assert_eq!(code.len(i64::MIN), Code::Gamma.len(u64::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signed<C>(pub C);

impl<C: Codec<Value = u64>> Codec for Signed<C> {
    type Value = i64;

    #[inline(always)]
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: i64) -> Result<usize> {
        self.0.write(writer, value.to_nat())
    }

    #[inline(always)]
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<i64> {
        self.0.read(reader).map(ToInt::to_int)
    }

    #[inline(always)]
    fn len(&self, value: i64) -> Option<usize> {
        self.0.len(value.to_nat())
    }
}
