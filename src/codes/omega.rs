/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Elias ω code.
//!
//! Like Elias gamma coding and Elias delta coding, it works by prefixing the
//! positive integer with a representation of its order of magnitude in a
//! universal code. Unlike those other two codes, however, Elias omega
//! recursively encodes that prefix; thus, they are sometimes known as
//! recursive Elias codes.
//!
//! To write `n`, we start from `n + 1` and prepend its binary representation
//! to the codeword, replacing it with the length of the representation minus
//! one, until we reach one; a final zero terminates the codeword. Every group
//! starts with a one, so the reader peeks at the next bit to decide whether
//! another group follows, and its length is given by the previous group.

use super::{unshift, write_wide};
use crate::error::{CodecError, Result};
use crate::traits::*;
use crate::utils::bit_len;

/// Return the length of the ω code for `n`.
#[must_use]
#[inline(always)]
pub fn len_omega(n: u64) -> usize {
    // omega codes are indexed from 1
    recursive_len(n as u128 + 1)
}

fn recursive_len(n: u128) -> usize {
    if n <= 1 {
        return 1;
    }
    let l = bit_len(n);
    recursive_len(l as u128 - 1) + l
}

/// Trait for reading ω codes.
pub trait OmegaRead: BitRead {
    fn read_omega(&mut self) -> Result<u64> {
        let mut n: u128 = 1;
        loop {
            if !self.read_bit()? {
                return unshift(n, "Omega");
            }
            // the bit just read is the leading one of a group of n + 1 bits
            if n > 64 {
                return Err(CodecError::ValueTooLarge {
                    value: u128::MAX,
                    code: "Omega",
                });
            }
            n = (1 << n) | self.read_bits(n as usize)? as u128;
        }
    }
}

/// Trait for writing ω codes.
pub trait OmegaWrite: BitWrite {
    fn write_omega(&mut self, n: u64) -> Result<usize> {
        // omega codes are indexed from 1
        Ok(recursive_write(n as u128 + 1, self)? + self.write_bits(0, 1)?)
    }
}

fn recursive_write<B: BitWrite + ?Sized>(n: u128, writer: &mut B) -> Result<usize> {
    if n <= 1 {
        return Ok(0);
    }
    let l = bit_len(n);
    Ok(recursive_write(l as u128 - 1, writer)? + write_wide(writer, n, l)?)
}

impl<B: BitRead + ?Sized> OmegaRead for B {}
impl<B: BitWrite + ?Sized> OmegaWrite for B {}
