/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Helpers.

[`CountBitRead`] and [`CountBitWrite`] keep track of the number of bits read
or written to a [`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite), respectively, optionally logging the
operations performed on the stream.

[`ToNat`] and [`ToInt`] are the zigzag bijection between signed and unsigned
integers used by [`Signed`](crate::codes::Signed).

*/

mod count;
pub use count::*;

mod zigzag;
pub use zigzag::*;

/// Return the number of bits of the binary representation of `value`, that
/// is, zero for zero and ⌊log₂(`value`)⌋ + 1 otherwise.
///
/// Codes shift their domain by one before encoding, so they work on `u128`
/// to represent `u64::MAX + 1` exactly.
#[must_use]
#[inline(always)]
pub const fn bit_len(value: u128) -> usize {
    (u128::BITS - value.leading_zeros()) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_bit_len() {
        assert_eq!(bit_len(0), 0);
        assert_eq!(bit_len(1), 1);
        assert_eq!(bit_len(6), 3);
        assert_eq!(bit_len(u64::MAX as u128), 64);
        assert_eq!(bit_len(u64::MAX as u128 + 1), 65);
    }
}
