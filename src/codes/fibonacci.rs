/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fibonacci code.
//!
//! Every positive integer has a unique Zeckendorf representation as a sum of
//! non-consecutive Fibonacci numbers *F*₂ = 1, *F*₃ = 2, *F*₄ = 3, *F*₅ = 5,
//! …. The Fibonacci code of `n` writes, for each index from 2 up to the
//! largest index used by the Zeckendorf representation of `n + 1`, a one if
//! the corresponding Fibonacci number is used and a zero otherwise, followed
//! by an additional one. Since the representation never uses two
//! consecutive Fibonacci numbers, and it always ends with a one, the first
//! two consecutive ones mark the end of the codeword.

use super::{unshift, write_wide};
use crate::error::{CodecError, Result};
use crate::traits::*;

const fn fibonacci_table() -> [u64; 92] {
    let mut table = [0; 92];
    table[0] = 1;
    table[1] = 2;
    let mut i = 2;
    while i < table.len() {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// The Fibonacci numbers *F*₂, *F*₃, …, *F*₉₃, that is, all those fitting in
/// a `u64`, starting from 1, 2.
pub const FIBONACCI: [u64; 92] = fibonacci_table();

/// Index in [`FIBONACCI`] of the largest Fibonacci number not exceeding
/// `m`, which must be positive.
#[inline(always)]
fn highest_index(m: u128) -> usize {
    FIBONACCI.partition_point(|&f| f as u128 <= m) - 1
}

/// Return the length of the Fibonacci code for `n`.
#[must_use]
#[inline]
pub fn len_fibonacci(n: u64) -> usize {
    highest_index(n as u128 + 1) + 2
}

/// Trait for reading Fibonacci codes.
pub trait FibonacciRead: BitRead {
    fn read_fibonacci(&mut self) -> Result<u64>;
}

/// Trait for writing Fibonacci codes.
pub trait FibonacciWrite: BitWrite {
    fn write_fibonacci(&mut self, n: u64) -> Result<usize>;
}

impl<B: BitRead + ?Sized> FibonacciRead for B {
    fn read_fibonacci(&mut self) -> Result<u64> {
        let mut m: u128 = 0;
        let mut prev = false;
        let mut index = 0;
        loop {
            let bit = self.read_bit()?;
            if bit {
                if prev {
                    return unshift(m, "Fibonacci");
                }
                let Some(&f) = FIBONACCI.get(index) else {
                    return Err(CodecError::ValueTooLarge {
                        value: m,
                        code: "Fibonacci",
                    });
                };
                m += f as u128;
            }
            prev = bit;
            index += 1;
        }
    }
}

impl<B: BitWrite + ?Sized> FibonacciWrite for B {
    fn write_fibonacci(&mut self, n: u64) -> Result<usize> {
        let m = n as u128 + 1;
        let top = highest_index(m);
        // Zeckendorf bits, bit i standing for FIBONACCI[i]
        let mut rest = m;
        let mut zeckendorf: u128 = 0;
        for i in (0..=top).rev() {
            if FIBONACCI[i] as u128 <= rest {
                rest -= FIBONACCI[i] as u128;
                zeckendorf |= 1 << i;
            }
        }
        debug_assert_eq!(rest, 0);
        // the smallest Fibonacci number goes first, so we reverse the bits
        let len = top + 1;
        let codeword = (zeckendorf.reverse_bits() >> (128 - len)) << 1 | 1;
        write_wide(self, codeword, len + 1)
    }
}

#[cfg(test)]
mod test {
    use super::super::test_utils::*;
    use super::FIBONACCI;
    use crate::prelude::*;

    #[test]
    fn test_table() {
        assert_eq!(&FIBONACCI[..6], &[1, 2, 3, 5, 8, 13]);
        assert_eq!(FIBONACCI[91], 12_200_160_415_121_876_738);
        assert!(FIBONACCI[91].checked_add(FIBONACCI[90]).is_none());
    }

    #[test]
    fn test_fibonacci() {
        for (value, expected) in [
            (0, "11"),
            (1, "011"),
            (2, "0011"),
            (3, "1011"),
            (4, "00011"),
            (5, "10011"),
            (6, "01011"),
            (7, "000011"),
            (11, "101011"),
            (12, "0000011"),
        ] {
            let bits = bit_string(|w| w.write_fibonacci(value));
            assert_eq!(bits, expected, "for value {value}");
            assert_eq!(bits.len(), len_fibonacci(value));
            assert_eq!(bit_reader(&bits).read_fibonacci().unwrap(), value);
        }
    }

    #[test]
    fn test_fibonacci_bounds() {
        for value in [
            FIBONACCI[91] - 2,
            FIBONACCI[91] - 1,
            FIBONACCI[91],
            u64::MAX - 1,
            u64::MAX,
        ] {
            let bits = bit_string(|w| w.write_fibonacci(value));
            assert!(!bits[..bits.len() - 1].contains("11"));
            assert_eq!(bits.len(), len_fibonacci(value));
            assert_eq!(bit_reader(&bits).read_fibonacci().unwrap(), value);
        }
        assert_eq!(len_fibonacci(u64::MAX), 93);
    }

    #[test]
    fn test_fibonacci_overflow() {
        // F₉₃ + F₉₁ + F₈₉ exceeds 2⁶⁴
        let bits = "0".repeat(87) + "10101" + "1";
        assert!(matches!(
            bit_reader(&bits).read_fibonacci(),
            Err(CodecError::ValueTooLarge { code: "Fibonacci", .. })
        ));
        // a one beyond F₉₃
        let bits = "0".repeat(92) + "11";
        assert!(matches!(
            bit_reader(&bits).read_fibonacci(),
            Err(CodecError::ValueTooLarge { code: "Fibonacci", .. })
        ));
    }
}
