/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Map a signed integer to a natural number.
///
/// Non-negative integers `x` are mapped to `2x`, negative integers `x` to
/// `-2x - 1`. The mapping is a bijection between the whole signed and
/// unsigned range of the same width, and it is inverted by [`ToInt`].
pub trait ToNat: Sized {
    type UnsignedInt;
    fn to_nat(self) -> Self::UnsignedInt;
}

/// Map a natural number back to a signed integer.
///
/// This is the inverse of [`ToNat`]: even numbers `x` are mapped to `x / 2`,
/// odd numbers to `-(x + 1) / 2`.
pub trait ToInt: Sized {
    type SignedInt;
    fn to_int(self) -> Self::SignedInt;
}

macro_rules! impl_zigzag {
    ($($s:ty => $u:ty),*) => {$(
        impl ToNat for $s {
            type UnsignedInt = $u;
            #[inline(always)]
            fn to_nat(self) -> $u {
                ((self << 1) ^ (self >> (<$s>::BITS - 1))) as $u
            }
        }

        impl ToInt for $u {
            type SignedInt = $s;
            #[inline(always)]
            fn to_int(self) -> $s {
                ((self >> 1) as $s) ^ -((self & 1) as $s)
            }
        }
    )*};
}

impl_zigzag!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zigzag() {
        for (x, n) in [(0_i64, 0_u64), (-1, 1), (1, 2), (-2, 3), (2, 4), (-3, 5)] {
            assert_eq!(x.to_nat(), n);
            assert_eq!(n.to_int(), x);
        }
        assert_eq!(i64::MAX.to_nat(), u64::MAX - 1);
        assert_eq!(i64::MIN.to_nat(), u64::MAX);
        assert_eq!(u64::MAX.to_int(), i64::MIN);
        assert_eq!((u64::MAX - 1).to_int(), i64::MAX);
        for x in i8::MIN..=i8::MAX {
            assert_eq!(x.to_nat().to_int(), x);
        }
        for n in 0..=u16::MAX {
            assert_eq!(n.to_int().to_nat(), n);
        }
    }
}
