/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for reading and writing self-delimiting codes.

All codes map the natural numbers (`u64`, zero included) to codewords, so
`u64::MAX` is encodable by every code whose parameters allow it. The first
few codewords are:

| Arg | VLQ(7)     |     γ   |     δ    |   ω     | Fibonacci | α(6)      |
|-----|-----------:|--------:|---------:|--------:|----------:|----------:|
| 0   |   00000000 |       1 |        1 |       0 |        11 |    000001 |
| 1   |   00000001 |     010 |     0100 |     100 |       011 |   0000100 |
| 2   |   00000010 |     011 |     0101 |     110 |      0011 |   0000101 |
| 3   |   00000011 |   00100 |    01100 |  101000 |      1011 |  00001100 |
| 4   |   00000100 |   00101 |    01101 |  101010 |     00011 |  00001101 |
| 5   |   00000101 |   00110 |    01110 |  101100 |     10011 |  00001110 |

Each code is implemented as a pair of extension traits for reading and
writing (e.g., [`GammaRead`] and [`GammaWrite`]) and a function computing
the length of a codeword (e.g., [`len_gamma`]). The traits for reading
depend on [`BitRead`](crate::traits::BitRead), whereas the traits for
writing depend on [`BitWrite`](crate::traits::BitWrite).

The [`Code`] enum selects a code (and its parameters) at runtime and
implements [`Codec`]; [`Signed`] extends any such codec to signed integers,
and [`Bulk`] provides the byte-level entry points for single values and
sequences.

*/

use crate::error::{CodecError, Result};
use crate::traits::BitWrite;

pub mod vlq;
pub use vlq::{len_vlq, VlqRead, VlqWrite, DEFAULT_VLQ_GROUP_BITS};

pub mod gamma;
pub use gamma::{len_gamma, GammaRead, GammaWrite};

pub mod delta;
pub use delta::{len_delta, DeltaRead, DeltaWrite};

pub mod omega;
pub use omega::{len_omega, OmegaRead, OmegaWrite};

pub mod fibonacci;
pub use fibonacci::{len_fibonacci, FibonacciRead, FibonacciWrite};

pub mod thompson_alpha;
pub use thompson_alpha::{
    len_thompson_alpha, ThompsonAlphaRead, ThompsonAlphaWrite,
    DEFAULT_THOMPSON_ALPHA_PREFIX_BITS,
};

pub mod code;
pub use code::{Code, Codec};

pub mod signed;
pub use signed::Signed;

pub mod bulk;
pub use bulk::{Bulk, Decoder};

pub mod stats;
pub use stats::CodesStats;

/// Write the lowest `n_bits` bits of `value`, with `n_bits` at most 128.
#[inline]
pub(crate) fn write_wide<W: BitWrite + ?Sized>(
    writer: &mut W,
    value: u128,
    n_bits: usize,
) -> Result<usize> {
    if n_bits > 64 {
        Ok(writer.write_bits((value >> 64) as u64, n_bits - 64)?
            + writer.write_bits(value as u64, 64)?)
    } else {
        writer.write_bits(value as u64, n_bits)
    }
}

/// Undo the shift by one of the domain of a code: `m` is at least one, and
/// `m - 1` must fit in a `u64`.
#[inline(always)]
pub(crate) fn unshift(m: u128, code: &'static str) -> Result<u64> {
    let value = m - 1;
    u64::try_from(value).map_err(|_| CodecError::ValueTooLarge { value, code })
}
