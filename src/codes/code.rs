/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Runtime selection of a code and its parameters.
//!
//! [`Code`] is the closed set of available codes; it implements [`Codec`],
//! the common interface used by the [bulk driver](super::Bulk) and by
//! [`Signed`](super::Signed).

use super::*;
use crate::error::{CodecError, Result};
use crate::traits::{BitRead, BitWrite};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A code that can write and read values of type [`Value`](Codec::Value)
/// on bit streams.
pub trait Codec {
    type Value: Copy;

    /// Write `value` and return the number of bits written.
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: Self::Value) -> Result<usize>;

    /// Read a value.
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<Self::Value>;

    /// Return the number of bits [`write`](Codec::write) would write for
    /// `value`, or `None` if `value` is not encodable with this code.
    fn len(&self, value: Self::Value) -> Option<usize>;
}

impl<C: Codec + ?Sized> Codec for &C {
    type Value = C::Value;

    #[inline(always)]
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: Self::Value) -> Result<usize> {
        (**self).write(writer, value)
    }

    #[inline(always)]
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<Self::Value> {
        (**self).read(reader)
    }

    #[inline(always)]
    fn len(&self, value: Self::Value) -> Option<usize> {
        (**self).len(value)
    }
}

/// An enum whose variants represent all the available codes.
///
/// Both [`Display`](core::fmt::Display) and [`FromStr`](core::str::FromStr)
/// are implemented for this enum in a dual way, which makes it possible to
/// store a code as a string in a configuration file, and then parse it back.
///
/// Variants with parameters can be built directly, but parameters are checked
/// only by [`Code::vlq`] and [`Code::thompson_alpha`]: an invalid parameter
/// otherwise surfaces as [`CodecError::InvalidArgument`] at the first read or
/// write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Code {
    Vlq { group_bits: usize },
    Gamma,
    Delta,
    Omega,
    Fibonacci,
    ThompsonAlpha { prefix_bits: usize },
}

impl Code {
    /// Return a VLQ code with groups of `group_bits` bits, which must be in
    /// [1..64].
    pub fn vlq(group_bits: usize) -> Result<Self> {
        if group_bits == 0 || group_bits > 64 {
            return Err(CodecError::InvalidArgument(
                "VLQ group size must be in [1..64]",
            ));
        }
        Ok(Code::Vlq { group_bits })
    }

    /// Return a VLQ code with groups of
    /// [`DEFAULT_VLQ_GROUP_BITS`] bits (i.e., LEB128 with bits in
    /// big-endian order).
    pub const fn vlq_default() -> Self {
        Code::Vlq {
            group_bits: DEFAULT_VLQ_GROUP_BITS,
        }
    }

    /// Return a Thompson-Alpha code with a length prefix of `prefix_bits`
    /// bits, which must be in [1..32].
    pub fn thompson_alpha(prefix_bits: usize) -> Result<Self> {
        if prefix_bits == 0 || prefix_bits > 32 {
            return Err(CodecError::InvalidArgument(
                "Thompson-Alpha prefix width must be in [1..32]",
            ));
        }
        Ok(Code::ThompsonAlpha { prefix_bits })
    }

    /// Return a Thompson-Alpha code with a length prefix of
    /// [`DEFAULT_THOMPSON_ALPHA_PREFIX_BITS`] bits.
    pub const fn thompson_alpha_default() -> Self {
        Code::ThompsonAlpha {
            prefix_bits: DEFAULT_THOMPSON_ALPHA_PREFIX_BITS,
        }
    }

    /// Return the name of the code, without parameters.
    pub const fn name(&self) -> &'static str {
        match self {
            Code::Vlq { .. } => "Vlq",
            Code::Gamma => "Gamma",
            Code::Delta => "Delta",
            Code::Omega => "Omega",
            Code::Fibonacci => "Fibonacci",
            Code::ThompsonAlpha { .. } => "ThompsonAlpha",
        }
    }
}

impl Codec for Code {
    type Value = u64;

    #[inline]
    fn write<W: BitWrite + ?Sized>(&self, writer: &mut W, value: u64) -> Result<usize> {
        match *self {
            Code::Vlq { group_bits } => writer.write_vlq(value, group_bits),
            Code::Gamma => writer.write_gamma(value),
            Code::Delta => writer.write_delta(value),
            Code::Omega => writer.write_omega(value),
            Code::Fibonacci => writer.write_fibonacci(value),
            Code::ThompsonAlpha { prefix_bits } => writer.write_thompson_alpha(value, prefix_bits),
        }
    }

    #[inline]
    fn read<R: BitRead + ?Sized>(&self, reader: &mut R) -> Result<u64> {
        match *self {
            Code::Vlq { group_bits } => reader.read_vlq(group_bits),
            Code::Gamma => reader.read_gamma(),
            Code::Delta => reader.read_delta(),
            Code::Omega => reader.read_omega(),
            Code::Fibonacci => reader.read_fibonacci(),
            Code::ThompsonAlpha { prefix_bits } => reader.read_thompson_alpha(prefix_bits),
        }
    }

    #[inline]
    fn len(&self, value: u64) -> Option<usize> {
        match *self {
            Code::Vlq { group_bits } => len_vlq(value, group_bits),
            Code::Gamma => Some(len_gamma(value)),
            Code::Delta => Some(len_delta(value)),
            Code::Omega => Some(len_omega(value)),
            Code::Fibonacci => Some(len_fibonacci(value)),
            Code::ThompsonAlpha { prefix_bits } => len_thompson_alpha(value, prefix_bits),
        }
    }
}

impl core::fmt::Display for Code {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Code::Vlq { group_bits } => write!(f, "Vlq({})", group_bits),
            Code::ThompsonAlpha { prefix_bits } => write!(f, "ThompsonAlpha({})", prefix_bits),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(feature = "alloc")]
impl core::str::FromStr for Code {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || CodecError::ParseCode(alloc::string::String::from(s));
        match s.trim() {
            "Vlq" => Ok(Code::vlq_default()),
            "Gamma" => Ok(Code::Gamma),
            "Delta" => Ok(Code::Delta),
            "Omega" => Ok(Code::Omega),
            "Fibonacci" => Ok(Code::Fibonacci),
            "ThompsonAlpha" => Ok(Code::thompson_alpha_default()),
            s => {
                let (name, arg) = s.split_once('(').ok_or_else(parse_error)?;
                let arg = arg
                    .strip_suffix(')')
                    .ok_or_else(parse_error)?
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| parse_error())?;
                match name.trim() {
                    "Vlq" => Code::vlq(arg),
                    "ThompsonAlpha" => Code::thompson_alpha(arg),
                    _ => Err(parse_error()),
                }
            }
        }
    }
}
