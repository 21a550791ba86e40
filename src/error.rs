/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by byte adapters, bit streams, and codes.

/// Result alias used throughout the crate.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;

/// Errors returned while encoding or decoding.
///
/// Errors are never retried internally, and bits written before an error are
/// not rolled back.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    /// The byte source ended in the middle of a value.
    #[error("unexpected end of input at byte position {byte_pos}")]
    EndOfInput { byte_pos: u64 },

    /// A bulk decode could not produce the requested number of values.
    #[error("insufficient input: decoded {decoded} of {requested} values (input ended at byte position {byte_pos})")]
    InsufficientInput {
        decoded: usize,
        requested: usize,
        byte_pos: u64,
    },

    /// A fixed-capacity byte sink has no room left.
    #[error("no space left in output buffer at byte position {byte_pos}")]
    EndOfOutput { byte_pos: u64 },

    /// The value cannot be represented by the code under its parameters,
    /// or a decoded value does not fit in 64 bits.
    #[error("value {value} too large for {code}")]
    ValueTooLarge { value: u128, code: &'static str },

    /// The stream contains a bit pattern the code can never produce.
    #[error("malformed {code} code: {reason}")]
    Malformed {
        code: &'static str,
        reason: &'static str,
    },

    /// Invalid parameters, offsets, counts, or buffer bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A bounded decoder has already produced all of its values.
    #[error("decoder already produced all requested values")]
    AlreadyComplete,

    /// A textual code description could not be parsed.
    #[cfg(feature = "alloc")]
    #[error("cannot parse code description {0:?}")]
    ParseCode(alloc::string::String),

    /// The underlying transport failed.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Return true if the error signals that the input ended early.
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            CodecError::EndOfInput { .. } | CodecError::InsufficientInput { .. }
        )
    }
}
