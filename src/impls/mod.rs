/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of byte and bit streams.

If you need to read or write bytes from a file or any backend implementing
[`std::io::Read`] or [`std::io::Write`] you just need to wrap it in a
[`ByteAdapter`].

If instead you want to read or write directly from memory, you can use
[`MemByteReader`], [`MemByteWriter`] (fixed capacity), or
[`MemByteWriterVec`] (growable).

Once you have a way to access bytes, you can use [`BufBitReader`] and
[`BufBitWriter`] to read or write bits, most significant bit of each byte
first. The bulk methods of [`Bulk`](crate::codes::Bulk) create these bit
cursors for you.

*/

mod mem_byte_reader;
pub use mem_byte_reader::*;

mod mem_byte_writer;
pub use mem_byte_writer::*;

#[cfg(feature = "std")]
mod byte_adapter;
#[cfg(feature = "std")]
pub use byte_adapter::*;

mod buf_bit_reader;
pub use buf_bit_reader::BufBitReader;

mod buf_bit_writer;
pub use buf_bit_writer::BufBitWriter;
