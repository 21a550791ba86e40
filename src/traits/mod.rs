/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for byte and bit streams.

[`ByteRead`] and [`ByteWrite`] are the only capabilities codes need from
the outside world: one byte at a time, in either direction. [`BitRead`] and
[`BitWrite`] are implemented by the bit cursors in [`impls`](crate::impls)
on top of them, and are the traits over which all codes are written.

*/

mod byte_stream;
pub use byte_stream::*;

mod bit_stream;
pub use bit_stream::*;
