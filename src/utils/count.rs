/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::Result;
use crate::traits::*;

/// Wrapping struct that keep tracks of written bits. Optionally, logs
/// at debug level the methods called.
#[derive(Debug, Clone)]
pub struct CountBitWrite<BW: BitWrite, const PRINT: bool = false> {
    bit_write: BW,
    /// The number of bits written so far on the underlying [`BitWrite`].
    pub bits_written: usize,
}

impl<BW: BitWrite, const PRINT: bool> CountBitWrite<BW, PRINT> {
    pub fn new(bit_write: BW) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> BW {
        self.bit_write
    }
}

impl<BW: BitWrite, const PRINT: bool> BitWrite for CountBitWrite<BW, PRINT> {
    fn write_bits(&mut self, value: u64, n_bits: usize) -> Result<usize> {
        self.bit_write.write_bits(value, n_bits).inspect(|x| {
            self.bits_written += x;
            if PRINT {
                tracing::debug!(
                    value = format_args!("{:#018x}", value),
                    n_bits,
                    total = self.bits_written,
                    "write_bits"
                );
            }
        })
    }

    fn write_unary(&mut self, value: u64) -> Result<usize> {
        self.bit_write.write_unary(value).inspect(|x| {
            self.bits_written += x;
            if PRINT {
                tracing::debug!(value, len = x, total = self.bits_written, "write_unary");
            }
        })
    }

    fn flush(&mut self) -> Result<usize> {
        self.bit_write.flush()
    }

    fn bit_pos(&self) -> u64 {
        self.bit_write.bit_pos()
    }
}

/// Wrapping struct that keep tracks of read bits. Optionally, logs
/// at debug level the methods called.
#[derive(Debug, Clone)]
pub struct CountBitRead<BR: BitRead, const PRINT: bool = false> {
    bit_read: BR,
    /// The number of bits read so far from the underlying [`BitRead`].
    pub bits_read: usize,
}

impl<BR: BitRead, const PRINT: bool> CountBitRead<BR, PRINT> {
    pub fn new(bit_read: BR) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> BR {
        self.bit_read
    }
}

impl<BR: BitRead, const PRINT: bool> BitRead for CountBitRead<BR, PRINT> {
    fn read_bit(&mut self) -> Result<bool> {
        self.bit_read.read_bit().inspect(|x| {
            self.bits_read += 1;
            if PRINT {
                tracing::debug!(bit = x, total = self.bits_read, "read_bit");
            }
        })
    }

    fn read_bits(&mut self, n_bits: usize) -> Result<u64> {
        self.bit_read.read_bits(n_bits).inspect(|x| {
            self.bits_read += n_bits;
            if PRINT {
                tracing::debug!(
                    n_bits,
                    value = format_args!("{:#018x}", x),
                    total = self.bits_read,
                    "read_bits"
                );
            }
        })
    }

    fn read_unary(&mut self) -> Result<u64> {
        self.bit_read.read_unary().inspect(|x| {
            self.bits_read += *x as usize + 1;
            if PRINT {
                tracing::debug!(value = x, total = self.bits_read, "read_unary");
            }
        })
    }

    fn bit_pos(&self) -> u64 {
        self.bit_read.bit_pos()
    }
}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_count() -> Result<()> {
        let mut buffer = Vec::new();
        let bit_write = BufBitWriter::new(MemByteWriterVec::new(&mut buffer));
        let mut count_bit_write = CountBitWrite::<_, true>::new(bit_write);

        count_bit_write.write_unary(5)?;
        assert_eq!(count_bit_write.bits_written, 6);
        count_bit_write.write_unary(100)?;
        assert_eq!(count_bit_write.bits_written, 107);
        count_bit_write.write_bits(1, 20)?;
        assert_eq!(count_bit_write.bits_written, 127);
        count_bit_write.write_bits(1, 33)?;
        assert_eq!(count_bit_write.bits_written, 160);
        count_bit_write.flush()?;
        drop(count_bit_write);

        let bit_read = BufBitReader::new(MemByteReader::new(&buffer));
        let mut count_bit_read = CountBitRead::<_, true>::new(bit_read);

        assert_eq!(count_bit_read.read_unary()?, 5);
        assert_eq!(count_bit_read.bits_read, 6);
        assert_eq!(count_bit_read.read_unary()?, 100);
        assert_eq!(count_bit_read.bits_read, 107);
        assert_eq!(count_bit_read.read_bits(20)?, 1);
        assert_eq!(count_bit_read.bits_read, 127);
        assert!(!count_bit_read.read_bit()?);
        assert_eq!(count_bit_read.read_bits(32)?, 1);
        assert_eq!(count_bit_read.bits_read, 160);
        assert_eq!(count_bit_read.bit_pos(), 160);

        Ok(())
    }
}
