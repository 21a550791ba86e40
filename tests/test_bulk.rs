/*
 * SPDX-FileCopyrightText: 2026 The universal-codes authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::io::Cursor;
use universal_codes::prelude::*;

type TestResult = Result<(), Box<dyn Error + Send + Sync + 'static>>;

const CODES: [Code; 8] = [
    Code::vlq_default(),
    Code::Vlq { group_bits: 3 },
    Code::Gamma,
    Code::Delta,
    Code::Omega,
    Code::Fibonacci,
    Code::thompson_alpha_default(),
    Code::ThompsonAlpha { prefix_bits: 7 },
];

/// Return the largest value encodable by `code`.
fn max_value(code: Code) -> u64 {
    match code {
        Code::ThompsonAlpha { prefix_bits: 6 } => (1 << 63) - 2,
        _ => u64::MAX,
    }
}

#[test]
fn test_worked_examples() -> TestResult {
    let mut bytes = Vec::new();
    Code::vlq_default().encode_single(MemByteWriterVec::new(&mut bytes), 300)?;
    assert_eq!(bytes, [0xAC, 0x02]);

    // 00110 padded
    let mut bytes = Vec::new();
    assert_eq!(Code::Gamma.encode_single(MemByteWriterVec::new(&mut bytes), 5)?, 5);
    assert_eq!(bytes, [0b0011_0000]);

    // 4 + 1 = F₅, lowest index first, then the terminating 1
    let mut bytes = Vec::new();
    assert_eq!(Code::Fibonacci.encode_single(MemByteWriterVec::new(&mut bytes), 4)?, 5);
    assert_eq!(bytes, [0b0001_1000]);
    assert_eq!(Code::Fibonacci.decode_single(MemByteReader::new(&bytes))?, 4);
    Ok(())
}

#[test]
fn test_bulk_equivalence() -> TestResult {
    let mut r = SmallRng::seed_from_u64(0);
    for code in CODES {
        let max = max_value(code);
        let mut values = vec![0, max, 0, 1, max - 1, max, 0];
        for _ in 0..1000 {
            // uniform in the number of bits
            let bits: u32 = r.random_range(0..=64);
            values.push(r.random::<u64>() >> (64 - bits).min(63) & max);
        }

        let mut bytes = Vec::new();
        let bits = code.encode_many(MemByteWriterVec::new(&mut bytes), &values, 0, values.len())?;
        let expected: u32 = values
            .iter()
            .map(|&v| code.calculate_encoded_bits(v).unwrap())
            .sum();
        assert_eq!(bits as u32, expected, "{code}");
        assert_eq!(bytes.len(), bits.div_ceil(8), "{code}");

        let mut decoded = vec![0; values.len()];
        code.decode_many(MemByteReader::new(&bytes), &mut decoded, 0, values.len())?;
        assert_eq!(decoded, values, "{code}");

        let decoded: Vec<u64> = code
            .decoder(MemByteReader::new(&bytes), values.len())
            .collect::<Result<_>>()?;
        assert_eq!(decoded, values, "{code}");
    }
    Ok(())
}

#[test]
fn test_signed_bijection() -> TestResult {
    let mut values: Vec<i64> = (-5000..5000).collect();
    values.extend([i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX]);
    for code in [Code::vlq_default(), Code::Gamma, Code::Omega, Code::Fibonacci] {
        let code = Signed(code);
        let mut bytes = Vec::new();
        code.encode_many(MemByteWriterVec::new(&mut bytes), &values, 0, values.len())?;
        assert_eq!(code.decode_vec(MemByteReader::new(&bytes), values.len())?, values);
    }

    for x in -1000_i64..1000 {
        assert_eq!(x.to_nat().to_int(), x);
    }
    for n in 0_u64..2000 {
        assert_eq!(n.to_int().to_nat(), n);
    }
    Ok(())
}

#[test]
fn test_starvation() -> TestResult {
    let empty: &[u8] = &[];
    for code in CODES {
        assert!(
            matches!(
                code.decode_single(MemByteReader::new(empty)),
                Err(CodecError::EndOfInput { byte_pos: 0 })
            ),
            "{code}"
        );
        assert!(matches!(
            code.decode_vec(MemByteReader::new(empty), 1),
            Err(CodecError::InsufficientInput {
                decoded: 0,
                requested: 1,
                ..
            })
        ));
        assert!(code.decode_vec(MemByteReader::new(empty), 0)?.is_empty());
    }

    // zero padding after the last value
    for (code, count) in [
        (Code::thompson_alpha_default(), 3),
        (Code::ThompsonAlpha { prefix_bits: 3 }, 7),
    ] {
        let values = vec![0; count];
        let mut bytes = Vec::new();
        code.encode_many(MemByteWriterVec::new(&mut bytes), &values, 0, count)?;
        assert_eq!(bytes.len(), 3);
        let result = code.decode_vec(MemByteReader::new(&bytes), count + 1);
        assert!(
            matches!(
                result,
                Err(CodecError::InsufficientInput {
                    decoded,
                    requested,
                    byte_pos: 3,
                }) if decoded == count && requested == count + 1
            ),
            "{code}: {result:?}"
        );
    }

    // a truncated codeword
    for code in CODES {
        let mut bytes = Vec::new();
        code.encode_single(MemByteWriterVec::new(&mut bytes), 1 << 40)?;
        bytes.pop();
        let err = code.decode_single(MemByteReader::new(&bytes)).unwrap_err();
        assert!(err.is_end_of_input(), "{code}: {err}");
    }
    Ok(())
}

#[test]
fn test_fixed_sink() -> TestResult {
    let mut buffer = [0_u8; 4];
    let values = [1000, 2000, 3000];
    assert!(matches!(
        Code::vlq_default().encode_many(MemByteWriter::new(&mut buffer), &values, 0, 3),
        Err(CodecError::EndOfOutput { byte_pos: 4 })
    ));
    // the first two values fit
    assert_eq!(buffer, [0xE8, 0x07, 0xD0, 0x0F]);
    Ok(())
}

#[test]
fn test_io_adapter() -> TestResult {
    let values: Vec<u64> = (0..1000).map(|x| x * x * x).collect();
    for code in CODES {
        let mut cursor = Cursor::new(Vec::new());
        code.encode_many(ByteAdapter::new(&mut cursor), &values, 0, values.len())?;
        cursor.set_position(0);
        assert_eq!(
            code.decode_vec(ByteAdapter::new(&mut cursor), values.len())?,
            values
        );
    }
    Ok(())
}

#[test]
fn test_config() -> TestResult {
    for code in CODES {
        let parsed: Code = code.to_string().parse()?;
        assert_eq!(parsed, code);
        let json = serde_json::to_string(&code)?;
        assert_eq!(serde_json::from_str::<Code>(&json)?, code);
    }
    assert_eq!(serde_json::to_string(&Code::Gamma)?, "\"Gamma\"");
    assert_eq!(
        serde_json::to_string(&Code::vlq_default())?,
        r#"{"Vlq":{"group_bits":7}}"#
    );
    let signed: Signed<Code> = serde_json::from_str(r#""Omega""#)?;
    assert_eq!(signed, Signed(Code::Omega));
    Ok(())
}
