use radix64::{ChecksumFormat, crc24_from_bytes, crc24_to_bytes, decode_to_vec, encode_to_string};
use std::fmt;

/// Renders a CRC24 value in the requested format.
pub fn format_checksum(crc: u32, format: ChecksumFormat) -> String {
    match format {
        ChecksumFormat::Hex => hex::encode(crc24_to_bytes(crc)),
        ChecksumFormat::Radix64 => encode_to_string(&crc24_to_bytes(crc)),
        ChecksumFormat::Decimal => crc.to_string(),
    }
}

/// Parses an expected checksum: 6 hex digits (optionally `0x`-prefixed) or
/// 4 Radix-64 characters (optionally `=`-prefixed, as in armor checksum lines).
pub fn parse_expected(value: &str) -> Result<u32, String> {
    let value = value.trim();
    let invalid = || {
        format!(
            "Invalid checksum '{}': expected 6 hex digits or 4 Radix-64 characters",
            value
        )
    };

    let hex_part = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let radix_part = value.strip_prefix('=').unwrap_or(value);

    let bytes = if hex_part.len() == 6 && hex_part.bytes().all(|b| b.is_ascii_hexdigit()) {
        hex::decode(hex_part).map_err(|_| invalid())?
    } else if radix_part.len() == 4 {
        decode_to_vec(radix_part).map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };

    match bytes.as_slice() {
        &[a, b, c] => Ok(crc24_from_bytes([a, b, c])),
        _ => Err(invalid()),
    }
}

/// Decoded data did not match the expected checksum.
#[derive(Debug)]
pub struct ChecksumMismatch {
    pub expected: u32,
    pub actual: u32,
}

impl fmt::Display for ChecksumMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: CRC24 mismatch")?;
        writeln!(f)?;
        writeln!(f, "  expected {:06x}, computed {:06x}", self.expected, self.actual)?;
        writeln!(f)?;
        write!(f, "hint: the encoded text was corrupted or truncated in transit")
    }
}

impl std::error::Error for ChecksumMismatch {}

/// Fails with [`ChecksumMismatch`] unless `actual` equals `expected`.
pub fn verify(expected: u32, actual: u32) -> Result<(), ChecksumMismatch> {
    if expected != actual {
        return Err(ChecksumMismatch { expected, actual });
    }
    tracing::info!("CRC24 verified: {:06x}", actual);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_checksum() {
        assert_eq!(format_checksum(0xB704CE, ChecksumFormat::Hex), "b704ce");
        assert_eq!(format_checksum(0xB704CE, ChecksumFormat::Radix64), "twTO");
        assert_eq!(format_checksum(0xB704CE, ChecksumFormat::Decimal), "11994318");
        assert_eq!(format_checksum(0x0000FF, ChecksumFormat::Hex), "0000ff");
    }

    #[test]
    fn test_parse_expected_forms() {
        assert_eq!(parse_expected("b704ce").unwrap(), 0xB704CE);
        assert_eq!(parse_expected("0xB704CE").unwrap(), 0xB704CE);
        assert_eq!(parse_expected("twTO").unwrap(), 0xB704CE);
        assert_eq!(parse_expected("=twTO").unwrap(), 0xB704CE);
        assert_eq!(parse_expected(" b704ce\n").unwrap(), 0xB704CE);
    }

    #[test]
    fn test_parse_expected_rejects_garbage() {
        for bad in ["", "b704c", "b704cez", "tw==", "tw!O", "12345678"] {
            assert!(parse_expected(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_verify() {
        assert!(verify(0xB704CE, 0xB704CE).is_ok());

        let mismatch = verify(0xB704CE, 0x123456).unwrap_err();
        assert_eq!(mismatch.actual, 0x123456);
        assert!(mismatch.to_string().contains("expected b704ce, computed 123456"));
    }
}
