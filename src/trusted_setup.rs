//! Component E (parsing half): reads the whitespace-separated trusted-setup
//! text format into raw compressed-point byte chunks. Decompression, the FFT
//! to Lagrange basis, and everything else component E does with those bytes
//! lives in [`crate::kzg_settings`].

use crate::consts::{BYTES_PER_G1_POINT, BYTES_PER_G2_POINT};
use crate::error::{bad_args, Error};

pub struct ParsedSetup {
    pub g1_compressed: Vec<[u8; BYTES_PER_G1_POINT]>,
    pub g2_compressed: Vec<[u8; BYTES_PER_G2_POINT]>,
}

/// Parses the trusted-setup text format:
///
/// ```text
/// <n1>
/// <n2>
/// <n1 * 48 hex bytes, pair per G1>
/// <n2 * 96 hex bytes, pair per G2>
/// ```
///
/// Whitespace between tokens (including inside the hex blocks) is permitted
/// and ignored; this crate concatenates every whitespace-separated token
/// after `n1`/`n2` before hex-decoding, so both "one point per line" and
/// "one byte per token" encodings of the same file parse identically.
pub fn parse_trusted_setup(contents: &str) -> Result<ParsedSetup, Error> {
    let mut tokens = contents.split_whitespace();

    let n1: usize = tokens
        .next()
        .ok_or_else(|| bad_args("trusted setup: missing n1"))?
        .parse()
        .map_err(|_| bad_args("trusted setup: n1 is not a valid integer"))?;
    let n2: usize = tokens
        .next()
        .ok_or_else(|| bad_args("trusted setup: missing n2"))?
        .parse()
        .map_err(|_| bad_args("trusted setup: n2 is not a valid integer"))?;

    let hex_blob: String = tokens.collect();
    let bytes = hex::decode(hex_blob.as_bytes())
        .map_err(|e| bad_args(format!("trusted setup: invalid hex: {e}")))?;

    let expected_len = n1 * BYTES_PER_G1_POINT + n2 * BYTES_PER_G2_POINT;
    if bytes.len() != expected_len {
        return Err(bad_args(format!(
            "trusted setup: expected {expected_len} point bytes for n1={n1}, n2={n2}, got {}",
            bytes.len()
        )));
    }

    let (g1_bytes, g2_bytes) = bytes.split_at(n1 * BYTES_PER_G1_POINT);

    let g1_compressed = g1_bytes
        .chunks_exact(BYTES_PER_G1_POINT)
        .map(|c| c.try_into().expect("chunk is exactly BYTES_PER_G1_POINT"))
        .collect();
    let g2_compressed = g2_bytes
        .chunks_exact(BYTES_PER_G2_POINT)
        .map(|c| c.try_into().expect("chunk is exactly BYTES_PER_G2_POINT"))
        .collect();

    Ok(ParsedSetup {
        g1_compressed,
        g2_compressed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_truncated_byte_stream() {
        let text = "1\n2\nabcd";
        assert!(parse_trusted_setup(text).is_err());
    }

    #[test]
    fn rejects_non_integer_counts() {
        let text = "four\n2\n";
        assert!(parse_trusted_setup(text).is_err());
    }

    #[test]
    fn accepts_whitespace_split_across_lines() {
        let g1 = "c0".to_string() + &"00".repeat(47);
        let g2 = "c0".to_string() + &"00".repeat(95);
        let text = format!("1\n2\n{g1}\n{g2}\n{g2}\n");
        let parsed = parse_trusted_setup(&text).unwrap();
        assert_eq!(parsed.g1_compressed.len(), 1);
        assert_eq!(parsed.g2_compressed.len(), 2);
    }
}
