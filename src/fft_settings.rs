//! Component D: precomputed forward, reverse, and bit-reversed roots of unity
//! for a given maximum scale.
//!
//! The reference implementation seeds these from a hard-coded
//! `SCALE2_ROOT_OF_UNITY` table, one entry per supported scale. This crate
//! derives the same values instead of transcribing the table by hand: every
//! entry is `PRIMITIVE_ROOT_OF_UNITY ^ ((q - 1) / 2^scale)`, which is exactly
//! how that table was generated in the first place (see `DESIGN.md`, Open
//! Question: SCALE2_ROOT_OF_UNITY). The derivation runs once per
//! `FftSettings::new` call and is cross-checked by the termination
//! invariant below.

use crate::bit_reversal::bit_reverse_permute;
use crate::bls::fr::{pow_vartime, Fr};
use crate::consts::{MAX_ROOT_OF_UNITY_SCALE, PRIMITIVE_ROOT_OF_UNITY};
use crate::error::{bad_args, internal, Error};

/// `q - 1`, little-endian 64-bit limbs. `q` is the BLS12-381 scalar field
/// modulus; `q - 1 = 2^32 * odd`, which is why 32 is this field's 2-adicity
/// and the ceiling on `max_scale`.
const Q_MINUS_1_LIMBS: [u64; 4] = [
    0xffffffff00000000,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

fn shr_limbs(limbs: [u64; 4], shift: u32) -> [u64; 4] {
    if shift == 0 {
        return limbs;
    }
    let limb_shift = (shift / 64) as usize;
    let bit_shift = shift % 64;
    let mut out = [0u64; 4];
    for i in 0..4 {
        let src_idx = i + limb_shift;
        if src_idx >= 4 {
            continue;
        }
        let mut val = limbs[src_idx] >> bit_shift;
        if bit_shift != 0 && src_idx + 1 < 4 {
            val |= limbs[src_idx + 1] << (64 - bit_shift);
        }
        out[i] = val;
    }
    out
}

fn root_of_unity_at_scale(scale: u32) -> Fr {
    let exponent = shr_limbs(Q_MINUS_1_LIMBS, scale);
    pow_vartime(Fr::from_u64(PRIMITIVE_ROOT_OF_UNITY), &exponent)
}

/// Forward, reverse, and bit-reversed roots of unity for a fixed maximum
/// width. Immutable once built.
#[derive(Debug, Clone)]
pub struct FftSettings {
    pub max_width: usize,
    /// `omega^0, omega^1, ..., omega^max_width`, length `max_width + 1`.
    pub expanded_roots_of_unity: Vec<Fr>,
    /// `expanded_roots_of_unity` reversed.
    pub reverse_roots_of_unity: Vec<Fr>,
    /// The first `max_width` entries of `expanded_roots_of_unity`, permuted
    /// into bit-reversed index order.
    pub roots_of_unity: Vec<Fr>,
}

impl FftSettings {
    pub fn new(max_scale: u32) -> Result<Self, Error> {
        if max_scale > MAX_ROOT_OF_UNITY_SCALE {
            return Err(bad_args(format!(
                "max_scale {max_scale} exceeds the root-of-unity table bound of {MAX_ROOT_OF_UNITY_SCALE}"
            )));
        }
        let max_width = 1usize << max_scale;
        let omega = root_of_unity_at_scale(max_scale);

        let mut expanded_roots_of_unity = Vec::with_capacity(max_width + 1);
        let mut current = Fr::one();
        expanded_roots_of_unity.push(current);
        for _ in 0..max_width {
            current = current.mul(omega);
            expanded_roots_of_unity.push(current);
        }

        if !expanded_roots_of_unity[max_width].is_one() {
            return Err(internal(
                "root-of-unity table did not return to 1 at max_width; table is corrupt",
            ));
        }
        for root in &expanded_roots_of_unity[1..max_width] {
            if root.is_one() {
                return Err(internal(
                    "root-of-unity table returned to 1 before max_width; table is corrupt",
                ));
            }
        }

        let mut reverse_roots_of_unity = expanded_roots_of_unity.clone();
        reverse_roots_of_unity.reverse();

        let mut roots_of_unity = expanded_roots_of_unity[0..max_width].to_vec();
        bit_reverse_permute(&mut roots_of_unity, max_width)?;

        Ok(Self {
            max_width,
            expanded_roots_of_unity,
            reverse_roots_of_unity,
            roots_of_unity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_roots_start_and_end_at_one() {
        let fs = FftSettings::new(4).unwrap();
        assert!(fs.expanded_roots_of_unity[0].is_one());
        assert!(fs.expanded_roots_of_unity[fs.max_width].is_one());
        for i in 1..fs.max_width {
            assert!(!fs.expanded_roots_of_unity[i].is_one());
        }
    }

    #[test]
    fn roots_of_unity_is_a_permutation() {
        let fs = FftSettings::new(4).unwrap();
        let mut expected: Vec<[u8; 32]> = fs.expanded_roots_of_unity[0..fs.max_width]
            .iter()
            .map(|r| r.to_bytes())
            .collect();
        let mut actual: Vec<[u8; 32]> = fs.roots_of_unity.iter().map(|r| r.to_bytes()).collect();
        expected.sort();
        actual.sort();
        assert_eq!(expected, actual);
    }

    #[test]
    fn every_root_raised_to_max_width_is_one() {
        let fs = FftSettings::new(5).unwrap();
        for root in &fs.roots_of_unity {
            assert!(root.pow(fs.max_width as u64).is_one());
        }
    }

    #[test]
    fn rejects_scale_beyond_table_bound() {
        assert!(FftSettings::new(MAX_ROOT_OF_UNITY_SCALE + 1).is_err());
    }
}
