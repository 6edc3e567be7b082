//! Compile-time configuration surface (component G).
//!
//! `FIELD_ELEMENTS_PER_BLOB` is the single knob that determines blob size.
//! Everything else in this module is derived from it; there is no runtime
//! reconfiguration.

#[cfg(all(feature = "minimal-spec", feature = "mainnet-spec"))]
compile_error!("features `mainnet-spec` and `minimal-spec` are mutually exclusive");

#[cfg(feature = "minimal-spec")]
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4;

#[cfg(not(feature = "minimal-spec"))]
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PROOF: usize = 48;
pub const BYTES_PER_G1_POINT: usize = 48;
pub const BYTES_PER_G2_POINT: usize = 96;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// Minimum number of G2 points a trusted setup must carry; only the first two
/// (`G2` and `[tau] G2`) are used by verification, the rest are reserved for
/// multi-proof schemes outside this crate's scope.
pub const NUM_G2_POINTS_MIN: usize = 2;

/// Order of the BLS12-381 scalar field, decimal.
pub const BLS_MODULUS: &str =
    "52435875175126190479447740508185965837690552500527637822603658699938581184513";

/// Fixed 16-byte domain separation tag for the aggregated-proof Fiat-Shamir
/// challenge. Consensus-critical: every implementation must hash exactly
/// these bytes.
pub const FIAT_SHAMIR_DOMAIN: &[u8; 16] = b"FSBLOBVERIFY_V1_";

/// Second separator byte used to derive the evaluation challenge `z` from the
/// same transcript that produced `r`, so the two challenges are domain
/// separated from each other as well as from `r`.
pub const FIAT_SHAMIR_Z_SEPARATOR: u8 = b'Z';

/// Multiplicative generator of the BLS12-381 scalar field's 2-adic subgroup.
/// The standard choice used across the BLS12-381 FFT literature (zkcrypto's
/// `bls12_381`, arkworks, and this crate's reference implementation all agree
/// on it); every root of unity used by [`crate::fft_settings::FftSettings`]
/// is a power of this value.
pub const PRIMITIVE_ROOT_OF_UNITY: u64 = 7;

/// `log2` of the scalar field's 2-adicity: `q - 1 = 2^32 * odd`.
pub const MAX_ROOT_OF_UNITY_SCALE: u32 = 32;

/// Free-function form of the blob-size constant, matching the language-neutral
/// `get_field_elements_per_blob()` entry in the API surface table; equivalent
/// to [`crate::kzg_settings::KzgSettings::field_elements_per_blob`], which
/// exists as an instance method since no settings value is needed to know it.
pub const fn get_field_elements_per_blob() -> usize {
    FIELD_ELEMENTS_PER_BLOB
}
