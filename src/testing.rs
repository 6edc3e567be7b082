//! Deterministic trusted-setup generation for tests and benchmarks.
//!
//! A real trusted setup's secret `tau` must never be known to anyone; this
//! module picks one, in the open, from a caller-supplied seed. **Settings
//! built here must never be used for anything but local tests** — generating
//! the ceremony itself is explicitly out of scope for this crate (see
//! `SPEC_FULL.md`), and this is not that ceremony, just enough algebra to
//! exercise the commitment and proof code without a multi-gigabyte fixture
//! file checked into the repository.

use crate::bls::fr::Fr;
use crate::bls::g1::G1;
use crate::bls::g2::G2;
use crate::consts::FIELD_ELEMENTS_PER_BLOB;
use crate::error::Error;
use crate::kzg_settings::KzgSettings;

/// Builds a `FIELD_ELEMENTS_PER_BLOB`-sized trusted setup for a known,
/// insecure `tau`, routed through the same compressed-bytes loading path
/// [`KzgSettings::load_trusted_setup_from_bytes`] uses in production so the
/// decompression and inverse-FFT code is exercised identically either way.
pub fn generate_toy_trusted_setup(tau: u64) -> KzgSettings {
    try_generate_toy_trusted_setup(tau).expect("toy trusted setup generation is infallible")
}

fn try_generate_toy_trusted_setup(tau: u64) -> Result<KzgSettings, Error> {
    let tau = Fr::from_u64(tau);
    let g1_gen = G1::generator();
    let g2_gen = G2::generator();

    let mut g1_bytes = Vec::with_capacity(FIELD_ELEMENTS_PER_BLOB * 48);
    let mut power = Fr::one();
    for _ in 0..FIELD_ELEMENTS_PER_BLOB {
        g1_bytes.extend_from_slice(&g1_gen.mul(power).to_compressed());
        power = power.mul(tau);
    }

    let mut g2_bytes = Vec::with_capacity(2 * 96);
    g2_bytes.extend_from_slice(&g2_gen.to_compressed());
    g2_bytes.extend_from_slice(&g2_gen.mul(tau).to_compressed());

    KzgSettings::load_trusted_setup_from_bytes(&g1_bytes, &g2_bytes)
}
