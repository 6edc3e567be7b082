//! Component E (assembly half): turns parsed trusted-setup bytes into the
//! immutable [`KzgSettings`] that every commitment, proof, and verification
//! call in [`crate::kzg`] is parameterized by.

use std::path::Path;

use crate::bit_reversal::bit_reverse_permute;
use crate::bls::g1::G1;
use crate::bls::g2::G2;
use crate::consts::{BYTES_PER_G1_POINT, BYTES_PER_G2_POINT, FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS_MIN};
use crate::error::{bad_args, Error};
use crate::fft::fft_g1;
use crate::fft_settings::FftSettings;
use crate::trusted_setup::{parse_trusted_setup, ParsedSetup};

/// Immutable, caller-owned trusted-setup parameters. Read-only for its
/// entire lifetime: every public function in this crate that takes
/// `&KzgSettings` is safe to call concurrently from multiple threads on the
/// same instance.
#[derive(Debug)]
pub struct KzgSettings {
    pub length: usize,
    /// Lagrange-basis powers of tau, indexed by the bit-reversed evaluation
    /// domain `fs.roots_of_unity` (not the natural order the IFFT produces):
    /// `g1_values[i] = L_k(tau) * G1` where `fs.roots_of_unity[i] = omega^k`.
    /// Every commitment/proof computation in [`crate::kzg`] treats
    /// `blob[i]` as the evaluation at `fs.roots_of_unity[i]`, so this array
    /// must be permuted into that same order before it's stored.
    pub g1_values: Vec<G1>,
    /// Monomial-basis powers of tau in G2; only indices 0 (`G2`) and 1
    /// (`[tau] G2`) are consumed by verification.
    pub g2_values: Vec<G2>,
    pub fs: FftSettings,
}

impl KzgSettings {
    pub fn load_trusted_setup_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::load_trusted_setup_str(&contents)
    }

    pub fn load_trusted_setup_str(contents: &str) -> Result<Self, Error> {
        let parsed = parse_trusted_setup(contents)?;
        Self::from_parsed(parsed)
    }

    /// Builds settings directly from concatenated compressed points, as if
    /// they had already been split out of the text format.
    pub fn load_trusted_setup_from_bytes(g1_bytes: &[u8], g2_bytes: &[u8]) -> Result<Self, Error> {
        if g1_bytes.len() % BYTES_PER_G1_POINT != 0 {
            return Err(bad_args("g1 byte buffer is not a multiple of 48"));
        }
        if g2_bytes.len() % BYTES_PER_G2_POINT != 0 {
            return Err(bad_args("g2 byte buffer is not a multiple of 96"));
        }
        let g1_compressed = g1_bytes
            .chunks_exact(BYTES_PER_G1_POINT)
            .map(|c| c.try_into().expect("chunk is exactly BYTES_PER_G1_POINT"))
            .collect();
        let g2_compressed = g2_bytes
            .chunks_exact(BYTES_PER_G2_POINT)
            .map(|c| c.try_into().expect("chunk is exactly BYTES_PER_G2_POINT"))
            .collect();
        Self::from_parsed(ParsedSetup {
            g1_compressed,
            g2_compressed,
        })
    }

    fn from_parsed(parsed: ParsedSetup) -> Result<Self, Error> {
        let n1 = parsed.g1_compressed.len();
        let n2 = parsed.g2_compressed.len();

        if n1 != FIELD_ELEMENTS_PER_BLOB {
            return Err(bad_args(format!(
                "expected {FIELD_ELEMENTS_PER_BLOB} g1 points, got {n1}"
            )));
        }
        if n2 < NUM_G2_POINTS_MIN {
            return Err(bad_args(format!(
                "expected at least {NUM_G2_POINTS_MIN} g2 points, got {n2}"
            )));
        }
        if !n1.is_power_of_two() {
            return Err(bad_args("FIELD_ELEMENTS_PER_BLOB must be a power of two"));
        }

        let monomial_g1: Vec<G1> = parsed
            .g1_compressed
            .iter()
            .map(G1::from_compressed)
            .collect::<Result<_, _>>()?;
        let g2_values: Vec<G2> = parsed
            .g2_compressed
            .iter()
            .map(G2::from_compressed)
            .collect::<Result<_, _>>()?;

        let max_scale = n1.trailing_zeros();
        let fs = FftSettings::new(max_scale)?;

        let mut lagrange_g1 = vec![G1::identity(); n1];
        fft_g1(&mut lagrange_g1, &monomial_g1, true, n1, &fs)?;
        // The IFFT above produces natural-order output (`lagrange_g1[k] =
        // L_k(tau)*G1` for domain point `omega^k`), but `fs.roots_of_unity`
        // is itself bit-reversal-permuted. Put `lagrange_g1` into that same
        // order so `g1_values[i]` lines up with `fs.roots_of_unity[i]`
        // everywhere `crate::kzg` indexes both by `i`.
        bit_reverse_permute(&mut lagrange_g1, n1)?;

        Ok(Self {
            length: n1,
            g1_values: lagrange_g1,
            g2_values,
            fs,
        })
    }

    pub fn field_elements_per_blob(&self) -> usize {
        self.length
    }

    /// `g2_values[1] = [tau] G2`, the only g2 power the verification
    /// equation consumes beyond the generator.
    pub(crate) fn tau_g2(&self) -> G2 {
        self.g2_values[1]
    }

    pub(crate) fn g2_generator(&self) -> G2 {
        self.g2_values[0]
    }
}

/// Drops `settings`. Rust's ownership model already frees a `KzgSettings`
/// when it goes out of scope; this exists so the API surface matches the
/// language-neutral `load_trusted_setup`/`free_trusted_setup` pair described
/// for bindings consuming this crate.
pub fn free_trusted_setup(settings: KzgSettings) {
    drop(settings);
}
