//! G1 group arithmetic, the second half of component A, plus the
//! multi-scalar-multiplication primitive (`lincomb`) component F leans on for
//! every commitment and proof.

use super::fr::Fr;
use crate::consts::BYTES_PER_G1_POINT;
use crate::error::{bad_args, Error};
use blst::{
    blst_p1, blst_p1_add_or_double, blst_p1_affine, blst_p1_affine_compress,
    blst_p1_affine_in_g1, blst_p1_affine_on_curve, blst_p1_cneg, blst_p1_deserialize,
    blst_p1_from_affine, blst_p1_is_inf, blst_p1_mult, blst_p1_to_affine,
    blst_p1s_mult_pippenger, blst_p1s_mult_pippenger_scratch_sizeof, BLST_ERROR,
};

/// A point on the BLS12-381 G1 curve, held internally in Jacobian/projective
/// form so chained additions during the FFT and MSM don't pay for an affine
/// normalization at every step.
#[derive(Clone, Copy)]
pub struct G1(pub(crate) blst_p1);

/// Below this many terms, a sequential multiply-then-add loop outruns the
/// setup cost of Pippenger's bucket method.
const PIPPENGER_MIN_POINTS: usize = 8;

impl G1 {
    pub fn identity() -> Self {
        G1(blst_p1::default())
    }

    pub fn generator() -> Self {
        Self::from_affine(&unsafe { blst::BLS12_381_G1 })
    }

    fn from_affine(a: &blst_p1_affine) -> Self {
        let mut out = blst_p1::default();
        unsafe { blst_p1_from_affine(&mut out, a) };
        G1(out)
    }

    pub(crate) fn to_affine(self) -> blst_p1_affine {
        let mut out = blst_p1_affine::default();
        unsafe { blst_p1_to_affine(&mut out, &self.0) };
        out
    }

    pub fn is_identity(self) -> bool {
        unsafe { blst_p1_is_inf(&self.0) }
    }

    pub fn add_or_double(self, other: Self) -> Self {
        let mut out = blst_p1::default();
        unsafe { blst_p1_add_or_double(&mut out, &self.0, &other.0) };
        G1(out)
    }

    pub fn neg(self) -> Self {
        let mut p = self.0;
        unsafe { blst_p1_cneg(&mut p, true) };
        G1(p)
    }

    pub fn sub(self, other: Self) -> Self {
        self.add_or_double(other.neg())
    }

    /// Scalar multiplication, fast-pathed for the two values the FFT's inner
    /// loop sees constantly: `0` (identity) and `1` (no-op). Anything else
    /// goes through blst's variable-width multiply, bounded to the scalar's
    /// actual bit length rather than the field's full 255 bits. This is a
    /// deliberate non-constant-time optimization; see the crate-level design
    /// notes before reusing it on secret scalars.
    pub fn mul(self, scalar: Fr) -> Self {
        if scalar.is_zero() {
            return G1::identity();
        }
        if scalar.is_one() {
            return self;
        }
        let bytes = scalar.to_bytes();
        let nbits = scalar_bit_length(&bytes);
        let mut out = blst_p1::default();
        unsafe { blst_p1_mult(&mut out, &self.0, bytes.as_ptr(), nbits) };
        G1(out)
    }

    pub fn from_compressed(bytes: &[u8; BYTES_PER_G1_POINT]) -> Result<Self, Error> {
        let mut affine = blst_p1_affine::default();
        let res = unsafe { blst_p1_deserialize(&mut affine, bytes.as_ptr()) };
        if res != BLST_ERROR::BLST_SUCCESS {
            return Err(bad_args("invalid G1 compressed encoding"));
        }
        if !unsafe { blst_p1_affine_on_curve(&affine) } {
            return Err(bad_args("G1 point is not on the curve"));
        }
        if !unsafe { blst_p1_affine_in_g1(&affine) } {
            return Err(bad_args("G1 point is not in the prime-order subgroup"));
        }
        Ok(Self::from_affine(&affine))
    }

    pub fn to_compressed(self) -> [u8; BYTES_PER_G1_POINT] {
        let affine = self.to_affine();
        let mut out = [0u8; BYTES_PER_G1_POINT];
        unsafe { blst_p1_affine_compress(out.as_mut_ptr(), &affine) };
        out
    }

    /// `sum_i scalars[i] * points[i]`. Naive for small batches, Pippenger's
    /// bucket method (via blst's implementation) otherwise.
    pub fn lincomb(points: &[G1], scalars: &[Fr]) -> Result<Self, Error> {
        if points.len() != scalars.len() {
            return Err(bad_args("lincomb: points and scalars length mismatch"));
        }
        if points.is_empty() {
            return Ok(G1::identity());
        }
        if points.len() <= PIPPENGER_MIN_POINTS {
            return Ok(points
                .iter()
                .zip(scalars.iter())
                .fold(G1::identity(), |acc, (p, s)| acc.add_or_double(p.mul(*s))));
        }
        Ok(pippenger(points, scalars))
    }
}

fn pippenger(points: &[G1], scalars: &[Fr]) -> G1 {
    let n = points.len();
    let affines: Vec<blst_p1_affine> = points.iter().map(|p| p.to_affine()).collect();
    let point_ptrs: Vec<*const blst_p1_affine> = affines.iter().map(|a| a as *const _).collect();
    let scalar_bytes: Vec<[u8; 32]> = scalars.iter().map(|s| s.to_bytes()).collect();
    let scalar_ptrs: Vec<*const u8> = scalar_bytes.iter().map(|b| b.as_ptr()).collect();

    let scratch_bytes = unsafe { blst_p1s_mult_pippenger_scratch_sizeof(n) };
    let mut scratch: Vec<u64> = vec![0u64; scratch_bytes / core::mem::size_of::<u64>() + 1];

    let mut out = blst_p1::default();
    unsafe {
        blst_p1s_mult_pippenger(
            &mut out,
            point_ptrs.as_ptr(),
            n,
            scalar_ptrs.as_ptr(),
            255,
            scratch.as_mut_ptr(),
        );
    }
    G1(out)
}

/// Position of the highest set bit, plus one; `0` for an all-zero scalar.
fn scalar_bit_length(bytes_le: &[u8; 32]) -> usize {
    for i in (0..32).rev() {
        if bytes_le[i] != 0 {
            let bit_in_byte = 7 - bytes_le[i].leading_zeros() as usize;
            return i * 8 + bit_in_byte + 1;
        }
    }
    0
}

impl std::fmt::Debug for G1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G1(0x{})", hex::encode(self.to_compressed()))
    }
}
