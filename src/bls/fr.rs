//! Scalar field (`Fr`) arithmetic, the first half of component A.
//!
//! Thin wrapper over `blst`'s field element. `Fr` is `Copy` and carries no
//! allocation; every operation here is a handful of FFI calls into blst.

use crate::consts::BYTES_PER_FIELD_ELEMENT;
use crate::error::{bad_args, Error};
use blst::{
    blst_fr, blst_fr_add, blst_fr_eucl_inverse, blst_fr_from_scalar, blst_fr_from_uint64,
    blst_fr_mul, blst_fr_sub, blst_lendian_from_scalar, blst_scalar,
    blst_scalar_fr_check, blst_scalar_from_fr, blst_scalar_from_lendian, blst_uint64_from_fr,
};

/// An element of the BLS12-381 scalar field.
#[derive(Clone, Copy)]
pub struct Fr(pub(crate) blst_fr);

impl Fr {
    pub fn zero() -> Self {
        Fr::from_u64(0)
    }

    pub fn one() -> Self {
        Fr::from_u64(1)
    }

    pub fn from_u64(v: u64) -> Self {
        let limbs = [v, 0, 0, 0];
        let mut out = blst_fr::default();
        unsafe { blst_fr_from_uint64(&mut out, limbs.as_ptr()) };
        Fr(out)
    }

    /// Parses a canonical, little-endian 32-byte scalar. Returns `BadArgs` if
    /// the encoding is `>= BLS_MODULUS`.
    pub fn from_bytes(bytes: &[u8; BYTES_PER_FIELD_ELEMENT]) -> Result<Self, Error> {
        let mut scalar = blst_scalar::default();
        unsafe { blst_scalar_from_lendian(&mut scalar, bytes.as_ptr()) };
        if !unsafe { blst_scalar_fr_check(&scalar) } {
            return Err(bad_args("field element is not canonical (>= BLS_MODULUS)"));
        }
        let mut fr = blst_fr::default();
        unsafe { blst_fr_from_scalar(&mut fr, &scalar) };
        Ok(Fr(fr))
    }

    pub fn to_bytes(self) -> [u8; BYTES_PER_FIELD_ELEMENT] {
        let mut scalar = blst_scalar::default();
        unsafe { blst_scalar_from_fr(&mut scalar, &self.0) };
        let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
        unsafe { blst_lendian_from_scalar(out.as_mut_ptr(), &scalar) };
        out
    }

    pub fn is_zero(self) -> bool {
        ct_eq(&self.to_bytes(), &[0u8; BYTES_PER_FIELD_ELEMENT])
    }

    pub fn is_one(self) -> bool {
        ct_eq(&self.to_bytes(), &Fr::one().to_bytes())
    }

    pub fn eq(self, other: Self) -> bool {
        ct_eq(&self.to_bytes(), &other.to_bytes())
    }

    pub fn add(self, other: Self) -> Self {
        let mut out = blst_fr::default();
        unsafe { blst_fr_add(&mut out, &self.0, &other.0) };
        Fr(out)
    }

    pub fn sub(self, other: Self) -> Self {
        let mut out = blst_fr::default();
        unsafe { blst_fr_sub(&mut out, &self.0, &other.0) };
        Fr(out)
    }

    pub fn mul(self, other: Self) -> Self {
        let mut out = blst_fr::default();
        unsafe { blst_fr_mul(&mut out, &self.0, &other.0) };
        Fr(out)
    }

    pub fn neg(self) -> Self {
        Fr::zero().sub(self)
    }

    /// Multiplicative inverse via blst's Euclidean (extended-GCD) inverse.
    /// Undefined for zero; callers must check `is_zero` first when zero is a
    /// reachable input (the FFT and barycentric-evaluation call sites in this
    /// crate never pass zero here).
    pub fn inv(self) -> Result<Self, Error> {
        if self.is_zero() {
            return Err(bad_args("cannot invert zero"));
        }
        let mut out = blst_fr::default();
        unsafe { blst_fr_eucl_inverse(&mut out, &self.0) };
        Ok(Fr(out))
    }

    /// `base^exp` by square-and-multiply. `exp` is small in every call site
    /// in this crate (blob index powers, `z^n`), so a 64-bit exponent is
    /// sufficient.
    pub fn pow(self, exp: u64) -> Self {
        pow_vartime(self, &[exp, 0, 0, 0])
    }

    /// Interprets a 32-byte buffer as an element of Fr via blst's
    /// Montgomery-form conversion, which reduces modulo `q` as a side effect
    /// of the conversion rather than rejecting out-of-range input. Used only
    /// for Fiat-Shamir challenge derivation, where the input is a hash
    /// digest rather than caller-supplied field-element encoding and must
    /// never be rejected for being `>= q`.
    pub(crate) fn from_hash(bytes: &[u8; BYTES_PER_FIELD_ELEMENT]) -> Self {
        let mut scalar = blst_scalar::default();
        unsafe { blst_scalar_from_lendian(&mut scalar, bytes.as_ptr()) };
        let mut fr = blst_fr::default();
        unsafe { blst_fr_from_scalar(&mut fr, &scalar) };
        Fr(fr)
    }

    pub(crate) fn to_limbs(self) -> [u64; 4] {
        let mut limbs = [0u64; 4];
        unsafe { blst_uint64_from_fr(limbs.as_mut_ptr(), &self.0) };
        limbs
    }
}

/// Square-and-multiply over a little-endian limb array, MSB-first bit order.
/// Used for `Fr::pow` and for deriving roots of unity from the field's
/// 2-adic generator in [`crate::fft_settings`].
pub(crate) fn pow_vartime(base: Fr, exp_limbs: &[u64; 4]) -> Fr {
    let mut result = Fr::one();
    let mut seen_bit = false;
    for limb_idx in (0..4).rev() {
        let limb = exp_limbs[limb_idx];
        for bit_idx in (0..64).rev() {
            if seen_bit {
                result = result.mul(result);
            }
            if (limb >> bit_idx) & 1 == 1 {
                seen_bit = true;
                result = result.mul(base);
            }
        }
    }
    result
}

/// Manual constant-time-shaped byte comparison. Not a meaningful security
/// boundary here (this crate never handles secret scalars: see [`crate::Error`]
/// and the design notes on the variable-width multiply optimization in
/// `g1::mul`), kept simple to avoid a short-circuiting `==` on secret-shaped
/// data in case this type is reused somewhere that does.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl std::fmt::Debug for Fr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fr(0x{})", hex::encode(self.to_bytes()))
    }
}
