//! G2 group arithmetic. Only used for the trusted setup's two verification
//! points (`G2` and `[tau] G2`) and the `X_minus_z` term in proof
//! verification, so its surface is smaller than G1's.

use super::fr::Fr;
use crate::consts::BYTES_PER_G2_POINT;
use crate::error::{bad_args, Error};
use blst::{
    blst_p2, blst_p2_add_or_double, blst_p2_affine, blst_p2_affine_compress,
    blst_p2_affine_in_g2, blst_p2_affine_on_curve, blst_p2_cneg, blst_p2_deserialize,
    blst_p2_from_affine, blst_p2_mult, blst_p2_to_affine, BLST_ERROR,
};

#[derive(Clone, Copy)]
pub struct G2(pub(crate) blst_p2);

impl G2 {
    pub fn generator() -> Self {
        Self::from_affine(&unsafe { blst::BLS12_381_G2 })
    }

    pub(crate) fn from_affine(a: &blst_p2_affine) -> Self {
        let mut out = blst_p2::default();
        unsafe { blst_p2_from_affine(&mut out, a) };
        G2(out)
    }

    pub(crate) fn to_affine(self) -> blst_p2_affine {
        let mut out = blst_p2_affine::default();
        unsafe { blst_p2_to_affine(&mut out, &self.0) };
        out
    }

    pub fn add_or_double(self, other: Self) -> Self {
        let mut out = blst_p2::default();
        unsafe { blst_p2_add_or_double(&mut out, &self.0, &other.0) };
        G2(out)
    }

    pub fn neg(self) -> Self {
        let mut p = self.0;
        unsafe { blst_p2_cneg(&mut p, true) };
        G2(p)
    }

    pub fn sub(self, other: Self) -> Self {
        self.add_or_double(other.neg())
    }

    pub fn mul(self, scalar: Fr) -> Self {
        if scalar.is_zero() {
            return G2::from_affine(&blst_p2_affine::default());
        }
        if scalar.is_one() {
            return self;
        }
        let bytes = scalar.to_bytes();
        let mut out = blst_p2::default();
        unsafe { blst_p2_mult(&mut out, &self.0, bytes.as_ptr(), 255) };
        G2(out)
    }

    pub fn from_compressed(bytes: &[u8; BYTES_PER_G2_POINT]) -> Result<Self, Error> {
        let mut affine = blst_p2_affine::default();
        let res = unsafe { blst_p2_deserialize(&mut affine, bytes.as_ptr()) };
        if res != BLST_ERROR::BLST_SUCCESS {
            return Err(bad_args("invalid G2 compressed encoding"));
        }
        if !unsafe { blst_p2_affine_on_curve(&affine) } {
            return Err(bad_args("G2 point is not on the curve"));
        }
        if !unsafe { blst_p2_affine_in_g2(&affine) } {
            return Err(bad_args("G2 point is not in the prime-order subgroup"));
        }
        Ok(Self::from_affine(&affine))
    }

    pub fn to_compressed(self) -> [u8; BYTES_PER_G2_POINT] {
        let affine = self.to_affine();
        let mut out = [0u8; BYTES_PER_G2_POINT];
        unsafe { blst_p2_affine_compress(out.as_mut_ptr(), &affine) };
        out
    }
}

impl std::fmt::Debug for G2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "G2(0x{})", hex::encode(self.to_compressed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_roundtrips_through_compression() {
        let g = G2::generator();
        let bytes = g.to_compressed();
        let back = G2::from_compressed(&bytes).unwrap();
        assert_eq!(back.to_compressed(), bytes);
    }

    #[test]
    fn sub_self_is_identity_compressed() {
        let g = G2::generator();
        let zero = g.sub(g);
        assert_eq!(zero.to_compressed(), G2::from_affine(&blst_p2_affine::default()).to_compressed());
    }
}
