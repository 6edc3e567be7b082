//! Bilinear pairing check, the operation [`crate::kzg::verify_kzg_proof`]
//! ultimately reduces to.

use super::g1::G1;
use super::g2::G2;
use blst::{blst_fp12, blst_fp12_is_one, blst_fp12_mul, blst_final_exp, blst_miller_loop};

/// Returns `true` iff `e(a1, a2) * e(b1, b2)^-1 == 1`, i.e. `e(a1, a2) ==
/// e(b1, b2)`. Implemented by negating `a1` and checking the product of both
/// Miller loops collapses to one after the final exponentiation, which is
/// the standard trick for avoiding a costly inversion in `Gt`.
pub fn pairing_check(a1: G1, a2: G2, b1: G1, b2: G2) -> bool {
    let a1_affine = a1.neg().to_affine();
    let a2_affine = a2.to_affine();
    let b1_affine = b1.to_affine();
    let b2_affine = b2.to_affine();

    let mut ml_a = blst_fp12::default();
    let mut ml_b = blst_fp12::default();
    unsafe {
        blst_miller_loop(&mut ml_a, &a2_affine, &a1_affine);
        blst_miller_loop(&mut ml_b, &b2_affine, &b1_affine);
    }

    let mut product = blst_fp12::default();
    unsafe { blst_fp12_mul(&mut product, &ml_a, &ml_b) };

    let mut result = blst_fp12::default();
    unsafe { blst_final_exp(&mut result, &product) };

    unsafe { blst_fp12_is_one(&result) }
}
