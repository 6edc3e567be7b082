//! Component F: commitment, proof, and verification operations. Everything
//! upstream of this module (field/group arithmetic, the FFT, trusted-setup
//! loading) exists to make these five functions possible.

use sha2::{Digest, Sha256};

use crate::bls::fr::Fr;
use crate::bls::g1::G1;
use crate::bls::g2::G2;
use crate::bls::pairing::pairing_check;
use crate::blob::{Blob, Bytes32, KzgCommitment, KzgProof};
use crate::consts::{FIAT_SHAMIR_DOMAIN, FIAT_SHAMIR_Z_SEPARATOR, FIELD_ELEMENTS_PER_BLOB};
use crate::error::{bad_args, Error};
use crate::fft_settings::FftSettings;
use crate::kzg_settings::KzgSettings;

/// Deserializes every field element of `blob` into a canonical scalar,
/// rejecting the whole blob if any chunk is `>= BLS_MODULUS`.
fn blob_to_scalars(blob: &Blob) -> Result<Vec<Fr>, Error> {
    (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|i| Fr::from_bytes(&blob.field_element(i)))
        .collect()
}

/// The in-evaluation-form domain index matching `z`, if one exists, i.e. the
/// blob index `i` such that `D_i == z`. `FIELD_ELEMENTS_PER_BLOB` is a few
/// thousand at most, so a linear scan costs far less than the field
/// inversions the barycentric formula needs anyway.
fn find_domain_index(fs: &FftSettings, n: usize, z: Fr) -> Option<usize> {
    fs.roots_of_unity[..n].iter().position(|d| d.eq(z))
}

/// Evaluates a polynomial given in evaluation form (`poly[i]` is the value at
/// domain point `D_i`) at `z`, via direct lookup if `z` is itself a domain
/// point and the barycentric formula otherwise.
fn evaluate_in_evaluation_form(poly: &[Fr], z: Fr, fs: &FftSettings) -> Result<Fr, Error> {
    let n = poly.len();
    if let Some(m) = find_domain_index(fs, n, z) {
        return Ok(poly[m]);
    }
    let domain = &fs.roots_of_unity[..n];
    let z_pow_n = z.pow(n as u64);
    let coeff = z_pow_n.sub(Fr::one()).mul(Fr::from_u64(n as u64).inv()?);
    let mut sum = Fr::zero();
    for i in 0..n {
        let d_i = domain[i];
        sum = sum.add(poly[i].mul(d_i).mul(z.sub(d_i).inv()?));
    }
    Ok(coeff.mul(sum))
}

/// The quotient polynomial `q(X) = (p(X) - y) / (X - z)` in evaluation form,
/// given `y = p(z)` already computed. Domain points equal to `z` use
/// l'Hopital's rule in evaluation form (the sum below) instead of dividing by
/// zero.
fn compute_quotient(poly: &[Fr], y: Fr, z: Fr, fs: &FftSettings) -> Result<Vec<Fr>, Error> {
    let n = poly.len();
    let domain = &fs.roots_of_unity[..n];
    let m = find_domain_index(fs, n, z);
    let mut q = vec![Fr::zero(); n];
    for i in 0..n {
        if Some(i) == m {
            continue;
        }
        let d_i = domain[i];
        q[i] = poly[i].sub(y).mul(d_i.sub(z).inv()?);
    }
    if let Some(m) = m {
        let d_m = domain[m];
        let mut sum = Fr::zero();
        for i in 0..n {
            if i == m {
                continue;
            }
            let d_i = domain[i];
            sum = sum.add(poly[i].sub(y).mul(d_i).mul(d_m.mul(d_m.sub(d_i)).inv()?));
        }
        q[m] = sum;
    }
    Ok(q)
}

/// Commits `poly` (in evaluation form) and opens it at `z`, returning the
/// proof point and the evaluation `y = poly(z)`.
fn compute_proof_from_scalars(
    poly: &[Fr],
    z: Fr,
    settings: &KzgSettings,
) -> Result<(G1, Fr), Error> {
    let y = evaluate_in_evaluation_form(poly, z, &settings.fs)?;
    let q = compute_quotient(poly, y, z, &settings.fs)?;
    let proof_point = G1::lincomb(&settings.g1_values, &q)?;
    Ok((proof_point, y))
}

/// `sum_i r^i * (blob_i, commitment_i)`, the aggregated polynomial (in
/// evaluation form) and commitment a batch of blobs collapses to under a
/// single Fiat-Shamir challenge `r`.
fn aggregate_poly_and_commitment(
    blobs: &[Blob],
    commitments: &[KzgCommitment],
    r: Fr,
) -> Result<(Vec<Fr>, G1), Error> {
    let n = FIELD_ELEMENTS_PER_BLOB;
    let mut agg_poly = vec![Fr::zero(); n];
    let mut agg_commitment = G1::identity();
    let mut r_pow = Fr::one();
    for (blob, commitment) in blobs.iter().zip(commitments.iter()) {
        let scalars = blob_to_scalars(blob)?;
        for i in 0..n {
            agg_poly[i] = agg_poly[i].add(scalars[i].mul(r_pow));
        }
        let c_point = G1::from_compressed(&commitment.0)?;
        agg_commitment = agg_commitment.add_or_double(c_point.mul(r_pow));
        r_pow = r_pow.mul(r);
    }
    Ok((agg_poly, agg_commitment))
}

/// Derives the `(r, z)` Fiat-Shamir challenge pair for an aggregated proof
/// over `blobs`/`commitments`.
///
/// Transcript layout: `FIAT_SHAMIR_DOMAIN` (16 bytes) || `DEGREE_POLY` (8
/// bytes, little-endian, equal to `FIELD_ELEMENTS_PER_BLOB`) || `k` (8 bytes,
/// little-endian, the blob count) || every blob's bytes in order || every
/// commitment's bytes in order, hashed with SHA-256. `r` is that digest
/// interpreted as a field element; `z` is the digest of `r`'s digest followed
/// by `FIAT_SHAMIR_Z_SEPARATOR`, interpreted the same way. Both
/// interpretations reduce modulo `BLS_MODULUS` rather than rejecting
/// out-of-range hash output (see `Fr::from_hash`), since a challenge is never
/// caller-supplied encoding that needs a canonicality guarantee.
fn fiat_shamir_challenges(blobs: &[Blob], commitments: &[KzgCommitment]) -> (Fr, Fr) {
    let mut hasher = Sha256::new();
    hasher.update(FIAT_SHAMIR_DOMAIN);
    hasher.update((FIELD_ELEMENTS_PER_BLOB as u64).to_le_bytes());
    hasher.update((blobs.len() as u64).to_le_bytes());
    for blob in blobs {
        hasher.update(blob.as_slice());
    }
    for commitment in commitments {
        hasher.update(commitment.as_slice());
    }
    let digest: [u8; 32] = hasher.finalize().into();
    let r = Fr::from_hash(&digest);

    let mut z_hasher = Sha256::new();
    z_hasher.update(digest);
    z_hasher.update([FIAT_SHAMIR_Z_SEPARATOR]);
    let z_digest: [u8; 32] = z_hasher.finalize().into();
    let z = Fr::from_hash(&z_digest);

    (r, z)
}

/// Commits to a blob: `sum_i blob_i * L_i(tau) * G1`, the Lagrange-basis
/// linear combination [`KzgSettings`] precomputes `g1_values` for.
pub fn blob_to_kzg_commitment(blob: &Blob, settings: &KzgSettings) -> Result<KzgCommitment, Error> {
    let scalars = blob_to_scalars(blob)?;
    let commitment_point = G1::lincomb(&settings.g1_values, &scalars)?;
    Ok(KzgCommitment::from(commitment_point.to_compressed()))
}

/// Opens `blob` at the point `z`, returning the proof and the evaluation `y =
/// p(z)` the caller needs to pass to [`verify_kzg_proof`].
pub fn compute_kzg_proof(
    blob: &Blob,
    z_bytes: &Bytes32,
    settings: &KzgSettings,
) -> Result<(KzgProof, Bytes32), Error> {
    let scalars = blob_to_scalars(blob)?;
    let z = Fr::from_bytes(&z_bytes.0)?;
    let (proof_point, y) = compute_proof_from_scalars(&scalars, z, settings)?;
    Ok((
        KzgProof::from(proof_point.to_compressed()),
        Bytes32::from(y.to_bytes()),
    ))
}

/// Checks `proof` is a valid opening of `commitment` at `z` to `y`, via the
/// pairing equation `e(proof, [tau]G2 - [z]G2) == e(commitment - [y]G1, G2)`.
pub fn verify_kzg_proof(
    commitment: &KzgCommitment,
    z_bytes: &Bytes32,
    y_bytes: &Bytes32,
    proof: &KzgProof,
    settings: &KzgSettings,
) -> Result<bool, Error> {
    let commitment_point = G1::from_compressed(&commitment.0)?;
    let proof_point = G1::from_compressed(&proof.0)?;
    let z = Fr::from_bytes(&z_bytes.0)?;
    let y = Fr::from_bytes(&y_bytes.0)?;

    let x_minus_z: G2 = settings.tau_g2().sub(settings.g2_generator().mul(z));
    let p_minus_y = commitment_point.sub(G1::generator().mul(y));

    Ok(pairing_check(
        proof_point,
        x_minus_z,
        p_minus_y,
        settings.g2_generator(),
    ))
}

/// Commits and opens every blob in `blobs` at a single Fiat-Shamir-derived
/// point `z`, collapsing the batch into one proof via the aggregation
/// challenge `r`.
pub fn compute_aggregate_kzg_proof(
    blobs: &[Blob],
    settings: &KzgSettings,
) -> Result<KzgProof, Error> {
    if blobs.is_empty() {
        return Err(bad_args("compute_aggregate_kzg_proof: no blobs provided"));
    }
    let commitments: Vec<KzgCommitment> = blobs
        .iter()
        .map(|blob| blob_to_kzg_commitment(blob, settings))
        .collect::<Result<_, _>>()?;
    let (r, z) = fiat_shamir_challenges(blobs, &commitments);
    let (agg_poly, _agg_commitment) = aggregate_poly_and_commitment(blobs, &commitments, r)?;
    let (proof_point, _y) = compute_proof_from_scalars(&agg_poly, z, settings)?;
    Ok(KzgProof::from(proof_point.to_compressed()))
}

/// Verifies an aggregated proof produced by [`compute_aggregate_kzg_proof`]
/// for exactly `blobs`/`commitments`, in this order. Re-derives the
/// challenges and the aggregated commitment/evaluation independently rather
/// than trusting anything supplied by the caller beyond the blobs,
/// commitments, and proof bytes themselves.
pub fn verify_aggregate_kzg_proof(
    blobs: &[Blob],
    commitments: &[KzgCommitment],
    proof: &KzgProof,
    settings: &KzgSettings,
) -> Result<bool, Error> {
    if blobs.len() != commitments.len() {
        return Err(bad_args(
            "verify_aggregate_kzg_proof: blobs and commitments length mismatch",
        ));
    }
    if blobs.is_empty() {
        return Err(bad_args("verify_aggregate_kzg_proof: no blobs provided"));
    }
    let (r, z) = fiat_shamir_challenges(blobs, commitments);
    let (agg_poly, agg_commitment) = aggregate_poly_and_commitment(blobs, commitments, r)?;
    let y = evaluate_in_evaluation_form(&agg_poly, z, &settings.fs)?;

    let agg_commitment_bytes = KzgCommitment::from(agg_commitment.to_compressed());
    let z_bytes = Bytes32::from(z.to_bytes());
    let y_bytes = Bytes32::from(y.to_bytes());
    verify_kzg_proof(&agg_commitment_bytes, &z_bytes, &y_bytes, proof, settings)
}
