//! Cross-module scenarios from the testable-properties list: a settings
//! round trip, the zero-blob/constant-polynomial boundary cases, aggregated
//! proofs over several blobs, and the tamper-detection guards. Unlike the
//! teacher's end-to-end tests, there is no real trusted-setup ceremony file
//! to load here, so every test drives the toy setup in `kzg4844::testing`
//! through the same production code paths a real file would exercise.

use kzg4844::blob::{Blob, Bytes32, KzgCommitment, KzgProof};
use kzg4844::bls::fr::Fr;
use kzg4844::bls::g1::G1;
use kzg4844::consts::{BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB};
use kzg4844::kzg::{
    blob_to_kzg_commitment, compute_aggregate_kzg_proof, compute_kzg_proof,
    verify_aggregate_kzg_proof, verify_kzg_proof,
};
use kzg4844::kzg_settings::KzgSettings;
use rand::Rng;

fn settings() -> KzgSettings {
    kzg4844::testing::generate_toy_trusted_setup(0x5a5a_5a5a)
}

fn blob_from_scalars(scalars: &[Fr]) -> Blob {
    let mut bytes = vec![0u8; FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT];
    for (i, s) in scalars.iter().enumerate() {
        bytes[i * BYTES_PER_FIELD_ELEMENT..(i + 1) * BYTES_PER_FIELD_ELEMENT]
            .copy_from_slice(&s.to_bytes());
    }
    Blob::from_bytes(&bytes).unwrap()
}

#[test]
fn test_settings_round_trip() {
    let settings = settings();
    assert_eq!(settings.field_elements_per_blob(), FIELD_ELEMENTS_PER_BLOB);
    assert_eq!(settings.g1_values.len(), FIELD_ELEMENTS_PER_BLOB);
    assert_eq!(settings.g2_values.len(), 2);

    let g1_bytes: Vec<u8> = settings
        .g1_values
        .iter()
        .flat_map(|p| p.to_compressed())
        .collect();
    let g2_bytes: Vec<u8> = settings
        .g2_values
        .iter()
        .flat_map(|p| p.to_compressed())
        .collect();
    let reloaded = KzgSettings::load_trusted_setup_from_bytes(&g1_bytes, &g2_bytes).unwrap();
    assert_eq!(reloaded.field_elements_per_blob(), settings.field_elements_per_blob());
}

#[test]
fn test_zero_blob_commitment_is_identity() {
    let settings = settings();
    let blob = Blob::default();
    let commitment = blob_to_kzg_commitment(&blob, &settings).unwrap();
    // The BLS12-381 compressed identity: 0xc0 flag byte, zeros after.
    assert_eq!(commitment.0[0], 0xc0);
    assert!(commitment.0[1..].iter().all(|&b| b == 0));
}

#[test]
fn test_constant_polynomial_proof_end_to_end() {
    let settings = settings();
    let scalars = vec![Fr::one(); FIELD_ELEMENTS_PER_BLOB];
    let blob = blob_from_scalars(&scalars);
    let commitment = blob_to_kzg_commitment(&blob, &settings).unwrap();

    for seed in [1u64, 2, 100, 999] {
        let z = Bytes32::from(Fr::from_u64(seed).to_bytes());
        let (proof, y) = compute_kzg_proof(&blob, &z, &settings).unwrap();
        assert_eq!(y.0, Fr::one().to_bytes());
        assert!(verify_kzg_proof(&commitment, &z, &y, &proof, &settings).unwrap());

        let wrong_y = Bytes32::from(Fr::zero().to_bytes());
        assert!(!verify_kzg_proof(&commitment, &z, &wrong_y, &proof, &settings).unwrap());
    }
}

#[test]
fn test_aggregate_proof_of_single_blob_and_tamper_detection() {
    let settings = settings();
    let scalars: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|i| Fr::from_u64(i as u64 + 5))
        .collect();
    let blob = blob_from_scalars(&scalars);
    let commitment = blob_to_kzg_commitment(&blob, &settings).unwrap();
    let proof = compute_aggregate_kzg_proof(&[blob], &settings).unwrap();
    assert!(verify_aggregate_kzg_proof(&[blob], &[commitment], &proof, &settings).unwrap());

    // Corrupt one byte of the blob: the commitment computed from the
    // corrupted blob no longer matches the one the proof was built against.
    let mut corrupted_bytes = blob.as_slice().to_vec();
    corrupted_bytes[0] ^= 0x01;
    let corrupted_blob = Blob::from_bytes(&corrupted_bytes).unwrap();
    let corrupted_commitment = blob_to_kzg_commitment(&corrupted_blob, &settings).unwrap();
    let result = verify_aggregate_kzg_proof(
        &[corrupted_blob],
        &[corrupted_commitment],
        &proof,
        &settings,
    );
    assert!(matches!(result, Ok(false) | Err(_)));
}

#[test]
fn test_aggregate_proof_over_several_blobs() {
    let settings = settings();
    let blobs: Vec<Blob> = (0..5u64)
        .map(|seed| {
            let scalars: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
                .map(|i| Fr::from_u64(seed * 31 + i as u64))
                .collect();
            blob_from_scalars(&scalars)
        })
        .collect();
    let commitments: Vec<KzgCommitment> = blobs
        .iter()
        .map(|b| blob_to_kzg_commitment(b, &settings).unwrap())
        .collect();
    let proof = compute_aggregate_kzg_proof(&blobs, &settings).unwrap();
    assert!(verify_aggregate_kzg_proof(&blobs, &commitments, &proof, &settings).unwrap());

    // Reordering the blobs changes the Fiat-Shamir transcript and must not
    // still verify against the same proof.
    let mut reordered = blobs.clone();
    reordered.swap(0, 1);
    let mut reordered_commitments = commitments.clone();
    reordered_commitments.swap(0, 1);
    let result =
        verify_aggregate_kzg_proof(&reordered, &reordered_commitments, &proof, &settings);
    assert!(matches!(result, Ok(false) | Err(_)));
}

#[test]
fn test_pairing_check_false_positive_guard() {
    let settings = settings();
    let scalars: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|i| Fr::from_u64(i as u64 * 3 + 1))
        .collect();
    let blob = blob_from_scalars(&scalars);
    let commitment = blob_to_kzg_commitment(&blob, &settings).unwrap();
    let z = Bytes32::from(Fr::from_u64(11).to_bytes());
    let (_proof, y) = compute_kzg_proof(&blob, &z, &settings).unwrap();

    let identity_proof = KzgProof::from(G1::identity().to_compressed());
    assert!(!verify_kzg_proof(&commitment, &z, &y, &identity_proof, &settings).unwrap());
}

#[test]
fn test_fiat_shamir_is_order_sensitive_and_deterministic() {
    let settings = settings();
    let a = blob_from_scalars(&vec![Fr::from_u64(1); FIELD_ELEMENTS_PER_BLOB]);
    let b = blob_from_scalars(&vec![Fr::from_u64(2); FIELD_ELEMENTS_PER_BLOB]);
    let ca = blob_to_kzg_commitment(&a, &settings).unwrap();
    let cb = blob_to_kzg_commitment(&b, &settings).unwrap();

    let proof_ab = compute_aggregate_kzg_proof(&[a, b], &settings).unwrap();
    let proof_ab_again = compute_aggregate_kzg_proof(&[a, b], &settings).unwrap();
    assert_eq!(proof_ab.0, proof_ab_again.0);

    assert!(verify_aggregate_kzg_proof(&[a, b], &[ca, cb], &proof_ab, &settings).unwrap());
    let result = verify_aggregate_kzg_proof(&[b, a], &[cb, ca], &proof_ab, &settings);
    assert!(matches!(result, Ok(false) | Err(_)));
}

#[test]
fn test_rejects_non_canonical_field_element_in_blob() {
    // BLS_MODULUS itself, little-endian, is not a canonical field element.
    const Q_LIMBS: [u64; 4] = [
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ];
    let mut bytes = vec![0u8; FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT];
    for (i, limb) in Q_LIMBS.iter().enumerate() {
        bytes[i * 8..i * 8 + 8].copy_from_slice(&limb.to_le_bytes());
    }
    let blob = Blob::from_bytes(&bytes).unwrap();
    let settings = settings();
    assert!(blob_to_kzg_commitment(&blob, &settings).is_err());
}

#[test]
fn test_proof_verifies_at_random_evaluation_points() {
    let settings = settings();
    let mut rng = rand::thread_rng();
    let scalars: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|_| Fr::from_u64(rng.gen::<u64>()))
        .collect();
    let blob = blob_from_scalars(&scalars);
    let commitment = blob_to_kzg_commitment(&blob, &settings).unwrap();

    for _ in 0..10 {
        let z = Bytes32::from(Fr::from_u64(rng.gen::<u64>()).to_bytes());
        let (proof, y) = compute_kzg_proof(&blob, &z, &settings).unwrap();
        assert!(verify_kzg_proof(&commitment, &z, &y, &proof, &settings).unwrap());
    }
}

#[test]
fn test_trusted_setup_text_format_round_trip() {
    let settings = settings();
    let g1_hex: String = settings
        .g1_values
        .iter()
        .map(|p| hex::encode(p.to_compressed()))
        .collect();
    let g2_hex: String = settings
        .g2_values
        .iter()
        .map(|p| hex::encode(p.to_compressed()))
        .collect();
    let text = format!(
        "{}\n{}\n{}\n{}\n",
        settings.g1_values.len(),
        settings.g2_values.len(),
        g1_hex,
        g2_hex
    );
    let reloaded = KzgSettings::load_trusted_setup_str(&text).unwrap();
    assert_eq!(reloaded.field_elements_per_blob(), settings.field_elements_per_blob());
}

#[test]
fn test_rejects_trusted_setup_with_wrong_g1_count() {
    let settings = settings();
    let g1_bytes: Vec<u8> = settings.g1_values[..FIELD_ELEMENTS_PER_BLOB - 1]
        .iter()
        .flat_map(|p| p.to_compressed())
        .collect();
    let g2_bytes: Vec<u8> = settings
        .g2_values
        .iter()
        .flat_map(|p| p.to_compressed())
        .collect();
    assert!(KzgSettings::load_trusted_setup_from_bytes(&g1_bytes, &g2_bytes).is_err());
}
