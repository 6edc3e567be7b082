//! KZG polynomial commitments for the EIP-4844 blob transaction profile,
//! over BLS12-381.
//!
//! A blob is `FIELD_ELEMENTS_PER_BLOB` field elements; this crate commits to
//! it, opens the commitment at a point, and verifies openings, either one
//! blob at a time or batched behind a single Fiat-Shamir-derived challenge.
//! Every public entry point lives in [`kzg`]; everything else is the
//! machinery those five functions are built from.
//!
//! ```no_run
//! use kzg4844::{blob_to_kzg_commitment, kzg_settings::KzgSettings, blob::Blob};
//!
//! # fn main() -> Result<(), kzg4844::error::Error> {
//! let settings = KzgSettings::load_trusted_setup_file("trusted_setup.txt")?;
//! let blob = Blob::from_bytes(&[0u8; kzg4844::consts::BYTES_PER_BLOB])?;
//! let commitment = blob_to_kzg_commitment(&blob, &settings)?;
//! # let _ = commitment;
//! # Ok(())
//! # }
//! ```

pub mod bit_reversal;
pub mod blob;
pub mod bls;
pub mod consts;
pub mod error;
pub mod fft;
pub mod fft_settings;
#[cfg(feature = "global-settings")]
pub mod global;
pub mod kzg;
pub mod kzg_settings;
pub mod testing;
pub mod trusted_setup;

pub use blob::{Blob, Bytes32, KzgCommitment, KzgProof};
pub use consts::get_field_elements_per_blob;
pub use error::Error;
pub use kzg::{
    blob_to_kzg_commitment, compute_aggregate_kzg_proof, compute_kzg_proof,
    verify_aggregate_kzg_proof, verify_kzg_proof,
};
pub use kzg_settings::{free_trusted_setup, KzgSettings};

#[cfg(feature = "global-settings")]
pub use global::{
    free_trusted_setup as free_global_trusted_setup,
    global_settings, load_trusted_setup as load_global_trusted_setup,
};
