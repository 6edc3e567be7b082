//! Component A: thin, side-channel-aware wrappers over the BLS12-381 backend
//! (`blst`). Nothing outside this module touches `blst` types directly.

pub mod fr;
pub mod g1;
pub mod g2;
pub mod pairing;

pub use fr::Fr;
pub use g1::G1;
pub use g2::G2;
pub use pairing::pairing_check;
