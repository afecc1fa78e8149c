//! Prepares the MNIST training set for homomorphic processing.
//!
//! The pipeline loads the raw IDX files, binarizes every pixel, packs
//! each record into the scheme's slot representation and encrypts it
//! into one ciphertext per record. It also reserves ciphertext-shaped
//! storage for the weight matrices of a downstream encrypted network.
//! All scheme-level math lives in the external `fhe` crate.

pub mod dataset;
pub mod errors;
pub mod params;
pub mod pipeline;
pub mod scheme;
pub mod weights;

pub use fhe;
pub use fhe_traits;
