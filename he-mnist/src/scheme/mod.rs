//! Narrow wrapper around the external BFV implementation.
//!
//! Everything scheme-specific the pipeline needs goes through this
//! module: parameter construction, key generation and the slot
//! encoder. The cryptographic math itself stays inside the `fhe`
//! crate.

pub mod encoding;

use std::sync::Arc;

use fhe::bfv::{BfvParameters, BfvParametersBuilder, PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::params::{DEFAULT_MODULUS_BITS, DEFAULT_PLAINTEXT_MODULUS, DEFAULT_RING_DEGREE};

/// Scheme parameters shared by every component of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Ring dimension; also the packed-plaintext slot capacity.
    pub ring_degree: usize,
    /// Plaintext base. Must be a prime with p ≡ 1 (mod 2 * ring_degree)
    /// so the scheme can batch values into slots.
    pub plaintext_modulus: u64,
    /// Bit sizes of the ciphertext modulus chain, one entry per level.
    pub modulus_bits: Vec<usize>,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            ring_degree: DEFAULT_RING_DEGREE,
            plaintext_modulus: DEFAULT_PLAINTEXT_MODULUS,
            modulus_bits: DEFAULT_MODULUS_BITS.to_vec(),
        }
    }
}

/// Process-wide immutable scheme state: the ring parameters and the
/// modulus chain. Built once at startup; changing any parameter means
/// constructing a new context.
#[derive(Clone)]
pub struct CryptoContext {
    config: SchemeConfig,
    params: Arc<BfvParameters>,
}

impl CryptoContext {
    /// Builds the underlying scheme parameters from `config`.
    pub fn try_with(config: SchemeConfig) -> Result<Self, PipelineError> {
        if config.modulus_bits.is_empty() {
            return Err(PipelineError::InvalidParameters(
                "modulus chain must contain at least one level".to_string(),
            ));
        }

        let params = BfvParametersBuilder::new()
            .set_degree(config.ring_degree)
            .set_plaintext_modulus(config.plaintext_modulus)
            .set_moduli_sizes(&config.modulus_bits)
            .build_arc()?;

        Ok(Self { config, params })
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Handle for the collaborator library's entry points.
    pub fn params(&self) -> &Arc<BfvParameters> {
        &self.params
    }

    /// Number of values one packed plaintext can carry.
    pub fn slot_capacity(&self) -> usize {
        self.params.degree()
    }
}

/// Secret/public key pair derived from one context. The public half is
/// all the encryption pipeline ever sees.
pub struct KeyPair {
    secret: SecretKey,
    public: PublicKey,
}

impl KeyPair {
    /// Samples a fresh secret key for `ctx` and derives its public key.
    pub fn generate<R: RngCore + CryptoRng>(ctx: &CryptoContext, rng: &mut R) -> Self {
        let secret = SecretKey::random(ctx.params(), rng);
        let public = PublicKey::new(&secret, rng);
        Self { secret, public }
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn secret(&self) -> &SecretKey {
        &self.secret
    }
}
