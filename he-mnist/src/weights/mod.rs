//! Ciphertext storage shaped like the downstream network's weight
//! matrices. Population belongs to a later encrypted-training step;
//! this module only reserves the shape.

use fhe::bfv::{Ciphertext, PublicKey};
use fhe_traits::FheEncrypter;
use rand::{CryptoRng, RngCore};

use crate::errors::PipelineError;
use crate::scheme::CryptoContext;
use crate::scheme::encoding::encode_slots;

/// One entry of an encrypted weight matrix.
///
/// `Uninitialized` is reserved shape, not a value. It is deliberately
/// distinct from an encryption of zero so downstream code cannot
/// mistake a placeholder for a trained weight.
pub enum WeightSlot {
    Uninitialized,
    Encrypted(Ciphertext),
}

/// Fixed-length ciphertext storage for one `rows x cols` weight matrix
/// plus a bias slot. The length is set at creation and never changes.
pub struct WeightContainer {
    slots: Vec<WeightSlot>,
}

impl WeightContainer {
    /// Reserves `rows * cols + 1` uninitialized slots.
    pub fn placeholder(rows: usize, cols: usize) -> Self {
        let len = rows * cols + 1;
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || WeightSlot::Uninitialized);
        Self { slots }
    }

    /// Same shape as [`placeholder`](Self::placeholder), but every slot
    /// holds a fresh encryption of zero under `public_key`.
    pub fn encrypted_zeros<R: RngCore + CryptoRng>(
        ctx: &CryptoContext,
        public_key: &PublicKey,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, PipelineError> {
        let zero = encode_slots(ctx, &[])?;

        let len = rows * cols + 1;
        let mut slots = Vec::with_capacity(len);
        for _ in 0..len {
            slots.push(WeightSlot::Encrypted(public_key.try_encrypt(&zero, rng)?));
        }
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WeightSlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeightSlot> {
        self.slots.iter()
    }
}
