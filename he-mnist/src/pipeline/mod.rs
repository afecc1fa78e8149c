//! Record-by-record encryption of the loaded dataset.
//!
//! One ciphertext per record is the fixed granularity: no batching of
//! several records into a single ciphertext. Images and labels go
//! through the same path, parameterized only by how the plaintext
//! slots are populated.

use fhe::bfv::{Ciphertext, Plaintext, PublicKey};
use fhe_traits::FheEncrypter;
use rand::{CryptoRng, RngCore};

use crate::dataset::{Dataset, Record};
use crate::errors::PipelineError;
use crate::scheme::CryptoContext;
use crate::scheme::encoding::{encode_label, encode_slots};

/// Image and label ciphertexts for the whole dataset, index-aligned
/// with the input records.
pub struct EncryptedDataset {
    pub images: Vec<Ciphertext>,
    pub labels: Vec<Ciphertext>,
}

/// Encodes and encrypts every item in input order.
///
/// Ciphertext `i` of the output always corresponds to item `i` of the
/// input. The first failure aborts the run: encoding and encryption
/// fail identically on retry, so there is nothing to recover per
/// record.
pub fn encrypt_all<T, F, R>(
    ctx: &CryptoContext,
    public_key: &PublicKey,
    items: &[T],
    mut encode: F,
    rng: &mut R,
) -> Result<Vec<Ciphertext>, PipelineError>
where
    F: FnMut(&CryptoContext, &T) -> Result<Plaintext, PipelineError>,
    R: RngCore + CryptoRng,
{
    let mut ciphertexts = Vec::with_capacity(items.len());
    for item in items {
        let plaintext = encode(ctx, item)?;
        ciphertexts.push(public_key.try_encrypt(&plaintext, rng)?);
    }
    Ok(ciphertexts)
}

/// Encrypts the pixel rows of `records`, one ciphertext per image.
pub fn encrypt_images<R: RngCore + CryptoRng>(
    ctx: &CryptoContext,
    public_key: &PublicKey,
    records: &[Record],
    rng: &mut R,
) -> Result<Vec<Ciphertext>, PipelineError> {
    encrypt_all(ctx, public_key, records, |ctx, r| encode_slots(ctx, &r.pixels), rng)
}

/// Encrypts the labels of `records`, one ciphertext per label with the
/// label value in slot 0.
pub fn encrypt_labels<R: RngCore + CryptoRng>(
    ctx: &CryptoContext,
    public_key: &PublicKey,
    records: &[Record],
    rng: &mut R,
) -> Result<Vec<Ciphertext>, PipelineError> {
    encrypt_all(ctx, public_key, records, |ctx, r| encode_label(ctx, r.label), rng)
}

/// Encrypts the full dataset, images and labels both.
pub fn encrypt_dataset<R: RngCore + CryptoRng>(
    ctx: &CryptoContext,
    public_key: &PublicKey,
    dataset: &Dataset,
    rng: &mut R,
) -> Result<EncryptedDataset, PipelineError> {
    let images = encrypt_images(ctx, public_key, dataset.records(), rng)?;
    let labels = encrypt_labels(ctx, public_key, dataset.records(), rng)?;
    Ok(EncryptedDataset { images, labels })
}
