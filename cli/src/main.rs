use std::path::Path;
use std::process;

use log::{error, info};
use rand::thread_rng;

use he_mnist::dataset::Dataset;
use he_mnist::errors::PipelineError;
use he_mnist::params::{N_TRAINING, N1, N2, N3, TRAINING_IMAGES, TRAINING_LABELS};
use he_mnist::pipeline;
use he_mnist::scheme::{CryptoContext, KeyPair, SchemeConfig};
use he_mnist::weights::WeightContainer;

fn main() {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    if let Err(err) = run() {
        error!("{err}");
        let code = match err {
            PipelineError::DatasetIo { .. } | PipelineError::TruncatedDataset { .. } => 1,
            _ => 2,
        };
        process::exit(code);
    }
}

fn run() -> Result<(), PipelineError> {
    let ctx = CryptoContext::try_with(SchemeConfig::default())?;
    let mut rng = thread_rng();
    let keys = KeyPair::generate(&ctx, &mut rng);
    info!(
        "context ready: ring degree {}, {} slots per ciphertext",
        ctx.config().ring_degree,
        ctx.slot_capacity()
    );

    info!("loading {N_TRAINING} training records");
    let dataset = Dataset::load(
        Path::new(TRAINING_IMAGES),
        Path::new(TRAINING_LABELS),
        N_TRAINING,
    )?;

    info!("encrypting {} records", dataset.len());
    let encrypted = pipeline::encrypt_dataset(&ctx, keys.public(), &dataset, &mut rng)?;
    info!(
        "produced {} image and {} label ciphertexts",
        encrypted.images.len(),
        encrypted.labels.len()
    );

    // Shape reserved for the encrypted-training step; populated there,
    // not here.
    let hidden = WeightContainer::placeholder(N1, N2);
    let output = WeightContainer::placeholder(N2, N3);
    info!(
        "reserved weight storage: {} + {} ciphertext slots",
        hidden.len(),
        output.len()
    );

    Ok(())
}
