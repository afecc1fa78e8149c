//! Fixed dataset-format, network-geometry and scheme constants.

/// Number of records in the MNIST training set.
pub const N_TRAINING: usize = 60_000;
/// Image width in pixels.
pub const WIDTH: usize = 28;
/// Image height in pixels.
pub const HEIGHT: usize = 28;
/// Slots one image occupies: all pixels plus the leading padding slot.
pub const RECORD_LEN: usize = WIDTH * HEIGHT + 1;

/// Byte length of the IDX image-file header. A format constant, never
/// derived from file content.
pub const IMAGE_HEADER_LEN: usize = 16;
/// Byte length of the IDX label-file header.
pub const LABEL_HEADER_LEN: usize = 8;

/// Input neurons of the downstream network.
pub const N1: usize = WIDTH * HEIGHT;
/// Hidden neurons.
pub const N2: usize = 128;
/// Output neurons.
pub const N3: usize = 10;

/// Default ring dimension; also the packed-plaintext slot capacity.
pub const DEFAULT_RING_DEGREE: usize = 4096;
/// Default plaintext base. Must satisfy p ≡ 1 (mod 2 * ring degree) so
/// the scheme can batch values into slots.
pub const DEFAULT_PLAINTEXT_MODULUS: u64 = 65537;
/// Default bit sizes of the ciphertext modulus chain, one per level.
pub const DEFAULT_MODULUS_BITS: &[usize] = &[36, 36, 37];

/// Training-set file locations, relative to the working directory.
pub const TRAINING_IMAGES: &str = "mnist/train-images.idx3-ubyte";
pub const TRAINING_LABELS: &str = "mnist/train-labels.idx1-ubyte";
