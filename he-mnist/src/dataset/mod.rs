//! Loader for the fixed-format MNIST binary files.
//!
//! The image file carries a 16-byte header followed by `n` records of
//! `WIDTH * HEIGHT` bytes, row-major, one byte per pixel. The label
//! file carries an 8-byte header followed by `n` single-byte records.
//! Headers are skipped, never parsed.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::PipelineError;
use crate::params::{HEIGHT, IMAGE_HEADER_LEN, LABEL_HEADER_LEN, RECORD_LEN, WIDTH};

/// One labeled training example.
///
/// `pixels[0]` is the padding slot and is always zero; pixel `(x, y)`
/// lives at index `x + y * WIDTH + 1`. The padding slot is a layout
/// convention of the slot encoding, not semantic data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub pixels: Vec<u64>,
    pub label: u8,
}

/// The full training set, built once and immutable afterwards. Pairing
/// an image with its label inside one `Record` keeps the positional
/// image/label correspondence explicit.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Loads `n` records from the two dataset files.
    pub fn load(images: &Path, labels: &Path, n: usize) -> Result<Self, PipelineError> {
        let pixels = load_images(images, n)?;
        let labels = load_labels(labels, n)?;

        let records = pixels
            .into_iter()
            .zip(labels)
            .map(|(pixels, label)| Record { pixels, label })
            .collect();

        Ok(Self { records })
    }

    /// Wraps already-decoded records, e.g. a synthesized set in tests.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Maps a raw grayscale byte onto a binary pixel value. Intensity is
/// discarded on purpose: the downstream network consumes binary inputs.
pub fn binarize(byte: u8) -> u64 {
    if byte == 0 { 0 } else { 1 }
}

/// Reads `n` binarized pixel rows (padding slot included) from the
/// image file at `path`.
pub fn load_images(path: &Path, n: usize) -> Result<Vec<Vec<u64>>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;

    read_images(BufReader::new(file), n).map_err(|source| PipelineError::TruncatedDataset {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `n` raw label bytes from the label file at `path`. Labels are
/// stored as-is; values outside 0..=9 are not rejected here.
pub fn load_labels(path: &Path, n: usize) -> Result<Vec<u8>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::DatasetIo {
        path: path.to_path_buf(),
        source,
    })?;

    read_labels(BufReader::new(file), n).map_err(|source| PipelineError::TruncatedDataset {
        path: path.to_path_buf(),
        source,
    })
}

fn read_images<R: Read>(mut reader: R, n: usize) -> std::io::Result<Vec<Vec<u64>>> {
    let mut header = [0u8; IMAGE_HEADER_LEN];
    reader.read_exact(&mut header)?;

    let mut images = Vec::with_capacity(n);
    let mut raw = [0u8; WIDTH * HEIGHT];
    for _ in 0..n {
        reader.read_exact(&mut raw)?;

        let mut pixels = Vec::with_capacity(RECORD_LEN);
        pixels.push(0);
        pixels.extend(raw.iter().map(|&b| binarize(b)));
        images.push(pixels);
    }

    Ok(images)
}

fn read_labels<R: Read>(mut reader: R, n: usize) -> std::io::Result<Vec<u8>> {
    let mut header = [0u8; LABEL_HEADER_LEN];
    reader.read_exact(&mut header)?;

    let mut labels = vec![0u8; n];
    reader.read_exact(&mut labels)?;
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use quickcheck_macros::quickcheck;

    fn image_file(records: &[[u8; WIDTH * HEIGHT]]) -> Vec<u8> {
        let mut bytes = vec![0u8; IMAGE_HEADER_LEN];
        for record in records {
            bytes.extend_from_slice(record);
        }
        bytes
    }

    fn label_file(labels: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0u8; LABEL_HEADER_LEN];
        bytes.extend_from_slice(labels);
        bytes
    }

    #[quickcheck]
    fn binarize_is_total_and_binary(byte: u8) -> bool {
        let value = binarize(byte);
        value <= 1 && (value == 0) == (byte == 0)
    }

    #[test]
    fn all_zero_record_decodes_to_785_zeros() {
        let bytes = image_file(&[[0u8; WIDTH * HEIGHT]]);
        let images = read_images(Cursor::new(bytes), 1).expect("read image");

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].len(), RECORD_LEN);
        assert!(images[0].iter().all(|&p| p == 0));
    }

    #[test]
    fn nonzero_bytes_binarize_to_one() {
        let mut record = [0u8; WIDTH * HEIGHT];
        record[0] = 1;
        record[5] = 128;
        record[783] = 255;

        let images = read_images(Cursor::new(image_file(&[record])), 1).expect("read image");

        let pixels = &images[0];
        assert_eq!(pixels[0], 0, "padding slot stays zero");
        assert_eq!(pixels[1], 1);
        assert_eq!(pixels[6], 1);
        assert_eq!(pixels[784], 1);
        assert_eq!(pixels.iter().filter(|&&p| p == 1).count(), 3);
    }

    #[test]
    fn label_byte_seven_reads_back_as_seven() {
        let labels = read_labels(Cursor::new(label_file(&[7])), 1).expect("read label");
        assert_eq!(labels, vec![7]);
    }

    #[test]
    fn reads_exactly_n_records() {
        let records = [[0u8; WIDTH * HEIGHT]; 3];
        let images = read_images(Cursor::new(image_file(&records)), 3).expect("read images");
        assert_eq!(images.len(), 3);

        let labels = read_labels(Cursor::new(label_file(&[1, 2, 3])), 3).expect("read labels");
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn truncated_image_file_is_an_error() {
        let mut bytes = image_file(&[[0u8; WIDTH * HEIGHT]]);
        bytes.truncate(IMAGE_HEADER_LEN + 100);

        assert!(read_images(Cursor::new(bytes), 1).is_err());
    }

    #[test]
    fn missing_file_reports_which_path() {
        let path = Path::new("does/not/exist.idx3-ubyte");
        let err = load_images(path, 1).expect_err("open must fail");

        match err {
            PipelineError::DatasetIo { path: reported, .. } => {
                assert_eq!(reported, path.to_path_buf());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
