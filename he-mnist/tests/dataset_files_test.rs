use he_mnist::dataset::Dataset;
use he_mnist::errors::PipelineError;
use he_mnist::params::{HEIGHT, IMAGE_HEADER_LEN, LABEL_HEADER_LEN, RECORD_LEN, WIDTH};

use std::fs;
use std::path::PathBuf;

struct TempDataset {
    dir: PathBuf,
    images: PathBuf,
    labels: PathBuf,
}

impl TempDataset {
    /// Writes IDX-shaped image/label files under a process-unique
    /// temp directory.
    fn write(tag: &str, image_records: &[Vec<u8>], labels: &[u8]) -> Self {
        let dir = std::env::temp_dir().join(format!("he-mnist-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");

        let mut image_bytes = vec![0u8; IMAGE_HEADER_LEN];
        for record in image_records {
            assert_eq!(record.len(), WIDTH * HEIGHT);
            image_bytes.extend_from_slice(record);
        }
        let images = dir.join("images.idx3-ubyte");
        fs::write(&images, image_bytes).expect("write image file");

        let mut label_bytes = vec![0u8; LABEL_HEADER_LEN];
        label_bytes.extend_from_slice(labels);
        let labels_path = dir.join("labels.idx1-ubyte");
        fs::write(&labels_path, label_bytes).expect("write label file");

        Self {
            dir,
            images,
            labels: labels_path,
        }
    }
}

impl Drop for TempDataset {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn loads_records_from_disk() -> Result<(), PipelineError> {
    let files = TempDataset::write(
        "load",
        &[vec![0u8; WIDTH * HEIGHT], vec![255u8; WIDTH * HEIGHT]],
        &[7, 3],
    );

    let dataset = Dataset::load(&files.images, &files.labels, 2)?;
    assert_eq!(dataset.len(), 2);

    let records = dataset.records();

    assert_eq!(records[0].pixels.len(), RECORD_LEN);
    assert!(records[0].pixels.iter().all(|&p| p == 0));
    assert_eq!(records[0].label, 7);

    assert_eq!(records[1].pixels[0], 0, "padding slot stays zero");
    assert!(records[1].pixels[1..].iter().all(|&p| p == 1));
    assert_eq!(records[1].label, 3);

    Ok(())
}

#[test]
fn short_image_file_is_reported_as_truncated() {
    let files = TempDataset::write("short", &[vec![0u8; WIDTH * HEIGHT]], &[1, 2]);

    let err = Dataset::load(&files.images, &files.labels, 2).expect_err("load must fail");
    assert!(matches!(err, PipelineError::TruncatedDataset { .. }));
}

#[test]
fn missing_label_file_names_the_path() {
    let files = TempDataset::write("missing", &[vec![0u8; WIDTH * HEIGHT]], &[1]);
    let gone = files.dir.join("no-such-labels.idx1-ubyte");

    let err = Dataset::load(&files.images, &gone, 1).expect_err("load must fail");
    match err {
        PipelineError::DatasetIo { path, .. } => assert_eq!(path, gone),
        other => panic!("unexpected error: {other}"),
    }
}
