use std::io::Cursor;

use qinfer::format::{Fixed16, Fixed8};
use qinfer::stimulus::Stimulus;
use qinfer::topology::{OutputShape, Topology};
use qinfer::Error;

fn small_topology() -> Topology {
    Topology::new(
        2,
        2,
        1,
        vec![OutputShape {
            height: 1,
            width: 1,
            channels: 10,
            classes: 10,
        }],
    )
}

fn idx_images(images: &[[u8; 4]]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0803u32.to_be_bytes());
    bytes.extend_from_slice(&(images.len() as u32).to_be_bytes());
    bytes.extend_from_slice(&2u32.to_be_bytes());
    bytes.extend_from_slice(&2u32.to_be_bytes());
    for img in images {
        bytes.extend_from_slice(img);
    }
    bytes
}

fn idx_labels(labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x0000_0801u32.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

#[test]
fn reads_the_indexed_image_and_label() {
    let topo = small_topology();
    let images = idx_images(&[[0, 0, 0, 0], [10, 20, 30, 40]]);
    let labels = idx_labels(&[5, 7]);

    let stim =
        Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 1, &topo)
            .unwrap();

    assert_eq!(stim.name, "env0001");
    assert_eq!(stim.input, vec![10, 20, 30, 40]);
    assert_eq!(stim.expected, vec![7]);
}

#[test]
fn pixels_widen_for_wider_formats() {
    let topo = small_topology();
    let images = idx_images(&[[0, 1, 128, 255]]);
    let labels = idx_labels(&[3]);

    let stim =
        Stimulus::<Fixed16>::from_readers(Cursor::new(images), Cursor::new(labels), 0, &topo)
            .unwrap();

    assert_eq!(stim.input, vec![0, 0x0100, 0x8000, 0xff00]);
    assert_eq!(stim.expected, vec![3]);
}

#[test]
fn extra_label_slots_are_ungraded() {
    let topo = Topology::new(
        2,
        2,
        1,
        vec![OutputShape {
            height: 2,
            width: 2,
            channels: 3,
            classes: 3,
        }],
    );
    let images = idx_images(&[[1, 2, 3, 4]]);
    let labels = idx_labels(&[2]);

    let stim =
        Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 0, &topo)
            .unwrap();

    assert_eq!(stim.expected, vec![2, -1, -1, -1]);
}

#[test]
fn rejects_bad_image_magic() {
    let topo = small_topology();
    let mut images = idx_images(&[[0, 0, 0, 0]]);
    images[3] = 0x99;
    let labels = idx_labels(&[1]);

    let err = Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 0, &topo)
        .unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[test]
fn rejects_out_of_range_index() {
    let topo = small_topology();
    let images = idx_images(&[[0, 0, 0, 0]]);
    let labels = idx_labels(&[1]);

    let err = Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 5, &topo)
        .unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 5, len: 1 }));
}

#[test]
fn rejects_shape_mismatch() {
    let topo = Topology::mnist_24x24();
    let images = idx_images(&[[0, 0, 0, 0]]);
    let labels = idx_labels(&[1]);

    let err = Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 0, &topo)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::ShapeMismatch {
            expected: 576,
            actual: 4
        }
    ));
}

#[test]
fn rejects_truncated_image_data() {
    let topo = small_topology();
    let mut images = idx_images(&[[0, 0, 0, 0], [1, 2, 3, 4]]);
    images.truncate(images.len() - 6);
    let labels = idx_labels(&[1, 2]);

    let err = Stimulus::<Fixed8>::from_readers(Cursor::new(images), Cursor::new(labels), 1, &topo)
        .unwrap_err();
    assert!(matches!(err, Error::Malformed(_) | Error::Io(_)));
}
