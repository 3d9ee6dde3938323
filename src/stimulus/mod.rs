use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::debug;

use crate::error::Error;
use crate::format::Format;
use crate::topology::{Target, Topology};

const IDX_IMAGE_MAGIC: u32 = 0x0000_0803;
const IDX_LABEL_MAGIC: u32 = 0x0000_0801;

/// One (input, expected-output) pair presented for a single inference and
/// grading pass.
///
/// The input holds unsigned activation values; the expected buffer has one
/// signed 32-bit entry per label slot, where a negative value marks the
/// slot as ungraded.
#[derive(Debug)]
pub struct Stimulus<F: Format> {
    /// Identifier used in the console report, e.g. `env0003`.
    pub name: String,
    pub input: Vec<F::Unsigned>,
    pub expected: Vec<Target>,
}

impl<F: Format> Stimulus<F> {
    /// Read image `index` and its label from a pair of IDX streams
    /// (the MNIST test-set format).
    ///
    /// Pixels widen into the active format's unsigned activation range.
    /// Label slot 0 receives the ground-truth label; any further slots are
    /// set to -1 (ungraded).
    pub fn from_readers<R: Read, L: Read>(
        mut images: R,
        mut labels: L,
        index: usize,
        topology: &Topology,
    ) -> Result<Self, Error> {
        if read_u32_be(&mut images)? != IDX_IMAGE_MAGIC {
            return Err(Error::Malformed("bad IDX image magic"));
        }
        let num_images = read_u32_be(&mut images)? as usize;
        let num_rows = read_u32_be(&mut images)? as usize;
        let num_cols = read_u32_be(&mut images)? as usize;

        let pixels = num_rows * num_cols;
        if pixels * topology.input_channels() != topology.input_size() {
            return Err(Error::ShapeMismatch {
                expected: topology.input_size(),
                actual: pixels * topology.input_channels(),
            });
        }
        if index >= num_images {
            return Err(Error::IndexOutOfRange {
                index,
                len: num_images,
            });
        }
        debug!(num_images, num_rows, num_cols, index, "reading stimulus image");

        skip(&mut images, index * pixels)?;
        let mut raw = vec![0u8; pixels];
        images.read_exact(&mut raw)?;
        let input = raw.iter().map(|&p| F::unsigned_from_pixel(p)).collect();

        if read_u32_be(&mut labels)? != IDX_LABEL_MAGIC {
            return Err(Error::Malformed("bad IDX label magic"));
        }
        let num_labels = read_u32_be(&mut labels)? as usize;
        if index >= num_labels {
            return Err(Error::IndexOutOfRange {
                index,
                len: num_labels,
            });
        }
        skip(&mut labels, index)?;
        let mut label = [0u8; 1];
        labels.read_exact(&mut label)?;

        let mut expected = vec![-1 as Target; topology.outputs_size(0)];
        expected[0] = label[0] as Target;

        Ok(Stimulus {
            name: format!("env{:04}", index),
            input,
            expected,
        })
    }

    /// Read image `index` from IDX files on disk; `.gz` paths decompress
    /// transparently.
    pub fn from_idx_files<P: AsRef<Path>, Q: AsRef<Path>>(
        images_path: P,
        labels_path: Q,
        index: usize,
        topology: &Topology,
    ) -> Result<Self, Error> {
        let images = open_maybe_gz(images_path.as_ref())?;
        let labels = open_maybe_gz(labels_path.as_ref())?;
        Stimulus::from_readers(images, labels, index, topology)
    }
}

fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, Error> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|e| e == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

fn read_u32_be<R: Read>(reader: &mut R) -> Result<u32, Error> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn skip<R: Read>(reader: &mut R, count: usize) -> Result<(), Error> {
    let copied = io::copy(&mut reader.take(count as u64), &mut io::sink())?;
    if copied != count as u64 {
        return Err(Error::Malformed("truncated IDX data"));
    }
    Ok(())
}
