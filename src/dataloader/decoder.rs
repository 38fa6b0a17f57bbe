use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, info};

use super::dataset::Dataset;
use super::error::{DataLoaderError, RecordError};
use super::labels::{LabelKind, Taxonomy};
use super::sample::{Class, Sample, PIXELS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormat {
    /// `[label][1024 R][1024 G][1024 B]`
    SingleLabel,
    /// `[coarse][fine][1024 R][1024 G][1024 B]`
    DualLabel,
}

impl RecordFormat {
    pub fn label_bytes(&self) -> usize {
        match self {
            RecordFormat::SingleLabel => 1,
            RecordFormat::DualLabel => 2,
        }
    }

    pub fn record_len(&self) -> usize {
        self.label_bytes() + PIXELS * 3
    }
}

impl From<Taxonomy> for RecordFormat {
    fn from(taxonomy: Taxonomy) -> Self {
        match taxonomy {
            Taxonomy::Cifar10 => RecordFormat::SingleLabel,
            Taxonomy::Cifar100 => RecordFormat::DualLabel,
        }
    }
}

/// Decodes records until the stream ends.
///
/// The stream must end exactly on a record boundary. Any trailing partial
/// record or out-of-range label fails the whole call.
pub fn decode_records<R: Read>(mut reader: R, format: RecordFormat) -> Result<Vec<Sample>, RecordError> {
    let record_len = format.record_len();
    let mut buf = vec![0u8; record_len];
    let mut samples = Vec::new();

    loop {
        let filled = fill_record(&mut reader, &mut buf)?;
        if filled == 0 {
            break;
        }
        if filled < record_len {
            return Err(RecordError::Truncated {
                record: samples.len(),
                remaining: filled,
                expected: record_len,
            });
        }
        samples.push(decode_record(&buf, format, samples.len())?);
    }

    Ok(samples)
}

fn decode_record(buf: &[u8], format: RecordFormat, record: usize) -> Result<Sample, RecordError> {
    let pixels = &buf[format.label_bytes()..];
    let sample = match format {
        RecordFormat::SingleLabel => {
            let class = lookup(LabelKind::Class, buf[0], record)?;
            Sample::new(class, None, pixels)
        }
        RecordFormat::DualLabel => {
            let superclass = lookup(LabelKind::Coarse, buf[0], record)?;
            let class = lookup(LabelKind::Fine, buf[1], record)?;
            Sample::new(class, Some(superclass), pixels)
        }
    };
    Ok(sample)
}

fn lookup(kind: LabelKind, label: u8, record: usize) -> Result<Class, RecordError> {
    Class::from_index(kind, label as usize).ok_or(RecordError::LabelOutOfRange {
        record,
        kind,
        label,
        table_len: kind.table().len(),
    })
}

// Like read_exact, but reports how many bytes arrived before EOF instead of failing.
fn fill_record<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Reads every record in one file.
pub fn load_file(path: &Path, format: RecordFormat) -> Result<Vec<Sample>, DataLoaderError> {
    let file = File::open(path).map_err(|source| DataLoaderError::Io {
        path: path.to_owned(),
        source,
    })?;

    let samples = decode_records(BufReader::new(file), format).map_err(|source| match source {
        RecordError::Io(source) => DataLoaderError::Io {
            path: path.to_owned(),
            source,
        },
        source => DataLoaderError::Decode {
            path: path.to_owned(),
            source,
        },
    })?;

    debug!(path = %path.display(), samples = samples.len(), "decoded batch file");
    Ok(samples)
}

/// Loads a CIFAR directory laid out as in the official binary distribution.
///
/// Batches come back in file order: training partitions first, then the
/// test partition.
pub fn load(dir: impl AsRef<Path>, taxonomy: Taxonomy) -> Result<Dataset, DataLoaderError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(DataLoaderError::DirectoryNotFound(dir.to_owned()));
    }

    let format = RecordFormat::from(taxonomy);
    let batches = taxonomy
        .file_names()
        .iter()
        .map(|name| load_file(&dir.join(name), format))
        .collect::<Result<Vec<_>, _>>()?;

    let dataset = Dataset::new(taxonomy, batches);
    info!(
        dir = %dir.display(),
        taxonomy = %taxonomy,
        batches = dataset.batches().len(),
        samples = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

pub fn load_cifar10(dir: impl AsRef<Path>) -> Result<Dataset, DataLoaderError> {
    load(dir, Taxonomy::Cifar10)
}

pub fn load_cifar100(dir: impl AsRef<Path>) -> Result<Dataset, DataLoaderError> {
    load(dir, Taxonomy::Cifar100)
}

#[cfg(test)]
pub(crate) fn encode_record(labels: &[u8], fill: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    let mut record = labels.to_vec();
    for c in 0..3 {
        record.extend((0..PIXELS).map(|idx| fill(c, idx)));
    }
    record
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn pattern(c: usize, idx: usize) -> u8 {
        ((idx * 7 + c * 31) % 256) as u8
    }

    #[test]
    fn single_label_round_trip() {
        let mut bytes = encode_record(&[7], pattern);
        bytes.extend(encode_record(&[0], |_, _| 9));

        let samples = decode_records(&bytes[..], RecordFormat::SingleLabel).unwrap();
        assert_eq!(samples.len(), 2);

        let first = &samples[0];
        assert_eq!(first.class().index(), 7);
        assert_eq!(first.class().name(), "horse");
        assert!(first.superclass().is_none());
        for (c, channel) in first.channels().iter().enumerate() {
            assert!(channel.iter().enumerate().all(|(idx, &p)| p == pattern(c, idx)));
        }
        assert_eq!(samples[1].class().name(), "airplane");
        assert!(samples[1].red().iter().all(|&p| p == 9));
    }

    #[test]
    fn dual_label_round_trip() {
        let bytes = encode_record(&[19, 42], pattern);
        let samples = decode_records(&bytes[..], RecordFormat::DualLabel).unwrap();

        assert_eq!(samples.len(), 1);
        let sample = &samples[0];
        let superclass = sample.superclass().unwrap();
        assert_eq!(superclass.index(), 19);
        assert_eq!(superclass.name(), "vehicles_2");
        assert_eq!(sample.class().index(), 42);
        assert_eq!(sample.class().name(), "leopard");
        assert_eq!(sample.blue()[1023], pattern(2, 1023));
    }

    #[test]
    fn empty_stream_is_empty_batch() {
        let samples = decode_records(&[0u8; 0][..], RecordFormat::DualLabel).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn truncated_record_rejected() {
        let mut bytes = encode_record(&[1], pattern);
        bytes.extend(&encode_record(&[2], pattern)[..100]);

        match decode_records(&bytes[..], RecordFormat::SingleLabel) {
            Err(RecordError::Truncated {
                record,
                remaining,
                expected,
            }) => {
                assert_eq!(record, 1);
                assert_eq!(remaining, 100);
                assert_eq!(expected, 3073);
            }
            other => panic!("expected truncation, got {:?}", other),
        }

        // A CIFAR-100 stream read as CIFAR-10 does not divide evenly either.
        let bytes = encode_record(&[1, 2], pattern);
        assert!(matches!(
            decode_records(&bytes[..], RecordFormat::SingleLabel),
            Err(RecordError::Truncated { remaining: 1, .. })
        ));
    }

    #[test]
    fn truncated_dual_label_record_rejected() {
        let mut bytes = encode_record(&[4, 40], pattern);
        bytes.extend(&encode_record(&[5, 41], pattern)[..3073]);

        match decode_records(&bytes[..], RecordFormat::DualLabel) {
            Err(RecordError::Truncated {
                record,
                remaining,
                expected,
            }) => {
                assert_eq!(record, 1);
                assert_eq!(remaining, 3073);
                assert_eq!(expected, 3074);
            }
            other => panic!("expected truncation, got {:?}", other),
        }

        // A CIFAR-10 record read as CIFAR-100 is one byte short.
        let bytes = encode_record(&[7], pattern);
        assert!(matches!(
            decode_records(&bytes[..], RecordFormat::DualLabel),
            Err(RecordError::Truncated {
                record: 0,
                remaining: 3073,
                expected: 3074,
            })
        ));
    }

    #[test]
    fn label_one_past_table_rejected() {
        let bytes = encode_record(&[10], pattern);
        assert!(matches!(
            decode_records(&bytes[..], RecordFormat::SingleLabel),
            Err(RecordError::LabelOutOfRange {
                kind: LabelKind::Class,
                label: 10,
                table_len: 10,
                ..
            })
        ));

        let bytes = encode_record(&[20, 0], pattern);
        assert!(matches!(
            decode_records(&bytes[..], RecordFormat::DualLabel),
            Err(RecordError::LabelOutOfRange {
                kind: LabelKind::Coarse,
                label: 20,
                ..
            })
        ));

        let mut bytes = encode_record(&[0, 99], pattern);
        bytes.extend(encode_record(&[0, 100], pattern));
        assert!(matches!(
            decode_records(&bytes[..], RecordFormat::DualLabel),
            Err(RecordError::LabelOutOfRange {
                record: 1,
                kind: LabelKind::Fine,
                label: 100,
                table_len: 100,
            })
        ));
    }

    fn write_cifar10(dir: &Path) {
        for (i, name) in Taxonomy::Cifar10.file_names().iter().enumerate() {
            let mut bytes = Vec::new();
            for j in 0..=i {
                bytes.extend(encode_record(&[(i + j) as u8 % 10], |_, _| i as u8));
            }
            fs::write(dir.join(name), bytes).unwrap();
        }
    }

    #[test]
    fn load_preserves_file_and_record_order() {
        let temp_dir = TempDir::new().unwrap();
        write_cifar10(temp_dir.path());

        let dataset = load_cifar10(temp_dir.path()).unwrap();
        assert_eq!(dataset.taxonomy(), Taxonomy::Cifar10);
        assert_eq!(dataset.batches().len(), 6);
        for (i, batch) in dataset.batches().iter().enumerate() {
            assert_eq!(batch.len(), i + 1);
            for (j, sample) in batch.iter().enumerate() {
                assert_eq!(sample.class().index(), (i + j) % 10);
                assert_eq!(sample.green()[0], i as u8);
                assert!(sample.superclass().is_none());
            }
        }
        assert_eq!(dataset.test_batch().map(|b| b.len()), Some(6));
    }

    #[test]
    fn load_cifar100_has_superclasses() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("train.bin"), encode_record(&[4, 55], pattern)).unwrap();
        fs::write(temp_dir.path().join("test.bin"), encode_record(&[13, 77], pattern)).unwrap();

        let dataset = load_cifar100(temp_dir.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        for sample in dataset.samples() {
            let superclass = sample.superclass().unwrap();
            assert!(superclass.index() < 20);
            assert!(sample.class().index() < 100);
        }
        assert_eq!(dataset.batches()[1][0].class().name(), "snail");
    }

    #[test]
    fn missing_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("train.bin"), encode_record(&[4, 55], pattern)).unwrap();

        let err = load_cifar100(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DataLoaderError::Io { .. }));
        assert_eq!(err.path(), temp_dir.path().join("test.bin"));
        assert!(err.to_string().contains("test.bin"));
    }

    #[test]
    fn corrupt_file_aborts_load() {
        let temp_dir = TempDir::new().unwrap();
        write_cifar10(temp_dir.path());
        let broken = temp_dir.path().join("data_batch_3.bin");
        fs::write(&broken, &encode_record(&[1], pattern)[..3000]).unwrap();

        let err = load_cifar10(temp_dir.path()).unwrap_err();
        match err {
            DataLoaderError::Decode { path, source } => {
                assert_eq!(path, broken);
                assert!(matches!(source, RecordError::Truncated { record: 0, .. }));
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            load(&missing, Taxonomy::Cifar10),
            Err(DataLoaderError::DirectoryNotFound(path)) if path == missing
        ));
    }
}
