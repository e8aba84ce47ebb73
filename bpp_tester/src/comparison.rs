//!
//! The byte-exact output comparison.
//!

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

///
/// The byte-exact output comparison.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The files have identical contents.
    Identical,
    /// The files differ.
    Different,
    /// The produced file is missing or unreadable.
    MissingOutput(PathBuf),
    /// The reference file is missing or unreadable.
    MissingReference(PathBuf),
}

///
/// The stream that failed to read.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The produced file.
    Output,
    /// The reference file.
    Reference,
}

impl Comparison {
    /// The read buffer size.
    const BUFFER_SIZE: usize = 64 * 1024;

    ///
    /// Compares the produced file against the reference.
    ///
    pub fn files(output: &Path, reference: &Path) -> Self {
        let Ok(output_file) = File::open(output) else {
            return Self::MissingOutput(output.to_owned());
        };
        let Ok(reference_file) = File::open(reference) else {
            return Self::MissingReference(reference.to_owned());
        };

        if let (Ok(output_metadata), Ok(reference_metadata)) =
            (output_file.metadata(), reference_file.metadata())
        {
            if output_metadata.len() != reference_metadata.len() {
                return Self::Different;
            }
        }

        match Self::readers(
            BufReader::with_capacity(Self::BUFFER_SIZE, output_file),
            BufReader::with_capacity(Self::BUFFER_SIZE, reference_file),
        ) {
            Ok(true) => Self::Identical,
            Ok(false) => Self::Different,
            Err(Side::Output) => Self::MissingOutput(output.to_owned()),
            Err(Side::Reference) => Self::MissingReference(reference.to_owned()),
        }
    }

    ///
    /// Whether the comparison counts as a pass.
    ///
    pub fn is_identical(&self) -> bool {
        matches!(self, Self::Identical)
    }

    ///
    /// Compares two streams to the end.
    ///
    /// The left stream is the produced output, the right one is the reference.
    ///
    fn readers<R1, R2>(mut left: R1, mut right: R2) -> Result<bool, Side>
    where
        R1: Read,
        R2: Read,
    {
        let mut left_buffer = vec![0u8; Self::BUFFER_SIZE];
        let mut right_buffer = vec![0u8; Self::BUFFER_SIZE];
        loop {
            let left_size = Self::fill(&mut left, left_buffer.as_mut_slice())
                .map_err(|_| Side::Output)?;
            let right_size = Self::fill(&mut right, right_buffer.as_mut_slice())
                .map_err(|_| Side::Reference)?;
            if left_buffer[..left_size] != right_buffer[..right_size] {
                return Ok(false);
            }
            if left_size == 0 {
                return Ok(true);
            }
        }
    }

    ///
    /// Reads until the buffer is full or the stream ends.
    ///
    fn fill<R>(reader: &mut R, buffer: &mut [u8]) -> std::io::Result<usize>
    where
        R: Read,
    {
        let mut size = 0;
        while size < buffer.len() {
            match reader.read(&mut buffer[size..]) {
                Ok(0) => break,
                Ok(read) => size += read,
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(error),
            }
        }
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::Comparison;
    use super::Side;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buffer: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::InvalidData))
        }
    }

    fn write(directory: &tempfile::TempDir, name: &str, data: &[u8]) -> std::path::PathBuf {
        let path = directory.path().join(name);
        std::fs::write(path.as_path(), data).expect("Temporary file writing");
        path
    }

    #[test]
    fn identical() {
        let directory = tempfile::TempDir::new().expect("Temporary directory");
        let output = write(&directory, "out", b"Gen\tlnL\n1\t-12.5\n");
        let reference = write(&directory, "ref", b"Gen\tlnL\n1\t-12.5\n");

        assert_eq!(
            Comparison::files(output.as_path(), reference.as_path()),
            Comparison::Identical
        );
    }

    #[test]
    fn same_length_different_bytes() {
        let directory = tempfile::TempDir::new().expect("Temporary directory");
        let output = write(&directory, "out", b"1\t-12.5\n");
        let reference = write(&directory, "ref", b"1\t-12.6\n");

        assert_eq!(
            Comparison::files(output.as_path(), reference.as_path()),
            Comparison::Different
        );
    }

    #[test]
    fn trailing_newline_matters() {
        let directory = tempfile::TempDir::new().expect("Temporary directory");
        let output = write(&directory, "out", b"1\t-12.5");
        let reference = write(&directory, "ref", b"1\t-12.5\n");

        assert!(!Comparison::files(output.as_path(), reference.as_path()).is_identical());
    }

    #[test]
    fn empty_files_are_identical() {
        let directory = tempfile::TempDir::new().expect("Temporary directory");
        let output = write(&directory, "out", b"");
        let reference = write(&directory, "ref", b"");

        assert!(Comparison::files(output.as_path(), reference.as_path()).is_identical());
    }

    #[test]
    fn missing_sides() {
        let directory = tempfile::TempDir::new().expect("Temporary directory");
        let present = write(&directory, "present", b"data");
        let absent = directory.path().join("absent");

        assert_eq!(
            Comparison::files(absent.as_path(), present.as_path()),
            Comparison::MissingOutput(absent.clone())
        );
        assert_eq!(
            Comparison::files(present.as_path(), absent.as_path()),
            Comparison::MissingReference(absent)
        );
    }

    #[test]
    fn streams_longer_than_the_buffer() {
        let left = vec![7u8; Comparison::BUFFER_SIZE * 2 + 3];
        let mut right = left.clone();

        assert!(Comparison::readers(left.as_slice(), right.as_slice()).unwrap());

        *right.last_mut().unwrap() = 8;
        assert!(!Comparison::readers(left.as_slice(), right.as_slice()).unwrap());
    }

    #[test]
    fn read_errors_name_the_failing_side() {
        let data = b"1\t-12.5\n".as_slice();

        assert_eq!(Comparison::readers(Broken, data), Err(Side::Output));
        assert_eq!(Comparison::readers(data, Broken), Err(Side::Reference));
    }
}
