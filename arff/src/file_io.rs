//! File access for ARFF text
//!
//! One size probe and one whole-file read per load. The bytes are held
//! either in a read-only memory map or in a heap buffer; both expose them
//! through [`TextSource`].

use crate::{Error, Result};
use arff_core::TextSource;
#[cfg(feature = "mmap")]
use memmap2::{Mmap, MmapOptions};
use std::fs;
use std::path::Path;

/// Query the size of `path` in bytes
///
/// A failed query is logged and reported as `None`; callers skip the size
/// check rather than fail.
pub fn probe_size(path: &Path) -> Option<u64> {
    match fs::metadata(path) {
        Ok(metadata) => {
            let size = metadata.len();
            tracing::debug!(path = %path.display(), size, "probed file size");
            Some(size)
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "could not query file size, skipping size limit"
            );
            None
        }
    }
}

/// File contents held in a read-only memory map
#[cfg(feature = "mmap")]
pub struct MmapSource {
    mmap: Mmap,
}

#[cfg(feature = "mmap")]
impl MmapSource {
    /// Map the whole file read-only
    pub fn open(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|err| Error::io(err, path))?;

        // SAFETY: Read-only mapping, the map owns its view and is dropped with the source
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|err| Error::io(err, path))?;
        Ok(Self { mmap })
    }
}

#[cfg(feature = "mmap")]
impl TextSource for MmapSource {
    fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }
}

/// File contents read into a heap buffer
pub struct BufferedSource {
    bytes: Vec<u8>,
}

impl BufferedSource {
    /// Read the whole file
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|err| Error::io(err, path))?;
        Ok(Self { bytes })
    }

    /// Take the buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl TextSource for BufferedSource {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Open `path` with the requested strategy
///
/// Empty files are always read buffered since there is nothing to map.
pub fn open_source(path: &Path, use_mmap: bool, size: Option<u64>) -> Result<Box<dyn TextSource>> {
    if cfg!(feature = "mmap") && use_mmap && size != Some(0) {
        tracing::debug!(path = %path.display(), "reading through memory map");
        return open_mapped(path);
    }

    tracing::debug!(path = %path.display(), "reading into buffer");
    Ok(Box::new(BufferedSource::open(path)?))
}

#[cfg(feature = "mmap")]
fn open_mapped(path: &Path) -> Result<Box<dyn TextSource>> {
    Ok(Box::new(MmapSource::open(path)?))
}

#[cfg(not(feature = "mmap"))]
fn open_mapped(path: &Path) -> Result<Box<dyn TextSource>> {
    Ok(Box::new(BufferedSource::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_probe_size() {
        let file = temp_file(b"@attribute a REAL\n");
        assert_eq!(probe_size(file.path()), Some(18));
        assert_eq!(probe_size(Path::new("/definitely/not/here.arff")), None);
    }

    #[test]
    fn test_buffered_source() {
        let file = temp_file(b"1,2,3\n");
        let source = BufferedSource::open(file.path()).unwrap();
        assert_eq!(source.text(), "1,2,3\n");
        assert_eq!(source.into_bytes(), b"1,2,3\n");
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_mmap_source_matches_buffered() {
        let file = temp_file(b"@data\n4,5,6\n");
        let mapped = MmapSource::open(file.path()).unwrap();
        let buffered = BufferedSource::open(file.path()).unwrap();
        assert_eq!(mapped.as_bytes(), buffered.as_bytes());
        assert_eq!(mapped.size(), 12);
    }

    #[test]
    fn test_open_source_strategies() {
        let file = temp_file(b"x");
        for use_mmap in [true, false] {
            let source = open_source(file.path(), use_mmap, Some(1)).unwrap();
            assert_eq!(source.as_bytes(), b"x");
        }

        let empty = temp_file(b"");
        let source = open_source(empty.path(), true, Some(0)).unwrap();
        assert!(source.as_bytes().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here.arff");
        let err = open_source(path, false, None).err().unwrap();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("here.arff"));
    }
}
