mod errors;
pub use errors::ReadError;

use std::{fs, path::Path};

pub const MAX_FILE_SIZE: u64 = 1_000_000;

/// Loads the instructions file, refusing empty and oversized files.
pub fn read_instructions(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ReadError::EmptyPath);
    }

    let io_error = |source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = fs::metadata(path).map_err(io_error)?.len();
    tracing::debug!("reading {} ({} bytes)", path.display(), size);

    if size == 0 {
        return Err(ReadError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    if size > MAX_FILE_SIZE {
        return Err(ReadError::TooLarge {
            path: path.to_path_buf(),
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(data: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn reads_contents() {
        let file = temp_file(b"L12\nR7\n");
        assert_eq!(read_instructions(file.path()).unwrap(), "L12\nR7\n");
    }

    #[test]
    fn empty_path() {
        assert!(matches!(read_instructions(""), Err(ReadError::EmptyPath)));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_instructions(&path) {
            Err(ReadError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file() {
        let file = temp_file(b"");
        assert!(matches!(
            read_instructions(file.path()),
            Err(ReadError::EmptyFile { .. })
        ));
    }

    #[test]
    fn too_large() {
        let file = temp_file(&vec![b'\n'; MAX_FILE_SIZE as usize + 1]);
        match read_instructions(file.path()) {
            Err(ReadError::TooLarge { size, limit, .. }) => {
                assert_eq!(size, MAX_FILE_SIZE + 1);
                assert_eq!(limit, MAX_FILE_SIZE);
            }
            other => panic!("expected too large error, got {other:?}"),
        }
    }

    #[test]
    fn at_size_limit() {
        let file = temp_file(&vec![b'\n'; MAX_FILE_SIZE as usize]);
        assert!(read_instructions(file.path()).is_ok());
    }

    #[test]
    fn invalid_utf8() {
        let file = temp_file(&[b'L', 0xff, 0xfe]);
        assert!(matches!(
            read_instructions(file.path()),
            Err(ReadError::Io { .. })
        ));
    }
}
