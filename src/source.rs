use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;

const BOM: char = '\u{feff}';

/// Read the whole input document as text. A leading byte-order mark is dropped.
pub fn read_document(path: &Path) -> Result<String, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut text = String::from_utf8(bytes).map_err(|_| ConvertError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_text() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "# A\nbody\n").unwrap();
        assert_eq!(read_document(file.path()).unwrap(), "# A\nbody\n");
    }

    #[test]
    fn strips_bom() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\u{feff}# A\n").unwrap();
        assert_eq!(read_document(file.path()).unwrap(), "# A\n");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }));
        assert!(err.to_string().contains("nope.md"));
    }

    #[test]
    fn invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'#', b' ', 0xff, 0xfe, b'\n']).unwrap();
        assert!(matches!(
            read_document(file.path()),
            Err(ConvertError::InvalidEncoding { .. })
        ));
    }
}
