use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::error::{Result, ScanError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads a source file as UTF-8 text, dropping a leading byte-order mark.
pub fn read_source(file_path: &Path) -> Result<String> {
    let bytes = read_bytes(file_path).map_err(|source| ScanError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;
    decode_source(bytes).map_err(|source| ScanError::Decode {
        path: file_path.to_path_buf(),
        source,
    })
}

/// Decodes raw file bytes, tolerating a UTF-8 BOM prefix.
pub fn decode_source(mut bytes: Vec<u8>) -> std::result::Result<String, std::string::FromUtf8Error> {
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    String::from_utf8(bytes)
}

fn read_bytes(file_path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(file_path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = Vec::with_capacity(file_size);
    reader.read_to_end(&mut content)?;
    Ok(content)
}
