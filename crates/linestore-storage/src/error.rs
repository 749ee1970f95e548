//! Storage error types

use thiserror::Error;

use crate::codec;

/// Errors surfaced by log file operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for appending.
    #[error(transparent)]
    Encode(#[from] codec::EncodeError),

    /// The file's contents do not form a valid log.
    #[error("corrupt log: {0}")]
    Corruption(#[from] CorruptionError),
}

/// The log file exists and is readable but its contents are not a valid log.
///
/// Corruption is detected on read, never silently skipped: a log that fails
/// to decode yields this error rather than the records that happened to
/// parse before the damage.
#[derive(Debug, Error)]
pub enum CorruptionError {
    /// The file does not start with the log header.
    #[error("missing or malformed log header")]
    Header,

    /// A record body failed to decode. `offset` is the byte position within
    /// the file where the malformed record starts.
    #[error("malformed record at byte offset {offset}: {source}")]
    Record {
        offset: u64,
        source: codec::DecodeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_corruption_display() {
        let err = StoreError::from(CorruptionError::Header);
        assert_eq!(
            err.to_string(),
            "corrupt log: missing or malformed log header"
        );
    }

    #[test]
    fn test_record_corruption_reports_offset() {
        let decode = codec::decode_one(&[0xFF, 0xFF, 0xFF, 0xFF]).unwrap_err();
        let err = CorruptionError::Record {
            offset: 21,
            source: decode,
        };
        assert!(
            err.to_string()
                .starts_with("malformed record at byte offset 21")
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StoreError::from(io);
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
