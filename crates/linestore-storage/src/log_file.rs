//! Append-only log file
//!
//! A [`LogFile`] is a single on-disk file: a fixed header followed by
//! encoded records stored back to back. Appends go through an in-process
//! gate and an `O_APPEND` handle so concurrent writers cannot interleave
//! bytes; reads decode a point-in-time snapshot of the file and never
//! block appends.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::codec::{self, Decoded};
use crate::error::{CorruptionError, StoreError};
use crate::record::Record;

/// Marker every log file starts with. Exactly 21 bytes at offset zero;
/// record data begins immediately after.
pub const HEADER: &[u8] = b"linestore-lsfile/v1\n\n";

/// Append-only record log backed by a single file.
///
/// No file handle is held between operations: every append and read opens
/// the file anew, so a `LogFile` value is just the path plus the append
/// gate and is cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct LogFile {
    path: PathBuf,
    /// Serializes appends so two writers cannot interleave record bytes.
    append_gate: Mutex<()>,
}

impl LogFile {
    /// Create a new, empty log file at `path`.
    ///
    /// Writes the header and nothing else. Fails with an
    /// `AlreadyExists` I/O error if `path` is already taken; an existing
    /// log is never truncated.
    pub async fn create(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;
        file.write_all(HEADER).await?;
        file.sync_data().await?;

        info!(path = %path.display(), "Created log file");
        Ok(Self::from_path(path))
    }

    /// Open an existing log file at `path`.
    ///
    /// Fails with a `NotFound` I/O error if nothing is there. This only
    /// probes that the file can be opened for reading and writing; the
    /// header is verified on every read, so a damaged file surfaces as
    /// [`CorruptionError`] at that point rather than here.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        OpenOptions::new().read(true).write(true).open(&path).await?;

        info!(path = %path.display(), "Opened log file");
        Ok(Self::from_path(path))
    }

    /// Open the log file at `path`, creating it first if it does not exist.
    pub async fn open_or_create(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match Self::create(path.clone()).await {
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::AlreadyExists => {
                Self::open(path).await
            }
            other => other,
        }
    }

    fn from_path(path: PathBuf) -> Self {
        Self {
            path,
            append_gate: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the end of the log.
    ///
    /// The record's bytes land contiguously even under concurrent appends:
    /// the gate admits one writer at a time, and the file is opened in
    /// append mode so the write cannot clobber a concurrent grow. The write
    /// is synced to disk before this returns.
    #[instrument(skip(self, record), fields(id = %record.id))]
    pub async fn append(&self, record: &Record) -> Result<(), StoreError> {
        let bytes = codec::encode(record)?;

        let _guard = self.append_gate.lock().await;
        let mut file = OpenOptions::new().append(true).open(&self.path).await?;
        file.write_all(&bytes).await?;
        file.sync_data().await?;

        debug!(bytes = bytes.len(), "Appended record");
        Ok(())
    }

    /// Read every record in the log, oldest first.
    ///
    /// Decodes a snapshot of the file taken at the moment of the call;
    /// appends that land afterwards are not reflected. Any damage anywhere
    /// in the snapshot fails the whole read with
    /// [`StoreError::Corruption`], never a silently shortened result.
    pub async fn read_all(&self) -> Result<Vec<Record>, StoreError> {
        let data = tokio::fs::read(&self.path).await?;
        decode_log(&data)
    }

    /// Read the records whose id matches `id`, oldest first.
    ///
    /// An id that never appears yields an empty vec, not an error.
    pub async fn read_for_id(&self, id: &str) -> Result<Vec<Record>, StoreError> {
        let mut records = self.read_all().await?;
        records.retain(|r| r.id == id);
        Ok(records)
    }
}

/// Decode a full log image: the fixed header, then records back to back
/// until the bytes run out.
fn decode_log(data: &[u8]) -> Result<Vec<Record>, StoreError> {
    let mut body = data.strip_prefix(HEADER).ok_or(CorruptionError::Header)?;

    let mut records = Vec::new();
    let mut offset = HEADER.len() as u64;
    loop {
        match codec::decode_one(body) {
            Ok(Decoded::Record { record, consumed }) => {
                records.push(record);
                body = &body[consumed..];
                offset += consumed as u64;
            }
            Ok(Decoded::EndOfInput) => return Ok(records),
            Err(source) => return Err(CorruptionError::Record { offset, source }.into()),
        }
    }
}
