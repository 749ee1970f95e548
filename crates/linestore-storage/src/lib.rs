//! # Linestore Storage
//!
//! Append-only log file storage for linestore.
//!
//! This crate provides the on-disk format and file operations: records are
//! encoded with a self-delimiting codec and written back to back after a
//! fixed header, so the file needs no index and reads are a single
//! front-to-back scan.
//!
//! ## Features
//!
//! - **Record**: One log entry - id, timestamped instant, event, value
//! - **Codec**: Self-delimiting encode/decode with exact byte accounting
//! - **LogFile**: Create/open/append/read operations over a single file
//! - **Corruption detection**: A damaged file fails the read with the
//!   byte offset of the damage, never a silently shortened result
//!
//! ## Example
//!
//! ```rust,ignore
//! use linestore_storage::{LogFile, Record};
//!
//! #[tokio::main]
//! async fn main() {
//!     let log = LogFile::open_or_create("linestore.ls").await.unwrap();
//!
//!     // Append a record; the timestamp is assigned on construction.
//!     log.append(&Record::new("sensor-1", "temperature", "21.5"))
//!         .await
//!         .unwrap();
//!
//!     // Read everything back, oldest first.
//!     let all = log.read_all().await.unwrap();
//!     assert_eq!(all.len(), 1);
//!
//!     // Or just the records for one id.
//!     let mine = log.read_for_id("sensor-1").await.unwrap();
//!     assert_eq!(mine[0].value, "21.5");
//! }
//! ```

pub mod codec;
pub mod error;
pub mod log_file;
pub mod record;

// Re-exports
pub use codec::{DecodeError, Decoded, EncodeError};
pub use error::{CorruptionError, StoreError};
pub use log_file::{HEADER, LogFile};
pub use record::Record;
