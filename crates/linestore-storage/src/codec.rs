//! Record codec
//!
//! Encodes one [`Record`] to a self-delimiting byte sequence and decodes
//! one record back from a byte cursor, reporting exactly how many bytes
//! were consumed. Records are stored back to back with no length prefix or
//! separator, so boundaries are recovered solely by running [`decode_one`]
//! repeatedly; telling a clean end of input apart from a malformed tail is
//! therefore part of the contract, not a nicety.
//!
//! The wire format is postcard: every field is internally length-prefixed,
//! which is what makes the encoding self-delimiting.

use thiserror::Error;

use crate::record::Record;

/// Outcome of a single decode attempt against a byte cursor.
#[derive(Debug)]
pub enum Decoded {
    /// One record was decoded; `consumed` bytes were taken from the front
    /// of the cursor.
    Record {
        /// The decoded record.
        record: Record,
        /// Exact number of bytes the record occupied.
        consumed: usize,
    },
    /// The cursor held zero bytes: a clean record boundary.
    EndOfInput,
}

/// A record failed to serialize.
#[derive(Debug, Error)]
#[error("record encode failed: {0}")]
pub struct EncodeError(postcard::Error);

/// Bytes remained on the cursor but did not form a valid record.
#[derive(Debug, Error)]
#[error("record decode failed: {0}")]
pub struct DecodeError(postcard::Error);

/// Encode one record as a self-delimiting byte sequence.
pub fn encode(record: &Record) -> Result<Vec<u8>, EncodeError> {
    postcard::to_allocvec(record).map_err(EncodeError)
}

/// Decode at most one record from the front of `buf`.
///
/// Returns [`Decoded::EndOfInput`] only when `buf` is empty. Anything else
/// either decodes to exactly one record, with the byte count it consumed,
/// or fails with [`DecodeError`]: a truncated or corrupt tail is never
/// mistaken for a clean end of the log.
pub fn decode_one(buf: &[u8]) -> Result<Decoded, DecodeError> {
    if buf.is_empty() {
        return Ok(Decoded::EndOfInput);
    }

    let (record, rest) = postcard::take_from_bytes::<Record>(buf).map_err(DecodeError)?;
    Ok(Decoded::Record {
        record,
        consumed: buf.len() - rest.len(),
    })
}
