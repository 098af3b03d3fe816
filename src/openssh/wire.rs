//! SSH wire format primitives (RFC 4251 §5)
//!
//! Only the two types the OpenSSH key container needs are supported:
//! - `uint32`: 4 bytes, big-endian
//! - `string`: a `uint32` byte length followed by the raw bytes
//!
//! Fields carry no type tags, so the reader must know the schema.

use crate::error::{EdkeyError, Result};

/// Encode a `uint32` in network byte order
pub fn encode_u32(n: u32) -> [u8; 4] {
    n.to_be_bytes()
}

/// Largest payload a `string` length prefix can describe
pub const MAX_STRING_LEN: usize = u32::MAX as usize;

/// Encode a length-prefixed `string`
///
/// The prefix counts bytes, not characters, so UTF-8 text goes through here
/// unchanged.
///
/// # Panics
/// Panics if `b` is longer than [`MAX_STRING_LEN`]. Callers bound
/// unbounded inputs (the key comment) before encoding.
pub fn encode_bytes(b: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + b.len());
    put_bytes(&mut out, b);
    out
}

fn put_bytes(out: &mut Vec<u8>, b: &[u8]) {
    let len = match u32::try_from(b.len()) {
        Ok(len) => len,
        Err(_) => panic!("wire string of {} bytes exceeds the u32 length prefix", b.len()),
    };
    out.extend_from_slice(&encode_u32(len));
    out.extend_from_slice(b);
}

/// One field of a record, in wire order
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    U32(u32),
    Bytes(&'a [u8]),
    /// Appended as-is with no length prefix (used for the padding tail)
    Raw(&'a [u8]),
}

impl Field<'_> {
    /// Encoded length of this field in bytes
    pub fn encoded_len(&self) -> usize {
        match self {
            Field::U32(_) => 4,
            Field::Bytes(b) => 4 + b.len(),
            Field::Raw(b) => b.len(),
        }
    }
}

/// Concatenate the encodings of `fields` in the given order
///
/// # Panics
/// Panics if a `Bytes` field is longer than [`MAX_STRING_LEN`].
pub fn encode_record(fields: &[Field<'_>]) -> Vec<u8> {
    let mut out = Vec::with_capacity(record_len(fields));
    for field in fields {
        match *field {
            Field::U32(n) => out.extend_from_slice(&encode_u32(n)),
            Field::Bytes(b) => put_bytes(&mut out, b),
            Field::Raw(b) => out.extend_from_slice(b),
        }
    }
    out
}

/// Encoded length of a record without building it
pub fn record_len(fields: &[Field<'_>]) -> usize {
    fields.iter().map(Field::encoded_len).sum()
}

/// Cursor over wire-encoded bytes
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Number of bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let raw = self.take(4)?;
        Ok(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    /// Read a length-prefixed `string` as raw bytes
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    /// Read a length-prefixed `string` that must be valid UTF-8
    pub fn read_str(&mut self) -> Result<&'a str> {
        let raw = self.read_bytes()?;
        std::str::from_utf8(raw)
            .map_err(|e| EdkeyError::Malformed(format!("строковое поле не в UTF-8: {}", e)))
    }

    /// Read exactly `len` unprefixed bytes
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.buf.len() {
            return Err(EdkeyError::Truncated);
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Consume and return everything left
    pub fn rest(&mut self) -> &'a [u8] {
        std::mem::take(&mut self.buf)
    }

    /// Fail unless every byte has been consumed
    pub fn finish(self) -> Result<()> {
        if self.buf.is_empty() {
            Ok(())
        } else {
            Err(EdkeyError::TrailingData(self.buf.len()))
        }
    }
}
