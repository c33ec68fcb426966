//! Digest and compression primitives shared by every object kind.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use sha1::{Digest, Sha1};

use super::id::{Id, ID_LEN};
use crate::{Error, Result};

/// Computes the ID of a fully serialized object (header included).
pub fn digest(serialized: &[u8]) -> Id {
    let mut hasher = Sha1::new();
    hasher.update(serialized);

    let mut id = [0u8; ID_LEN];
    id.copy_from_slice(hasher.finalize().as_slice());
    Id::from(id)
}

/// Compresses bytes into a self-describing zlib stream.
pub fn compress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Inverse of `compress`.
///
/// A stream that is malformed or ends before the zlib trailer
/// is reported as `Error::CorruptObject`.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len() * 2 + 64);

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity().max(64));
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let input = &bytes[before_in as usize..];

        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::Finish)
            .map_err(|e| Error::CorruptObject(e.to_string()))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;
        if stalled && out.len() < out.capacity() {
            return Err(Error::CorruptObject(
                "compressed stream ended unexpectedly".to_string(),
            ));
        }
    }
}
