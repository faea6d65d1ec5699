use crate::artifacts::core::error::{ObjectError, ObjectResult};
use bytes::Bytes;
use flate2::{Decompress, FlushDecompress, Status};
use std::io;

/// Length of the zlib stream header preceding the deflate data
pub const ZLIB_HEADER_LENGTH: usize = 2;

/// Inflation service used by the object reader
pub trait Decompressor: Send + Sync {
    /// Inflate `data`, ignoring its first `offset` bytes
    fn inflate(&self, data: &[u8], offset: usize) -> ObjectResult<Bytes>;
}

/// Raw deflate decoder over a zlib stream whose header is skipped by offset
///
/// The output buffer grows as needed. Input that ends before the deflate
/// stream is complete is an error; the adler-32 trailer is not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZlibDecompressor;

impl Decompressor for ZlibDecompressor {
    fn inflate(&self, data: &[u8], offset: usize) -> ObjectResult<Bytes> {
        let stream = data
            .get(offset..)
            .ok_or_else(|| truncated("compressed object shorter than its stream header"))?;

        let mut inflater = Decompress::new(false);
        // starting estimate; the buffer grows when the output outruns it
        let mut decompressed_content =
            Vec::with_capacity(stream.len().saturating_mul(4).max(64));

        loop {
            let consumed = inflater.total_in();
            let produced = inflater.total_out();
            let input = &stream[consumed as usize..];

            let status = inflater
                .decompress_vec(input, &mut decompressed_content, FlushDecompress::None)
                .map_err(|err| {
                    ObjectError::Decompression(io::Error::new(io::ErrorKind::InvalidData, err))
                })?;

            if status == Status::StreamEnd {
                break;
            }
            if decompressed_content.len() == decompressed_content.capacity() {
                decompressed_content.reserve(decompressed_content.capacity());
                continue;
            }
            if inflater.total_in() == consumed && inflater.total_out() == produced {
                return Err(truncated("compressed object ends before its deflate stream"));
            }
        }

        Ok(decompressed_content.into())
    }
}

fn truncated(reason: &str) -> ObjectError {
    ObjectError::Decompression(io::Error::new(io::ErrorKind::UnexpectedEof, reason))
}
