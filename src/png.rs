// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Serializes an intensity grid into a minimal grayscale PNG without
//! leaning on a compression library.
//!
//! PNG requires the pixel data to travel inside a zlib stream, but
//! zlib permits "stored" DEFLATE blocks that carry the bytes
//! uncompressed.  The encoder emits the standard signature, an IHDR
//! chunk for 8-bit grayscale, a single IDAT chunk wrapping the
//! stored-block zlib stream, and the IEND terminator.  Every chunk
//! carries a CRC-32 over its type and data, and the zlib stream ends
//! with an Adler-32 over the raw scanlines; consuming decoders reject
//! the file if either is off by a bit.

use checksum::{adler32, crc32};

/// The eight-byte signature every PNG starts with.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// A stored DEFLATE block carries at most this many raw bytes; its
/// length field is sixteen bits.
const MAX_STORED_BLOCK: usize = 0xFFFF;

/// Appends one chunk: big-endian data length, the four-byte type, the
/// data, then a CRC-32 computed over type and data together.
fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let crc_start = out.len();
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    let crc = crc32(&out[crc_start..]);
    out.extend_from_slice(&crc.to_be_bytes());
}

/// Wraps raw bytes in a zlib stream of stored blocks: the 0x78 0x01
/// header, each block's five-byte header (final-block flag,
/// little-endian length, one's-complement length), the bytes
/// themselves, and the big-endian Adler-32 trailer.
///
/// Scanline payloads within the format's 320x200 clamp always fit a
/// single block; longer payloads split rather than overflow the
/// sixteen-bit length field.
fn zlib_store(raw: &[u8]) -> Vec<u8> {
    let blocks = (raw.len() + MAX_STORED_BLOCK - 1) / MAX_STORED_BLOCK;
    let mut out = Vec::with_capacity(2 + blocks.max(1) * 5 + raw.len() + 4);
    out.push(0x78);
    out.push(0x01);
    if raw.is_empty() {
        // Still need one (empty) final block to terminate the stream.
        out.extend_from_slice(&[0x01, 0x00, 0x00, 0xFF, 0xFF]);
    } else {
        let mut chunks = raw.chunks(MAX_STORED_BLOCK).peekable();
        while let Some(block) = chunks.next() {
            let len = block.len() as u16;
            out.push(if chunks.peek().is_none() { 0x01 } else { 0x00 });
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(&(!len).to_le_bytes());
            out.extend_from_slice(block);
        }
    }
    out.extend_from_slice(&adler32(raw).to_be_bytes());
    out
}

/// Encodes a row-major `width` by `height` intensity grid as a
/// complete grayscale PNG.  The grid length must be `width * height`.
pub fn encode(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height);

    // IHDR: dimensions, 8-bit depth, color type 0 (grayscale), and
    // zeroes for compression, filter and interlace methods.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.extend_from_slice(&[8, 0, 0, 0, 0]);

    // Each scanline is the row prefixed by filter type 0 (none).
    // Rows are sliced by index so every declared row carries its
    // filter byte even when the width is zero.
    let mut scanlines = Vec::with_capacity(height * (width + 1));
    for row in 0..height {
        scanlines.push(0);
        scanlines.extend_from_slice(&pixels[row * width..(row + 1) * width]);
    }

    let idat = zlib_store(&scanlines);

    let mut out = Vec::with_capacity(8 + 25 + 12 + idat.len() + 12);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    out
}
