//! Serializes an intensity grid into an 8-bit paletted BMP.
//!
//! The file is written top-down (negative height in the info header)
//! so the raster can be copied in the same row order the engine
//! produced it.  Each pixel byte indexes a 256-entry grayscale
//! palette, and rows are padded out to four-byte boundaries as the
//! format requires.

const FILE_HEADER_SIZE: usize = 14;
const INFO_HEADER_SIZE: usize = 40;
const PALETTE_SIZE: usize = 256 * 4;
const PIXEL_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE + PALETTE_SIZE;

/// Rows of an 8-bit BMP are padded to a multiple of four bytes.
fn row_stride(width: usize) -> usize {
    (width + 3) & !3
}

/// Encodes a row-major `width` by `height` intensity grid as a
/// complete BMP file.  The grid length must be `width * height`.
pub fn encode(pixels: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(pixels.len(), width * height);

    let stride = row_stride(width);
    let file_size = PIXEL_OFFSET + stride * height;
    let mut out = Vec::with_capacity(file_size);

    // File header: magic, total size, two reserved words, offset of
    // the pixel array.
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&(PIXEL_OFFSET as u32).to_le_bytes());

    // BITMAPINFOHEADER.  Height is stored negated to mark the raster
    // as top-down; 2835 pixels per meter is the conventional 96 DPI.
    out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(-(height as i64) as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&8u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // no compression
    out.extend_from_slice(&((stride * height) as u32).to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes()); // x pixels per meter
    out.extend_from_slice(&2835u32.to_le_bytes()); // y pixels per meter
    out.extend_from_slice(&256u32.to_le_bytes()); // colors used
    out.extend_from_slice(&256u32.to_le_bytes()); // important colors

    // Grayscale palette: blue, green, red, reserved per entry.
    for i in 0..=255u8 {
        out.extend_from_slice(&[i, i, i, 0]);
    }

    for row in pixels.chunks(width.max(1)).take(height) {
        out.extend_from_slice(row);
        out.resize(out.len() + stride - row.len(), 0);
    }
    debug_assert_eq!(out.len(), file_size);
    out
}
