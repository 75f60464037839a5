//! The two checksums the PNG container requires: CRC-32 over each
//! chunk, and Adler-32 over the zlib payload.  Both are small pure
//! functions over byte slices so they can be tested directly against
//! the published reference vectors, independently of the encoder.

/// The reflected CRC-32 polynomial used by PNG (and zlib, gzip, ...).
const CRC_POLY: u32 = 0xEDB8_8320;

const CRC_TABLE: [u32; 256] = build_crc_table();

const fn build_crc_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { CRC_POLY ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Standard table-driven CRC-32: initial value all-ones, reflected
/// polynomial 0xEDB88320, final complement.
pub fn crc32(data: &[u8]) -> u32 {
    let mut c = u32::max_value();
    for &byte in data {
        c = CRC_TABLE[((c ^ u32::from(byte)) & 0xFF) as usize] ^ (c >> 8);
    }
    !c
}

/// Adler-32 as required by the zlib framing: two running sums modulo
/// 65521, `a` starting at 1 and `b` at 0, combined as `b << 16 | a`.
pub fn adler32(data: &[u8]) -> u32 {
    const MOD: u32 = 65_521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + u32::from(byte)) % MOD;
        b = (b + a) % MOD;
    }
    (b << 16) | a
}
