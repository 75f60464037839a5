//! Ties the pieces together: seed in, container bytes out.
//!
//! The whole pipeline is a pure function of its arguments.  Each call
//! owns its own generator and its own intensity buffer, so concurrent
//! generations never touch shared state, and two calls with the same
//! arguments produce byte-identical output.

use bmp;
use escape::EscapeTimeEngine;
use params::{FractalParams, Variant};
use png;
use rng::Lcg;

/// The two container formats the pipeline can serialize into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// 8-bit paletted, top-down BMP.
    Bmp,
    /// 8-bit grayscale PNG with stored-block zlib framing.
    Png,
}

impl Format {
    /// The content-type label a caller should attach to the bytes.
    pub fn mime(self) -> &'static str {
        match self {
            Format::Bmp => "image/bmp",
            Format::Png => "image/png",
        }
    }

    /// Maps a request string onto a format; anything that is not
    /// `"png"` selects BMP.
    pub fn from_name(name: &str) -> Format {
        match name {
            "png" => Format::Png,
            _ => Format::Bmp,
        }
    }
}

/// The terminal artifact: an encoded container plus its format tag.
#[derive(Clone, Debug)]
pub struct EncodedImage {
    /// The complete container file.
    pub bytes: Vec<u8>,
    /// Which container `bytes` holds.
    pub format: Format,
}

impl EncodedImage {
    /// Convenience passthrough to the format's mime label.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}

/// Runs the pipeline up to the intensity grid: derive parameters from
/// the seed, render every pixel, shade the counts.  Exposed
/// separately from [`generate`] so the raster can be inspected
/// without decoding a container.
pub fn render_grid(
    seed: u32,
    width: usize,
    height: usize,
    max_iter: u32,
    variant: Option<Variant>,
) -> Vec<u8> {
    let mut rng = Lcg::new(seed);
    let params = FractalParams::derive(&mut rng, variant);
    EscapeTimeEngine::new(width, height, max_iter, params).render()
}

/// The full pipeline: seed to encoded container.  Callers are
/// responsible for bounding `width`, `height` and `max_iter`; the
/// nested pixel-by-iteration loop is the dominant cost.
pub fn generate(
    seed: u32,
    width: usize,
    height: usize,
    max_iter: u32,
    variant: Option<Variant>,
    format: Format,
) -> EncodedImage {
    let grid = render_grid(seed, width, height, max_iter, variant);
    let bytes = match format {
        Format::Bmp => bmp::encode(&grid, width, height),
        Format::Png => png::encode(&grid, width, height),
    };
    EncodedImage { bytes, format }
}
