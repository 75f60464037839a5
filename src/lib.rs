#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seeded escape-time fractal images
//!
//! Everything here is a pure function of a 32-bit seed and a handful
//! of validated integers.  The seed feeds a linear congruential
//! generator; the generator's draws, consumed in a fixed order, pick
//! the fractal variant (Mandelbrot or Julia, with the Burning Ship
//! available on explicit request), the zoom, the view center and the
//! Julia constant.  An escape-time engine then renders a grayscale
//! raster, and one of two self-authored container encoders turns the
//! raster into a file a stock image viewer will open: an 8-bit
//! paletted BMP, or a PNG whose zlib stream uses stored blocks so no
//! compression library is needed.
//!
//! Fix the inputs and the output bytes are fixed too; there is no
//! hidden state anywhere in the pipeline, which is what makes the
//! images reproducible and the whole thing trivially safe to run
//! from concurrent requests.

extern crate itertools;
extern crate num;

pub mod bmp;
pub mod checksum;
pub mod escape;
pub mod params;
pub mod pipeline;
pub mod png;
pub mod rng;

pub use params::Variant;
pub use pipeline::{generate, render_grid, EncodedImage, Format};
