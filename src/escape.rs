// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time engine.
//!
//! An escape-time fractal counts, per pixel, how many applications of
//! an iteration rule it takes before the orbit of a complex number
//! leaves a disc of radius 2 around the origin.  Points whose orbits
//! never leave are "inside the set" and render black; everything else
//! is shaded by how quickly it escaped.  The engine maps each pixel
//! of the integral plane onto the complex plane, runs one of three
//! iteration rules, and hands the counts to the grayscale mapper.

use itertools::iproduct;
use num::Complex;

use params::{FractalParams, Variant};

/// Renders one intensity grid from a parameter block.  The engine
/// owns nothing mutable; `render` allocates and returns the buffer.
#[derive(Copy, Clone, Debug)]
pub struct EscapeTimeEngine {
    width: usize,
    height: usize,
    max_iter: u32,
    params: FractalParams,
}

impl EscapeTimeEngine {
    /// Builds an engine for one `width` by `height` rendering capped
    /// at `max_iter` iterations per pixel.
    pub fn new(width: usize, height: usize, max_iter: u32, params: FractalParams) -> Self {
        EscapeTimeEngine {
            width,
            height,
            max_iter,
            params,
        }
    }

    /// Maps a pixel of the integral plane onto the complex plane.
    /// The view is a square region of side `zoom` (stretched to the
    /// aspect ratio of the image) centered on `params.center`.
    pub fn pixel_to_point(&self, x: usize, y: usize) -> Complex<f64> {
        let w = self.width as f64;
        let h = self.height as f64;
        Complex::new(
            (x as f64 - w / 2.0) * self.params.zoom / w + self.params.center.re,
            (y as f64 - h / 2.0) * self.params.zoom / h + self.params.center.im,
        )
    }

    /// Counts iterations until the orbit of `c` escapes the radius-2
    /// disc, up to the cap.  The squared threshold of 4 is a format
    /// contract shared by all three rules, not a tunable.  A Julia
    /// start point already outside the disc reports zero.
    fn escape_time(&self, c: Complex<f64>) -> u32 {
        let mut z = match self.params.variant {
            Variant::Julia => c,
            Variant::Mandelbrot | Variant::BurningShip => Complex::new(0.0, 0.0),
        };
        let mut i = 0;
        while i < self.max_iter && z.norm_sqr() <= 4.0 {
            z = match self.params.variant {
                Variant::Mandelbrot => z * z + c,
                Variant::Julia => z * z + self.params.julia,
                Variant::BurningShip => Complex::new(
                    z.re * z.re - z.im * z.im + c.re,
                    (2.0 * z.re * z.im).abs() + c.im,
                ),
            };
            i += 1;
        }
        i
    }

    /// Renders the full grid in row-major order, one intensity byte
    /// per pixel.
    pub fn render(&self) -> Vec<u8> {
        let mut grid = Vec::with_capacity(self.width * self.height);
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let i = self.escape_time(self.pixel_to_point(x, y));
            grid.push(shade(i, self.max_iter));
        }
        grid
    }
}

/// Maps an escape count onto an 8-bit intensity.  Counts that reach
/// the cap are inside the set and map to black; everything else is
/// shaded on a square-root curve, which spreads the low counts out
/// far more than a linear ramp would.  The curve is part of the
/// output contract and must not be replaced with a linear mapping.
pub fn shade(i: u32, max_iter: u32) -> u8 {
    if i == max_iter {
        0
    } else {
        (255.0 * (f64::from(i) / f64::from(max_iter)).sqrt()).floor() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;
    use params::{FractalParams, Variant};

    fn mandel_params() -> FractalParams {
        FractalParams {
            zoom: 4.0,
            center: Complex::new(0.0, 0.0),
            julia: Complex::new(0.0, 0.0),
            variant: Variant::Mandelbrot,
        }
    }

    #[test]
    fn origin_never_escapes() {
        let engine = EscapeTimeEngine::new(3, 3, 100, mandel_params());
        assert_eq!(engine.escape_time(Complex::new(0.0, 0.0)), 100);
    }

    #[test]
    fn far_points_escape_immediately() {
        let engine = EscapeTimeEngine::new(3, 3, 100, mandel_params());
        assert_eq!(engine.escape_time(Complex::new(3.0, 3.0)), 1);
    }

    #[test]
    fn julia_outside_radius_reports_zero() {
        let mut p = mandel_params();
        p.variant = Variant::Julia;
        let engine = EscapeTimeEngine::new(3, 3, 100, p);
        assert_eq!(engine.escape_time(Complex::new(3.0, 3.0)), 0);
    }

    #[test]
    fn pixel_mapping_is_centered() {
        let engine = EscapeTimeEngine::new(4, 4, 10, mandel_params());
        assert_eq!(engine.pixel_to_point(2, 2), Complex::new(0.0, 0.0));
        assert_eq!(engine.pixel_to_point(0, 0), Complex::new(-2.0, -2.0));
    }

    #[test]
    fn shade_is_black_at_the_cap_and_bounded_elsewhere() {
        let max = 50;
        assert_eq!(shade(max, max), 0);
        assert_eq!(shade(0, max), 0);
        for i in 1..max {
            assert!(shade(i, max) > 0);
        }
        // The curve never saturates below the cap.
        assert!(shade(max - 1, max) < 255);
        // Monotone in the count below the cap.
        assert!(shade(1, max) < shade(25, max));
        assert!(shade(25, max) < shade(49, max));
    }

    #[test]
    fn burning_ship_differs_from_mandelbrot() {
        let mut ship = mandel_params();
        ship.variant = Variant::BurningShip;
        let a = EscapeTimeEngine::new(6, 6, 30, mandel_params()).render();
        let b = EscapeTimeEngine::new(6, 6, 30, ship).render();
        assert_ne!(a, b);
    }

    #[test]
    fn render_is_row_major_and_sized() {
        let engine = EscapeTimeEngine::new(5, 3, 10, mandel_params());
        let grid = engine.render();
        assert_eq!(grid.len(), 15);
        // Row 1 starts at offset 5: the pixel there must match a
        // direct computation for (0, 1).
        let c = engine.pixel_to_point(0, 1);
        assert_eq!(grid[5], shade(engine.escape_time(c), 10));
    }
}
