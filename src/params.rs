//! Derives the numeric parameters of one rendering from the seeded
//! generator: which fractal to draw, how far to zoom, where to center
//! the view, and (for Julia sets) the fixed constant added at each
//! iteration.  The order of the draws is contractual; reordering them
//! silently changes every image for a given seed.

use num::Complex;

use rng::Lcg;

/// The closed set of supported iteration rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Variant {
    /// `z' = z^2 + c`, with c taken from the pixel position.
    Mandelbrot,
    /// `z' = z^2 + k` for a fixed constant k, with z seeded from the
    /// pixel position.
    Julia,
    /// The Mandelbrot rule with the imaginary component folded
    /// through an absolute value before the constant is added.
    BurningShip,
}

impl Variant {
    /// Maps a request string onto a variant.  `"auto"` (and the empty
    /// string) return `None`, deferring the choice to the seed.  Any
    /// name that is not a known variant deliberately selects
    /// `Mandelbrot` rather than raising an error; the default arm is
    /// written out so the fallback is visible, not an accident of
    /// matching.
    pub fn from_name(name: &str) -> Option<Variant> {
        match name {
            "auto" | "" => None,
            "julia" => Some(Variant::Julia),
            "burningship" | "burning-ship" => Some(Variant::BurningShip),
            "mandelbrot" => Some(Variant::Mandelbrot),
            _ => Some(Variant::Mandelbrot),
        }
    }
}

/// Everything the escape-time engine needs to know about one
/// rendering.  Built once per generation call and read-only from then
/// on.
#[derive(Copy, Clone, Debug)]
pub struct FractalParams {
    /// Width of the viewed region on the complex plane.
    pub zoom: f64,
    /// Center of the viewed region.  Forced to the origin for Julia
    /// sets, which are framed symmetrically.
    pub center: Complex<f64>,
    /// The Julia constant.  Drawn for every variant to keep the
    /// generator sequence stable, but only the Julia rule reads it.
    pub julia: Complex<f64>,
    /// The iteration rule this rendering uses.
    pub variant: Variant,
}

impl FractalParams {
    /// Draws the parameter block from the generator.
    ///
    /// Draw order: variant (only when `requested` is `None`; values
    /// below 0.5 pick Mandelbrot, the rest Julia — BurningShip is
    /// never auto-selected), then zoom, centerX, centerY, juliaX,
    /// juliaY.  The center draws happen even for Julia, where the
    /// results are discarded, so that the julia draws land on the
    /// same generator states regardless of variant.
    pub fn derive(rng: &mut Lcg, requested: Option<Variant>) -> FractalParams {
        let variant = match requested {
            Some(v) => v,
            None => {
                if rng.next() < 0.5 {
                    Variant::Mandelbrot
                } else {
                    Variant::Julia
                }
            }
        };

        let zoom = 2.8 + rng.next() * 0.8;
        let center_x = -0.65 + (rng.next() - 0.5) * 0.3;
        let center_y = (rng.next() - 0.5) * 0.3;
        let center = if variant == Variant::Julia {
            Complex::new(0.0, 0.0)
        } else {
            Complex::new(center_x, center_y)
        };
        let julia = Complex::new((rng.next() - 0.5) * 0.8, (rng.next() - 0.5) * 0.8);

        FractalParams {
            zoom,
            center,
            julia,
            variant,
        }
    }
}
