// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A tiny deterministic pseudo-random stream.
//!
//! Every image this crate produces is a pure function of a 32-bit
//! seed, so the generator is the root of the whole contract: the
//! sequence of draws, and the order in which other modules consume
//! them, must never change.  The generator is a plain linear
//! congruential generator over a 32-bit word, and the state is a
//! value owned by exactly one generation call.  There is no global
//! generator anywhere in the crate, so concurrent generations cannot
//! interfere with each other.

/// Advances a generator state by one step of the linear congruential
/// recurrence `state * 1664525 + 1013904223 (mod 2^32)`.  Exposed as
/// a pure function so the transition can be tested against known
/// vectors independently of any owning struct.
#[inline]
pub fn step(state: u32) -> u32 {
    state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223)
}

/// The seeded generator.  Construct one per image generation and let
/// it go out of scope when the parameters have been drawn.
#[derive(Copy, Clone, Debug)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Starts a new stream from a 32-bit seed.
    pub fn new(seed: u32) -> Lcg {
        Lcg { state: seed }
    }

    /// Advances the state and returns the new state scaled into
    /// [0, 1].  The scaling divisor is `u32::MAX`, not `2^32`; this
    /// is part of the reproducibility contract, and it means the one
    /// state equal to the divisor yields exactly 1.0.  Consumers
    /// treat the draw as half-open and the boundary draw falls into
    /// the top bucket of whatever range they map it onto.
    pub fn next(&mut self) -> f64 {
        self.state = step(self.state);
        f64::from(self.state) / f64::from(u32::max_value())
    }
}
