//! The one and only source of randomness for map generation and exploration.
//!
//! Every random decision made while building or exploring a map is drawn from
//! a [SeededRandom] stream, in a fixed order. The order of draws is just as
//! much a part of the output as the seed is: adding, removing or reordering a
//! single draw changes every map generated after that point.

/// A deterministic stream of pseudo-random floats in `[0, 1]`, seeded from a
/// string.
///
/// The seed string is folded into a 32-bit hash (`hash * 31 + c` over its
/// UTF-16 code units, wrapping), and then every draw advances the state with
/// a linear congruential step. The step is evaluated with `f64` arithmetic:
/// once the state gets large, the product no longer fits in 53 bits of
/// mantissa and gets rounded. That rounding is intentional, it's what makes
/// maps line up with ones produced by the browser version of the tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRandom {
    state: i32,
}

impl SeededRandom {
    const MULTIPLIER: f64 = 1_103_515_245.0;
    const INCREMENT: f64 = 12_345.0;
    const MASK: u32 = 0x7fff_ffff;

    /// Initialize a stream from a seed. The empty string is a perfectly good
    /// seed (its hash is 0).
    pub fn new(seed: &str) -> Self {
        let state = seed.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        });
        Self { state }
    }

    /// Get the next value in the stream. Values are in `[0, 1]`; exactly 1.0
    /// is possible (but very unlikely), so callers that turn this into an
    /// index should go through [Self::index].
    pub fn next_f64(&mut self) -> f64 {
        let product =
            f64::from(self.state) * Self::MULTIPLIER + Self::INCREMENT;
        // |product| < 2^62, so the cast is exact. Then keep the low 31 bits
        self.state = ((product as i64) as u32 & Self::MASK) as i32;
        f64::from(self.state) / f64::from(Self::MASK)
    }

    /// Draw once and check if the value falls below `probability`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Draw an index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Pick a uniformly random element from a slice. An empty slice returns
    /// `None` **without** consuming a draw.
    pub fn pick<T: Clone>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.index(items.len())].clone())
        }
    }
}
