//! Injectable randomness.
//!
//! Every roll in the engine goes through [`RandomSource`], so a run can be
//! replayed from a seed or from a scripted list of draws.

use rand::Rng;
use uuid::Uuid;

/// A uniform source of floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Returns true with probability `chance`.
    fn roll_chance(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }

    /// Uniform integer in `min..=max`.
    fn roll_u32(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as f64 + 1.0;
        let offset = (self.next_f64() * span) as u32;
        min + offset.min(max - min)
    }

    /// Uniform float in `[min, max]`.
    fn roll_f64(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    /// Uniform index into a slice of `len` elements. `len` must be non-zero.
    fn roll_index(&mut self, len: usize) -> usize {
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.roll_index(items.len())]
    }
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// A v4 UUID built from two draws, so seeded runs reproduce their ids.
pub fn uuid_from_source(rng: &mut impl RandomSource) -> Uuid {
    let scale = (1u64 << 53) as f64;
    let hi = (rng.next_f64() * scale) as u64;
    let lo = (rng.next_f64() * scale) as u64;
    let bits = (u128::from(hi) << 64) | u128::from(lo);
    uuid::Builder::from_random_bytes(bits.to_be_bytes()).into_uuid()
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "ScriptedSource needs at least one draw");
        Self { draws, cursor: 0 }
    }

    /// Always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

/// `count` evenly spaced draws covering `[0, 1)`: `(k + 0.5) / count`.
#[derive(Debug, Clone)]
pub struct EvenSweep {
    count: u64,
    next: u64,
}

impl EvenSweep {
    pub fn new(count: u64) -> Self {
        Self {
            count: count.max(1),
            next: 0,
        }
    }
}

impl RandomSource for EvenSweep {
    fn next_f64(&mut self) -> f64 {
        let k = self.next % self.count;
        self.next += 1;
        (k as f64 + 0.5) / self.count as f64
    }
}
