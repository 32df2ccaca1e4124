//! Weighted counters and inverse-CDF sampling.
//!
//! [`WeightedCounter`] maps each topic to a non-negative weight. The sampler uses it
//! three ways: as an occurrence count (per document, per word, per topic), to pick a
//! document's dominant topic ([`WeightedCounter::argmax`]), and to draw a topic in
//! proportion to its weight ([`WeightedCounter::sample_weighted_with_rng`]).
//!
//! The key space is the dense range of topics `1..=K`, so the counter is a plain
//! `Vec<f64>` indexed by [`Topic::index`], fixed at `K` entries. Counts are stored as
//! `f64` so they can be fed straight into the sampling weights; they are always
//! integral.
//!
//! Sampling draws `u ~ Uniform[0, total)` and binary-searches the running sum of the
//! weights for the first prefix exceeding `u` (inverse CDF). The running sums can be
//! built in a caller's scratch buffer ([`sample_index_in_place`]) so the per-word draw
//! in a sweep does not allocate.
//! A zero-weight key never owns any part of `[0, total)` and is therefore never drawn.
//!
//! Notes:
//! - `*_with_rng` entrypoints exist for deterministic testing/benchmarking; the plain
//!   variants use `rand::rng()`.

use rand::prelude::*;

use crate::error::WeightError;
use crate::topic::Topic;

/// Draw an index with probability proportional to `weights[i]`.
///
/// Errors if `weights` is empty, contains a negative or non-finite weight, or sums
/// to zero. There is no fallback index: a caller handing in such weights has a
/// bookkeeping bug.
///
/// This copies `weights` into a prefix-sum buffer; loops that draw once per item
/// should fill a reused buffer and call [`sample_index_in_place`] instead.
pub fn sample_index_with_rng<R: Rng + ?Sized>(
    weights: &[f64],
    rng: &mut R,
) -> Result<usize, WeightError> {
    let mut cumulative = weights.to_vec();
    sample_index_in_place(&mut cumulative, rng)
}

/// [`sample_index_with_rng`] over a scratch buffer, without allocating.
///
/// The weights in `buf` are overwritten by their running sums, so the buffer must be
/// refilled before the next draw. Its contents are unspecified after an error.
pub fn sample_index_in_place<R: Rng + ?Sized>(
    buf: &mut [f64],
    rng: &mut R,
) -> Result<usize, WeightError> {
    if buf.is_empty() {
        return Err(WeightError::Empty);
    }

    let mut total = 0.0_f64;
    let mut last_positive = None;
    for (i, slot) in buf.iter_mut().enumerate() {
        let w = *slot;
        if !w.is_finite() {
            return Err(WeightError::NonFiniteWeight(w));
        }
        if w < 0.0 {
            return Err(WeightError::NegativeWeight(w));
        }
        if w > 0.0 {
            last_positive = Some(i);
        }
        total += w;
        *slot = total;
    }

    let last_positive = match last_positive {
        Some(i) if total.is_finite() => i,
        _ => return Err(WeightError::InvalidTotal(total)),
    };

    let target = rng.random::<f64>() * total;
    let idx = buf.partition_point(|&c| c <= target);

    // `target` can round up onto `total`; the draw then belongs to the last live key.
    Ok(idx.min(last_positive))
}

/// Dense topic → weight map.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedCounter {
    weights: Vec<f64>,
}

impl WeightedCounter {
    /// Counter over `num_topics` topics, all at zero.
    pub fn new(num_topics: usize) -> Self {
        Self {
            weights: vec![0.0; num_topics],
        }
    }

    /// Counter with weight `weights[i]` for the topic at index `i`.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Tally a sequence of topics into a counter over `num_topics` topics.
    ///
    /// # Panics
    ///
    /// Panics if a topic lies outside `1..=num_topics`.
    pub fn tally<I: IntoIterator<Item = Topic>>(num_topics: usize, topics: I) -> Self {
        let mut counter = Self::new(num_topics);
        for t in topics {
            counter.increment(t, 1.0);
        }
        counter
    }

    /// Number of topics this counter spans.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of `key`; 0 for a topic past the end of the counter.
    #[inline]
    pub fn get(&self, key: Topic) -> f64 {
        self.weights.get(key.index()).copied().unwrap_or(0.0)
    }

    /// Overwrite the weight of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is outside the counter's `1..=len()` topics.
    #[inline]
    pub fn set(&mut self, key: Topic, weight: f64) {
        self.weights[key.index()] = weight;
    }

    /// Add `delta` (possibly negative) to the weight of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is outside the counter's `1..=len()` topics. The counter
    /// never grows; a topic past `K` is a bookkeeping bug in the caller.
    #[inline]
    pub fn increment(&mut self, key: Topic, delta: f64) {
        self.weights[key.index()] += delta;
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Raw weights, indexed by [`Topic::index`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// `(topic, weight)` pairs in topic order.
    pub fn iter(&self) -> impl Iterator<Item = (Topic, f64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (Topic::from_index(i), w))
    }

    /// Topic with the largest weight.
    ///
    /// Ties go to the lowest topic id. Returns `None` when no topic has a positive
    /// weight, e.g. the counter of an empty document.
    pub fn argmax(&self) -> Option<Topic> {
        let mut best: Option<(Topic, f64)> = None;
        for (t, w) in self.iter() {
            if w <= 0.0 {
                continue;
            }
            match best {
                Some((_, b)) if w <= b => {}
                _ => best = Some((t, w)),
            }
        }
        best.map(|(t, _)| t)
    }

    /// Draw a topic with probability proportional to its weight.
    pub fn sample_weighted(&self) -> Result<Topic, WeightError> {
        let mut rng = rand::rng();
        self.sample_weighted_with_rng(&mut rng)
    }

    /// [`WeightedCounter::sample_weighted`] with a caller-supplied RNG.
    #[inline]
    pub fn sample_weighted_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Topic, WeightError> {
        sample_index_with_rng(&self.weights, rng).map(Topic::from_index)
    }
}
