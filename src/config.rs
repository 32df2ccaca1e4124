//! Sampler configuration.
//!
//! [`LdaConfig`] is the user-facing knob set (builder methods, JSON via serde).
//! [`LdaConfig::validate`] turns it into [`SamplingParams`], the checked subset the
//! per-word loop reads.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of topics.
pub const DEFAULT_NUM_TOPICS: usize = 5;
/// Default number of sweeps.
pub const DEFAULT_SWEEPS: usize = 100;
/// Default document/topic smoothing.
pub const DEFAULT_ALPHA: f64 = 1.0;
/// Default word/topic smoothing.
pub const DEFAULT_BETA: f64 = 1.0;
/// Default smoothing added to each topic's total in the denominator.
///
/// Stands in for `beta * vocabulary_size`; it is a fixed constant, not derived
/// from the corpus.
pub const DEFAULT_TOPIC_SMOOTHING: f64 = 20_000.0;

/// Hyperparameters and run length for a Gibbs sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdaConfig {
    /// Number of topics `K`.
    pub num_topics: usize,
    /// Number of full sweeps over the corpus.
    pub sweeps: usize,
    /// Added to a document's count for each topic.
    pub alpha: f64,
    /// Added to a word's count for each topic.
    pub beta: f64,
    /// Added to each topic's corpus-wide total.
    pub topic_smoothing: f64,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: DEFAULT_NUM_TOPICS,
            sweeps: DEFAULT_SWEEPS,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            topic_smoothing: DEFAULT_TOPIC_SMOOTHING,
            seed: None,
        }
    }
}

impl LdaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_num_topics(mut self, num_topics: usize) -> Self {
        self.num_topics = num_topics;
        self
    }

    pub fn with_sweeps(mut self, sweeps: usize) -> Self {
        self.sweeps = sweeps;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_topic_smoothing(mut self, topic_smoothing: f64) -> Self {
        self.topic_smoothing = topic_smoothing;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the hyperparameters.
    ///
    /// Nothing is clamped: any out-of-range value is an error.
    pub fn validate(&self) -> Result<SamplingParams, ConfigError> {
        SamplingParams::new(self.num_topics, self.alpha, self.beta, self.topic_smoothing)
    }
}

/// Validated hyperparameters of the collapsed conditional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    num_topics: usize,
    alpha: f64,
    beta: f64,
    topic_smoothing: f64,
}

impl SamplingParams {
    pub fn new(
        num_topics: usize,
        alpha: f64,
        beta: f64,
        topic_smoothing: f64,
    ) -> Result<Self, ConfigError> {
        if num_topics == 0 {
            return Err(ConfigError::NoTopics(num_topics));
        }
        for (name, value) in [("alpha", alpha), ("beta", beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSmoothing { name, value });
            }
        }
        if !topic_smoothing.is_finite() || topic_smoothing <= 0.0 {
            return Err(ConfigError::InvalidTopicSmoothing(topic_smoothing));
        }
        Ok(Self {
            num_topics,
            alpha,
            beta,
            topic_smoothing,
        })
    }

    /// Defaults with `num_topics` topics.
    pub fn with_topics(num_topics: usize) -> Result<Self, ConfigError> {
        Self::new(
            num_topics,
            DEFAULT_ALPHA,
            DEFAULT_BETA,
            DEFAULT_TOPIC_SMOOTHING,
        )
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn topic_smoothing(&self) -> f64 {
        self.topic_smoothing
    }

    /// Unnormalized conditional weight of one topic for one word occurrence:
    ///
    /// `(doc_count + alpha) * (word_count + beta) / (topic_total + topic_smoothing)`
    ///
    /// All three counts must already exclude the occurrence being resampled.
    #[inline]
    pub fn weight(&self, doc_count: f64, word_count: f64, topic_total: f64) -> f64 {
        (doc_count + self.alpha) * (word_count + self.beta) / (topic_total + self.topic_smoothing)
    }
}
