//! Error types.
//!
//! Three layers, innermost first:
//! - [`WeightError`]: the weighted-sampling primitive was handed weights it cannot draw from.
//! - [`ConfigError`]: hyperparameters rejected before any sampling happens.
//! - [`LdaError`]: everything the document/corpus/driver layer can report, including
//!   bookkeeping faults (a count going negative) that must abort the run.

use std::fmt;

use thiserror::Error;

use crate::topic::Topic;

/// Errors from weighted (inverse-CDF) sampling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    /// There were no keys to draw from.
    #[error("cannot sample from an empty set of weights")]
    Empty,
    /// Weight is not finite (NaN/inf).
    #[error("weight must be finite (got {0})")]
    NonFiniteWeight(f64),
    /// Weight is negative.
    #[error("weight must be >= 0 (got {0})")]
    NegativeWeight(f64),
    /// All weights are zero, or their sum overflowed.
    #[error("total weight must be finite and > 0 (got {0})")]
    InvalidTotal(f64),
}

/// Rejected hyperparameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("number of topics must be >= 1 (got {0})")]
    NoTopics(usize),

    #[error("{name} must be finite and >= 0 (got {value})")]
    InvalidSmoothing { name: &'static str, value: f64 },

    #[error("topic_smoothing must be finite and > 0 (got {0})")]
    InvalidTopicSmoothing(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Which count table a bookkeeping fault was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountTable {
    /// A document's own topic counter.
    Document,
    /// The corpus-wide word/topic table.
    WordTopic,
    /// The corpus-wide per-topic totals.
    TopicTotal,
}

impl fmt::Display for CountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => f.write_str("document topic count"),
            Self::WordTopic => f.write_str("word/topic count"),
            Self::TopicTotal => f.write_str("topic total"),
        }
    }
}

/// Errors from building or sampling a corpus.
#[derive(Error, Debug)]
pub enum LdaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("sampling failed: {0}")]
    Weight(#[from] WeightError),

    #[error("{table} for topic {topic} would go negative")]
    NegativeCount { table: CountTable, topic: Topic },

    #[error("topic id {id} is outside 1..={num_topics}")]
    TopicOutOfRange { id: usize, num_topics: usize },

    #[error("document {name:?} has {words} words but {topics} topic assignments")]
    LengthMismatch {
        name: String,
        words: usize,
        topics: usize,
    },

    #[error("document {name:?} was built for {found} topics, corpus has {expected}")]
    TopicCountMismatch {
        name: String,
        found: usize,
        expected: usize,
    },

    #[error("word {0:?} is not in the corpus vocabulary")]
    UnknownWord(String),

    #[error("count tables out of sync: {0}")]
    Inconsistent(String),
}

pub type Result<T> = std::result::Result<T, LdaError>;
