//! One document's sampled state.

use rand::prelude::*;

use crate::config::SamplingParams;
use crate::corpus::TopicCounts;
use crate::counter::{sample_index_in_place, WeightedCounter};
use crate::error::{ConfigError, CountTable, LdaError, Result};
use crate::topic::Topic;

/// A document: its words, the current topic of each word, and a tally of those topics.
///
/// `topics[i]` is the assignment for `words[i]`, and `topic_count` always equals the
/// tally of `topics`.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    words: Vec<String>,
    topics: Vec<Topic>,
    topic_count: WeightedCounter,
}

impl Document {
    /// Build a document with each word assigned a uniformly random topic.
    pub fn new(name: impl Into<String>, words: Vec<String>, num_topics: usize) -> Result<Self> {
        let mut rng = rand::rng();
        Self::new_with_rng(name, words, num_topics, &mut rng)
    }

    /// [`Document::new`] with a caller-supplied RNG.
    pub fn new_with_rng<R: Rng + ?Sized>(
        name: impl Into<String>,
        words: Vec<String>,
        num_topics: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_topics == 0 {
            return Err(ConfigError::NoTopics(num_topics).into());
        }
        let topics = words
            .iter()
            .map(|_| Topic::from_index(rng.random_range(0..num_topics)))
            .collect();
        Self::with_topics(name, words, topics, num_topics)
    }

    /// Build a document from a fixed topic assignment.
    pub fn with_topics(
        name: impl Into<String>,
        words: Vec<String>,
        topics: Vec<Topic>,
        num_topics: usize,
    ) -> Result<Self> {
        let name = name.into();
        if words.len() != topics.len() {
            return Err(LdaError::LengthMismatch {
                name,
                words: words.len(),
                topics: topics.len(),
            });
        }
        if let Some(bad) = topics.iter().find(|t| t.index() >= num_topics) {
            return Err(LdaError::TopicOutOfRange {
                id: bad.id(),
                num_topics,
            });
        }
        let topic_count = WeightedCounter::tally(num_topics, topics.iter().copied());
        Ok(Self {
            name,
            words,
            topics,
            topic_count,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Current assignment, parallel to [`Document::words`].
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_count(&self) -> &WeightedCounter {
        &self.topic_count
    }

    /// Number of topics this document was built for.
    pub fn num_topics(&self) -> usize {
        self.topic_count.len()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Dominant topic, or `None` for an empty document.
    pub fn topic(&self) -> Option<Topic> {
        self.topic_count.argmax()
    }

    /// `(word, topic)` pairs in document order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, Topic)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.topics.iter().copied())
    }

    /// Resample the topic of every word, in order.
    ///
    /// For each position the word's current topic is first removed from all three
    /// tables (this document's, and the corpus-wide word/topic and topic totals), so
    /// the conditional is computed as if the word were unassigned. A topic is then
    /// drawn with weight [`SamplingParams::weight`] and added back to all three tables.
    ///
    /// On error the word being resampled keeps its old topic and all three tables
    /// still match the assignments. Words earlier in the document keep their new topics.
    pub fn resample<R: Rng + ?Sized>(
        &mut self,
        counts: &mut TopicCounts,
        params: &SamplingParams,
        rng: &mut R,
    ) -> Result<()> {
        let k = params.num_topics();
        if self.num_topics() != k || counts.num_topics() != k {
            return Err(LdaError::TopicCountMismatch {
                name: self.name.clone(),
                found: self.num_topics(),
                expected: k,
            });
        }

        let mut cumulative = vec![0.0; k];

        for i in 0..self.words.len() {
            let word = counts
                .vocabulary()
                .id(&self.words[i])
                .ok_or_else(|| LdaError::UnknownWord(self.words[i].clone()))?;
            let old_t = self.topics[i];

            counts.remove(word, old_t)?;
            if let Err(e) = take_one(&mut self.topic_count, old_t, CountTable::Document) {
                counts.insert(word, old_t);
                return Err(e);
            }

            let word_counts = counts.word_topic(word);
            let totals = counts.topic_totals();
            for (t, slot) in Topic::all(k).zip(cumulative.iter_mut()) {
                *slot = params.weight(self.topic_count.get(t), word_counts.get(t), totals.get(t));
            }
            let new_t = match sample_index_in_place(&mut cumulative, rng) {
                Ok(idx) => Topic::from_index(idx),
                Err(e) => {
                    // `topics[i]` still holds `old_t`; count it back in all three tables.
                    counts.insert(word, old_t);
                    self.topic_count.increment(old_t, 1.0);
                    return Err(e.into());
                }
            };

            self.topics[i] = new_t;
            counts.insert(word, new_t);
            self.topic_count.increment(new_t, 1.0);
        }

        Ok(())
    }
}

/// Decrement `counter[topic]`, failing instead of going below zero.
pub(crate) fn take_one(
    counter: &mut WeightedCounter,
    topic: Topic,
    table: CountTable,
) -> Result<()> {
    if counter.get(topic) < 1.0 {
        return Err(LdaError::NegativeCount { table, topic });
    }
    counter.increment(topic, -1.0);
    Ok(())
}
