//! The document collection and its corpus-wide count tables.

use rand::prelude::*;

use crate::config::SamplingParams;
use crate::counter::WeightedCounter;
use crate::document::{take_one, Document};
use crate::error::{CountTable, LdaError, Result};
use crate::topic::Topic;
use crate::vocab::{Vocabulary, WordId};

/// Corpus-wide counts shared by every document during a sweep.
///
/// - `word_topic[w][t]`: occurrences of word `w` currently assigned topic `t`.
/// - `topic[t]`: occurrences of any word currently assigned topic `t`.
///
/// Documents receive this table by `&mut` in [`Document::resample`], so each word's
/// remove → sample → insert step has exclusive access to it.
#[derive(Debug, Clone)]
pub struct TopicCounts {
    num_topics: usize,
    vocab: Vocabulary,
    word_topic: Vec<WeightedCounter>,
    topic: WeightedCounter,
}

impl TopicCounts {
    /// Empty tables over `num_topics` topics.
    pub fn new(num_topics: usize) -> Self {
        Self {
            num_topics,
            vocab: Vocabulary::new(),
            word_topic: Vec::new(),
            topic: WeightedCounter::new(num_topics),
        }
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Id of `word`, adding it (with all-zero counts) if it is new.
    pub fn intern(&mut self, word: &str) -> WordId {
        let id = self.vocab.intern(word);
        if id == self.word_topic.len() {
            self.word_topic.push(WeightedCounter::new(self.num_topics));
        }
        id
    }

    /// Record one occurrence of `word` with topic `topic`.
    pub fn add(&mut self, word: &str, topic: Topic) {
        let id = self.intern(word);
        self.insert(id, topic);
    }

    /// Count one more occurrence of `word` under `topic`.
    ///
    /// # Panics
    ///
    /// Panics if `word` was not produced by this table's vocabulary.
    #[inline]
    pub fn insert(&mut self, word: WordId, topic: Topic) {
        self.word_topic[word].increment(topic, 1.0);
        self.topic.increment(topic, 1.0);
    }

    /// Count one fewer occurrence of `word` under `topic`.
    ///
    /// Fails, leaving both tables untouched, if either count is already zero.
    ///
    /// # Panics
    ///
    /// Panics if `word` was not produced by this table's vocabulary.
    #[inline]
    pub fn remove(&mut self, word: WordId, topic: Topic) -> Result<()> {
        if self.topic.get(topic) < 1.0 {
            return Err(LdaError::NegativeCount {
                table: CountTable::TopicTotal,
                topic,
            });
        }
        take_one(&mut self.word_topic[word], topic, CountTable::WordTopic)?;
        self.topic.increment(topic, -1.0);
        Ok(())
    }

    /// Per-topic counts of `word`.
    ///
    /// # Panics
    ///
    /// Panics if `word` was not produced by this table's vocabulary.
    #[inline]
    pub fn word_topic(&self, word: WordId) -> &WeightedCounter {
        &self.word_topic[word]
    }

    /// Per-topic counts of `word`, or `None` if the corpus never contained it.
    pub fn word_topic_count(&self, word: &str) -> Option<&WeightedCounter> {
        self.vocab.id(word).map(|id| &self.word_topic[id])
    }

    /// Per-topic totals over the whole corpus.
    pub fn topic_totals(&self) -> &WeightedCounter {
        &self.topic
    }

    /// Rebuild the tables from scratch out of documents' current assignments.
    pub fn from_documents(num_topics: usize, docs: &[Document]) -> Self {
        let mut counts = Self::new(num_topics);
        for d in docs {
            for (w, t) in d.assignments() {
                counts.add(w, t);
            }
        }
        counts
    }
}

/// A collection of documents plus the corpus-wide tables kept in sync with them.
#[derive(Debug, Clone)]
pub struct Corpus {
    docs: Vec<Document>,
    counts: TopicCounts,
    params: SamplingParams,
}

impl Corpus {
    /// Build the corpus-wide tables by tallying every document's current assignment.
    ///
    /// Given the same documents this is fully deterministic; only
    /// [`Corpus::resample`] is stochastic.
    pub fn new(docs: Vec<Document>, params: SamplingParams) -> Result<Self> {
        let k = params.num_topics();
        if let Some(d) = docs.iter().find(|d| d.num_topics() != k) {
            return Err(LdaError::TopicCountMismatch {
                name: d.name().to_owned(),
                found: d.num_topics(),
                expected: k,
            });
        }
        let counts = TopicCounts::from_documents(k, &docs);
        Ok(Self {
            docs,
            counts,
            params,
        })
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn params(&self) -> &SamplingParams {
        &self.params
    }

    pub fn num_topics(&self) -> usize {
        self.params.num_topics()
    }

    pub fn counts(&self) -> &TopicCounts {
        &self.counts
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.counts.vocabulary()
    }

    /// Corpus-wide per-topic totals.
    pub fn topic_count(&self) -> &WeightedCounter {
        self.counts.topic_totals()
    }

    /// Per-topic counts of `word`, or `None` if no document contains it.
    pub fn word_topic_count(&self, word: &str) -> Option<&WeightedCounter> {
        self.counts.word_topic_count(word)
    }

    /// Total number of word occurrences.
    pub fn num_tokens(&self) -> usize {
        self.docs.iter().map(Document::len).sum()
    }

    /// One sweep: resample every word of every document, in document order.
    pub fn resample(&mut self) -> Result<()> {
        let mut rng = rand::rng();
        self.resample_with_rng(&mut rng)
    }

    /// [`Corpus::resample`] with a caller-supplied RNG.
    pub fn resample_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        for d in &mut self.docs {
            d.resample(&mut self.counts, &self.params, rng)?;
        }
        Ok(())
    }

    /// Dominant topic of each document, in document order.
    pub fn overview(&self) -> Vec<Option<Topic>> {
        self.docs.iter().map(Document::topic).collect()
    }

    /// The `n` words most often assigned `topic`, with their counts.
    ///
    /// Words with a zero count are skipped; ties are ordered by word.
    pub fn top_words(&self, topic: Topic, n: usize) -> Vec<(&str, f64)> {
        let mut scored: Vec<(&str, f64)> = self
            .vocabulary()
            .iter()
            .map(|(id, w)| (w, self.counts.word_topic(id).get(topic)))
            .filter(|&(_, c)| c > 0.0)
            .collect();
        scored.sort_by(|(w_a, c_a), (w_b, c_b)| c_b.total_cmp(c_a).then_with(|| w_a.cmp(w_b)));
        scored.truncate(n);
        scored
    }

    /// Recount every table from the documents and compare with the live tables.
    ///
    /// Reports the first mismatch. Also checks that no count is negative and that
    /// every document's own tally matches its assignment.
    pub fn check_invariants(&self) -> Result<()> {
        let k = self.num_topics();

        for d in &self.docs {
            let expected = WeightedCounter::tally(k, d.topics().iter().copied());
            if &expected != d.topic_count() {
                return Err(LdaError::Inconsistent(format!(
                    "document {:?}: tally {:?}, stored {:?}",
                    d.name(),
                    expected.weights(),
                    d.topic_count().weights()
                )));
            }
        }

        let fresh = TopicCounts::from_documents(k, &self.docs);
        let live = &self.counts;

        for t in Topic::all(k) {
            let (want, got) = (fresh.topic_totals().get(t), live.topic_totals().get(t));
            if want != got {
                return Err(LdaError::Inconsistent(format!(
                    "topic {t}: recount {want}, stored {got}"
                )));
            }
        }

        for (id, word) in live.vocabulary().iter() {
            let got = live.word_topic(id);
            if got.weights().iter().any(|&c| c < 0.0) {
                return Err(LdaError::Inconsistent(format!(
                    "word {word:?}: negative count {:?}",
                    got.weights()
                )));
            }
            // Words no longer present anywhere keep an all-zero row in the live table.
            let zeros = WeightedCounter::new(k);
            let want = fresh.word_topic_count(word).unwrap_or(&zeros);
            if want != got {
                return Err(LdaError::Inconsistent(format!(
                    "word {word:?}: recount {:?}, stored {:?}",
                    want.weights(),
                    got.weights()
                )));
            }
        }

        if fresh.vocabulary().len() != live.vocabulary().len() {
            return Err(LdaError::Inconsistent(format!(
                "vocabulary: recount {} words, stored {}",
                fresh.vocabulary().len(),
                live.vocabulary().len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn topic(id: usize) -> Topic {
        Topic::from_id(id).expect("nonzero id")
    }

    fn fixed_corpus() -> Corpus {
        let params = SamplingParams::with_topics(2).expect("valid");
        let docs = vec![
            Document::with_topics(
                "a",
                words(&["x", "y", "x"]),
                vec![topic(1), topic(2), topic(1)],
                2,
            )
            .expect("valid"),
            Document::with_topics("b", words(&["y", "z"]), vec![topic(2), topic(2)], 2)
                .expect("valid"),
        ];
        Corpus::new(docs, params).expect("valid corpus")
    }

    #[test]
    fn construction_tallies_assignments() {
        let c = fixed_corpus();
        assert_eq!(c.topic_count().weights(), &[2.0, 3.0]);
        assert_eq!(
            c.word_topic_count("x").expect("x present").weights(),
            &[2.0, 0.0]
        );
        assert_eq!(
            c.word_topic_count("y").expect("y present").weights(),
            &[0.0, 2.0]
        );
        assert_eq!(
            c.word_topic_count("z").expect("z present").weights(),
            &[0.0, 1.0]
        );
        assert!(c.word_topic_count("w").is_none());
        assert_eq!(c.num_tokens(), 5);
        assert_eq!(c.vocabulary().len(), 3);
        c.check_invariants().expect("fresh corpus is consistent");
    }

    #[test]
    fn construction_is_deterministic() {
        let a = fixed_corpus();
        let b = fixed_corpus();
        assert_eq!(a.topic_count(), b.topic_count());
        for w in ["x", "y", "z"] {
            assert_eq!(a.word_topic_count(w), b.word_topic_count(w));
        }
    }

    #[test]
    fn overview_lists_dominant_topics() {
        let params = SamplingParams::with_topics(2).expect("valid");
        let mut docs = fixed_corpus().docs().to_vec();
        docs.push(Document::with_topics("empty", Vec::new(), Vec::new(), 2).expect("valid"));
        let c = Corpus::new(docs, params).expect("valid corpus");
        assert_eq!(c.overview(), vec![Some(topic(1)), Some(topic(2)), None]);
    }

    #[test]
    fn top_words_ranks_by_count() {
        let c = fixed_corpus();
        assert_eq!(c.top_words(topic(2), 5), vec![("y", 2.0), ("z", 1.0)]);
        assert_eq!(c.top_words(topic(1), 1), vec![("x", 2.0)]);
    }

    #[test]
    fn mismatched_document_rejected() {
        let params = SamplingParams::with_topics(3).expect("valid");
        let docs = vec![
            Document::with_topics("d", words(&["a"]), vec![topic(1)], 2).expect("valid"),
        ];
        let err = Corpus::new(docs, params).expect_err("K mismatch");
        assert!(matches!(err, LdaError::TopicCountMismatch { found: 2, expected: 3, .. }));
    }

    #[test]
    fn remove_refuses_to_go_negative() {
        let mut counts = TopicCounts::new(2);
        let x = counts.intern("x");
        let err = counts.remove(x, topic(1)).expect_err("empty table");
        assert!(matches!(
            err,
            LdaError::NegativeCount {
                table: CountTable::TopicTotal,
                ..
            }
        ));

        counts.add("y", topic(1));
        let err = counts.remove(x, topic(1)).expect_err("x has no topic-1 count");
        assert!(matches!(
            err,
            LdaError::NegativeCount {
                table: CountTable::WordTopic,
                ..
            }
        ));
        // The failed removal left the totals alone.
        assert_eq!(counts.topic_totals().get(topic(1)), 1.0);
    }

    #[test]
    fn sweeps_conserve_counts() {
        let params = SamplingParams::with_topics(4).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let texts: [&[&str]; 3] = [
            &["apple", "banana", "apple", "cherry"],
            &["banana", "banana", "durian"],
            &["cherry", "apple", "elder", "fig", "fig"],
        ];
        let docs = texts
            .iter()
            .enumerate()
            .map(|(i, ws)| Document::new_with_rng(format!("d{i}"), words(ws), 4, &mut rng))
            .collect::<Result<Vec<_>>>()
            .expect("valid documents");
        let mut c = Corpus::new(docs, params).expect("valid corpus");

        for _ in 0..30 {
            c.resample_with_rng(&mut rng).expect("sweep");
            assert_eq!(c.topic_count().total(), c.num_tokens() as f64);
            for t in Topic::all(4) {
                let by_doc: f64 = c.docs().iter().map(|d| d.topic_count().get(t)).sum();
                assert_eq!(c.topic_count().get(t), by_doc);
            }
        }
        c.check_invariants().expect("consistent after sweeps");
    }

    #[test]
    fn seeded_sweeps_are_reproducible() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let params = SamplingParams::with_topics(3).expect("valid");
            let docs = vec![
                Document::new_with_rng("a", words(&["p", "q", "r", "p"]), 3, &mut rng)
                    .expect("valid"),
                Document::new_with_rng("b", words(&["q", "s"]), 3, &mut rng).expect("valid"),
            ];
            let mut c = Corpus::new(docs, params).expect("valid corpus");
            for _ in 0..10 {
                c.resample_with_rng(&mut rng).expect("sweep");
            }
            c.docs()
                .iter()
                .map(|d| d.topics().to_vec())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn check_invariants_catches_drift() {
        let mut c = fixed_corpus();
        c.counts.insert(0, topic(2));
        let err = c.check_invariants().expect_err("drifted table");
        assert!(matches!(err, LdaError::Inconsistent(_)));
    }
}
