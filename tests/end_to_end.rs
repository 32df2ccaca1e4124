use lda_gibbs::{
    Corpus, Document, GibbsSampler, LdaConfig, SamplingParams, SimpleTokenizer, Tokenizer, Topic,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn repeated(word: &str, n: usize) -> Vec<String> {
    vec![word.to_string(); n]
}

#[test]
fn two_documents_two_topics() {
    let config = LdaConfig::new().with_num_topics(2).with_sweeps(50);
    let rng = ChaCha8Rng::seed_from_u64(2024);
    let docs = vec![
        ("doc1".to_string(), repeated("x", 3)),
        ("doc2".to_string(), repeated("y", 3)),
    ];
    let mut sampler = GibbsSampler::with_rng(&config, docs, rng).expect("valid sampler");

    {
        let c = sampler.corpus();
        assert_eq!(c.word_topic_count("x").expect("x").total(), 3.0);
        assert_eq!(c.word_topic_count("y").expect("y").total(), 3.0);
        assert_eq!(c.topic_count().total(), 6.0);
    }

    sampler.run().expect("run");

    let c = sampler.corpus();
    assert_eq!(sampler.completed(), 50);
    assert_eq!(c.topic_count().total(), 6.0);
    assert_eq!(c.word_topic_count("x").expect("x").total(), 3.0);
    assert_eq!(c.word_topic_count("y").expect("y").total(), 3.0);
    c.check_invariants().expect("consistent");
    assert!(c.overview().iter().all(Option::is_some));
}

#[test]
fn fixed_assignment_counts_are_reproducible() {
    let t1 = Topic::from_id(1).expect("id 1");
    let t2 = Topic::from_id(2).expect("id 2");
    let build = || {
        let params = SamplingParams::with_topics(2).expect("valid");
        let docs = vec![
            Document::with_topics(
                "a",
                vec!["cat".into(), "dog".into(), "cat".into()],
                vec![t1, t2, t2],
                2,
            )
            .expect("valid"),
            Document::with_topics("b", vec!["dog".into()], vec![t1], 2).expect("valid"),
        ];
        Corpus::new(docs, params).expect("valid corpus")
    };

    let a = build();
    let b = build();
    assert_eq!(a.topic_count(), b.topic_count());
    assert_eq!(a.topic_count().weights(), &[2.0, 2.0]);
    assert_eq!(a.word_topic_count("cat").expect("cat").weights(), &[1.0, 1.0]);
    assert_eq!(a.word_topic_count("dog").expect("dog").weights(), &[1.0, 1.0]);
    assert_eq!(a.word_topic_count("dog"), b.word_topic_count("dog"));
}

#[test]
fn resampling_changes_state() {
    // Many occurrences and several topics: a sweep leaving every assignment
    // untouched is astronomically unlikely.
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let params = SamplingParams::with_topics(5).expect("valid");
    let words: Vec<String> = (0..200).map(|i| format!("w{}", i % 13)).collect();
    let doc = Document::new_with_rng("big", words, 5, &mut rng).expect("valid");
    let mut corpus = Corpus::new(vec![doc], params).expect("valid corpus");

    let before = corpus.docs()[0].topics().to_vec();
    corpus.resample_with_rng(&mut rng).expect("sweep");
    assert_ne!(corpus.docs()[0].topics(), before.as_slice());
}

#[test]
fn empty_documents_are_carried_along() {
    let config = LdaConfig::new().with_num_topics(3).with_sweeps(5).with_seed(1);
    let docs = vec![
        ("empty".to_string(), Vec::new()),
        ("full".to_string(), repeated("z", 4)),
    ];
    let mut sampler = GibbsSampler::new(&config, docs).expect("valid sampler");
    sampler.run().expect("run");

    let overview = sampler.corpus().overview();
    assert_eq!(overview[0], None);
    assert!(overview[1].is_some());
}

#[test]
fn tokenized_text_feeds_the_sampler() {
    let texts = [
        ("sport", "The match ended 2-1. The striker scored twice!"),
        ("tech", "The new chip doubles battery life, the maker said."),
    ];
    let docs: Vec<(String, Vec<String>)> = texts
        .iter()
        .map(|(name, text)| (name.to_string(), SimpleTokenizer.tokenize(text)))
        .collect();
    let total: usize = docs.iter().map(|(_, ws)| ws.len()).sum();

    let config = LdaConfig::new().with_num_topics(4).with_sweeps(10).with_seed(3);
    let mut sampler = GibbsSampler::new(&config, docs).expect("valid sampler");
    sampler.run().expect("run");

    let c = sampler.corpus();
    assert_eq!(c.num_tokens(), total);
    assert_eq!(c.topic_count().total(), total as f64);
    // "the" appears four times across both documents after lowercasing.
    assert_eq!(c.word_topic_count("the").expect("the").total(), 4.0);
}
