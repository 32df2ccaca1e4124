//! Two documents with disjoint vocabularies and two topics.
//!
//! After a few sweeps each document usually concentrates on one topic, and the
//! two documents usually end up on different topics.

use lda_gibbs::{GibbsSampler, LdaConfig, SimpleTokenizer, Tokenizer, Topic};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let texts = [
        ("fruit", "apple banana apple cherry banana apple cherry cherry"),
        ("tools", "hammer wrench hammer saw wrench saw hammer drill"),
    ];
    let docs = texts
        .iter()
        .map(|(name, text)| (name.to_string(), SimpleTokenizer.tokenize(text)));

    // A small denominator lets the word/topic counts dominate on a tiny corpus.
    let config = LdaConfig::new()
        .with_num_topics(2)
        .with_sweeps(50)
        .with_topic_smoothing(10.0)
        .with_alpha(0.1)
        .with_beta(0.1)
        .with_seed(7);

    let mut sampler = GibbsSampler::new(&config, docs)?;
    sampler.run_with(|i, corpus| {
        if i % 10 == 9 {
            let labels: Vec<String> = corpus
                .overview()
                .iter()
                .map(|t| t.map_or("-".to_string(), |t| t.to_string()))
                .collect();
            println!("sweep {:3}: {}", i + 1, labels.join(" "));
        }
    })?;

    let corpus = sampler.corpus();
    for doc in corpus.docs() {
        let assigned: Vec<String> = doc
            .assignments()
            .map(|(w, t)| format!("{w}/{t}"))
            .collect();
        println!("{}: {}", doc.name(), assigned.join(" "));
    }
    for t in Topic::all(corpus.num_topics()) {
        println!("topic {t}: {:?}", corpus.top_words(t, 3));
    }

    Ok(())
}
