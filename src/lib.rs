//! `lda-gibbs`: collapsed Gibbs sampling for Latent Dirichlet Allocation.
//!
//! Every word occurrence in a corpus carries one of `K` topic labels. Each sweep
//! resamples every label from its conditional given all the others, with the
//! topic/word distributions integrated out:
//!
//! \[
//! p(z_i = t \mid z_{-i}, w) \propto
//! \frac{(n_{d,t} + \alpha)\,(n_{w,t} + \beta)}{n_t + \beta V}
//! \]
//!
//! where `βV` is a fixed smoothing constant ([`LdaConfig::topic_smoothing`]).
//!
//! Exposed modules:
//! - `counter`: dense topic → weight counters, argmax and inverse-CDF sampling.
//! - `document`: one document's words, topic assignment and topic tally.
//! - `corpus`: the document collection and the shared word/topic tables.
//! - `sampler`: the sweep driver.
//! - `tokenize`: turning raw text into word tokens.
//!
//! ```
//! use lda_gibbs::{GibbsSampler, LdaConfig};
//!
//! let config = LdaConfig::new().with_num_topics(2).with_sweeps(20).with_seed(7);
//! let docs = vec![
//!     ("a".to_string(), vec!["x".to_string(); 3]),
//!     ("b".to_string(), vec!["y".to_string(); 3]),
//! ];
//! let mut sampler = GibbsSampler::new(&config, docs)?;
//! sampler.run()?;
//! assert_eq!(sampler.corpus().topic_count().total(), 6.0);
//! # Ok::<(), lda_gibbs::LdaError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod counter;
pub mod document;
pub mod error;
pub mod sampler;
pub mod tokenize;
pub mod topic;
pub mod vocab;

pub use config::{LdaConfig, SamplingParams};
pub use corpus::{Corpus, TopicCounts};
pub use counter::{sample_index_in_place, sample_index_with_rng, WeightedCounter};
pub use document::Document;
pub use error::{ConfigError, CountTable, LdaError, Result, WeightError};
pub use sampler::GibbsSampler;
pub use tokenize::{SimpleTokenizer, Tokenizer};
pub use topic::Topic;
pub use vocab::{Vocabulary, WordId};
