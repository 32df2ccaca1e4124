//! The Gibbs sampling driver.
//!
//! [`GibbsSampler`] owns a [`Corpus`] and an RNG and runs a fixed number of sweeps.
//! Sweep 0 is the random initial assignment. There is no convergence test: the
//! chain runs for exactly [`LdaConfig::sweeps`] sweeps.

use std::time::Instant;

use log::{debug, info};
use rand::prelude::*;

use crate::config::LdaConfig;
use crate::corpus::Corpus;
use crate::document::Document;
use crate::error::Result;

/// Drives sweeps over a corpus.
#[derive(Debug)]
pub struct GibbsSampler<R = StdRng> {
    corpus: Corpus,
    sweeps: usize,
    completed: usize,
    rng: R,
}

impl GibbsSampler<StdRng> {
    /// Build a sampler from `(name, words)` pairs.
    ///
    /// Seeds from [`LdaConfig::seed`] when set, otherwise from the OS.
    pub fn new<I>(config: &LdaConfig, docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, docs, rng)
    }
}

impl<R: Rng> GibbsSampler<R> {
    /// Build a sampler with a caller-supplied RNG.
    ///
    /// The same RNG draws the initial topic assignment and every later sweep.
    pub fn with_rng<I>(config: &LdaConfig, docs: I, mut rng: R) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let params = config.validate()?;
        let docs = docs
            .into_iter()
            .map(|(name, words)| Document::new_with_rng(name, words, params.num_topics(), &mut rng))
            .collect::<Result<Vec<_>>>()?;
        let corpus = Corpus::new(docs, params)?;

        info!(
            "corpus ready: {} documents, {} tokens, {} word types, {} topics",
            corpus.len(),
            corpus.num_tokens(),
            corpus.vocabulary().len(),
            params.num_topics()
        );

        Ok(Self::from_corpus(corpus, config.sweeps, rng))
    }

    /// Wrap an existing corpus.
    pub fn from_corpus(corpus: Corpus, sweeps: usize, rng: R) -> Self {
        Self {
            corpus,
            sweeps,
            completed: 0,
            rng,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    /// Sweeps this sampler will run in [`GibbsSampler::run`].
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Sweeps completed so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Run one sweep.
    pub fn sweep(&mut self) -> Result<()> {
        let start = Instant::now();
        self.corpus.resample_with_rng(&mut self.rng)?;
        self.completed += 1;

        if cfg!(debug_assertions) {
            self.corpus.check_invariants()?;
        }

        debug!("sweep {} done in {:.2?}", self.completed, start.elapsed());
        Ok(())
    }

    /// Run all configured sweeps.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(|_, _| {})
    }

    /// Run all configured sweeps, handing the corpus to `observe` after each one.
    ///
    /// `observe` receives the 0-based index of the sweep just finished.
    pub fn run_with<F>(&mut self, mut observe: F) -> Result<()>
    where
        F: FnMut(usize, &Corpus),
    {
        info!("running {} sweeps", self.sweeps);
        let start = Instant::now();
        for iteration in 0..self.sweeps {
            self.sweep()?;
            observe(iteration, &self.corpus);
        }
        info!("finished {} sweeps in {:.2?}", self.sweeps, start.elapsed());
        Ok(())
    }
}
