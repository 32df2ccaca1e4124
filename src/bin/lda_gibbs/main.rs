//! lda-gibbs CLI
//!
//! Topic-labels every word of a directory of text files with collapsed Gibbs sampling.

mod load;
mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lda_gibbs::{GibbsSampler, LdaConfig, SimpleTokenizer};

#[derive(Parser)]
#[command(name = "lda-gibbs")]
#[command(version)]
#[command(about = "Collapsed Gibbs sampling for LDA topic models")]
#[command(long_about = r#"
Reads every file in every subdirectory of CORPUS_DIR (e.g. bbc/<category>/<file>),
assigns each word a random topic, then resamples all assignments for a fixed number
of sweeps. After each sweep a sample of documents is printed with every word in the
color of its topic, followed by one colored topic id per document.
"#)]
struct Cli {
    /// Root directory holding one subdirectory per category
    corpus_dir: PathBuf,

    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of topics
    #[arg(short = 'k', long)]
    topics: Option<usize>,

    /// Number of sweeps
    #[arg(short, long)]
    sweeps: Option<usize>,

    /// Document/topic smoothing
    #[arg(long)]
    alpha: Option<f64>,

    /// Word/topic smoothing
    #[arg(long)]
    beta: Option<f64>,

    /// Smoothing added to each topic total
    #[arg(long)]
    topic_smoothing: Option<f64>,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print every Nth document after each sweep (0 = none)
    #[arg(long, default_value_t = 200)]
    show_every: usize,

    /// Words to list per topic at the end (0 = skip)
    #[arg(long, default_value_t = 10)]
    top_words: usize,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<LdaConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                LdaConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => LdaConfig::default(),
        };
        if let Some(k) = self.topics {
            config.num_topics = k;
        }
        if let Some(n) = self.sweeps {
            config.sweeps = n;
        }
        if let Some(a) = self.alpha {
            config.alpha = a;
        }
        if let Some(b) = self.beta {
            config.beta = b;
        }
        if let Some(s) = self.topic_smoothing {
            config.topic_smoothing = s;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = cli.config()?;
    config.validate().context("invalid configuration")?;

    let files = load::discover(&cli.corpus_dir)?;
    info!("found {} files under {}", files.len(), cli.corpus_dir.display());
    let docs = load::load(&files, &SimpleTokenizer)?;

    let mut sampler = GibbsSampler::new(&config, docs)?;
    sampler.run_with(|iteration, corpus| {
        println!("\n-------------- iteration {iteration} -----------------");
        if cli.show_every > 0 {
            for doc in corpus.docs().iter().step_by(cli.show_every) {
                println!("{}\n", render::document(doc));
            }
        }
        println!("{}", render::overview(corpus));
    })?;

    if cli.top_words > 0 {
        println!("\n{}", render::top_words(sampler.corpus(), cli.top_words));
    }

    Ok(())
}
