//! Terminal rendering: every word in the color of its topic.

use colored::{Color, ColoredString, Colorize};

use lda_gibbs::{Corpus, Document, Topic};

const PALETTE: [Color; 7] = [
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

fn paint(text: &str, topic: Option<Topic>) -> ColoredString {
    match topic {
        Some(t) => text.color(PALETTE[t.index() % PALETTE.len()]),
        None => text.normal(),
    }
}

/// Document name in its dominant topic's color, then every word in its own.
pub fn document(doc: &Document) -> String {
    let words: Vec<String> = doc
        .assignments()
        .map(|(w, t)| paint(w, Some(t)).to_string())
        .collect();
    format!("{}\n{}", paint(doc.name(), doc.topic()), words.join(" "))
}

/// One colored topic id per document; `-` for a document with no dominant topic.
pub fn overview(corpus: &Corpus) -> String {
    corpus
        .overview()
        .into_iter()
        .map(|t| match t {
            Some(t) => paint(&t.to_string(), Some(t)).to_string(),
            None => "-".to_string(),
        })
        .collect()
}

/// `topic N: word (count), ...` for each topic.
pub fn top_words(corpus: &Corpus, n: usize) -> String {
    Topic::all(corpus.num_topics())
        .map(|t| {
            let words: Vec<String> = corpus
                .top_words(t, n)
                .into_iter()
                .map(|(w, c)| format!("{w} ({c})"))
                .collect();
            format!("{}: {}", paint(&format!("topic {t}"), Some(t)).bold(), words.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
