//! Splitting raw text into word tokens.
//!
//! The sampler only needs each document as a sequence of comparable strings; this
//! module supplies the default way of getting there.

/// Turns a document's text into an ordered sequence of tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Lowercasing tokenizer.
///
/// A maximal run of alphanumeric characters is one token. Every other character is
/// its own single-character token, except spaces, `\n` and `\r`, which only separate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in text.to_lowercase().chars() {
            if c.is_alphanumeric() {
                current.push(c);
                continue;
            }
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            if !matches!(c, ' ' | '\n' | '\r') {
                tokens.push(c.to_string());
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}
