use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Sentence boundary detection used by the context extractor.
pub trait SentenceSplitter: Send + Sync + fmt::Debug {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Splits after runs of `.`, `!` or `?`. Abbreviations and decimal numbers
/// produce extra boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl SentenceSplitter for PunctuationSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?') {
                while let Some(&next) = chars.peek() {
                    if !matches!(next, '.' | '!' | '?') {
                        break;
                    }
                    current.push(next);
                    chars.next();
                }
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }
        push_trimmed(&mut sentences, &current);
        sentences
    }
}

/// Unicode (UAX #29) sentence boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        for sentence in text.unicode_sentences() {
            push_trimmed(&mut sentences, sentence);
        }
        sentences
    }
}

fn push_trimmed(out: &mut Vec<String>, sentence: &str) {
    let trimmed = sentence.trim();
    if trimmed.chars().any(char::is_alphanumeric) {
        out.push(trimmed.to_string());
    }
}
