use crate::patterns::{re_sentence_break, WordSet};

/// Words that mark a sentence as audit metadata rather than an answer.
pub const DEFAULT_AUDIT_WORDS: &[&str] = &["CRIADO", "ABERTO", "LOG", "AUDIT"];

/// Splits on `.`, `!` or `?` followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    re_sentence_break()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Longest candidate by character count. The first one wins a tie.
pub fn longest<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .fold(None, |best: Option<(usize, &'a str)>, candidate| {
            let len = candidate.chars().count();
            match best {
                Some((best_len, _)) if best_len >= len => best,
                _ => Some((len, candidate)),
            }
        })
        .map(|(_, sentence)| sentence)
}

/// Picks the answer sentence out of the joined, cleaned lines.
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    audit_words: WordSet,
}

impl SentenceSelector {
    pub fn new<S: AsRef<str>>(audit_words: &[S]) -> Result<Self, regex::Error> {
        Ok(SentenceSelector {
            audit_words: WordSet::new(audit_words)?,
        })
    }

    pub fn is_audit(&self, sentence: &str) -> bool {
        self.audit_words.is_match(sentence)
    }

    /// Sentences free of audit words.
    pub fn filter<'a>(&self, sentences: &[&'a str]) -> Vec<&'a str> {
        sentences
            .iter()
            .copied()
            .filter(|s| !self.is_audit(s))
            .collect()
    }

    /// Longest audit-free sentence, else the longest sentence, else the
    /// whole candidate when it has no sentence breaks.
    pub fn select<'a>(&self, candidate: &'a str) -> &'a str {
        let sentences = split_sentences(candidate);
        if sentences.is_empty() {
            return candidate;
        }

        let preferred = self.filter(&sentences);
        longest(&preferred)
            .or_else(|| longest(&sentences))
            .unwrap_or(candidate)
    }
}

impl Default for SentenceSelector {
    fn default() -> Self {
        SentenceSelector::new(DEFAULT_AUDIT_WORDS).expect("default audit words must compile")
    }
}
