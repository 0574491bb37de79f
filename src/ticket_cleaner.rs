use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    cleaner::{TextCleaner, WhitespaceCleaner},
    cleaner_config::CleanerConfig,
    html::html_to_text,
    scorer::{PortugueseScorer, QualityScorer},
    selector::SentenceSelector,
    stages::kept_lines,
    ConfigError,
};

/// Output of one cleaning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanResult {
    pub cleaned_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<u8>,
}

/// A builder for the `TicketCleaner` struct
/// That allows for configuring the vocabulary
/// and scorer before building it
#[derive(Default)]
pub struct TicketCleanerBuilder {
    config: Option<String>,
    scorer: Option<Arc<dyn QualityScorer>>,
    strip_html: bool,
}

impl TicketCleanerBuilder {
    pub fn new() -> Self {
        TicketCleanerBuilder {
            config: None,
            scorer: None,
            strip_html: false,
        }
    }

    /// A config file path or an inline JSON/TOML document.
    pub fn with_config(mut self, config: &str) -> Self {
        self.config = Some(config.to_string());
        self
    }

    /// Takes precedence over the config's `action_verbs`.
    pub fn with_scorer<T: QualityScorer + 'static>(mut self, scorer: T) -> Self {
        self.scorer = Some(Arc::new(scorer));
        self
    }

    pub fn strip_html(mut self, strip_html: bool) -> Self {
        self.strip_html = strip_html;
        self
    }

    pub fn build(self) -> Result<TicketCleaner, ConfigError> {
        let config = match &self.config {
            Some(config_str) => CleanerConfig::from_config(config_str)?,
            None => CleanerConfig::default(),
        };

        let scorer = match self.scorer {
            Some(scorer) => scorer,
            None => Arc::new(PortugueseScorer::with_verbs(&config.action_verbs)?),
        };

        Ok(TicketCleaner {
            selector: SentenceSelector::new(&config.audit_words)?,
            scorer,
            strip_html: self.strip_html || config.strip_html,
        })
    }
}

/// Extracts the human-written answer from a helpdesk ticket response
///
/// # Example
///
/// ```
/// use ticket_cleaner::TicketCleaner;
///
/// let cleaner = TicketCleaner::default();
/// let raw = "CONCLUSÃO: CAROLINE CONCEICAO 01/07/2025 10:04 SENHA ENVIADA VIA TEAMS \
///            TICKET CRIADO POR X EM: 7/1/2025 8:31 AM";
///
/// let result = cleaner.process(raw, true);
/// assert_eq!(result.cleaned_text, "CAROLINE CONCEICAO SENHA ENVIADA VIA TEAMS");
/// assert!(result.quality_score.is_some());
/// ```
#[derive(Clone)]
pub struct TicketCleaner {
    selector: SentenceSelector,
    scorer: Arc<dyn QualityScorer>,
    strip_html: bool,
}

impl Debug for TicketCleaner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketCleaner")
            .field("strip_html", &self.strip_html)
            .finish_non_exhaustive()
    }
}

impl TicketCleaner {
    pub fn new() -> TicketCleanerBuilder {
        TicketCleanerBuilder::new()
    }

    /// Runs the full pipeline and returns the selected answer sentence,
    /// or an empty string when nothing survives.
    pub fn clean_text(&self, raw_text: &str) -> String {
        if raw_text.is_empty() {
            return String::new();
        }

        let flattened;
        let text = if self.strip_html {
            flattened = html_to_text(raw_text);
            flattened.as_str()
        } else {
            raw_text
        };

        let lines = kept_lines(text);
        if lines.is_empty() {
            tracing::debug!("no lines survived filtering");
            return String::new();
        }

        let candidate = lines.join(" ");
        let picked = self.selector.select(&candidate);
        tracing::debug!(
            kept_lines = lines.len(),
            picked_chars = picked.chars().count(),
            "ticket cleaned"
        );

        WhitespaceCleaner.clean(picked)
    }

    pub fn score(&self, text: &str) -> u8 {
        let score = self.scorer.score(text);
        tracing::debug!(score, "response scored");
        score
    }

    /// Cleans `raw_text`, scoring the cleaned text only when `with_score` is set.
    pub fn process(&self, raw_text: &str, with_score: bool) -> CleanResult {
        let cleaned_text = self.clean_text(raw_text);
        let quality_score = with_score.then(|| self.score(&cleaned_text));
        CleanResult {
            cleaned_text,
            quality_score,
        }
    }

    /// Processes every input in order.
    #[cfg(not(feature = "multi_thread"))]
    pub fn process_batch<S: AsRef<str>>(&self, raw_texts: &[S], with_score: bool) -> Vec<CleanResult> {
        raw_texts
            .iter()
            .map(|raw| self.process(raw.as_ref(), with_score))
            .collect()
    }
}

impl TextCleaner for TicketCleaner {
    fn clean(&self, text: &str) -> String {
        self.clean_text(text)
    }
}

impl Default for TicketCleaner {
    fn default() -> Self {
        TicketCleaner {
            selector: SentenceSelector::default(),
            scorer: Arc::new(PortugueseScorer::new()),
            strip_html: false,
        }
    }
}
