mod cleaner;
mod cleaner_config;
mod error;
mod html;
mod patterns;
mod scorer;
mod selector;
pub mod stages;
mod ticket_cleaner;
#[cfg(feature = "multi_thread")]
mod ticket_cleaner_mt;

pub use cleaner::{TextCleaner, WhitespaceCleaner};
pub use cleaner_config::CleanerConfig;
pub use error::ConfigError;
pub use html::html_to_text;
pub use scorer::{uppercase_ratio, PortugueseScorer, QualityScorer, DEFAULT_ACTION_VERBS};
pub use selector::{longest, split_sentences, SentenceSelector, DEFAULT_AUDIT_WORDS};
pub use ticket_cleaner::{CleanResult, TicketCleaner, TicketCleanerBuilder};
