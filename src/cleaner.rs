// Anything that turns raw text into cleaned text
pub trait TextCleaner: Send + Sync {
    fn clean(&self, text: &str) -> String;
}

// Collapses every whitespace run (newlines included) into a single space
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceCleaner;

impl TextCleaner for WhitespaceCleaner {
    fn clean(&self, text: &str) -> String {
        text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }
}
