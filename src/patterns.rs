use std::sync::OnceLock;

use regex::Regex;

/// `01/07/2025`, `7-1-25`
pub(crate) const DATE: &str = r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b";

/// `10:04`, `8:31 AM`, `8:31PM`
pub(crate) const TIME: &str = r"\b\d{1,2}:\d{2}(?:\s?(?:AM|PM))?\b";

/// Characters allowed in an agent name written in capitals.
const NAME_RUN: &str = "[A-ZÁÉÍÓÚÃÕÇ ]";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

pub(crate) fn re_trail() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?i)\b(?:TICKET|CHAMADO)\s+CRIADO"))
}

pub(crate) fn re_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(DATE))
}

pub(crate) fn re_time() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(TIME))
}

/// AM/PM may be lowercase when removing leftovers.
pub(crate) fn re_time_any_case() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!("(?i){TIME}")))
}

/// Capitalised name immediately followed by a date: `MARIA SILVA 02/03/2024`
pub(crate) fn re_header_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!(r"^{NAME_RUN}{{3,}}\s+{DATE}")))
}

/// Applied one after another: removing an earlier label can expose the next.
pub(crate) fn re_labels() -> &'static [Regex] {
    static RE: OnceLock<Vec<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        [
            r"(?i)\bCONCLUS[ÃA]O[:\-]?\s*",
            r"(?i)\bRESPOSTA[:\-]?\s*",
            r"(?i)\bATUALIZA[CÇ][AÃ]O[:\-]?\s*",
        ]
        .into_iter()
        .map(compile)
        .collect()
    })
}

/// `EM: 7/1/2025 8:31 AM`
pub(crate) fn re_em_fragment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!(r"(?i)\bEM[: ]+{DATE}(?:\s+{TIME})?\b")))
}

/// Only the keyword is case-insensitive; the name must be in capitals.
pub(crate) fn re_trailing_author() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(&format!(r"\b(?i:POR)\s+{NAME_RUN}{{3,}}$")))
}

pub(crate) fn re_multi_space() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"\s{2,}"))
}

pub(crate) fn re_sentence_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"[.!?]\s+"))
}

/// Case-insensitive whole-word matcher over a fixed vocabulary.
///
/// An empty vocabulary never matches.
#[derive(Debug, Clone)]
pub(crate) struct WordSet(Option<Regex>);

impl WordSet {
    pub(crate) fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, regex::Error> {
        let alternation = words
            .iter()
            .map(|w| w.as_ref().trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect::<Vec<String>>();

        if alternation.is_empty() {
            return Ok(WordSet(None));
        }

        let pattern = format!(r"(?i)\b(?:{})\b", alternation.join("|"));
        Ok(WordSet(Some(Regex::new(&pattern)?)))
    }

    pub(crate) fn is_match(&self, text: &str) -> bool {
        self.0.as_ref().is_some_and(|re| re.is_match(text))
    }
}
