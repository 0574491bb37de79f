use std::sync::OnceLock;

use crate::patterns::WordSet;

/// Past participles that usually mean the agent actually did something.
pub const DEFAULT_ACTION_VERBS: &[&str] = &[
    "enviado",
    "enviada",
    "liberado",
    "liberada",
    "resolvido",
    "corrigido",
    "ajustado",
    "realizado",
    "configurado",
    "orientado",
    "feito",
    "concluido",
    "concluida",
    "concluído",
    "concluída",
];

const BASE_SCORE: i32 = 50;
const ACTION_VERB_BONUS: i32 = 15;
const TINY_TEXT_PENALTY: i32 = 25;
const SHORT_TEXT_PENALTY: i32 = 10;
const LONG_TEXT_PENALTY: i32 = 10;
const SHOUTING_PENALTY: i32 = 15;
const EXCLAMATION_PENALTY: i32 = 10;
const SHOUTING_RATIO: f64 = 0.85;

const PORTUGUESE_ACCENTED: &str = "ÁÉÍÓÚÂÊÔÃÕÀÇáéíóúâêôãõàç";

// Scores how substantive a cleaned response looks
pub trait QualityScorer: Send + Sync {
    fn score(&self, text: &str) -> u8;
}

/// Lexical 0-100 score for Portuguese ticket responses.
#[derive(Debug, Clone)]
pub struct PortugueseScorer {
    action_verbs: WordSet,
}

impl PortugueseScorer {
    pub fn new() -> Self {
        static DEFAULT_VERBS: OnceLock<WordSet> = OnceLock::new();
        let action_verbs = DEFAULT_VERBS
            .get_or_init(|| {
                WordSet::new(DEFAULT_ACTION_VERBS).expect("default action verbs must compile")
            })
            .clone();
        PortugueseScorer { action_verbs }
    }

    pub fn with_verbs<S: AsRef<str>>(verbs: &[S]) -> Result<Self, regex::Error> {
        Ok(PortugueseScorer {
            action_verbs: WordSet::new(verbs)?,
        })
    }
}

impl Default for PortugueseScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityScorer for PortugueseScorer {
    fn score(&self, text: &str) -> u8 {
        if text.is_empty() {
            return 0;
        }

        let mut score = BASE_SCORE;

        if self.action_verbs.is_match(text) {
            score += ACTION_VERB_BONUS;
        }

        score -= length_penalty(text.chars().count());

        if uppercase_ratio(text).is_some_and(|ratio| ratio > SHOUTING_RATIO) {
            score -= SHOUTING_PENALTY;
        }

        if text.matches('!').count() >= 3 {
            score -= EXCLAMATION_PENALTY;
        }

        score.clamp(0, 100) as u8
    }
}

fn length_penalty(len: usize) -> i32 {
    if len < 10 {
        TINY_TEXT_PENALTY
    } else if len < 25 {
        SHORT_TEXT_PENALTY
    } else if len > 200 {
        LONG_TEXT_PENALTY
    } else {
        0
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || PORTUGUESE_ACCENTED.contains(c)
}

/// Share of uppercase letters, or `None` when the text has no letters.
pub fn uppercase_ratio(text: &str) -> Option<f64> {
    let (letters, upper) = text
        .chars()
        .filter(|&c| is_letter(c))
        .fold((0usize, 0usize), |(letters, upper), c| {
            (letters + 1, upper + usize::from(c.is_uppercase()))
        });

    if letters == 0 {
        None
    } else {
        Some(upper as f64 / letters as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> u8 {
        PortugueseScorer::new().score(text)
    }

    #[test]
    fn empty_scores_zero() {
        assert_eq!(score(""), 0);
    }

    #[test]
    fn tiny_text_is_penalised() {
        assert_eq!(score("ok"), 25);
        assert!(score("ok") <= 25);
    }

    #[test]
    fn short_and_medium_bands() {
        // 15 chars
        assert_eq!(score("Vou verificar a"), 40);
        // 30 chars, no verb, mixed case
        assert_eq!(score("Vou verificar com a equipe ok."), 50);
    }

    #[test]
    fn verb_bonus_is_whole_word() {
        assert_eq!(score("Acesso liberado para o usuário."), 65);
        assert_eq!(score("Acesso liberadora para usuário."), 50);
        assert_eq!(score("Relatório CONCLUÍDO com sucesso no sistema"), 65);
    }

    #[test]
    fn shouting_with_verb_nets_out() {
        // 31 chars, verb bonus and uppercase penalty cancel
        assert_eq!(score("SENHA ENVIADA VIA TEAMS AGORA 1"), 50);
    }

    #[test]
    fn accented_capitals_count_as_letters() {
        assert!(uppercase_ratio("ÇÃO").is_some_and(|r| r == 1.0));
        assert!(uppercase_ratio("ção").is_some_and(|r| r == 0.0));
        assert_eq!(uppercase_ratio("123 !!"), None);
    }

    #[test]
    fn exclamations_and_long_text() {
        assert_eq!(score("Por favor, reinicie o computador!!!"), 40);
        let long = "reinicie o computador e tente novamente ".repeat(6);
        assert_eq!(score(long.trim()), 40);
    }

    #[test]
    fn score_stays_in_range() {
        let worst = "!!!";
        assert!(score(worst) <= 100);
        assert_eq!(score(worst), 15);
        let text = "A".repeat(300) + " FEITO!!!";
        assert_eq!(score(&text), 30);
    }

    #[test]
    fn custom_verbs() {
        let scorer = PortugueseScorer::with_verbs(&["reiniciado"]).unwrap();
        assert_eq!(scorer.score("Servidor reiniciado pela equipe."), 65);
        assert_eq!(scorer.score("Acesso liberado para o usuário."), 50);
    }
}
