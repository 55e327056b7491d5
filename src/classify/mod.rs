//! Tone and intent classification for memo text.
//!
//! Before sealing, an entry's free text can be classified into a
//! `tone` (how it reads) and an `intent` (what it wants), plus a short
//! REEM code derived from the pair.  The `ToneClassifier` trait keeps
//! the seal path independent of where the labels come from; the
//! built-in `HeuristicClassifier` is a keyword scan that always
//! produces an answer and tags its results with source `"fallback"`.

use sha2::{Digest, Sha256};

use crate::errors::Result;

/// Labels produced by a classifier, ready to be stored as entry
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Emotional register: `Grateful`, `Curious`, `Frustrated`, or
    /// `Reflective`.
    pub tone: String,
    /// What the text is trying to do: `Ask`, `Recommend`, or `Share`.
    pub intent: String,
    /// Compact tone/intent code, e.g. `REF-SHA-2CE`.
    pub reem_code: String,
    /// Where the labels came from (`"fallback"` for the heuristic).
    pub source: String,
}

/// Anything that can label a piece of memo text.
pub trait ToneClassifier {
    fn classify(&self, text: &str) -> Result<Classification>;
}

/// Keyword-based classifier used when no smarter backend is wired up.
///
/// Matching is case-insensitive and first-match-wins, so a grateful
/// question reads as `Grateful`, not `Curious`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl ToneClassifier for HeuristicClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        let lower = text.to_lowercase();

        let tone = if lower.contains("thank") || lower.contains("grateful") {
            "Grateful"
        } else if lower.contains('?') {
            "Curious"
        } else if lower.contains("hate") || lower.contains("angry") {
            "Frustrated"
        } else {
            "Reflective"
        };

        let intent = if lower.contains('?') {
            "Ask"
        } else if lower.contains("recommend") || lower.contains("suggest") {
            "Recommend"
        } else {
            "Share"
        };

        Ok(Classification {
            tone: tone.to_string(),
            intent: intent.to_string(),
            reem_code: reem_code(tone, intent),
            source: "fallback".to_string(),
        })
    }
}

/// Build the REEM code for a tone/intent pair.
///
/// Shape: first three letters of each label, uppercased, then the
/// first three hex digits of `SHA-256("{tone}|{intent}")`, also
/// uppercased.  The digest suffix makes distinct pairs with a shared
/// prefix still produce distinct codes.
pub fn reem_code(tone: &str, intent: &str) -> String {
    let digest = hex::encode(Sha256::digest(format!("{tone}|{intent}").as_bytes()));

    let tone_part: String = tone.chars().take(3).collect();
    let intent_part: String = intent.chars().take(3).collect();
    let digest_part: String = digest.chars().take(3).collect();

    format!(
        "{}-{}-{}",
        tone_part.to_uppercase(),
        intent_part.to_uppercase(),
        digest_part.to_uppercase()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reem_code_known_pairs() {
        assert_eq!(reem_code("Reflective", "Share"), "REF-SHA-2CE");
        assert_eq!(reem_code("Grateful", "Share"), "GRA-SHA-36A");
        assert_eq!(reem_code("Curious", "Ask"), "CUR-ASK-387");
        assert_eq!(reem_code("Frustrated", "Share"), "FRU-SHA-856");
        assert_eq!(reem_code("Reflective", "Recommend"), "REF-REC-87D");
    }

    #[test]
    fn classifies_gratitude() {
        let c = HeuristicClassifier::new().classify("Thank you for today").unwrap();
        assert_eq!(c.tone, "Grateful");
        assert_eq!(c.intent, "Share");
        assert_eq!(c.reem_code, "GRA-SHA-36A");
        assert_eq!(c.source, "fallback");
    }

    #[test]
    fn classifies_questions_as_curious_ask() {
        let c = HeuristicClassifier::new()
            .classify("Where does this trail end?")
            .unwrap();
        assert_eq!(c.tone, "Curious");
        assert_eq!(c.intent, "Ask");
        assert_eq!(c.reem_code, "CUR-ASK-387");
    }

    #[test]
    fn classifies_frustration() {
        let c = HeuristicClassifier::new().classify("I hate this weather").unwrap();
        assert_eq!(c.tone, "Frustrated");
        assert_eq!(c.intent, "Share");
    }

    #[test]
    fn classifies_recommendations() {
        let c = HeuristicClassifier::new()
            .classify("I recommend the long way around")
            .unwrap();
        assert_eq!(c.tone, "Reflective");
        assert_eq!(c.intent, "Recommend");
        assert_eq!(c.reem_code, "REF-REC-87D");
    }

    #[test]
    fn defaults_to_reflective_share() {
        let c = HeuristicClassifier::new().classify("Walked home in the rain").unwrap();
        assert_eq!(c.tone, "Reflective");
        assert_eq!(c.intent, "Share");
        assert_eq!(c.reem_code, "REF-SHA-2CE");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = HeuristicClassifier::new().classify("THANK YOU").unwrap();
        assert_eq!(c.tone, "Grateful");
    }

    #[test]
    fn gratitude_wins_over_question_mark() {
        // A grateful question keeps the Grateful tone but still reads
        // as an Ask.
        let c = HeuristicClassifier::new()
            .classify("Thanks, but how did you know?")
            .unwrap();
        assert_eq!(c.tone, "Grateful");
        assert_eq!(c.intent, "Ask");
    }
}
