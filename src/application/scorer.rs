use crate::domain::score::Score;

/// Vocabulary whose presence marks a message as scam-like.
pub const SCAM_KEYWORDS: [&str; 11] = [
    "blocked",
    "suspended",
    "urgent",
    "verify",
    "upi",
    "account",
    "payment",
    "bank",
    "click",
    "link",
    "otp",
];

/// Keyword-presence scorer.
///
/// Each keyword found anywhere in the lower-cased text adds `weight` once;
/// the total is capped at 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ScamScorer {
    weight: Score,
}

impl ScamScorer {
    pub fn new(weight: Score) -> Self {
        Self { weight }
    }

    pub fn score(&self, text: &str) -> Score {
        let text = text.to_lowercase();
        SCAM_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .fold(Score::ZERO, |total, _| total.saturating_add(self.weight))
    }
}
