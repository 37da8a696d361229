use crate::domain::score::Score;
use rust_decimal::Decimal;

/// Tunables for the engagement engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Confidence at which a conversation switches to the bait reply.
    pub activation_threshold: Score,
    /// Amount each matched keyword adds to a message's score.
    pub keyword_weight: Score,
    /// Whether bank account numbers are extracted at all.
    pub extract_bank_accounts: bool,
    /// Whether the chosen reply is run through the extractor as well.
    ///
    /// The built-in replies carry no entities, so this only changes output
    /// once a reply source that echoes handles or links is plugged in.
    pub scan_reply: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation_threshold: Score::clamped(Decimal::new(3, 1)),
            keyword_weight: Score::clamped(Decimal::new(15, 2)),
            extract_bank_accounts: true,
            scan_reply: true,
        }
    }
}

impl EngineConfig {
    pub fn with_activation_threshold(mut self, threshold: Score) -> Self {
        self.activation_threshold = threshold;
        self
    }

    pub fn with_keyword_weight(mut self, weight: Score) -> Self {
        self.keyword_weight = weight;
        self
    }

    pub fn with_bank_accounts(mut self, enabled: bool) -> Self {
        self.extract_bank_accounts = enabled;
        self
    }

    pub fn with_reply_scan(mut self, enabled: bool) -> Self {
        self.scan_reply = enabled;
        self
    }
}
