use super::score::Score;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-conversation engagement state.
///
/// Created lazily by the conversation store on the first message for an
/// identifier and mutated only through [`ConversationState::record_turn`].
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ConversationState {
    /// Number of real messages processed for this conversation.
    pub turn_count: u32,
    /// When the first message arrived. Never changes afterwards.
    pub start_time: DateTime<Utc>,
    /// Highest score seen so far; never decreases.
    pub confidence: Score,
    /// Latched once `confidence` reaches the activation threshold.
    pub active: bool,
}

impl ConversationState {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            turn_count: 0,
            start_time,
            confidence: Score::ZERO,
            active: false,
        }
    }

    /// Accounts for one processed message scoring `score`.
    ///
    /// Returns `true` only on the turn that flips the conversation active.
    pub fn record_turn(&mut self, score: Score, threshold: Score) -> bool {
        self.turn_count += 1;
        self.confidence = self.confidence.max(score);

        if !self.active && self.confidence >= threshold {
            self.active = true;
            return true;
        }
        false
    }

    /// Whole seconds since the first message, floored at zero.
    pub fn engagement_duration_sec(&self, now: DateTime<Utc>) -> u64 {
        (now - self.start_time).num_seconds().max(0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    fn threshold() -> Score {
        Score::clamped(dec!(0.3))
    }

    #[test]
    fn test_new_conversation_is_idle() {
        let state = ConversationState::new(Utc::now());
        assert_eq!(state.turn_count, 0);
        assert_eq!(state.confidence, Score::ZERO);
        assert!(!state.active);
    }

    #[test]
    fn test_confidence_never_decreases() {
        let mut state = ConversationState::new(Utc::now());
        state.record_turn(Score::clamped(dec!(0.15)), threshold());
        state.record_turn(Score::clamped(dec!(0.6)), threshold());
        state.record_turn(Score::ZERO, threshold());

        assert_eq!(state.turn_count, 3);
        assert_eq!(state.confidence, Score::clamped(dec!(0.6)));
    }

    #[test]
    fn test_activation_latch() {
        let mut state = ConversationState::new(Utc::now());

        assert!(!state.record_turn(Score::clamped(dec!(0.15)), threshold()));
        assert!(!state.active);

        // Exactly at the threshold activates.
        assert!(state.record_turn(Score::clamped(dec!(0.3)), threshold()));
        assert!(state.active);

        // Later quiet turns neither re-trigger nor unset it.
        assert!(!state.record_turn(Score::ZERO, threshold()));
        assert!(state.active);
    }

    #[test]
    fn test_engagement_duration() {
        let start = Utc::now();
        let state = ConversationState::new(start);
        assert_eq!(state.engagement_duration_sec(start + Duration::seconds(42)), 42);
        assert_eq!(state.engagement_duration_sec(start - Duration::seconds(5)), 0);
    }
}
