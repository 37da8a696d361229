use super::extractor::EntityExtractor;
use super::reply::select_reply;
use super::scorer::ScamScorer;
use crate::config::EngineConfig;
use crate::domain::conversation::ConversationState;
use crate::domain::intelligence::Intelligence;
use crate::domain::message::{IncomingMessage, MessageEvent};
use crate::domain::ports::ConversationStoreBox;
use crate::domain::response::{EngagementMetrics, EngineResponse, ProbeAck, ResponsePayload};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Turns incoming scammer messages into scored, baiting responses.
///
/// `EngagementEngine` owns the conversation store and runs every evaluated
/// message through the scorer and extractor. Each turn holds the
/// conversation's record lock from the turn increment to the duration
/// read, so concurrent messages for one conversation never interleave.
pub struct EngagementEngine {
    store: ConversationStoreBox,
    scorer: ScamScorer,
    extractor: EntityExtractor,
    config: EngineConfig,
}

impl EngagementEngine {
    /// Creates a new `EngagementEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - Where conversation records live.
    /// * `config` - Threshold, keyword weight and extraction switches.
    pub fn new(store: ConversationStoreBox, config: EngineConfig) -> Result<Self> {
        Ok(Self {
            store,
            scorer: ScamScorer::new(config.keyword_weight),
            extractor: EntityExtractor::new(config.extract_bank_accounts)?,
            config,
        })
    }

    /// Dispatches a boundary event.
    ///
    /// Probes are answered without consulting the store.
    pub async fn handle(&self, event: MessageEvent) -> Result<EngineResponse> {
        match event {
            MessageEvent::Probe => Ok(EngineResponse::Probe(ProbeAck::default())),
            MessageEvent::Evaluate(msg) => {
                let now = Self::resolve_time(&msg);
                let payload = self.process(&msg.conversation_id, &msg.message, now).await?;
                Ok(EngineResponse::Engagement(payload))
            }
        }
    }

    /// Scores one message for a conversation and builds its response.
    pub async fn process(
        &self,
        conversation_id: &str,
        message_text: &str,
        now: DateTime<Utc>,
    ) -> Result<ResponsePayload> {
        let handle = self.store.get_or_create(conversation_id, now).await?;
        let mut state = handle.lock().await;

        let score = self.scorer.score(message_text);
        let activated = state.record_turn(score, self.config.activation_threshold);
        if activated {
            log::info!(
                "Conversation {} activated at turn {} (confidence {})",
                conversation_id,
                state.turn_count,
                state.confidence
            );
        }

        let reply = select_reply(state.active);

        let mut extraction = self.extractor.extract(message_text);
        if self.config.scan_reply {
            extraction.merge(self.extractor.extract(reply));
        }

        let metrics = EngagementMetrics {
            turn_count: state.turn_count,
            engagement_duration_sec: state.engagement_duration_sec(now),
        };

        log::debug!(
            "Conversation {} turn {}: score {}, confidence {}, active {}",
            conversation_id,
            state.turn_count,
            score,
            state.confidence,
            state.active
        );

        Ok(ResponsePayload {
            conversation_id: conversation_id.to_string(),
            scam_detected: state.active,
            confidence_score: state.confidence.rounded(2),
            agent_active: state.active,
            engagement_metrics: metrics,
            extracted_intelligence: Intelligence::from(extraction),
            agent_reply: reply.to_string(),
        })
    }

    /// A snapshot of one conversation, if it exists.
    pub async fn conversation(&self, conversation_id: &str) -> Result<Option<ConversationState>> {
        self.store.get(conversation_id).await
    }

    /// Consumes the engine and returns the final state of all conversations.
    pub async fn into_results(self) -> Result<Vec<(String, ConversationState)>> {
        self.store.all_conversations().await
    }

    fn resolve_time(msg: &IncomingMessage) -> DateTime<Utc> {
        match (msg.received_at(), msg.timestamp.as_deref()) {
            (Some(ts), _) => ts,
            (None, Some(raw)) => {
                log::warn!(
                    "Unparseable timestamp {:?} for conversation {}, using current time",
                    raw,
                    msg.conversation_id
                );
                Utc::now()
            }
            (None, None) => Utc::now(),
        }
    }
}
