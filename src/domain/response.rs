use super::intelligence::Intelligence;
use super::score::Score;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct EngagementMetrics {
    pub turn_count: u32,
    pub engagement_duration_sec: u64,
}

/// The scored result of one evaluated message.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ResponsePayload {
    pub conversation_id: String,
    pub scam_detected: bool,
    pub confidence_score: Score,
    pub agent_active: bool,
    pub engagement_metrics: EngagementMetrics,
    pub extracted_intelligence: Intelligence,
    pub agent_reply: String,
}

/// Fixed acknowledgement returned for liveness probes.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ProbeAck {
    pub status: &'static str,
    pub message: &'static str,
}

impl Default for ProbeAck {
    fn default() -> Self {
        Self {
            status: "ok",
            message: "honeypot service is reachable",
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum EngineResponse {
    Probe(ProbeAck),
    Engagement(ResponsePayload),
}
