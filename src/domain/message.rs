use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A message that carries an evaluable body.
#[derive(Debug, PartialEq, Clone)]
pub struct IncomingMessage {
    pub conversation_id: String,
    pub message: String,
    pub timestamp: Option<String>,
}

impl IncomingMessage {
    pub fn new(conversation_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            message: message.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// The sender-supplied RFC 3339 timestamp, if present and parseable.
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.as_deref()?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
    }
}

/// An inbound event, classified before it reaches the engine.
#[derive(Debug, PartialEq, Clone)]
pub enum MessageEvent {
    /// Liveness check. Must never touch conversation state.
    Probe,
    Evaluate(IncomingMessage),
}

/// An event as read off the wire, every field optional.
#[derive(Debug, Deserialize, Default, PartialEq, Clone)]
#[serde(default)]
pub struct RawEvent {
    pub conversation_id: Option<String>,
    pub message: Option<String>,
    pub timestamp: Option<String>,
}

impl RawEvent {
    /// Requests without both an identifier and a non-blank body are probes.
    pub fn into_event(self) -> MessageEvent {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        match (present(self.conversation_id), present(self.message)) {
            (Some(conversation_id), Some(message)) => MessageEvent::Evaluate(IncomingMessage {
                conversation_id,
                message,
                timestamp: present(self.timestamp),
            }),
            _ => MessageEvent::Probe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_body_is_probe() {
        let raw = RawEvent {
            conversation_id: Some("c-1".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.into_event(), MessageEvent::Probe);
    }

    #[test]
    fn test_blank_body_is_probe() {
        let raw = RawEvent {
            conversation_id: Some("c-1".to_string()),
            message: Some("   ".to_string()),
            timestamp: None,
        };
        assert_eq!(raw.into_event(), MessageEvent::Probe);
    }

    #[test]
    fn test_missing_conversation_is_probe() {
        let raw = RawEvent {
            message: Some("hello".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.into_event(), MessageEvent::Probe);
    }

    #[test]
    fn test_full_event_is_evaluated() {
        let raw: RawEvent = serde_json::from_str(
            r#"{"conversation_id":"c-1","message":"hi","timestamp":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let MessageEvent::Evaluate(msg) = raw.into_event() else {
            panic!("expected an evaluable event");
        };
        assert_eq!(msg.conversation_id, "c-1");
        assert_eq!(msg.message, "hi");
        assert!(msg.received_at().is_some());
    }

    #[test]
    fn test_unparseable_timestamp() {
        let msg = IncomingMessage::new("c-1", "hi").with_timestamp("yesterday");
        assert!(msg.received_at().is_none());
    }
}
